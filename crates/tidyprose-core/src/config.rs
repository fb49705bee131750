//! Configuration loading and discovery.
//!
//! Settings come from TOML, YAML or JSON files merged with figment:
//!
//! - `<config dir>/tidyprose/config.<ext>` (user config)
//! - `.tidyprose.<ext>`, then `tidyprose.<ext>`, in the nearest directory
//!   at or above the working directory that has any (the walk stops at `.git`)
//! - files passed with `--config`
//! - `TIDYPROSE_*` environment variables
//!
//! Within one directory, later extensions win: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use tidyprose_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::category::{self, Category};
use crate::error::{ConfigError, ConfigResult};
use crate::word_lists::RuleData;

/// Default maximum input size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// A path-based lint rule.
///
/// Glob patterns in `paths` are relative to the project root. Every rule
/// matching a file contributes its categories; see [`crate::rules`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Rule {
    /// Glob patterns to match file paths against.
    pub paths: Vec<String>,
    /// Categories to run on matched files. Omit for all.
    #[serde(default)]
    pub checks: Option<Vec<Category>>,
    /// Categories to skip on matched files.
    #[serde(default)]
    pub exclude: Option<Vec<Category>>,
}

/// The configuration for tidyprose.
///
/// Deserialized from config files found during discovery (TOML, YAML, or JSON).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (no file logging when unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Categories to run when no rule or flag selects them. Omit for all.
    pub checks: Option<Vec<Category>>,
    /// Maximum number of findings per file before `check` fails.
    ///
    /// Omit to report findings without failing.
    pub max_issues: Option<usize>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
    /// Extra entries appended to the built-in word lists, per category.
    ///
    /// For `passive` these are additional irregular past participles.
    pub extra_words: Option<HashMap<Category, Vec<String>>>,
    /// Path-based lint rules.
    pub rules: Option<Vec<Rule>>,
}

impl Config {
    /// Categories enabled by default: `checks` if set, otherwise all.
    pub fn default_checks(&self) -> Vec<Category> {
        self.checks.as_ref().map_or_else(
            || Category::ALL.to_vec(),
            |list| category::canonical(list.iter().copied()),
        )
    }

    /// Built-in rule data extended with `extra_words`.
    pub fn rule_data(&self) -> RuleData {
        self.extra_words
            .as_ref()
            .map_or_else(RuleData::builtin, RuleData::with_extra_words)
    }

    /// Effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Config files that feed a [`Config`], in merge order.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so `info` can
/// report where settings came from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User config file, merged first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files from the nearest project directory holding any, dotfiles first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files passed via `--config`, merged last.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file with the final say: last explicit, else last project, else user.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files().last()
    }

    /// Every file in merge order.
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }
}

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "tidyprose";

const ENV_PREFIX: &str = "TIDYPROSE_";

/// Builder that discovers config files and merges them with figment.
///
/// Precedence, lowest first: defaults, user config, project config,
/// explicit files, then `TIDYPROSE_*` environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Loader that reads user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for `.tidyprose.<ext>` and `tidyprose.<ext>`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip `<config dir>/tidyprose/config.<ext>`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the walk at a directory containing `marker` (default `.git`).
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Walk all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` after discovered files. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Discover sources and merge them over the defaults.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        Self::extract(sources)
    }

    fn discover(self) -> ConfigSources {
        let user_file = if self.user_config {
            user_config_file()
        } else {
            None
        };
        let project_files = self
            .search_root
            .as_deref()
            .map(|root| project_config_files(root, self.boundary_marker.as_deref()))
            .unwrap_or_default();
        let sources = ConfigSources {
            user_file,
            project_files,
            explicit_files: self.explicit_files,
        };
        tracing::debug!(files = ?sources.files().collect::<Vec<_>>(), "config sources");
        sources
    }

    fn extract(sources: ConfigSources) -> ConfigResult<(Config, ConfigSources)> {
        let figment = sources
            .files()
            .fold(
                Figment::new().merge(Serialized::defaults(Config::default())),
                merge_file,
            )
            // e.g. TIDYPROSE_MAX_ISSUES=3, TIDYPROSE_LOG_LEVEL=debug
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            checks = config.default_checks().len(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Config files in the nearest directory at or above `start` that has any.
///
/// A directory holding the boundary marker is still searched, but the walk
/// does not continue past it.
fn project_config_files(start: &Utf8Path, boundary_marker: Option<&str>) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [".", ""]
            .iter()
            .flat_map(|prefix| {
                CONFIG_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{prefix}{APP_NAME}.{ext}")))
            })
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if boundary_marker.is_some_and(|marker| dir.join(marker).exists()) {
            break;
        }
    }
    Vec::new()
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Platform config directory for tidyprose, e.g. `~/.config/tidyprose/` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.max_issues.is_none());
        assert_eq!(config.default_checks(), Category::ALL);
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"log_level = "debug"
log_dir = "/tmp/tidyprose"
max_issues = 3
checks = ["illusion", "passive"]
"#,
        )
        .unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&config_path))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/tidyprose")
        );
        assert_eq!(config.max_issues, Some(3));
        assert_eq!(
            config.default_checks(),
            [Category::Passive, Category::Illusion]
        );
        assert!(sources.primary_file().unwrap().ends_with("config.toml"));
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, r#"log_level = "warn""#).unwrap();
        let over = tmp.path().join("override.yaml");
        fs::write(&over, "log_level: error\n").unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&base))
            .with_file(utf8(&over))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".tidyprose.toml"), r#"log_level = "debug""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(&sub_dir))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".tidyprose.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(utf8(&work))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn regular_file_overrides_dotfile() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".tidyprose.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("tidyprose.json"), r#"{"log_level": "warn"}"#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path()))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(sources.project_files.len(), 2);
        assert!(sources.primary_file().unwrap().ends_with("tidyprose.json"));
    }

    #[test]
    fn sources_list_files_in_merge_order() {
        let sources = ConfigSources {
            user_file: Some(Utf8PathBuf::from("/home/u/.config/tidyprose/config.toml")),
            project_files: vec![
                Utf8PathBuf::from("/p/.tidyprose.toml"),
                Utf8PathBuf::from("/p/tidyprose.toml"),
            ],
            explicit_files: Vec::new(),
        };
        let files: Vec<&str> = sources.files().map(Utf8Path::as_str).collect();
        assert_eq!(files[0], "/home/u/.config/tidyprose/config.toml");
        assert_eq!(sources.primary_file().map(Utf8Path::as_str), Some("/p/tidyprose.toml"));
        assert!(ConfigSources::default().primary_file().is_none());
    }

    #[test]
    fn search_starting_at_marker_does_not_climb() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let repo = tmp.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(tmp.path().join(".tidyprose.toml"), r#"log_level = "warn""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(&repo))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn config_beside_starting_marker_is_found() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join("tidyprose.toml"), "max_issues = 2\n").unwrap();

        let files = project_config_files(&utf8(tmp.path()), Some(".git"));
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("tidyprose.toml"));
    }

    #[test]
    fn invalid_category_is_rejected() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, r#"checks = ["jargon"]"#).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&path))
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn input_limit_defaults_and_disable() {
        let config = Config::default();
        assert_eq!(config.input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));

        let config = Config {
            max_input_bytes: Some(10),
            ..Default::default()
        };
        assert_eq!(config.input_limit(), Some(10));

        let config = Config {
            max_input_bytes: Some(10),
            disable_input_limit: true,
            ..Default::default()
        };
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn extra_words_and_rules_deserialize_from_yaml() {
        let yaml = r#"
extra_words:
  weasel: ["arguably"]
  passive: ["smelt"]
rules:
  - paths: ["docs/**/*.md"]
    exclude: [adverb]
  - paths: ["CHANGELOG.md"]
    checks: [illusion]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let extra = config.extra_words.as_ref().unwrap();
        assert_eq!(extra[&Category::Weasel], vec!["arguably"]);

        let data = config.rule_data();
        assert!(data.words(Category::Weasel).iter().any(|w| w == "arguably"));
        assert!(data.words(Category::Passive).iter().any(|w| w == "smelt"));

        let rules = config.rules.unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].checks.is_none());
        assert_eq!(rules[0].exclude, Some(vec![Category::Adverb]));
        assert_eq!(rules[1].checks, Some(vec![Category::Illusion]));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "max_issues = 1\n").unwrap();

        // SAFETY: Test environment: mutex serializes env access across tests.
        unsafe {
            std::env::set_var("TIDYPROSE_MAX_ISSUES", "7");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&config_path))
            .load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("TIDYPROSE_MAX_ISSUES");
        }

        let (config, _sources) = result.unwrap();
        assert_eq!(config.max_issues, Some(7));
    }
}
