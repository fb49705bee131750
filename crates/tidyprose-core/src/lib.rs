//! Core library for tidyprose.
//!
//! A lexical prose linter: every check is a pattern compiled from a word
//! list or a fixed template, run against plain text to produce located
//! matches.
//!
//! # Modules
//!
//! - [`category`] - The closed set of rule categories
//! - [`word_lists`] - Built-in word lists and [`RuleData`]
//! - [`pattern`] - Compiling rule data into [`CompiledPattern`]s
//! - [`matcher`] - [`Match`] and [`MatchResult`]
//! - [`registry`] - One compiled pattern per category
//! - [`lint`] - Running categories over a document
//! - [`rules`] - Path-based category selection
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tidyprose_core::{Category, PatternRegistry};
//!
//! let registry = PatternRegistry::builtin().expect("built-in lists compile");
//! let result = registry.run(Category::Illusion, "the the brain");
//! assert_eq!(result.matches[0].text, "the");
//! assert_eq!(result.matches[0].span(), 4..7);
//! ```
#![deny(unsafe_code)]

pub mod category;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod illusion;
pub mod lint;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod rules;
pub mod text;
pub mod word_lists;

pub use category::Category;
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, PatternError, PatternResult};
pub use lint::{LintReport, run_lint};
pub use matcher::{Match, MatchResult};
pub use pattern::{CompiledPattern, compile, run};
pub use registry::PatternRegistry;
pub use word_lists::RuleData;
