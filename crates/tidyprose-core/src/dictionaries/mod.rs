//! Dictionaries for text analysis.
//!
//! Provides the verb sets the passive-voice template is assembled from.

pub mod irregular_verbs;
