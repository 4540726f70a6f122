//! Core library for comfort-map.
//!
//! This crate provides the analysis engine and foundational types used by
//! the `comfort-map` CLI and any downstream consumers: per-author linguistic
//! profiling over email corpora, plus configuration loading.
//!
//! # Modules
//!
//! - [`analysis`] - Per-author profile extraction
//! - [`config`] - Configuration loading and management
//! - [`dictionaries`] - Abbreviation and syllable lookups
//! - [`error`] - Error types and result aliases
//! - [`text`] - Tokenization and sentence splitting
//! - [`word_lists`] - Stopword and vocabulary sets
//!
//! # Quick Start
//!
//! ```
//! use comfort_map_core::analysis::analyze_person;
//!
//! let messages = vec![
//!     "Hi Sarah, the contract review is done. Thanks!".to_string(),
//!     "Really great work on the proposal. Talk soon.".to_string(),
//! ];
//! let profile = analyze_person("kay", &messages).expect("non-blank author");
//! assert_eq!(profile.total_emails, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod dictionaries;

pub mod error;

pub mod text;

pub mod word_lists;

pub use analysis::{AuthorProfile, analyze_person};

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MIN_MESSAGES, LogLevel};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

/// Default cap on input file size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
