//! CLI interface for poetics
//!
//! Provides the command-line front end: argument parsing, persistent
//! settings, dictionary format detection and the command implementations.

pub mod args;
pub mod commands;
pub mod detect;
pub mod paths;

pub use args::{Cli, Commands, DictArgs};
pub use detect::{detect_format, DetectionMethod, FormatDetection};
pub use paths::{config_dir, default_dict_path, PersistentConfig};
