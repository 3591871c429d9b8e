//! Configuration management for the showcase
//!
//! Settings live in `<config_dir>/portfolio-showcase/config.json`. The
//! language switcher writes its choice back to the same file.

pub mod settings;

pub use settings::Config;
