//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Showcase transition timings (milliseconds)
pub mod timing {
    /// Delay between closing a modal/panel and clearing its selected entity.
    /// Matches the exit transition of the detail views.
    pub const CLEAR_DELAY_MS: u64 = 300;

    /// Wait between switching to the Projects tab and highlighting a card.
    /// Must never be shorter than `CLEAR_DELAY_MS`.
    pub const SETTLE_DELAY_MS: u64 = 500;

    /// How long a highlighted project card keeps its pulse indicator
    pub const HIGHLIGHT_MS: u64 = 2000;
}

/// Accent color tokens per skill category (hex, #RRGGBB)
pub mod accent {
    pub const TECHNICAL: &str = "#C4A77D";
    pub const SOFT: &str = "#A68B5B";
    pub const LANGUAGES: &str = "#8B7355";
    pub const CERTIFICATIONS: &str = "#6B5344";
}

/// Localization constants
pub mod i18n {
    /// Language used when a key is missing or no language could be detected
    pub const FALLBACK_LANGUAGE: &str = "ja";
}

/// Configuration file location
pub mod config {
    pub const APP_DIR: &str = "portfolio-showcase";
    pub const FILENAME: &str = "config.json";
}

/// Config validation bounds
pub mod validation {
    pub const MAX_DELAY_MS: u64 = 10_000;
    pub const MIN_WINDOW_DIMENSION: u16 = 320;
    pub const MAX_WINDOW_DIMENSION: u16 = 4096;
}

/// Contact form submission
pub mod contact {
    /// Request timeout for the best-effort POST
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    pub const USER_AGENT: &str = "portfolio-showcase";
}
