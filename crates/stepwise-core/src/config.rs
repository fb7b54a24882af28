//! Form configuration.
//!
//! [`FormConfig`] gathers everything needed to build a form: the step titles,
//! optional subtitles and the handful of display options the state machine
//! consults. It carries no behavior beyond its defaults.

use serde::{Deserialize, Serialize};

/// Title given to the synthetic confirmation step unless configured otherwise.
pub const DEFAULT_CONFIRMATION_TITLE: &str = "Confirmation";

/// Construction options for a form.
///
/// # Examples
///
/// ```rust
/// use stepwise_core::FormConfig;
///
/// let config = FormConfig {
///     confirmation_enabled: false,
///     ..FormConfig::new(vec!["Name".to_string(), "Email".to_string()])
/// };
/// assert!(config.display_bottom_navigation);
/// assert_eq!(config.titles.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    /// Titles of the caller-supplied steps, in navigation order
    pub titles: Vec<String>,

    /// Optional subtitles, one per title when present
    #[serde(default)]
    pub subtitles: Option<Vec<String>>,

    /// Append a confirmation step after the last caller-supplied step
    #[serde(default = "default_true")]
    pub confirmation_enabled: bool,

    /// Title of the confirmation step
    #[serde(default = "default_confirmation_title")]
    pub confirmation_title: String,

    /// Whether hosts should show the previous/next navigation bar
    #[serde(default = "default_true")]
    pub display_bottom_navigation: bool,

    /// Whether the last caller-supplied step shows its inline button
    #[serde(default = "default_true")]
    pub show_last_step_next_button: bool,
}

fn default_true() -> bool {
    true
}

fn default_confirmation_title() -> String {
    DEFAULT_CONFIRMATION_TITLE.to_string()
}

impl FormConfig {
    /// Creates a configuration with default options for the given titles.
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            ..Self::default()
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            subtitles: None,
            confirmation_enabled: true,
            confirmation_title: default_confirmation_title(),
            display_bottom_navigation: true,
            show_last_step_next_button: true,
        }
    }
}
