//! Filter types for listing stored forms.

use serde::{Deserialize, Serialize};

/// Filter criteria for form listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormFilter {
    /// Include forms that have already been submitted
    #[serde(default)]
    pub include_submitted: bool,

    /// Only forms whose name contains this text
    #[serde(default)]
    pub name_contains: Option<String>,
}
