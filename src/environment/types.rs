use serde::{Deserialize, Serialize};

use crate::components::chart::DEFAULT_RANGE;
use crate::components::sidebar::SidebarType;

// Repository Types

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Settings {
    /// The range a freshly started chart shows
    #[serde(default = "default_range")]
    pub default_range: String,
    #[serde(default)]
    pub sidebar: SidebarType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_range: default_range(),
            sidebar: SidebarType::default(),
        }
    }
}

fn default_range() -> String {
    DEFAULT_RANGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"sidebar":"Edit"}"#).unwrap();
        assert_eq!(settings.default_range, "3mo");
        assert_eq!(settings.sidebar, SidebarType::Edit);
    }
}
