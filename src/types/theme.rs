use serde::{Deserialize, Serialize};

use crate::constants::{CLASS_DAY, CLASS_NIGHT};

/// Day/night visual mode, persisted as `"day"` or `"night"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    /// Class applied to the root element while this theme is active
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Day => CLASS_DAY,
            Theme::Night => CLASS_NIGHT,
        }
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Theme {
        match value.trim() {
            "night" => Theme::Night,
            _ => Theme::Day,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Theme {
        Theme::from(value.as_str())
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> String {
        theme.as_str().to_string()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_defaults_to_day() {
        assert_eq!(Theme::from(""), Theme::Day);
        assert_eq!(Theme::from("dusk"), Theme::Day);
        assert_eq!(Theme::from("NIGHT"), Theme::Day);
        assert_eq!(Theme::from("night"), Theme::Night);
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Day, Theme::Night] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        assert_eq!(serde_json::to_string(&Theme::Night).unwrap(), "\"night\"");
        let parsed: Theme = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(parsed, Theme::Day);
    }
}
