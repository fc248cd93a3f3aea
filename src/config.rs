//! User settings for billify
//!
//! Display preferences for the session. With no persistence layer there is
//! nothing to load from disk; the defaults apply to every session.

use serde::{Deserialize, Serialize};

/// User settings for billify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many activity entries the dashboard shows
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_activity_limit() -> usize {
    8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            recent_activity_limit: default_recent_activity_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.recent_activity_limit, 8);
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.recent_activity_limit, 8);
    }
}
