//! Display labels and transition timing for the modal

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ModalError;

/// Labels and timings used when populating and animating the modal.
///
/// Every field has a default, so a JSON override only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Prepended to `endDate` in the date label
    pub due_date_prefix: String,
    /// Date label for cards without an end date
    pub always_open_label: String,
    /// Prepended to the category text
    pub category_prefix: String,
    /// Image shown when the payload has neither `img` nor `image`
    pub default_image: String,
    /// Delay between un-hiding the root and adding the `active` marker
    pub activate_delay_ms: u32,
    /// Must match the stylesheet's transition duration
    pub hide_delay_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            due_date_prefix: "마감일: ".to_string(),
            always_open_label: "상시 모집".to_string(),
            category_prefix: "#".to_string(),
            default_image: "/static/images/card_images/default.png".to_string(),
            activate_delay_ms: 10,
            hide_delay_ms: 300,
        }
    }
}

impl ModalConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(text: &str) -> Result<Self, ModalError> {
        serde_json::from_str(text).map_err(ModalError::InvalidConfig)
    }

    pub fn activate_delay(&self) -> Duration {
        Duration::from_millis(self.activate_delay_ms as u64)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stylesheet_timing() {
        let config = ModalConfig::default();
        assert_eq!(config.hide_delay(), Duration::from_millis(300));
        assert_eq!(config.activate_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ModalConfig::from_json(r#"{"hideDelayMs": 450, "alwaysOpenLabel": "Open"}"#)
            .unwrap();
        assert_eq!(config.hide_delay_ms, 450);
        assert_eq!(config.always_open_label, "Open");
        assert_eq!(config.due_date_prefix, "마감일: ");
        assert_eq!(config.activate_delay_ms, 10);
    }

    #[test]
    fn test_serialized_config_reads_back() {
        let config = ModalConfig {
            due_date_prefix: "Due: ".into(),
            hide_delay_ms: 250,
            ..ModalConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"hideDelayMs\":250"));
        assert_eq!(ModalConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let err = ModalConfig::from_json("{hideDelayMs: }").unwrap_err();
        assert!(matches!(err, ModalError::InvalidConfig(_)));
    }
}
