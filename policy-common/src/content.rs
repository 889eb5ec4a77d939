//! Resolved modal text: payload fields with their display fallbacks applied

use crate::config::ModalConfig;
use crate::payload::CardPayload;

/// Everything the modal shows for one card, ready to write into the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub desc: String,
    pub category: String,
    pub date: String,
    pub image_src: String,
    pub region: String,
    pub link: Option<String>,
    pub accent_color: Option<String>,
    pub policy_id: Option<String>,
}

impl ModalContent {
    pub fn from_payload(payload: &CardPayload, config: &ModalConfig) -> Self {
        let category = match &payload.category {
            Some(category) => format!("{}{}", config.category_prefix, category),
            None => String::new(),
        };
        let date = match &payload.end_date {
            Some(end_date) => format!("{}{}", config.due_date_prefix, end_date),
            None => config.always_open_label.clone(),
        };
        let image_src = payload
            .image_url()
            .unwrap_or(&config.default_image)
            .to_string();

        Self {
            title: payload.title.clone().unwrap_or_default(),
            desc: payload.desc.clone().unwrap_or_default(),
            category,
            date,
            image_src,
            region: payload.region.clone().unwrap_or_default(),
            link: payload.link.clone(),
            accent_color: payload.color_code.clone(),
            policy_id: payload.id.as_ref().map(|id| id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_for(json: &str) -> ModalContent {
        let payload = CardPayload::from_attribute(Some(json)).unwrap();
        ModalContent::from_payload(&payload, &ModalConfig::default())
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let content = content_for(
            r#"{"title": "교통비 지원", "desc": "월 5만원", "category": "교통", "endDate": "2025.03.01",
                "img": "/img/bus.png"}"#,
        );
        assert_eq!(content.title, "교통비 지원");
        assert_eq!(content.desc, "월 5만원");
        assert_eq!(content.category, "#교통");
        assert_eq!(content.date, "마감일: 2025.03.01");
        assert_eq!(content.image_src, "/img/bus.png");
    }

    #[test]
    fn test_fallbacks_for_empty_payload() {
        let content = content_for("{}");
        assert_eq!(content.title, "");
        assert_eq!(content.desc, "");
        assert_eq!(content.category, "");
        assert_eq!(content.date, "상시 모집");
        assert_eq!(content.image_src, "/static/images/card_images/default.png");
        assert_eq!(content.region, "");
        assert_eq!(content.link, None);
        assert_eq!(content.accent_color, None);
        assert_eq!(content.policy_id, None);
    }

    #[test]
    fn test_image_falls_back_to_alternate_key() {
        let content = content_for(r#"{"image": "/img/alt.png"}"#);
        assert_eq!(content.image_src, "/img/alt.png");
    }

    #[test]
    fn test_date_label_keeps_literal_date() {
        let content = content_for(r#"{"endDate": "상시"}"#);
        assert_eq!(content.date, "마감일: 상시");
    }

    #[test]
    fn test_custom_labels() {
        let config = ModalConfig {
            due_date_prefix: "Due ".into(),
            always_open_label: "Always open".into(),
            category_prefix: "".into(),
            default_image: "/none.png".into(),
            ..ModalConfig::default()
        };
        let payload = CardPayload::from_attribute(Some(r#"{"category": "Jobs"}"#)).unwrap();
        let content = ModalContent::from_payload(&payload, &config);
        assert_eq!(content.category, "Jobs");
        assert_eq!(content.date, "Always open");
        assert_eq!(content.image_src, "/none.png");

        let payload = CardPayload::from_attribute(Some(r#"{"endDate": "2025-01-01"}"#)).unwrap();
        assert_eq!(
            ModalContent::from_payload(&payload, &config).date,
            "Due 2025-01-01"
        );
    }

    #[test]
    fn test_supplementary_fields() {
        let content = content_for(
            r##"{"id": 42, "link": "https://example.org/p/42", "region": "부산", "colorCode": "#3366ff"}"##,
        );
        assert_eq!(content.policy_id.as_deref(), Some("42"));
        assert_eq!(content.link.as_deref(), Some("https://example.org/p/42"));
        assert_eq!(content.region, "부산");
        assert_eq!(content.accent_color.as_deref(), Some("#3366ff"));
    }
}
