//! Policy card - carries its payload in `data-json` for the modal to read

use dioxus::prelude::*;
use policy_common::PolicyCard;
use tracing::warn;

/// Individual policy card
///
/// Clicking is handled by the modal's document-level listener, so the card
/// itself has no click handler.
#[component]
pub fn PolicyCardView(card: PolicyCard) -> Element {
    let payload = match card.to_payload_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("Card {} has no payload: {}", card.id, e);
            String::new()
        }
    };
    let title = card.title.clone();
    let desc = card.desc.clone();
    let category = card.category.clone();
    let region = card.region.clone();
    let date_label = card.date_label();
    let badge_style = format!("background-color: {}", card.color_code);

    rsx! {
        div {
            class: "policy-card",
            "data-testid": "policy-card",
            "data-json": "{payload}",
            if let Some(url) = &card.image {
                img {
                    class: "policy-card-image",
                    src: "{url}",
                    alt: "{title}",
                }
            } else {
                div { class: "policy-card-image placeholder" }
            }
            div { class: "policy-card-body",
                span { class: "policy-card-category", style: "{badge_style}", "{category}" }
                h3 { class: "policy-card-title", "{title}" }
                p { class: "policy-card-desc", "{desc}" }
                div { class: "policy-card-meta",
                    span { "{region}" }
                    span { "{date_label}" }
                }
            }
        }
    }
}
