//! Modal skeleton with the element ids the controller binds to
//!
//! Rendered empty and hidden. Content and visibility are written straight to
//! the DOM by `PolicyModal`, so nothing here depends on modal state and Dioxus
//! never re-renders over those writes.

use dioxus::prelude::*;
use policy_common::ModalConfig;

use crate::dom::ids;

#[component]
pub fn PolicyModalView(
    /// Label for the external link button
    #[props(default = "자세히 보기".to_string())]
    link_label: String,
) -> Element {
    rsx! {
        div { id: ids::ROOT, class: "policy-modal hidden",
            div { class: "policy-modal-content",
                button {
                    id: ids::CLOSE_BUTTON,
                    class: "policy-modal-close",
                    "aria-label": "닫기",
                    "×"
                }
                img { id: ids::IMAGE, class: "policy-modal-image", alt: "" }
                div { class: "policy-modal-body",
                    span { id: ids::CATEGORY, class: "policy-modal-category" }
                    h2 { id: ids::TITLE, class: "policy-modal-title" }
                    p { id: ids::DATE, class: "policy-modal-date" }
                    p { id: ids::REGION, class: "policy-modal-region" }
                    p { id: ids::DESC, class: "policy-modal-desc" }
                }
                div { class: "policy-modal-actions",
                    a {
                        id: ids::LINK,
                        class: "policy-modal-link hidden",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link_label}"
                    }
                    button { id: ids::HEART_BUTTON, class: "policy-modal-heart", "♡" }
                }
            }
        }
    }
}

/// Embeds a config override for `read_config` to pick up.
#[component]
pub fn ModalConfigScript(config: ModalConfig) -> Element {
    let json = serde_json::to_string(&config).unwrap_or_default();
    rsx! {
        script { id: ids::CONFIG, r#type: "application/json", "{json}" }
    }
}
