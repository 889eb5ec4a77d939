//! policy-web - Policy listing page
//!
//! Renders fixture policies as cards and installs the detail modal that opens
//! when a card is clicked.

pub mod demo_data;
pub mod pages;

use dioxus::prelude::*;
use pages::Policies;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Policies {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
