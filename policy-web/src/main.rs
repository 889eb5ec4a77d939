//! Policy listing web app with the card detail modal

fn main() {
    dioxus::launch(policy_web::App);
}
