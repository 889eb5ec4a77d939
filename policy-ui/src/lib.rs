//! policy-ui - Browser side of the policy card modal
//!
//! Binds the DOM-free logic in `policy-common` to the page: a surface over the
//! modal's fixed elements, a controller that drives the visibility state
//! machine against it, and Dioxus views that render the markup contract.

pub mod components;
pub mod controller;
pub mod dom;
pub mod modal;
pub mod surface;
pub mod wasm_utils;

pub use components::*;
pub use controller::ModalController;
pub use dom::DomModalSurface;
pub use modal::{use_policy_modal, PolicyModal};
pub use surface::{Marker, ModalSurface, TextField};
