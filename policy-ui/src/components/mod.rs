//! Views that render the modal's markup contract

pub mod policy_card;
pub mod policy_modal_view;

pub use policy_card::PolicyCardView;
pub use policy_modal_view::{ModalConfigScript, PolicyModalView};
