//! policy-common - DOM-free logic for the policy card modal
//!
//! Payload parsing, field mapping, the visibility state machine and card
//! listing helpers. Nothing here touches the browser, so everything is unit
//! tested natively.

pub mod config;
pub mod content;
pub mod error;
pub mod listing;
pub mod payload;
pub mod visibility;

pub use config::ModalConfig;
pub use content::ModalContent;
pub use error::ModalError;
pub use listing::{
    categories, normalize_region, regions, select_cards, CardFilter, PolicyCard, SortOrder,
    ALL_REGIONS, NATIONWIDE,
};
pub use payload::{CardPayload, PolicyId};
pub use visibility::{Markers, ModalMachine, ModalVisibility, ScheduledStep};
