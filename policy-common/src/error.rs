//! Errors raised while opening the policy modal

use thiserror::Error;

/// Reasons an open attempt is abandoned.
///
/// None of these are fatal to the page: the attempt is logged and the modal
/// keeps whatever state it had before.
#[derive(Debug, Error)]
pub enum ModalError {
    #[error("modal element not found: #{0}")]
    MissingElement(&'static str),
    #[error("no browser window available")]
    NoWindow,
    #[error("card has no {0} payload")]
    MissingPayload(&'static str),
    #[error("failed to parse card payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("invalid modal config: {0}")]
    InvalidConfig(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cause() {
        assert_eq!(
            ModalError::MissingElement("policy-modal").to_string(),
            "modal element not found: #policy-modal"
        );
        assert_eq!(
            ModalError::MissingPayload("data-json").to_string(),
            "card has no data-json payload"
        );
    }
}
