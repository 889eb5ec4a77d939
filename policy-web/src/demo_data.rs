//! Demo policies for rendering the listing without a backend
//!
//! Provides static fixture data in the shape the listing API returns.

use policy_common::PolicyCard;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/policies.json");

#[derive(Debug, Deserialize)]
struct FixtureData {
    policies: Vec<PolicyCard>,
}

static DEMO_POLICIES: OnceLock<Vec<PolicyCard>> = OnceLock::new();

/// All demo policies, parsed on first use.
pub fn policies() -> &'static [PolicyCard] {
    DEMO_POLICIES.get_or_init(|| match serde_json::from_str::<FixtureData>(FIXTURE_JSON) {
        Ok(data) => data.policies,
        Err(e) => {
            error!("Failed to parse policy fixtures: {}", e);
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let policies = policies();
        assert_eq!(policies.len(), 5);
        assert!(policies.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn test_fixtures_cover_region_filter() {
        let policies = policies();
        let seoul = policy_common::CardFilter {
            region: "서울특별시",
            ..Default::default()
        };
        let nationwide = policy_common::CardFilter {
            region: policy_common::NATIONWIDE,
            ..Default::default()
        };
        let sort = policy_common::SortOrder::Default;
        assert_eq!(policy_common::select_cards(policies, &seoul, sort).len(), 1);
        assert_eq!(policy_common::select_cards(policies, &nationwide, sort).len(), 3);
        assert_eq!(policy_common::regions(policies), vec!["서울", "부산"]);
    }

    #[test]
    fn test_fixture_payloads_open_in_modal() {
        for policy in policies() {
            let json = policy.to_payload_json().unwrap();
            assert!(policy_common::CardPayload::from_attribute(Some(json.as_str())).is_ok());
        }
    }
}
