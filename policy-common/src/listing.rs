//! Policy card records and client-side filtering/sorting for the card grid

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A policy as the listing backend serialises it into a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCard {
    pub id: i64,
    pub title: String,
    pub desc: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub region: String,
    pub color_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,
}

/// Region selector value that disables the region filter
pub const ALL_REGIONS: &str = "전체";
/// Region of nationwide policies
pub const NATIONWIDE: &str = "전국";

/// Sort orders offered by the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Backend order (id ascending)
    #[default]
    Default,
    /// Newest first, undated policies last
    Latest,
    /// Most viewed first, uncounted policies last
    Popular,
    /// Soonest end date first, undated policies last
    Deadline,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Default,
        SortOrder::Latest,
        SortOrder::Popular,
        SortOrder::Deadline,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Latest => "latest",
            SortOrder::Popular => "popular",
            SortOrder::Deadline => "deadline",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "latest" => SortOrder::Latest,
            "popular" => SortOrder::Popular,
            "deadline" => SortOrder::Deadline,
            _ => SortOrder::Default,
        }
    }
}

/// Listing filters, as the page's tabs, region select and search box set them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardFilter<'a> {
    pub region: &'a str,
    pub category: &'a str,
    pub keyword: &'a str,
}

impl PolicyCard {
    /// Text for the card's `data-json` attribute.
    pub fn to_payload_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parsed end date; accepts `2025-12-31` and `2025.12.31`.
    pub fn deadline(&self) -> Option<NaiveDate> {
        let raw = self.end_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y.%m.%d"))
            .ok()
    }

    /// Parsed creation time; a bare date counts as midnight.
    pub fn created(&self) -> Option<NaiveDateTime> {
        let raw = self.created_at.as_deref()?.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    /// Short deadline text for the card face (the modal shows the full label).
    pub fn date_label(&self) -> String {
        match (self.deadline(), self.end_date.as_deref()) {
            (Some(date), _) => format!("{} 마감", date.format("%Y.%m.%d")),
            (None, Some(raw)) if !raw.trim().is_empty() => format!("{} 마감", raw.trim()),
            _ => "상시 모집".to_string(),
        }
    }

    /// `전체`, `national` or empty matches every region. `전국` matches only
    /// nationwide policies; any other value is compared after normalising
    /// both sides (`서울특별시` and `서울` are the same region).
    pub fn matches_region(&self, region: &str) -> bool {
        let region = region.trim();
        match region {
            "" | ALL_REGIONS | "national" => true,
            NATIONWIDE => self.region == NATIONWIDE,
            _ => normalize_region(&self.region) == normalize_region(region),
        }
    }

    /// `"all"` or an empty category matches everything.
    pub fn matches_category(&self, category: &str) -> bool {
        category.is_empty() || category == "all" || self.category == category
    }

    /// Case-insensitive match on title or description.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return true;
        }
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword) || self.desc.to_lowercase().contains(&keyword)
    }

    fn matches(&self, filter: &CardFilter<'_>) -> bool {
        self.matches_region(filter.region)
            && self.matches_category(filter.category)
            && self.matches_keyword(filter.keyword)
    }
}

/// Short form of a province or metropolitan city name.
///
/// Unknown names come back trimmed and otherwise unchanged.
pub fn normalize_region(name: &str) -> &str {
    let name = name.trim();
    match name {
        "서울특별시" | "서울시" => "서울",
        "부산광역시" | "부산시" => "부산",
        "대구광역시" | "대구시" => "대구",
        "인천광역시" | "인천시" => "인천",
        "광주광역시" | "광주시" => "광주",
        "대전광역시" | "대전시" => "대전",
        "울산광역시" | "울산시" => "울산",
        "세종특별자치시" | "세종시" => "세종",
        "경기도" => "경기",
        "강원도" | "강원특별자치도" => "강원",
        "충청북도" => "충북",
        "충청남도" => "충남",
        "전라북도" | "전북특별자치도" => "전북",
        "전라남도" => "전남",
        "경상북도" => "경북",
        "경상남도" => "경남",
        "제주도" | "제주특별자치도" => "제주",
        _ => name,
    }
}

/// Apply region, category and keyword filters, then the sort order.
pub fn select_cards<'a>(
    cards: &'a [PolicyCard],
    filter: &CardFilter<'_>,
    order: SortOrder,
) -> Vec<&'a PolicyCard> {
    let mut selected: Vec<&PolicyCard> = cards.iter().filter(|card| card.matches(filter)).collect();

    match order {
        SortOrder::Default => selected.sort_by_key(|card| card.id),
        SortOrder::Latest => {
            selected.sort_by(|a, b| descending_nulls_last(a.created(), b.created()).then(a.id.cmp(&b.id)))
        }
        SortOrder::Popular => selected
            .sort_by(|a, b| descending_nulls_last(a.view_count, b.view_count).then(a.id.cmp(&b.id))),
        SortOrder::Deadline => selected.sort_by(|a, b| compare_deadlines(a, b)),
    }
    selected
}

/// Distinct categories in first-seen order.
pub fn categories(cards: &[PolicyCard]) -> Vec<String> {
    distinct(cards.iter().map(|card| card.category.as_str()))
}

/// Distinct normalised regions in first-seen order, nationwide excluded.
pub fn regions(cards: &[PolicyCard]) -> Vec<String> {
    distinct(
        cards
            .iter()
            .map(|card| normalize_region(&card.region))
            .filter(|region| !region.is_empty() && *region != NATIONWIDE),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

fn descending_nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_deadlines(a: &PolicyCard, b: &PolicyCard) -> Ordering {
    match (a.deadline(), b.deadline()) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::CardPayload;

    fn card(id: i64, title: &str, category: &str, end_date: Option<&str>) -> PolicyCard {
        PolicyCard {
            id,
            title: title.to_string(),
            desc: format!("{} 설명", title),
            category: category.to_string(),
            end_date: end_date.map(str::to_string),
            image: None,
            link: None,
            region: "전국".to_string(),
            color_code: "#777777".to_string(),
            created_at: None,
            view_count: None,
        }
    }

    fn all() -> CardFilter<'static> {
        CardFilter {
            region: ALL_REGIONS,
            category: "all",
            keyword: "",
        }
    }

    fn in_category(category: &str) -> CardFilter<'_> {
        CardFilter {
            category,
            ..all()
        }
    }

    fn with_keyword(keyword: &str) -> CardFilter<'_> {
        CardFilter { keyword, ..all() }
    }

    fn in_region(region: &str) -> CardFilter<'_> {
        CardFilter { region, ..all() }
    }

    fn ids(cards: &[&PolicyCard]) -> Vec<i64> {
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_deadline_sort_puts_undated_last() {
        let cards = vec![
            card(1, "a", "주거", None),
            card(2, "b", "주거", Some("2025.06.30")),
            card(3, "c", "주거", Some("2025-01-15")),
            card(4, "d", "주거", Some("상시")),
        ];
        let selected = select_cards(&cards, &all(), SortOrder::Deadline);
        assert_eq!(ids(&selected), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_date_label() {
        assert_eq!(card(1, "a", "x", Some("2025-06-30")).date_label(), "2025.06.30 마감");
        assert_eq!(card(1, "a", "x", Some("연중")).date_label(), "연중 마감");
        assert_eq!(card(1, "a", "x", None).date_label(), "상시 모집");
    }

    #[test]
    fn test_category_filter() {
        let cards = vec![
            card(1, "a", "주거", None),
            card(2, "b", "일자리", None),
            card(3, "c", "주거", None),
        ];
        assert_eq!(
            ids(&select_cards(&cards, &in_category("주거"), SortOrder::Default)),
            vec![1, 3]
        );
        assert_eq!(
            ids(&select_cards(&cards, &in_category(""), SortOrder::Default)),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_keyword_matches_title_or_desc_case_insensitive() {
        let mut cards = vec![card(1, "Youth Rent", "주거", None), card(2, "교통비", "교통", None)];
        cards[1].desc = "Bus pass RENT-free".to_string();
        assert_eq!(
            ids(&select_cards(&cards, &with_keyword("rent"), SortOrder::Default)),
            vec![1, 2]
        );
        assert_eq!(
            ids(&select_cards(&cards, &with_keyword("youth"), SortOrder::Default)),
            vec![1]
        );
    }

    #[test]
    fn test_region_filter() {
        let mut cards = vec![
            card(1, "a", "주거", None),
            card(2, "b", "주거", None),
            card(3, "c", "주거", None),
            card(4, "d", "주거", None),
        ];
        cards[1].region = "서울".to_string();
        cards[2].region = "서울특별시".to_string();
        cards[3].region = "부산".to_string();

        for everything in ["전체", "national", ""] {
            assert_eq!(
                ids(&select_cards(&cards, &in_region(everything), SortOrder::Default)),
                vec![1, 2, 3, 4]
            );
        }
        assert_eq!(
            ids(&select_cards(&cards, &in_region("전국"), SortOrder::Default)),
            vec![1]
        );
        assert_eq!(
            ids(&select_cards(&cards, &in_region("서울특별시"), SortOrder::Default)),
            vec![2, 3]
        );
        assert_eq!(
            ids(&select_cards(&cards, &in_region("부산"), SortOrder::Default)),
            vec![4]
        );
    }

    #[test]
    fn test_region_combines_with_category_and_keyword() {
        let mut cards = vec![
            card(1, "월세 지원", "주거", None),
            card(2, "월세 대출", "금융", None),
            card(3, "전세 지원", "주거", None),
        ];
        for c in &mut cards {
            c.region = "대구".to_string();
        }
        let filter = CardFilter {
            region: "대구광역시",
            category: "주거",
            keyword: "월세",
        };
        assert_eq!(ids(&select_cards(&cards, &filter, SortOrder::Default)), vec![1]);
    }

    #[test]
    fn test_normalize_region() {
        assert_eq!(normalize_region(" 경기도 "), "경기");
        assert_eq!(normalize_region("제주특별자치도"), "제주");
        assert_eq!(normalize_region("서울"), "서울");
        assert_eq!(normalize_region("해외"), "해외");
    }

    #[test]
    fn test_regions_skip_nationwide() {
        let mut cards = vec![card(1, "a", "x", None), card(2, "b", "x", None), card(3, "c", "x", None)];
        cards[1].region = "서울특별시".to_string();
        cards[2].region = "서울".to_string();
        assert_eq!(regions(&cards), vec!["서울"]);
    }

    #[test]
    fn test_latest_sort_puts_undated_last() {
        let mut cards = vec![card(1, "a", "x", None), card(2, "b", "x", None), card(3, "c", "x", None)];
        cards[1].created_at = Some("2025-03-01".to_string());
        cards[2].created_at = Some("2025-03-01T09:30:00".to_string());
        assert_eq!(
            ids(&select_cards(&cards, &all(), SortOrder::Latest)),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_popular_sort_puts_uncounted_last() {
        let mut cards = vec![card(1, "a", "x", None), card(2, "b", "x", None), card(3, "c", "x", None)];
        cards[0].view_count = Some(5);
        cards[2].view_count = Some(40);
        assert_eq!(
            ids(&select_cards(&cards, &all(), SortOrder::Popular)),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_categories_first_seen_order() {
        let cards = vec![
            card(1, "a", "주거", None),
            card(2, "b", "일자리", None),
            card(3, "c", "주거", None),
        ];
        assert_eq!(categories(&cards), vec!["주거", "일자리"]);
    }

    #[test]
    fn test_sort_order_keys() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_key(order.key()), order);
        }
        assert_eq!(SortOrder::from_key("bogus"), SortOrder::Default);
    }

    #[test]
    fn test_payload_json_is_readable_by_modal() {
        let mut policy = card(9, "청년 적금", "금융", Some("2025-09-30"));
        policy.image = Some("/img/bank.png".to_string());
        let json = policy.to_payload_json().unwrap();

        let payload = CardPayload::from_attribute(Some(json.as_str())).unwrap();
        assert_eq!(payload.title.as_deref(), Some("청년 적금"));
        assert_eq!(payload.end_date.as_deref(), Some("2025-09-30"));
        assert_eq!(payload.image_url(), Some("/img/bank.png"));
        assert_eq!(payload.color_code.as_deref(), Some("#777777"));
    }
}
