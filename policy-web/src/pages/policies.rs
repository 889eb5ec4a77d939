use crate::demo_data;
use dioxus::prelude::*;
use policy_common::{
    categories, regions, select_cards, CardFilter, ModalConfig, SortOrder, ALL_REGIONS, NATIONWIDE,
};
use policy_ui::{use_policy_modal, ModalConfigScript, PolicyCardView, PolicyModalView};

const ALL_CATEGORIES: &str = "all";

#[component]
pub fn Policies() -> Element {
    let mut region = use_signal(|| ALL_REGIONS.to_string());
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut keyword = use_signal(String::new);
    let mut sort = use_signal(SortOrder::default);

    // Keeps the modal's listeners alive for the lifetime of the page
    let _modal = use_policy_modal();

    let policies = demo_data::policies();
    let tabs = categories(policies);
    let region_options = regions(policies);
    let region_value = region();
    let category_value = category();
    let keyword_value = keyword();
    let filter = CardFilter {
        region: &region_value,
        category: &category_value,
        keyword: &keyword_value,
    };
    let selected = select_cards(policies, &filter, sort());
    let sort_key = sort().key();

    rsx! {
        div { class: "policy-page",
            header { class: "policy-header",
                h1 { "청년 정책 전체보기" }
                div { class: "policy-controls",
                    input {
                        class: "policy-search",
                        r#type: "search",
                        placeholder: "정책 검색",
                        value: "{keyword}",
                        oninput: move |evt| keyword.set(evt.value()),
                    }
                    select {
                        class: "policy-region",
                        value: "{region_value}",
                        onchange: move |evt| region.set(evt.value()),
                        option { value: ALL_REGIONS, "{ALL_REGIONS}" }
                        option { value: NATIONWIDE, "{NATIONWIDE}" }
                        for name in region_options {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                    select {
                        class: "policy-sort",
                        value: "{sort_key}",
                        onchange: move |evt| sort.set(SortOrder::from_key(&evt.value())),
                        for (key, label) in SortOrder::ALL.map(|order| (order.key(), sort_label(order))) {
                            option { value: key, "{label}" }
                        }
                    }
                }
            }
            nav { class: "policy-tabs",
                CategoryTab {
                    label: "전체".to_string(),
                    is_active: category() == ALL_CATEGORIES,
                    on_click: move |_| category.set(ALL_CATEGORIES.to_string()),
                }
                for tab in tabs {
                    CategoryTab {
                        key: "{tab}",
                        label: tab.clone(),
                        is_active: category() == tab,
                        on_click: {
                            let tab = tab.clone();
                            move |_| category.set(tab.clone())
                        },
                    }
                }
            }
            if selected.is_empty() {
                p { class: "policy-empty", "조건에 맞는 정책이 없습니다." }
            } else {
                div { class: "policy-grid",
                    for card in selected {
                        PolicyCardView { key: "{card.id}", card: card.clone() }
                    }
                }
            }
            ModalConfigScript { config: modal_config() }
            PolicyModalView {}
        }
    }
}

#[component]
fn CategoryTab(label: String, is_active: bool, on_click: EventHandler<()>) -> Element {
    let class = if is_active {
        "policy-tab active"
    } else {
        "policy-tab"
    };
    rsx! {
        button { class: "{class}", onclick: move |_| on_click.call(()), "{label}" }
    }
}

/// Activate after one 60Hz frame instead of the 10ms default.
fn modal_config() -> ModalConfig {
    ModalConfig {
        activate_delay_ms: 16,
        ..ModalConfig::default()
    }
}

fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Default => "기본순",
        SortOrder::Latest => "최신순",
        SortOrder::Popular => "인기순",
        SortOrder::Deadline => "마감순",
    }
}
