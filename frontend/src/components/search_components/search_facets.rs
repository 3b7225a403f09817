//! Facet checkbox lists built from the facets of the current search result.

use dioxus::prelude::*;
use common::{
    messages::Message,
    search_const::BRAND_FACET,
    search_result::{FilterResult, FilterResultItem},
};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::{
    components::search_components::nutrition_ranges::NutritionRangeList,
    hooks::use_result_page::ResultPageControl,
};


#[component]
pub fn SearchFacetPanel() -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller;

    let facets = use_memo(move || {
        let controller = controller.read();
        let scoped_to_brand = controller.brand().is_some();
        controller
            .search_result()
            .map(|result| {
                result
                    .visible_filters()
                    // a brand page never lets you leave its brand
                    .filter(|f| !(scoped_to_brand && f.key == BRAND_FACET))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });
    let has_filters = use_memo(move || !controller.read().filters().is_empty());
    let locale = use_memo(move || controller.read().locale().to_string());
    let filters_label = Message::Filters.text(&locale());
    let clear_label = Message::ClearFilters.text(&locale());

    rsx! {
        div {
            id: "x-search-facet-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                padding: 10px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h2 { style: "font-size: 22px; font-weight: 500;", "{filters_label}" }
                div { style: "flex-grow: 1;" }
                if has_filters() {
                    button {
                        style: "cursor: pointer; border: 1px solid rgba(0,0,0,0.3); border-radius: 8px; background: white; padding: 4px 8px;",
                        onclick: move |_| result_page.clear_filters.call(()),
                        "{clear_label}"
                    }
                }
            }
            for facet in facets() {
                FacetSelectorList { key: "{facet.key}", facet }
            }
            NutritionRangeList {}
        }
    }
}

/// Rows of one facet: the items the API returned, followed by selected ids
/// it did not return this time, so they can still be unchecked.
fn facet_rows(facet: &FilterResult, selected: &[u64]) -> Vec<FilterResultItem> {
    let mut rows = facet.items.clone();
    for id in selected {
        if !rows.iter().any(|item| item.id == *id) {
            rows.push(FilterResultItem { id: *id, name: format!("#{id}"), count: 0 });
        }
    }
    rows
}

#[component]
fn FacetSelectorList(facet: ReadSignal<FilterResult>) -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller;
    let rows = use_memo(move || {
        let facet = facet.read();
        facet_rows(&facet, controller.read().filters().values(&facet.key))
    });
    let facet_key = use_memo(move || facet.read().key.clone());
    let facet_name = use_memo(move || facet.read().display_name().to_string());

    rsx! {
        div {
            h3 { style: "font-size: 18px; font-weight: 500; margin: 4px;", "{facet_name}" }
            ul {
                for item in rows() {
                    li {
                        key: "{item.id}",
                        FacetCheckbox {
                            facet_key: facet_key(),
                            item_id: item.id,
                            result_count: item.count,
                            result_display_string: item.name.clone(),
                        }
                    }
                }
            }
        }
    }
}


#[component]
fn FacetCheckbox(facet_key: ReadSignal<String>, item_id: ReadSignal<u64>, result_count: ReadSignal<u64>, result_display_string: ReadSignal<String>) -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller;
    let is_checked = use_memo(move || controller.read().filters().is_checked(&facet_key.read(), *item_id.read()));
    rsx! {

        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 4px;
                accent-color: #ffffff;
                align-items: center;
            ",
            onclick: move |_e| {
                let should_add = !is_checked();
                result_page.set_checked.call((facet_key.read().clone(), vec![*item_id.read()], should_add));
            },

            // FACET CHECKBOX
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 45, 33); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            // FACET NAME
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{result_display_string}"
            }

            // FACET SPACER
            div { style: "flex: 1 1 auto;", }

            // FACET COUNT
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    font-weight: 400;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{result_count}"
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_ids_missing_from_the_result_stay_listed() {
        let facet = FilterResult {
            key: "Brand".to_string(),
            name: None,
            parent_key: None,
            items: vec![FilterResultItem { id: 1, name: "Zuivelhoeve".to_string(), count: 4 }],
        };
        let rows = facet_rows(&facet, &[1, 9]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], FilterResultItem { id: 9, name: "#9".to_string(), count: 0 });
    }
}
