//! Range facets for nutritional values ("voedingswaardes").

use dioxus::{logger::tracing::warn, prelude::*};
use common::{
    filter_set::ItemBetween,
    messages::Message,
    search_const::NUTRITION_FACET,
    search_result::NutritionalRange,
};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::hooks::use_result_page::ResultPageControl;


/// Range constraint for user typed bounds, `None` when the bounds are unusable.
///
/// Bounds are limited to what the API offers; a range covering everything
/// constrains nothing and is reported as the full range.
fn typed_range(offered: &NutritionalRange, minimal: &str, maximum: &str) -> Option<ItemBetween> {
    let minimal = minimal.trim().replace(',', ".").parse::<f64>().ok()?;
    let maximum = maximum.trim().replace(',', ".").parse::<f64>().ok()?;
    if !minimal.is_finite() || !maximum.is_finite() || minimal > maximum {
        return None;
    }
    Some(ItemBetween {
        id: offered.id,
        minimal: minimal.max(offered.minimal),
        maximum: maximum.min(offered.maximum),
    })
}

fn covers_everything(offered: &NutritionalRange, range: &ItemBetween) -> bool {
    range.minimal <= offered.minimal && range.maximum >= offered.maximum
}

#[component]
pub fn NutritionRangeList() -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller;
    let ranges = use_memo(move || {
        controller.read().search_result().map(|r| r.nutritional_ranges.clone()).unwrap_or_default()
    });
    let locale = use_memo(move || controller.read().locale().to_string());
    let title = Message::NutritionalValues.text(&locale());

    if ranges.read().is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            h3 { style: "font-size: 18px; font-weight: 500; margin: 4px;", "{title}" }
            for offered in ranges() {
                NutritionRangeInput { key: "{offered.id}", offered }
            }
        }
    }
}

#[component]
fn NutritionRangeInput(offered: ReadSignal<NutritionalRange>) -> Element {
    let result_page = use_context::<ResultPageControl>();
    let controller = result_page.controller;
    let selected = use_memo(move || {
        let id = offered.read().id;
        controller
            .read()
            .filters()
            .get(NUTRITION_FACET)
            .and_then(|f| f.item_between.iter().find(|r| r.id == id).cloned())
    });

    let mut minimal = use_signal(String::new);
    let mut maximum = use_signal(String::new);
    // inputs follow the active constraint, or the offered bounds when there is none
    use_effect(move || {
        let offered = offered.read();
        let (low, high) = match selected() {
            Some(range) => (range.minimal, range.maximum),
            None => (offered.minimal, offered.maximum),
        };
        minimal.set(low.to_string());
        maximum.set(high.to_string());
    });

    let apply = move |_| {
        let offered = offered.read().clone();
        let Some(range) = typed_range(&offered, &minimal.read(), &maximum.read()) else {
            warn!("ignoring unusable bounds for nutritional range {} ({})", offered.id, offered.name);
            return;
        };
        if covers_everything(&offered, &range) {
            result_page.clear_range.call((NUTRITION_FACET.to_string(), offered.id));
        } else {
            result_page.set_range.call((NUTRITION_FACET.to_string(), range));
        }
    };

    let name = offered.read().name.clone();
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 6px; margin: 4px;",
            span { style: "flex-grow: 1; font-size: 16px;", "{name}" }
            input {
                r#type: "number",
                style: "width: 70px;",
                value: "{minimal}",
                oninput: move |e| minimal.set(e.value()),
                onchange: apply,
            }
            "-"
            input {
                r#type: "number",
                style: "width: 70px;",
                value: "{maximum}",
                oninput: move |e| maximum.set(e.value()),
                onchange: apply,
            }
            if selected().is_some() {
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: move |_| result_page.clear_range.call((NUTRITION_FACET.to_string(), offered.read().id)),
                    Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}
