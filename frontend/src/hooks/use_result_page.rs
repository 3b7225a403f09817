use common::{
    filter_set::ItemBetween,
    result_page::{ResultPageController, SearchPlan},
};
use dioxus::prelude::*;

use crate::api::search_api::search_products;

/// Handle to the result list state, shared through context.
#[derive(Clone, Copy)]
pub struct ResultPageControl {
    pub controller: Signal<ResultPageController>,
    pub set_keyword: Callback<String>,
    pub set_checked: Callback<(String, Vec<u64>, bool)>,
    pub set_range: Callback<(String, ItemBetween)>,
    pub clear_range: Callback<(String, u64)>,
    pub clear_filters: Callback<()>,
    pub on_page_change: Callback<u32>,
}

fn run_plan(mut controller: Signal<ResultPageController>, plan: SearchPlan) {
    let SearchPlan::Request(ticket) = plan else {
        return;
    };
    spawn(async move {
        let response = search_products(ticket.query).await;
        controller.write().on_response(ticket.seq, response.map_err(|e| e.to_string()));
    });
}

pub fn use_result_page(init: impl FnOnce() -> ResultPageController) -> ResultPageControl {
    let mut controller = use_signal(init);

    // first search (or the "no filters used" state) once the page is mounted
    use_effect(move || {
        let plan = controller.write().refresh();
        run_plan(controller, plan);
    });

    // responses still in flight when the page unmounts are ignored
    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.cancel_pending();
        }
    });

    let set_keyword = use_callback(move |keyword: String| {
        let plan = controller.write().set_keyword(&keyword);
        run_plan(controller, plan);
    });
    let set_checked = use_callback(move |(key, ids, checked): (String, Vec<u64>, bool)| {
        let plan = controller.write().set_checked(&key, &ids, checked);
        run_plan(controller, plan);
    });
    let set_range = use_callback(move |(key, range): (String, ItemBetween)| {
        let plan = controller.write().set_range(&key, range);
        run_plan(controller, plan);
    });
    let clear_range = use_callback(move |(key, range_id): (String, u64)| {
        let plan = controller.write().clear_range(&key, range_id);
        run_plan(controller, plan);
    });
    let clear_filters = use_callback(move |_: ()| {
        let plan = controller.write().clear_filters();
        run_plan(controller, plan);
    });
    let on_page_change = use_callback(move |page: u32| {
        let plan = controller.write().on_page_change(page);
        run_plan(controller, plan);
    });

    ResultPageControl { controller, set_keyword, set_checked, set_range, clear_range, clear_filters, on_page_change }
}
