pub mod search_input_top_bar;
pub mod suggestion_panel;
pub mod search_facets;
pub mod nutrition_ranges;
pub mod search_results_view;
pub mod search_result_item_card;
pub mod search_result_list_controls;
