//! Hooks that drive the search state machines from the search page.

pub mod use_autocomplete;
pub mod use_result_page;
