//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod suggestions;
pub mod filter_set;
pub mod search_query;
pub mod search_result;
pub mod pagination;
pub mod messages;
pub mod debounce;
pub mod autocomplete;
pub mod result_page;
