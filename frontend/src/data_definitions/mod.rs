pub mod url_param;
pub mod initial_search;
