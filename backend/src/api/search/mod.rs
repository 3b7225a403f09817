//! Search API handlers and module exports.

mod autocomplete;
pub use autocomplete::{autocomplete, autocomplete_with};

mod search_products;
pub use search_products::{search_products, search_products_with};
