//! Constants shared by the search page and the Foodbook client.

/// Number of products requested per result page.
pub const PAGE_SIZE: u32 = 24;

/// Quiet interval after the last keystroke before a query is committed.
pub const DEBOUNCE_MILLIS: u64 = 300;

/// Queries shorter than this (in characters) never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

pub const DEFAULT_LOCALE: &str = "nl";
pub const SUPPORTED_LOCALES: [&str; 2] = ["nl", "en"];

pub const BRAND_FACET: &str = "Brand";
pub const PRODUCER_FACET: &str = "Producer";
pub const WHOLESALER_FACET: &str = "Wholesaler";
pub const NUTRITION_FACET: &str = "Voedingswaarde";

/// Falls back to [`DEFAULT_LOCALE`] for anything we do not ship texts for.
pub fn normalize_locale(locale: &str) -> &'static str {
    let locale = locale.trim();
    SUPPORTED_LOCALES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(locale))
        .copied()
        .unwrap_or(DEFAULT_LOCALE)
}
