//! User facing texts of the search page, in the locales we ship.

use crate::search_const::normalize_locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AutocompleteFailed,
    SearchFailed,
    NoFiltersUsed,
    NoResults,
    SearchPlaceholder,
    LoginRequired,
    ClearSearch,
    Filters,
    ClearFilters,
    PreviousPage,
    NextPage,
    ProductSheet,
    SuggestedProducts,
    SuggestedBrands,
    SuggestedProducers,
    SuggestedWholesalers,
    NutritionalValues,
}

impl Message {
    pub fn text(self, locale: &str) -> &'static str {
        let dutch = normalize_locale(locale) == "nl";
        match (self, dutch) {
            (Message::AutocompleteFailed, true) => "Suggesties konden niet worden opgehaald.",
            (Message::AutocompleteFailed, false) => "Suggestions could not be loaded.",
            (Message::SearchFailed, true) => "Er ging iets mis bij het zoeken. Probeer het opnieuw.",
            (Message::SearchFailed, false) => "Something went wrong while searching. Please try again.",
            (Message::NoFiltersUsed, true) => "Vul een zoekterm in of kies een filter om producten te tonen.",
            (Message::NoFiltersUsed, false) => "Enter a search term or choose a filter to show products.",
            (Message::NoResults, true) => "Geen producten gevonden.",
            (Message::NoResults, false) => "No products found.",
            (Message::SearchPlaceholder, true) => "Zoek product, merk of producent",
            (Message::SearchPlaceholder, false) => "Search product, brand or producer",
            (Message::LoginRequired, true) => "Log in om de productspecificatie te bekijken",
            (Message::LoginRequired, false) => "Log in to view the product sheet",
            (Message::ClearSearch, true) => "Zoekopdracht wissen",
            (Message::ClearSearch, false) => "Clear search",
            (Message::Filters, true) => "Filters",
            (Message::Filters, false) => "Filters",
            (Message::ClearFilters, true) => "Alle filters wissen",
            (Message::ClearFilters, false) => "Clear all filters",
            (Message::PreviousPage, true) => "Vorige pagina",
            (Message::PreviousPage, false) => "Previous page",
            (Message::NextPage, true) => "Volgende pagina",
            (Message::NextPage, false) => "Next page",
            (Message::ProductSheet, true) => "Productspecificatie",
            (Message::ProductSheet, false) => "Product sheet",
            (Message::SuggestedProducts, true) => "Producten",
            (Message::SuggestedProducts, false) => "Products",
            (Message::SuggestedBrands, true) => "Merken",
            (Message::SuggestedBrands, false) => "Brands",
            (Message::SuggestedProducers, true) => "Producenten",
            (Message::SuggestedProducers, false) => "Producers",
            (Message::SuggestedWholesalers, true) => "Groothandels",
            (Message::SuggestedWholesalers, false) => "Wholesalers",
            (Message::NutritionalValues, true) => "Voedingswaarden",
            (Message::NutritionalValues, false) => "Nutritional values",
        }
    }
}

pub fn results_found(results: u64, locale: &str) -> String {
    match (normalize_locale(locale), results) {
        ("nl", 1) => "1 product gevonden".to_string(),
        ("nl", n) => format!("{n} producten gevonden"),
        (_, 1) => "1 product found".to_string(),
        (_, n) => format!("{n} products found"),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locale_falls_back_to_dutch() {
        assert_eq!(Message::NoResults.text("de"), Message::NoResults.text("nl"));
        assert_eq!(Message::NoResults.text("EN"), "No products found.");
    }

    #[test]
    fn result_count_is_pluralized() {
        assert_eq!(results_found(1, "nl"), "1 product gevonden");
        assert_eq!(results_found(3, "nl"), "3 producten gevonden");
        assert_eq!(results_found(0, "en"), "0 products found");
    }
}
