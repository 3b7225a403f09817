//! Autocomplete suggestion models returned by the Foodbook API.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesalerSuggestion {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub article_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Suggestions {
    pub products: Vec<SuggestionItem>,
    pub brands: Vec<SuggestionItem>,
    pub producers: Vec<SuggestionItem>,
    pub wholesalers: Vec<WholesalerSuggestion>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
            && self.brands.is_empty()
            && self.producers.is_empty()
            && self.wholesalers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len() + self.brands.len() + self.producers.len() + self.wholesalers.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_default_to_empty() {
        let parsed: Suggestions = serde_json::from_str(r#"{"brands":[{"id":3,"name":"Zuivelhoeve"}]}"#).unwrap();
        assert_eq!(parsed.brands, vec![SuggestionItem { id: 3, name: "Zuivelhoeve".to_string() }]);
        assert!(parsed.products.is_empty());
        assert_eq!(parsed.len(), 1);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn wholesaler_carries_article_number() {
        let parsed: Suggestions = serde_json::from_str(
            r#"{"wholesalers":[{"id":9,"name":"Sligro","articleNumber":"A-771"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.wholesalers[0].article_number.as_deref(), Some("A-771"));
    }
}
