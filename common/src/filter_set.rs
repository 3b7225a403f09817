//! Facet filter models and the ordered filter set used by product searches.
//!
//! A [`FilterSet`] holds at most one [`Filter`] per facet key. A key that is
//! absent means "no constraint on that facet"; a filter that would end up
//! constraining nothing is removed instead of being kept empty.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// Range constraint on a numeric facet, e.g. a nutritional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBetween {
    pub id: u64,
    pub minimal: f64,
    pub maximum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_between: Vec<ItemBetween>,
}

impl Filter {
    pub fn with_values(key: impl Into<String>, values: Vec<u64>) -> Self {
        Self { key: key.into(), values, item_between: vec![] }
    }

    /// Drops repeated value ids and range ids, keeping the first occurrence.
    fn dedup(mut self) -> Self {
        let mut values = BTreeSet::new();
        self.values.retain(|id| values.insert(*id));
        let mut ranges = BTreeSet::new();
        self.item_between.retain(|range| ranges.insert(range.id));
        self
    }

    pub fn constrains_nothing(&self) -> bool {
        self.values.is_empty() && self.item_between.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Filter>", into = "Vec<Filter>")]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl TryFrom<Vec<Filter>> for FilterSet {
    type Error = String;

    fn try_from(filters: Vec<Filter>) -> Result<Self, Self::Error> {
        let mut seen = BTreeSet::new();
        for filter in &filters {
            if !seen.insert(filter.key.as_str()) {
                return Err(format!("duplicate filter key {:?}", filter.key));
            }
        }
        let filters = filters
            .into_iter()
            .map(Filter::dedup)
            .filter(|f| !f.constrains_nothing())
            .collect();
        Ok(Self { filters })
    }
}

impl From<FilterSet> for Vec<Filter> {
    fn from(value: FilterSet) -> Self {
        value.filters
    }
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn as_slice(&self) -> &[Filter] {
        &self.filters
    }

    pub fn get(&self, key: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.key == key)
    }

    pub fn values(&self, key: &str) -> &[u64] {
        self.get(key).map(|f| f.values.as_slice()).unwrap_or(&[])
    }

    pub fn is_checked(&self, key: &str, id: u64) -> bool {
        self.values(key).contains(&id)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.filters.iter().position(|f| f.key == key)
    }

    /// Checks or unchecks `ids` on facet `key`. Returns whether the set changed.
    ///
    /// Values keep set semantics: ids that are already selected are not
    /// appended a second time. New keys are appended after all existing ones,
    /// and surviving filters never move.
    pub fn set_checked(&mut self, key: &str, ids: &[u64], checked: bool) -> bool {
        if checked {
            self.check(key, ids)
        } else {
            self.uncheck(key, ids)
        }
    }

    fn check(&mut self, key: &str, ids: &[u64]) -> bool {
        if ids.is_empty() {
            return false;
        }
        match self.position(key) {
            Some(index) => {
                let values = &mut self.filters[index].values;
                let mut changed = false;
                for id in ids {
                    if !values.contains(id) {
                        values.push(*id);
                        changed = true;
                    }
                }
                changed
            }
            None => {
                let mut values = Vec::with_capacity(ids.len());
                for id in ids {
                    if !values.contains(id) {
                        values.push(*id);
                    }
                }
                self.filters.push(Filter::with_values(key, values));
                true
            }
        }
    }

    fn uncheck(&mut self, key: &str, ids: &[u64]) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        let filter = &mut self.filters[index];
        let before = filter.values.len();
        filter.values.retain(|v| !ids.contains(v));
        let changed = filter.values.len() != before;
        if filter.constrains_nothing() {
            self.filters.remove(index);
        }
        changed
    }

    /// Adds the range, or replaces an existing range with the same id.
    pub fn set_range(&mut self, key: &str, range: ItemBetween) -> bool {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.filters.push(Filter { key: key.to_string(), values: vec![], item_between: vec![range] });
                return true;
            }
        };
        let ranges = &mut self.filters[index].item_between;
        match ranges.iter_mut().find(|r| r.id == range.id) {
            Some(existing) if *existing == range => false,
            Some(existing) => {
                *existing = range;
                true
            }
            None => {
                ranges.push(range);
                true
            }
        }
    }

    pub fn clear_range(&mut self, key: &str, range_id: u64) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        let filter = &mut self.filters[index];
        let before = filter.item_between.len();
        filter.item_between.retain(|r| r.id != range_id);
        let changed = filter.item_between.len() != before;
        if filter.constrains_nothing() {
            self.filters.remove(index);
        }
        changed
    }

    pub fn remove_key(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.filters.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.filters.is_empty();
        self.filters.clear();
        changed
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(set: &FilterSet) -> Vec<&str> {
        set.iter().map(|f| f.key.as_str()).collect()
    }

    #[test]
    fn check_then_partial_uncheck_keeps_remaining_brand() {
        let mut set = FilterSet::new();
        set.set_checked("Brand", &[12, 34], true);
        set.set_checked("Brand", &[12], false);
        assert_eq!(set.as_slice(), &[Filter::with_values("Brand", vec![34])]);
    }

    #[test]
    fn check_then_uncheck_same_ids_removes_key() {
        let mut set = FilterSet::new();
        set.set_checked("Producer", &[5, 6], true);
        assert!(set.set_checked("Producer", &[5, 6], false));
        assert!(set.get("Producer").is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn repeated_check_is_idempotent() {
        let mut once = FilterSet::new();
        once.set_checked("Brand", &[1, 2], true);

        let mut twice = once.clone();
        assert!(!twice.set_checked("Brand", &[1, 2], true));
        assert_eq!(once, twice);
        assert_eq!(twice.values("Brand"), &[1, 2]);
    }

    #[test]
    fn merge_appends_only_new_ids() {
        let mut set = FilterSet::new();
        set.set_checked("Brand", &[1, 1, 2], true);
        set.set_checked("Brand", &[2, 3], true);
        assert_eq!(set.values("Brand"), &[1, 2, 3]);
    }

    #[test]
    fn removing_middle_filter_keeps_order_and_readd_appends() {
        let mut set = FilterSet::new();
        set.set_checked("A", &[1], true);
        set.set_checked("B", &[2, 3], true);
        set.set_checked("C", &[4], true);

        set.set_checked("B", &[2, 3], false);
        assert_eq!(keys(&set), vec!["A", "C"]);

        set.set_checked("B", &[2, 3], true);
        assert_eq!(keys(&set), vec!["A", "C", "B"]);
    }

    #[test]
    fn partial_uncheck_keeps_position() {
        let mut set = FilterSet::new();
        set.set_checked("A", &[1], true);
        set.set_checked("B", &[2, 3], true);
        set.set_checked("C", &[4], true);
        set.set_checked("B", &[2], false);
        assert_eq!(keys(&set), vec!["A", "B", "C"]);
        assert_eq!(set.values("B"), &[3]);
    }

    #[test]
    fn uncheck_unknown_key_is_noop() {
        let mut set = FilterSet::new();
        set.set_checked("A", &[1], true);
        let before = set.clone();
        assert!(!set.set_checked("Missing", &[1], false));
        assert_eq!(set, before);
    }

    #[test]
    fn checking_no_ids_creates_nothing() {
        let mut set = FilterSet::new();
        assert!(!set.set_checked("Brand", &[], true));
        assert!(set.is_empty());
    }

    #[test]
    fn range_keeps_filter_alive_without_values() {
        let mut set = FilterSet::new();
        set.set_checked("Voedingswaarde", &[7], true);
        set.set_range("Voedingswaarde", ItemBetween { id: 1, minimal: 0.0, maximum: 10.0 });
        set.set_checked("Voedingswaarde", &[7], false);
        assert_eq!(set.get("Voedingswaarde").unwrap().item_between.len(), 1);

        assert!(set.clear_range("Voedingswaarde", 1));
        assert!(set.is_empty());
    }

    #[test]
    fn set_range_replaces_same_id() {
        let mut set = FilterSet::new();
        set.set_range("Voedingswaarde", ItemBetween { id: 1, minimal: 0.0, maximum: 10.0 });
        assert!(!set.set_range("Voedingswaarde", ItemBetween { id: 1, minimal: 0.0, maximum: 10.0 }));
        assert!(set.set_range("Voedingswaarde", ItemBetween { id: 1, minimal: 2.0, maximum: 4.0 }));
        let ranges = &set.get("Voedingswaarde").unwrap().item_between;
        assert_eq!(ranges, &vec![ItemBetween { id: 1, minimal: 2.0, maximum: 4.0 }]);
    }

    #[test]
    fn wire_format_omits_empty_parts() {
        let mut set = FilterSet::new();
        set.set_checked("Brand", &[12], true);
        set.set_range("Voedingswaarde", ItemBetween { id: 2, minimal: 1.0, maximum: 3.5 });
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"key": "Brand", "values": [12]},
                {"key": "Voedingswaarde", "itemBetween": [{"id": 2, "minimal": 1.0, "maximum": 3.5}]}
            ])
        );
    }

    #[test]
    fn duplicate_keys_are_rejected_when_parsing() {
        let parsed = serde_json::from_str::<FilterSet>(
            r#"[{"key":"Brand","values":[1]},{"key":"Brand","values":[2]}]"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn repeated_ids_collapse_when_parsing() {
        let parsed: FilterSet = serde_json::from_str(
            r#"[{"key":"Brand","values":[4,1,4,2,1]},
                {"key":"Voedingswaarde","itemBetween":[
                    {"id":3,"minimal":0.0,"maximum":5.0},
                    {"id":3,"minimal":1.0,"maximum":2.0}]}]"#,
        )
        .unwrap();
        assert_eq!(parsed.values("Brand"), &[4, 1, 2]);
        let ranges = &parsed.get("Voedingswaarde").unwrap().item_between;
        assert_eq!(ranges, &vec![ItemBetween { id: 3, minimal: 0.0, maximum: 5.0 }]);

        let mut parsed = parsed;
        assert!(!parsed.set_checked("Brand", &[1], true));
        assert!(parsed.set_checked("Brand", &[1], false));
        assert_eq!(parsed.values("Brand"), &[4, 2]);
    }

    #[test]
    fn empty_filters_are_dropped_when_parsing() {
        let parsed: FilterSet = serde_json::from_str(r#"[{"key":"Brand"},{"key":"Producer","values":[4]}]"#).unwrap();
        assert_eq!(keys(&parsed), vec!["Producer"]);
    }
}
