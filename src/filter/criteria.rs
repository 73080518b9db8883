use super::{slug, DateRange, Filterable};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A single active predicate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Predicate {
    /// Lowercased substring searched across the record's search fields
    Text { term: String },
    /// Slug equality on a named field
    Field { field: String, value: String },
    Date { range: DateRange },
}

impl Predicate {
    fn matches<R: Filterable + ?Sized>(&self, record: &R, now: NaiveDateTime) -> bool {
        match self {
            Predicate::Text { term } => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str())),
            Predicate::Field { field, value } => record
                .field_value(field)
                .map(|actual| slug(&actual) == *value)
                .unwrap_or(false),
            Predicate::Date { range } => range.matches(record.timestamp(), now),
        }
    }
}

/// Conjunction of predicates.
///
/// Builders skip blank values and the `all` sentinel, so an empty criteria
/// value matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    predicates: Vec<Predicate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a free-text term. Blank terms are ignored.
    pub fn search(mut self, term: Option<&str>) -> Self {
        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            self.predicates.push(Predicate::Text {
                term: term.to_lowercase(),
            });
        }
        self
    }

    /// Adds an exact field filter. Blank values and `all` are ignored.
    pub fn field(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(slug).filter(|v| !v.is_empty() && v != "all") {
            self.predicates.push(Predicate::Field {
                field: field.to_string(),
                value,
            });
        }
        self
    }

    /// Adds a date predicate unless the range is [`DateRange::All`].
    pub fn date(mut self, range: DateRange) -> Self {
        if range.is_active() {
            self.predicates.push(Predicate::Date { range });
        }
        self
    }

    /// Conjunction of both criteria
    pub fn and(mut self, other: FilterCriteria) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R, now: NaiveDateTime) -> bool {
        self.predicates.iter().all(|p| p.matches(record, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct Item {
        name: &'static str,
        kind: &'static str,
    }

    impl Filterable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
            match field {
                "kind" => Some(Cow::Borrowed(self.kind)),
                _ => None,
            }
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-15T12:00", "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn blank_and_sentinel_values_add_no_predicate() {
        let c = FilterCriteria::new()
            .search(Some("   "))
            .search(None)
            .field("kind", Some("all"))
            .field("kind", Some(""))
            .date(DateRange::All);
        assert!(c.is_empty());
    }

    #[test]
    fn field_filter_compares_slugs() {
        let item = Item {
            name: "Amoxicillin 250mg",
            kind: "Low Stock",
        };
        for query in ["low-stock", "Low Stock", "LOW  STOCK", "low_stock"] {
            let c = FilterCriteria::new().field("kind", Some(query));
            assert!(c.matches(&item, now()), "query {query:?} should match");
        }
        let c = FilterCriteria::new().field("kind", Some("critical"));
        assert!(!c.matches(&item, now()));
    }

    #[test]
    fn unknown_field_never_matches() {
        let item = Item {
            name: "Insulin Pen",
            kind: "Critical",
        };
        let c = FilterCriteria::new().field("colour", Some("red"));
        assert!(!c.matches(&item, now()));
    }

    #[test]
    fn text_search_is_case_insensitive_substring() {
        let item = Item {
            name: "Insulin Pen",
            kind: "Critical",
        };
        assert!(FilterCriteria::new()
            .search(Some("INSUL"))
            .matches(&item, now()));
        assert!(!FilterCriteria::new()
            .search(Some("metformin"))
            .matches(&item, now()));
    }

    #[test]
    fn and_concatenates_predicates() {
        let a = FilterCriteria::new().search(Some("pen"));
        let b = FilterCriteria::new().field("kind", Some("critical"));
        let both = a.clone().and(b.clone());
        assert_eq!(both.predicates().len(), 2);
        assert_eq!(&both.predicates()[..1], a.predicates());
        assert_eq!(&both.predicates()[1..], b.predicates());
    }
}
