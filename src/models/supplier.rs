use crate::aggregate::status::{self, TrustTier};
use crate::filter::Filterable;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    /// 0.0 to 5.0
    pub rating: f64,
    pub location: String,
    /// 0 to 100
    pub trust_score: f64,
    pub last_contract: NaiveDate,
    pub specialties: Vec<String>,
    pub total_contracts: u32,
    pub on_time_delivery: f64,
}

impl Supplier {
    pub fn is_recommended(&self) -> bool {
        status::is_recommended(self.trust_score, self.rating)
    }

    pub fn trust_tier(&self) -> TrustTier {
        status::trust_tier(self.trust_score)
    }
}

impl Filterable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.location.as_str()];
        fields.extend(self.specialties.iter().map(String::as_str));
        fields
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "recommended" => Some(Cow::Borrowed(if self.is_recommended() {
                "recommended"
            } else {
                "other"
            })),
            "trust" => Some(Cow::Owned(self.trust_tier().to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(trust_score: f64, rating: f64) -> Supplier {
        Supplier {
            id: 1,
            name: "PharmaTech Solutions".into(),
            rating,
            location: "Chicago, IL".into(),
            trust_score,
            last_contract: NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
            specialties: vec!["Generic Medicines".into(), "Vaccines".into()],
            total_contracts: 22,
            on_time_delivery: 89.0,
        }
    }

    #[test]
    fn derives_recommendation_and_tier() {
        let s = supplier(87.0, 4.2);
        assert!(!s.is_recommended());
        assert_eq!(s.trust_tier(), TrustTier::Good);
        assert_eq!(s.field_value("recommended").as_deref(), Some("other"));

        let s = supplier(98.0, 4.8);
        assert!(s.is_recommended());
        assert_eq!(s.field_value("trust").as_deref(), Some("Excellent"));
    }

    #[test]
    fn specialties_are_searchable() {
        let s = supplier(87.0, 4.2);
        assert!(s.search_fields().contains(&"Vaccines"));
    }
}
