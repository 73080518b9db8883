use crate::filter::Filterable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{EnumIter, IntoEnumIterator};

/// Availability of a medicine in the pharmacy catalogue.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    #[strum(serialize = "Low Stock")]
    LowStock,
    Critical,
    Discontinued,
}

impl Availability {
    pub fn all() -> Vec<Availability> {
        Availability::iter().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Medicine {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub manufacturer: String,
    pub pack_size: String,
    pub availability: Availability,
    pub composition: String,
    pub stock: u32,
    /// Opaque provenance token shown as the ledger transaction hash
    pub provenance_hash: String,
}

impl Filterable for Medicine {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.manufacturer.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "availability" | "status" => Some(Cow::Owned(self.availability.to_string())),
            _ => None,
        }
    }
}
