use crate::filter::Filterable;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;

/// One dispensing event
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UsageLogEntry {
    pub id: u32,
    pub patient_id: String,
    pub medicine: String,
    pub quantity: u32,
    /// Local time of administration
    pub timestamp: NaiveDateTime,
    pub department: String,
    pub cost: Decimal,
    pub prescribed_by: String,
    pub administered_by: String,
}

impl Filterable for UsageLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.patient_id.as_str(),
            self.medicine.as_str(),
            self.prescribed_by.as_str(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "department" => Some(Cow::Borrowed(self.department.as_str())),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.timestamp)
    }
}
