//! District model.

use serde::{Deserialize, Serialize};

/// A geographic unit within a region; the unit of SMS broadcast targeting.
///
/// The seed phone numbers are plain strings taken from the catalog source.
/// They carry no validation or dedup guarantee; the validated-admission rule
/// applies only to numbers added through the submission workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// District name, unique within its region
    pub name: String,

    /// Seed phone numbers registered for SMS broadcasts, in catalog order
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

impl District {
    pub fn new(name: impl Into<String>, phone_numbers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            phone_numbers,
        }
    }

    /// Number of seed contacts registered for this district.
    pub fn contact_count(&self) -> usize {
        self.phone_numbers.len()
    }
}
