//! Region model.

use crate::models::District;
use serde::{Deserialize, Serialize};

/// A top-level geographic grouping containing districts.
///
/// Regions are fixed at catalog construction time and never created or
/// destroyed at runtime. District order within a region is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region name, unique across the catalog
    pub name: String,

    /// Districts belonging to this region, in catalog order
    #[serde(default)]
    pub districts: Vec<District>,
}

impl Region {
    pub fn new(name: impl Into<String>, districts: Vec<District>) -> Self {
        Self {
            name: name.into(),
            districts,
        }
    }

    /// Find a district by exact, case-sensitive name.
    pub fn district(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.name == name)
    }
}
