//! The directory catalog of regions, districts, and seed phone numbers.
//!
//! The catalog is immutable once constructed. It can be built from a JSON
//! file (the injected-configuration path) or from the built-in Uganda seed
//! data. Lookups are case-sensitive exact string matches on the identifiers
//! as provided by the caller.

use crate::error::{CatalogError, CatalogResult};
use crate::models::{District, Region};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// On-disk catalog document.
///
/// Regions are an ordered array (not a JSON object keyed by name) so that
/// region order survives serialization.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    regions: Vec<Region>,
}

/// Immutable, in-memory catalog of regions → districts → seed phone numbers.
///
/// Pure data with lookup operations; no side effects, no failure modes
/// beyond not-found for unknown keys.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Vec<Region>,
}

impl Catalog {
    /// Build a catalog, enforcing the uniqueness invariants.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateRegion` if a region name appears
    /// twice, or `CatalogError::DuplicateDistrict` if a district name
    /// appears twice within one region.
    pub fn new(regions: Vec<Region>) -> CatalogResult<Self> {
        let mut region_names = HashSet::new();
        for region in &regions {
            if !region_names.insert(region.name.as_str()) {
                return Err(CatalogError::DuplicateRegion(region.name.clone()));
            }

            let mut district_names = HashSet::new();
            for district in &region.districts {
                if !district_names.insert(district.name.as_str()) {
                    return Err(CatalogError::DuplicateDistrict {
                        region: region.name.clone(),
                        district: district.name.clone(),
                    });
                }
            }
        }

        Ok(Self { regions })
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&contents)?;
        Self::new(file.regions)
    }

    /// The built-in catalog of Uganda's regions and seed contacts.
    pub fn uganda_default() -> Self {
        let regions = vec![
            Region::new(
                "Western",
                vec![
                    District::new(
                        "Mbarara",
                        vec!["+256701123456".to_string(), "+256772234567".to_string()],
                    ),
                    District::new(
                        "Kabale",
                        vec!["+256701654321".to_string(), "+256772765432".to_string()],
                    ),
                ],
            ),
            Region::new(
                "Eastern",
                vec![
                    District::new(
                        "Jinja",
                        vec!["+256703123456".to_string(), "+256775234567".to_string()],
                    ),
                    District::new(
                        "Mbale",
                        vec!["+256703654321".to_string(), "+256775765432".to_string()],
                    ),
                ],
            ),
            Region::new(
                "Northern",
                vec![
                    District::new(
                        "Gulu",
                        vec!["+256702123456".to_string(), "+256774234567".to_string()],
                    ),
                    District::new(
                        "Lira",
                        vec!["+256702654321".to_string(), "+256774765432".to_string()],
                    ),
                ],
            ),
            Region::new(
                "Central",
                vec![
                    District::new(
                        "Kampala",
                        vec!["+256704123456".to_string(), "+256776234567".to_string()],
                    ),
                    District::new(
                        "Wakiso",
                        vec!["+256704654321".to_string(), "+256776765432".to_string()],
                    ),
                ],
            ),
        ];

        // The built-in data is known to satisfy the uniqueness invariants.
        Self { regions }
    }

    /// All regions in catalog order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a region by exact name.
    pub fn region(&self, name: &str) -> CatalogResult<&Region> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CatalogError::RegionNotFound(name.to_string()))
    }

    /// Look up a district by exact region and district name.
    pub fn district(&self, region_name: &str, district_name: &str) -> CatalogResult<&District> {
        let region = self.region(region_name)?;
        region
            .district(district_name)
            .ok_or_else(|| CatalogError::DistrictNotFound {
                region: region_name.to_string(),
                district: district_name.to_string(),
            })
    }
}
