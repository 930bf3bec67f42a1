use serde::{Deserialize, Serialize};

pub type RegionId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub id: RegionId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub id: RegionId,
    pub name: String,
    pub province_id: RegionId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: RegionId,
    pub name: String,
    pub regency_id: RegionId,
}

/// Raw collections as returned by a catalog source, before indexing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    pub provinces: Vec<Province>,
    pub regencies: Vec<Regency>,
    pub districts: Vec<District>,
}

/// Depth of the drill-down. `Country` is the implicit root above provinces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Country,
    Province,
    Regency,
    District,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Country => "country",
            Level::Province => "province",
            Level::Regency => "regency",
            Level::District => "district",
        }
    }

    /// Query-string key holding the selected id for this level.
    pub fn query_key(self) -> Option<&'static str> {
        match self {
            Level::Country => None,
            Level::Province => Some("province"),
            Level::Regency => Some("regency"),
            Level::District => Some("district"),
        }
    }
}
