use crate::catalog::Catalog;
use crate::model::{District, Level, Regency};
use crate::selection::Selection;
use serde::Serialize;

/// Everything derived from a catalog and a selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub filtered_regencies: Vec<Regency>,
    pub filtered_districts: Vec<District>,
    pub province_name: String,
    pub regency_name: String,
    pub district_name: String,
    pub active_level: Level,
}

impl ViewModel {
    pub fn country() -> ViewModel {
        ViewModel {
            filtered_regencies: Vec::new(),
            filtered_districts: Vec::new(),
            province_name: String::new(),
            regency_name: String::new(),
            district_name: String::new(),
            active_level: Level::Country,
        }
    }

    pub fn name(&self, level: Level) -> &str {
        match level {
            Level::Country => "",
            Level::Province => &self.province_name,
            Level::Regency => &self.regency_name,
            Level::District => &self.district_name,
        }
    }
}

/// Option lists follow the hierarchy; names do not. Regency and district
/// names are looked up in the whole catalog, so a district id that belongs
/// to another regency still shows its name and becomes the active level.
///
/// Without a province nothing below it is resolved: the view is the
/// country-level view whatever else the query carries, so even
/// `?province=&regency=10` names nothing. Lookups below a set province stay
/// lax as described above.
pub fn derive_view(catalog: &Catalog, selection: &Selection) -> ViewModel {
    if !selection.is_set(Level::Province) {
        return ViewModel::country();
    }
    let filtered_regencies =
        selection.province_id().map(|id| catalog.regencies_of(id)).unwrap_or_default();
    let filtered_districts = if selection.is_set(Level::Regency) {
        selection.regency_id().map(|id| catalog.districts_of(id)).unwrap_or_default()
    } else {
        Vec::new()
    };

    let province_name = selection
        .province_id()
        .and_then(|id| catalog.province(id))
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let regency_name = selection
        .regency_id()
        .and_then(|id| catalog.regency(id))
        .map(|r| r.name.clone())
        .unwrap_or_default();
    let district_name = selection
        .district_id()
        .and_then(|id| catalog.district(id))
        .map(|d| d.name.clone())
        .unwrap_or_default();

    let active_level = if !district_name.is_empty() {
        Level::District
    } else if !regency_name.is_empty() {
        Level::Regency
    } else if !province_name.is_empty() {
        Level::Province
    } else {
        Level::Country
    };

    ViewModel {
        filtered_regencies,
        filtered_districts,
        province_name,
        regency_name,
        district_name,
        active_level,
    }
}
