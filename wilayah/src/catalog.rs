use crate::error::CatalogError;
use crate::model::{CatalogData, District, Province, Regency, RegionId};
use crate::CatalogSource;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Immutable, indexed region catalog.
///
/// Collections keep the order the source delivered them in. Lookups go
/// through id indexes built once in [`Catalog::new`]; when a source repeats an
/// id the first entry wins, the same entry a front-to-back scan would find.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    provinces: Vec<Province>,
    regencies: Vec<Regency>,
    districts: Vec<District>,
    province_by_id: HashMap<RegionId, usize>,
    regency_by_id: HashMap<RegionId, usize>,
    district_by_id: HashMap<RegionId, usize>,
    regencies_by_province: HashMap<RegionId, Vec<usize>>, // province id -> regency positions
    districts_by_regency: HashMap<RegionId, Vec<usize>>,  // regency id -> district positions
}

impl Catalog {
    pub fn new(data: CatalogData) -> Catalog {
        let CatalogData { provinces, regencies, districts } = data;

        let province_by_id = index_ids("province", provinces.iter().map(|p| p.id));
        let regency_by_id = index_ids("regency", regencies.iter().map(|r| r.id));
        let district_by_id = index_ids("district", districts.iter().map(|d| d.id));

        let regencies_by_province = group_by_parent(regencies.iter().map(|r| r.province_id));
        let districts_by_regency = group_by_parent(districts.iter().map(|d| d.regency_id));

        let dangling_regencies = regencies
            .iter()
            .filter(|r| !province_by_id.contains_key(&r.province_id))
            .count();
        if dangling_regencies > 0 {
            warn!(count = dangling_regencies, "regencies reference unknown provinces");
        }
        let dangling_districts = districts
            .iter()
            .filter(|d| !regency_by_id.contains_key(&d.regency_id))
            .count();
        if dangling_districts > 0 {
            warn!(count = dangling_districts, "districts reference unknown regencies");
        }

        debug!(
            provinces = provinces.len(),
            regencies = regencies.len(),
            districts = districts.len(),
            "catalog indexed"
        );

        Catalog {
            provinces,
            regencies,
            districts,
            province_by_id,
            regency_by_id,
            district_by_id,
            regencies_by_province,
            districts_by_regency,
        }
    }

    /// Reads the full catalog from `source`. A failing source yields no
    /// catalog at all.
    pub fn load(source: &impl CatalogSource) -> Result<Catalog, CatalogError> {
        source.load().map(Catalog::new)
    }

    pub fn provinces(&self) -> &[Province] { &self.provinces }
    pub fn regencies(&self) -> &[Regency] { &self.regencies }
    pub fn districts(&self) -> &[District] { &self.districts }

    pub fn province(&self, id: RegionId) -> Option<&Province> {
        self.province_by_id.get(&id).map(|&i| &self.provinces[i])
    }
    pub fn regency(&self, id: RegionId) -> Option<&Regency> {
        self.regency_by_id.get(&id).map(|&i| &self.regencies[i])
    }
    pub fn district(&self, id: RegionId) -> Option<&District> {
        self.district_by_id.get(&id).map(|&i| &self.districts[i])
    }

    /// Regencies whose `province_id` is `province_id`, in catalog order.
    pub fn regencies_of(&self, province_id: RegionId) -> Vec<Regency> {
        self.regencies_by_province
            .get(&province_id)
            .map(|ix| ix.iter().map(|&i| self.regencies[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Districts whose `regency_id` is `regency_id`, in catalog order.
    pub fn districts_of(&self, regency_id: RegionId) -> Vec<District> {
        self.districts_by_regency
            .get(&regency_id)
            .map(|ix| ix.iter().map(|&i| self.districts[i].clone()).collect())
            .unwrap_or_default()
    }
}

fn index_ids(kind: &str, ids: impl Iterator<Item = RegionId>) -> HashMap<RegionId, usize> {
    let mut map = HashMap::new();
    for (i, id) in ids.enumerate() {
        if map.contains_key(&id) {
            warn!(kind = kind, id = id, "duplicate region id, keeping first");
            continue;
        }
        map.insert(id, i);
    }
    map
}

fn group_by_parent(parents: impl Iterator<Item = RegionId>) -> HashMap<RegionId, Vec<usize>> {
    let mut map: HashMap<RegionId, Vec<usize>> = HashMap::new();
    for (i, parent) in parents.enumerate() {
        map.entry(parent).or_default().push(i);
    }
    map
}
