use crate::error::CatalogError;
use crate::limits;
use crate::model::{CatalogData, District, Province, Regency, RegionId};
use crate::CatalogSource;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Catalog given as JSON text, e.g. the body of the data endpoint response.
pub struct JsonSource<'a>(pub &'a str);

/// Catalog already parsed into a JSON value (the wasm layer converts the JS
/// object into one of these).
pub struct ValueSource(pub Value);

impl CatalogSource for JsonSource<'_> {
    fn load(&self) -> Result<CatalogData, CatalogError> {
        if self.0.trim().is_empty() {
            return Err(CatalogError::Unavailable("empty response body".into()));
        }
        let v: Value = serde_json::from_str(self.0)?;
        from_json_value_strict(v)
    }
}

impl CatalogSource for ValueSource {
    fn load(&self) -> Result<CatalogData, CatalogError> {
        from_json_value_strict(self.0.clone())
    }
}

// Region endpoints disagree on whether ids are numbers or numeric strings
// ("11", "1101"); accept both.
fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<RegionId, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(RegionId),
        Text(String),
    }
    match RawId::deserialize(d)? {
        RawId::Num(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid region id '{}'", s))),
    }
}

pub fn from_json_value_strict(v: Value) -> Result<CatalogData, CatalogError> {
    #[derive(Deserialize)]
    struct ProvinceDe {
        #[serde(deserialize_with = "de_id")]
        id: RegionId,
        name: String,
    }
    #[derive(Deserialize)]
    struct RegencyDe {
        #[serde(deserialize_with = "de_id")]
        id: RegionId,
        name: String,
        #[serde(deserialize_with = "de_id")]
        province_id: RegionId,
    }
    #[derive(Deserialize)]
    struct DistrictDe {
        #[serde(deserialize_with = "de_id")]
        id: RegionId,
        name: String,
        #[serde(deserialize_with = "de_id")]
        regency_id: RegionId,
    }
    #[derive(Deserialize)]
    struct CatalogDe {
        provinces: Vec<ProvinceDe>,
        regencies: Vec<RegencyDe>,
        districts: Vec<DistrictDe>,
    }

    if v.is_null() {
        return Err(CatalogError::Unavailable("no catalog payload".into()));
    }
    if !v.is_object() {
        return Err(CatalogError::Malformed("catalog must be an object".into()));
    }
    let de: CatalogDe = serde_json::from_value(v)?;

    check_cap("provinces", limits::MAX_PROVINCES, de.provinces.len())?;
    check_cap("regencies", limits::MAX_REGENCIES, de.regencies.len())?;
    check_cap("districts", limits::MAX_DISTRICTS, de.districts.len())?;

    let names = de
        .provinces
        .iter()
        .map(|p| &p.name)
        .chain(de.regencies.iter().map(|r| &r.name))
        .chain(de.districts.iter().map(|d| &d.name));
    for name in names {
        if !limits::name_in_bounds(name) {
            return Err(CatalogError::Malformed(format!(
                "region name longer than {} bytes",
                limits::MAX_NAME_LEN
            )));
        }
    }

    Ok(CatalogData {
        provinces: de
            .provinces
            .into_iter()
            .map(|p| Province { id: p.id, name: p.name })
            .collect(),
        regencies: de
            .regencies
            .into_iter()
            .map(|r| Regency { id: r.id, name: r.name, province_id: r.province_id })
            .collect(),
        districts: de
            .districts
            .into_iter()
            .map(|d| District { id: d.id, name: d.name, regency_id: d.regency_id })
            .collect(),
    })
}

fn check_cap(what: &'static str, max: usize, got: usize) -> Result<(), CatalogError> {
    if got > max {
        return Err(CatalogError::LimitExceeded { what, max, got });
    }
    Ok(())
}
