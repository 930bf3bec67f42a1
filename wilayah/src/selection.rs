use crate::model::{Level, RegionId};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// The user's drill-down position as written in the page query string.
///
/// Values are kept verbatim (a key may be present with an empty value) so a
/// selection read from a query string serializes back to the same keys. Ids
/// are only parsed when they are compared against the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
    /// Query parameters that are not part of the hierarchy, in query order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl Selection {
    pub fn empty() -> Selection { Selection::default() }

    pub fn from_query(query: &str) -> Selection {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut sel = Selection::default();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            // First occurrence wins, like URLSearchParams.get
            let slot = match k.as_ref() {
                "province" => &mut sel.province,
                "regency" => &mut sel.regency,
                "district" => &mut sel.district,
                _ => {
                    sel.extra.push((k.into_owned(), v.into_owned()));
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(v.into_owned());
            }
        }
        sel
    }

    /// Query string without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in [
            ("province", &self.province),
            ("regency", &self.regency),
            ("district", &self.district),
        ] {
            if let Some(v) = v {
                ser.append_pair(k, v);
            }
        }
        for (k, v) in &self.extra {
            ser.append_pair(k, v);
        }
        ser.finish()
    }

    pub fn raw(&self, level: Level) -> Option<&str> {
        match level {
            Level::Country => None,
            Level::Province => self.province.as_deref(),
            Level::Regency => self.regency.as_deref(),
            Level::District => self.district.as_deref(),
        }
    }

    /// A level counts as selected when its key carries a non-empty value.
    pub fn is_set(&self, level: Level) -> bool {
        self.raw(level).is_some_and(|v| !v.is_empty())
    }

    /// Numeric id for `level`; `None` when unset or not a decimal integer.
    pub fn id(&self, level: Level) -> Option<RegionId> {
        self.raw(level).and_then(parse_id)
    }

    pub fn province_id(&self) -> Option<RegionId> { self.id(Level::Province) }
    pub fn regency_id(&self) -> Option<RegionId> { self.id(Level::Regency) }
    pub fn district_id(&self) -> Option<RegionId> { self.id(Level::District) }

    /// Selecting a province drops everything below it. An empty value
    /// clears the whole selection.
    pub fn set_province(&self, value: &str) -> Selection {
        if value.is_empty() {
            return Selection::reset();
        }
        Selection { province: Some(value.to_string()), ..Selection::default() }
    }

    /// Keeps the province (written as "" when unset) and drops the district.
    /// Like every change, the query is rewritten from scratch: parameters
    /// outside the hierarchy do not survive.
    pub fn set_regency(&self, value: &str) -> Selection {
        Selection {
            province: Some(self.province.clone().unwrap_or_default()),
            regency: Some(value.to_string()),
            district: None,
            extra: Vec::new(),
        }
    }

    /// Keeps both ancestors, writing "" for any that is unset.
    pub fn set_district(&self, value: &str) -> Selection {
        Selection {
            province: Some(self.province.clone().unwrap_or_default()),
            regency: Some(self.regency.clone().unwrap_or_default()),
            district: Some(value.to_string()),
            extra: Vec::new(),
        }
    }

    pub fn reset() -> Selection { Selection::default() }
}

fn parse_id(raw: &str) -> Option<RegionId> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_round_trip_keeps_empty_keys() {
        let s = Selection::from_query("?province=&regency=10");
        assert_eq!(s.province.as_deref(), Some(""));
        assert!(!s.is_set(Level::Province));
        assert_eq!(s.to_query(), "province=&regency=10");
    }

    #[test]
    fn first_duplicate_key_wins() {
        let s = Selection::from_query("province=1&province=2");
        assert_eq!(s.province_id(), Some(1));
        assert!(s.extra.is_empty());
    }

    #[test]
    fn malformed_ids_parse_to_none() {
        for raw in ["abc", "1.5", "-3", "0x10", "", "99999999999"] {
            let s = Selection::from_query(&format!("province={}", raw));
            assert_eq!(s.province_id(), None, "{raw}");
        }
        assert_eq!(Selection::from_query("province=%2012%20").province_id(), Some(12));
    }

    #[test]
    fn every_change_drops_incidental_params() {
        let s = Selection::from_query("province=1&tab=map&regency=10");
        assert_eq!(s.extra.len(), 1);
        assert_eq!(s.set_regency("11").to_query(), "province=1&regency=11");
        assert_eq!(s.set_district("100").to_query(), "province=1&regency=10&district=100");
        assert_eq!(s.set_province("2").to_query(), "province=2");

        let s = Selection::from_query("province=1&tab=map");
        assert_eq!(s.set_regency("10").to_query(), "province=1&regency=10");
        assert_eq!(s.set_district("100").to_query(), "province=1&regency=&district=100");
    }
}
