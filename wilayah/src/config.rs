use crate::model::Level;
use serde::{Deserialize, Serialize};

/// Labels the presentation layer shows. Every field has a default, so a
/// partial (or empty) JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub country_label: String,
    pub province_caption: String,
    pub regency_caption: String,
    pub district_caption: String,
    pub province_placeholder: String,
    pub regency_placeholder: String,
    pub district_placeholder: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            country_label: "Indonesia".into(),
            province_caption: "PROVINSI".into(),
            regency_caption: "KOTA / KABUPATEN".into(),
            district_caption: "KECAMATAN".into(),
            province_placeholder: "Pilih Provinsi".into(),
            regency_placeholder: "Pilih Kota/Kabupaten".into(),
            district_placeholder: "Pilih Kecamatan".into(),
        }
    }
}

impl ViewConfig {
    pub fn caption(&self, level: Level) -> &str {
        match level {
            Level::Country => &self.country_label,
            Level::Province => &self.province_caption,
            Level::Regency => &self.regency_caption,
            Level::District => &self.district_caption,
        }
    }

    pub fn placeholder(&self, level: Level) -> &str {
        match level {
            Level::Country => "",
            Level::Province => &self.province_placeholder,
            Level::Regency => &self.regency_placeholder,
            Level::District => &self.district_placeholder,
        }
    }
}
