use crate::RegionFilter;
use crate::{error, interop};
use wasm_bindgen::prelude::*;
use web_sys::console;
use wilayah::{CatalogError, FilterEvent, Selection, ValueSource, ViewConfig};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl RegionFilter {
    /// Builds the filter from `{ provinces, regencies, districts }` and an
    /// optional label config. Throws an error envelope when the catalog is
    /// unusable; there is nothing to render without it.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue, config: JsValue) -> Result<RegionFilter, JsValue> {
        let config = if interop::is_absent(&config) {
            ViewConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<ViewConfig>(config)
                .map_err(|e| error::invalid_config(e.to_string()))?
        };
        let loaded = serde_wasm_bindgen::from_value::<serde_json::Value>(catalog)
            .map_err(|e| CatalogError::Malformed(e.to_string()))
            .and_then(|value| wilayah::RegionFilter::load(&ValueSource(value), config));
        match loaded {
            Ok(inner) => Ok(RegionFilter::rs_new(inner)),
            Err(e) => {
                console::error_1(&JsValue::from_str(&format!("region catalog: {}", e)));
                Err(error::data_unavailable(&e))
            }
        }
    }

    pub fn province_count(&self) -> u32 {
        self.inner.catalog().provinces().len() as u32
    }
    pub fn regency_count(&self) -> u32 {
        self.inner.catalog().regencies().len() as u32
    }
    pub fn district_count(&self) -> u32 {
        self.inner.catalog().districts().len() as u32
    }

    // Derived state
    pub fn view(&self, query: &str) -> JsValue {
        interop::to_js(&self.inner.view(&Selection::from_query(query))).unwrap_or(JsValue::NULL)
    }
    pub fn view_res(&self, query: &str) -> JsValue {
        match interop::to_js(&self.inner.view(&Selection::from_query(query))) {
            Ok(v) => error::ok(v),
            Err(e) => error::serialize(e.to_string()),
        }
    }
    pub fn page(&self, query: &str) -> JsValue {
        interop::to_js(&self.inner.page(&Selection::from_query(query))).unwrap_or(JsValue::NULL)
    }
    pub fn page_res(&self, query: &str) -> JsValue {
        match interop::to_js(&self.inner.page(&Selection::from_query(query))) {
            Ok(v) => error::ok(v),
            Err(e) => error::serialize(e.to_string()),
        }
    }

    // Selection changes; each returns the next query string without '?'
    pub fn set_province(&self, query: &str, value: &str) -> String {
        Selection::from_query(query).set_province(value).to_query()
    }
    pub fn set_regency(&self, query: &str, value: &str) -> String {
        Selection::from_query(query).set_regency(value).to_query()
    }
    pub fn set_district(&self, query: &str, value: &str) -> String {
        Selection::from_query(query).set_district(value).to_query()
    }
    pub fn reset(&self) -> String {
        Selection::reset().to_query()
    }
    /// Same as the setters but ignores changes to a disabled selector.
    pub fn apply_res(&self, query: &str, kind: &str, value: &str) -> JsValue {
        match FilterEvent::parse(kind, value) {
            Some(ev) => error::ok(JsValue::from_str(&self.inner.apply_query(query, ev))),
            None => error::invalid_event(kind),
        }
    }
}
