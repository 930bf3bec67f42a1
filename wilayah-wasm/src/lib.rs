use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct RegionFilter { pub(crate) inner: wilayah::RegionFilter }

impl RegionFilter {
    pub fn rs_new(inner: wilayah::RegionFilter) -> RegionFilter { RegionFilter { inner } }
}
