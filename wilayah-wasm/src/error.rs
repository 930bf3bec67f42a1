use crate::interop::{new_obj, set_kv};
use wasm_bindgen::prelude::*;
use wilayah::CatalogError;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn data_unavailable(e: &CatalogError) -> JsValue {
    let d = new_obj();
    set_kv(&d, "reason", &JsValue::from_str(e.reason()));
    err(e.code(), e.to_string(), Some(d.into()))
}

#[inline]
pub fn invalid_event(kind: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "kind", &JsValue::from_str(kind));
    err("invalid_event", "event kind must be province, regency, district or reset", Some(d.into()))
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}

#[inline]
pub fn serialize(message: impl Into<String>) -> JsValue {
    err("serialize", message, None)
}
