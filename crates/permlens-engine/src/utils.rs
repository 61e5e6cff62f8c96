use core_permissions::{classify, decode, is_enabled, palette};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize a report into a plain JS value
///
/// Maps become plain objects rather than `Map`, which is what the charting
/// layer indexes into.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Group name of a permission, `"Other"` for anything unknown
#[wasm_bindgen(js_name = classifyPermission)]
pub fn classify_permission(name: Option<String>) -> String {
    classify(name.as_deref()).as_str().to_string()
}

/// Whether a raw value means enabled
#[wasm_bindgen(js_name = isPermissionEnabled)]
pub fn is_permission_enabled(value: Option<String>) -> bool {
    is_enabled(value.as_deref())
}

/// Decoded `[{key, value}]` pairs of a property-bag string
#[wasm_bindgen(js_name = decodePropertyBag)]
pub fn decode_property_bag(raw: &str) -> Result<JsValue, JsValue> {
    to_js(&decode(raw))
}

/// `[{group, color, description}]` legend entries in display order
#[wasm_bindgen(js_name = groupPalette)]
pub fn group_palette() -> Result<JsValue, JsValue> {
    to_js(palette())
}
