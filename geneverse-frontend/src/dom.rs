use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::Js("no window".into()))
}

pub fn document() -> Result<Document, UiError> {
    window()?
        .document()
        .ok_or_else(|| UiError::Js("no document".into()))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn require<T: JsCast>(id: &str) -> Result<T, UiError> {
    element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| UiError::Js(format!("#{id} has an unexpected element type")))
}

pub fn has_element(id: &str) -> bool {
    element_by_id(id).is_some()
}

/// String-valued property of the global object, if the page set one.
pub fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

pub fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        if el.remove_child(&child).is_err() {
            break;
        }
    }
}
