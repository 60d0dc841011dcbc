//! Small DOM helpers

use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// Current value of the `<input>` with `id`, or an empty string
pub fn input_value(id: &str) -> String {
    by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        debug!(?err, class, "Failed to add class");
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().remove_1(class) {
        debug!(?err, class, "Failed to remove class");
    }
}

/// Show or hide the element with `id` using Bootstrap's `d-none`
pub fn set_visible(id: &str, visible: bool) {
    if let Some(element) = by_id(id) {
        if visible {
            remove_class(&element, "d-none");
        } else {
            add_class(&element, "d-none");
        }
    }
}

pub fn set_text(id: &str, text: &str) {
    if let Some(element) = by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Every element matching `selector`
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
