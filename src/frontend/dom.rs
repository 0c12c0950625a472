use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::SiteError;

pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";

pub fn js_error(operation: &'static str) -> impl Fn(JsValue) -> SiteError {
    move |value| SiteError::js(operation, describe_js_value(&value))
}

fn describe_js_value(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    format!("{value:?}")
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, SiteError> {
    document
        .query_selector(selector)
        .map_err(js_error("querySelector"))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(js_error("querySelectorAll"))?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, SiteError> {
    Ok(query(document, selector)?.and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn children(element: &Element) -> Vec<Element> {
    let collection = element.children();
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

pub fn add_class(element: &Element, class: &str) -> Result<(), SiteError> {
    element
        .class_list()
        .add_1(class)
        .map_err(js_error("classList.add"))
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), SiteError> {
    element
        .class_list()
        .remove_1(class)
        .map_err(js_error("classList.remove"))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), SiteError> {
    element
        .style()
        .set_property(property, value)
        .map_err(js_error("style.setProperty"))
}

pub fn clear_style(element: &HtmlElement, property: &str) -> Result<(), SiteError> {
    element
        .style()
        .remove_property(property)
        .map(|_| ())
        .map_err(js_error("style.removeProperty"))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}
