//! DOM element bindings.
//!
//! All fields are resolved once at startup. A missing element fails `bind()`
//! so the page never runs half-wired.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

// ── Helpers ──

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok()?
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn clear(el: &Element) {
    el.set_text_content(None);
}

/// The input's value exactly as typed.
pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

/// `content` of `<meta name="...">`, if present and non-empty.
pub fn meta_content(name: &str) -> Option<String> {
    let meta: web_sys::HtmlMetaElement = query(&format!("meta[name=\"{name}\"]"))?
        .dyn_into()
        .ok()?;
    let content = meta.content().trim().to_string();
    (!content.is_empty()).then_some(content)
}

// ── Elements struct ──

/// Every DOM element the library page touches.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Add form
    pub title_input: HtmlInputElement,
    pub author_input: HtmlInputElement,
    pub title_error: Element,
    pub author_error: Element,
    pub add_book_btn: HtmlElement,
    pub remove_all_btn: HtmlElement,

    // Table
    pub table_body: Element,

    // Navigation
    pub hamburger: Element,
    pub nav_menu: Element,

    // Edit dialog
    pub edit_dialog: Element,
    pub edit_title: HtmlInputElement,
    pub edit_author: HtmlInputElement,
    pub edit_error: Element,
    pub edit_save_btn: HtmlElement,
    pub edit_cancel_btn: HtmlElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id_typed::<Element>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

macro_rules! get_query {
    ($selector:expr) => {
        query($selector).ok_or_else(|| JsValue::from_str(&format!("missing {}", $selector)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            title_input: get_input!("book-title"),
            author_input: get_input!("author-name"),
            title_error: get_query!(".title-input .error-message"),
            author_error: get_query!(".author-input .error-message"),
            add_book_btn: get_html!("add-book"),
            remove_all_btn: get_html!("remove-all"),

            table_body: get_el!("book-body"),

            hamburger: get_query!(".hamburger"),
            nav_menu: get_query!(".navbar"),

            edit_dialog: get_el!("edit-dialog"),
            edit_title: get_input!("edit-title"),
            edit_author: get_input!("edit-author"),
            edit_error: get_query!("#edit-dialog .error-message"),
            edit_save_btn: get_html!("edit-save"),
            edit_cancel_btn: get_html!("edit-cancel"),
        })
    }
}
