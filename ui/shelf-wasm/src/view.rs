//! Library table rendering.
//!
//! The table body is discarded and rebuilt on every render. Row buttons carry
//! `data-action` and `data-id`; a single listener on the table body, bound in
//! `events.rs`, resolves them against the books rendered here.

use shelf_api_types::Book;
use shelf_client::FetchFailure;
use shelf_core::table::{EDIT_LABEL, REMOVE_LABEL, RowAction, row_key};
use shelf_core::{FormErrors, LibraryView, TableRow};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTableCellElement};

use crate::dom::{self, Elements};
use crate::state;

pub struct DomView {
    els: Elements,
}

impl DomView {
    pub fn new(els: &Elements) -> Self {
        Self { els: els.clone() }
    }

    fn try_render(&self, rows: &[TableRow]) -> Result<(), JsValue> {
        let body = &self.els.table_body;
        dom::clear(body);

        for row in rows {
            let tr = match row {
                TableRow::Placeholder { text, colspan } => placeholder_row(text, *colspan)?,
                TableRow::Book(book) => book_row(book)?,
            };
            body.append_child(&tr)?;
        }
        Ok(())
    }
}

impl LibraryView for DomView {
    fn render(&mut self, rows: &[TableRow]) {
        let books = rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Book(book) => Some(book.clone()),
                TableRow::Placeholder { .. } => None,
            })
            .collect();
        state::set_rendered(books);

        if let Err(err) = self.try_render(rows) {
            gloo_console::error!("error displaying library:", err);
        }
    }

    fn show_form_errors(&mut self, errors: &FormErrors) {
        dom::set_text(&self.els.title_error, errors.title.unwrap_or_default());
        dom::set_text(&self.els.author_error, errors.author.unwrap_or_default());
    }

    fn reset_form(&mut self) {
        self.els.title_input.set_value("");
        self.els.author_input.set_value("");
        dom::clear(&self.els.title_error);
        dom::clear(&self.els.author_error);
    }

    fn report_failure(&mut self, action: &str, err: &FetchFailure) {
        gloo_console::error!(format!("error {action}: {err}"));
    }
}

// ── Row builders ──

fn book_row(book: &Book) -> Result<Element, JsValue> {
    let tr = dom::create_element("tr")?;
    dom::add_class(&tr, "body-row");

    let name_cell = text_cell(&book.name)?;
    tr.append_child(&name_cell)?;
    let author_cell = text_cell(&book.author)?;
    tr.append_child(&author_cell)?;

    let key = row_key(book);
    let edit_btn = button("edit-book-btn", EDIT_LABEL, RowAction::Edit, &key)?;
    let remove_btn = button("remove-book-btn", REMOVE_LABEL, RowAction::Remove, &key)?;

    let edit_cell = wrap_cell(&edit_btn)?;
    tr.append_child(&edit_cell)?;
    let remove_cell = wrap_cell(&remove_btn)?;
    tr.append_child(&remove_cell)?;
    Ok(tr)
}

fn placeholder_row(text: &str, colspan: u32) -> Result<Element, JsValue> {
    let tr = dom::create_element("tr")?;
    let td: HtmlTableCellElement = dom::create_element("td")?.dyn_into()?;
    td.set_col_span(colspan);
    td.set_text_content(Some(text));
    tr.append_child(&td)?;
    Ok(tr)
}

fn text_cell(text: &str) -> Result<Element, JsValue> {
    let td = dom::create_element("td")?;
    dom::add_class(&td, "body-cell");
    dom::set_text(&td, text);
    Ok(td)
}

fn wrap_cell(child: &Element) -> Result<Element, JsValue> {
    let td = dom::create_element("td")?;
    dom::add_class(&td, "body-cell");
    td.append_child(child)?;
    Ok(td)
}

fn button(class: &str, label: &str, action: RowAction, key: &str) -> Result<Element, JsValue> {
    let btn = dom::create_element("button")?;
    dom::add_class(&btn, class);
    btn.set_attribute("type", "button")?;
    btn.set_attribute("data-action", action.as_str())?;
    btn.set_attribute("data-id", key)?;
    dom::set_text(&btn, label);
    Ok(btn)
}
