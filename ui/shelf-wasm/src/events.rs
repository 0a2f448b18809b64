//! Event binding.
//!
//! Wires the static page controls, plus one delegated listener on the table
//! body for every row's edit and remove buttons.

use crate::dom::{self, Elements};
use crate::ops;
use crate::state;
use shelf_core::table::RowAction;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Helper: attach async click handler to an element.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all static UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Add form ──
    on_click_async!(els.add_book_btn, els, ops::on_add);
    on_click_async!(els.remove_all_btn, els, ops::on_remove_all);

    // ── Edit dialog ──
    on_click_async!(els.edit_save_btn, els, ops::on_edit_save);
    {
        let els2 = els.clone();
        on_click!(els.edit_cancel_btn, move |_: web_sys::MouseEvent| {
            ops::on_edit_cancel(&els2);
        });
    }

    // ── Table rows ──
    {
        let els2 = els.clone();
        on_click!(els.table_body, move |ev: web_sys::MouseEvent| {
            on_row_click(&els2, &ev);
        });
    }

    // ── Navigation ──
    {
        let hamburger = els.hamburger.clone();
        let nav_menu = els.nav_menu.clone();
        on_click!(els.hamburger, move |_: web_sys::MouseEvent| {
            dom::toggle_class(&hamburger, "active");
            dom::toggle_class(&nav_menu, "active");
        });
    }

    Ok(())
}

/// Resolve a click inside the table body to a row button and dispatch it.
fn on_row_click(els: &Elements, ev: &web_sys::MouseEvent) {
    let Some(btn) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button[data-action]").ok().flatten())
    else {
        return;
    };
    let action = btn.get_attribute("data-action").and_then(|a| RowAction::parse(&a));
    let book = btn
        .get_attribute("data-id")
        .and_then(|key| state::rendered_book(&key));
    let (Some(action), Some(book)) = (action, book) else {
        return;
    };

    match action {
        RowAction::Edit => ops::on_edit_open(els, book),
        RowAction::Remove => {
            let els = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                ops::on_remove(&els, &book).await;
            });
        }
    }
}
