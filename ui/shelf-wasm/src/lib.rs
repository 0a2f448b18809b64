//! Bookshelf browser front end.
//!
//! Pure Rust + WASM: renders the library table and drives the add/edit/remove
//! flows in `shelf-core` against the Books API.

pub mod api;
pub mod dom;
pub mod events;
pub mod ops;
pub mod state;
pub mod view;

use shelf_core::Library;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    state::set_library(Library::new(api::book_store()));

    events::bind_events(&els)?;

    ops::load_library(&els).await;

    Ok(())
}
