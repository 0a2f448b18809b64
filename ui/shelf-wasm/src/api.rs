//! Remote client wiring.
//!
//! Builds the `HttpBookStore` from the page: the session token comes from the
//! location fragment, the base URL from an optional meta tag.

use shelf_client::{ClientConfig, HttpBookStore};
use shelf_session::Session;

use crate::dom;

pub const API_META: &str = "bookshelf-api";

/// Determine the API base URL.
///
/// Priority: `<meta name="bookshelf-api">` → deployed gateway.
pub fn base_url() -> Option<String> {
    dom::meta_content(API_META)
}

/// Read the session from `location.hash`. Absent or unreadable → anonymous.
pub fn session() -> Session {
    let hash = dom::window()
        .ok()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Session::from_fragment(&hash)
}

pub fn book_store() -> HttpBookStore {
    let session = session();
    if !session.is_authenticated() {
        gloo_console::warn!("no id_token in URL fragment; requests will be rejected");
    }
    HttpBookStore::new(ClientConfig::new(base_url()), session)
}
