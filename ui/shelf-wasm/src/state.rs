//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Never hold a borrow across an `.await`: clone the `Rc` out first.

use shelf_client::HttpBookStore;
use shelf_core::table::find_by_key;
use shelf_core::{BookForm, EditError, EditSession, Library};
use shelf_api_types::Book;
use std::cell::RefCell;
use std::rc::Rc;

pub type BookLibrary = Library<HttpBookStore>;

#[derive(Default)]
pub struct AppState {
    pub library: Option<Rc<BookLibrary>>,
    pub edit: EditSession,
    /// Books currently in the table; row clicks are resolved against these.
    pub rendered: Vec<Book>,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn library() -> Option<Rc<BookLibrary>> {
    with(|s| s.library.clone())
}

pub fn set_library(library: BookLibrary) {
    with_mut(|s| s.library = Some(Rc::new(library)));
}

pub fn open_edit(book: Book) -> BookForm {
    with_mut(|s| s.edit.open(book))
}

pub fn submit_edit(form: &BookForm) -> Result<Book, EditError> {
    with_mut(|s| s.edit.submit(form))
}

pub fn cancel_edit() -> Option<Book> {
    with_mut(|s| s.edit.cancel())
}

pub fn set_rendered(books: Vec<Book>) {
    with_mut(|s| s.rendered = books);
}

pub fn rendered_book(key: &str) -> Option<Book> {
    with(|s| find_by_key(&s.rendered, key).cloned())
}
