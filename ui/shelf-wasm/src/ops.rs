//! Book CRUD handlers.
//!
//! Each handler collects input from the page, runs the matching `Library`
//! flow and logs the outcome to the console. Request failures are logged by
//! `DomView::report_failure` as they happen; they never reach the page.

use shelf_api_types::Book;
use shelf_core::{BookForm, EditError, Outcome};

use crate::dom::{self, Elements};
use crate::state;
use crate::view::DomView;

struct BrowserConfirm;

impl shelf_core::Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        dom::window()
            .and_then(|w| w.confirm_with_message(message))
            .unwrap_or(false)
    }
}

fn report(action: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Applied => gloo_console::log!(format!("{action}: done")),
        Outcome::Invalid(_) => gloo_console::log!(format!("{action}: invalid input")),
        Outcome::Cancelled => gloo_console::log!(format!("{action}: canceled by user")),
        // Already logged through `DomView::report_failure`.
        Outcome::Failed(_) => gloo_console::log!(format!("{action}: failed")),
    }
}

/// Initial load and the refresh after every mutation.
pub async fn load_library(els: &Elements) {
    let Some(library) = state::library() else {
        return;
    };
    library.refresh(&mut DomView::new(els)).await;
}

/// POST /Books/POST
pub async fn on_add(els: &Elements) {
    let Some(library) = state::library() else {
        return;
    };
    let form = BookForm::new(
        dom::get_input_value(&els.title_input),
        dom::get_input_value(&els.author_input),
    );
    let outcome = library.add(&form, &mut DomView::new(els)).await;
    report("add book", &outcome);
}

/// Clears the form and redraws; nothing is deleted remotely.
pub async fn on_remove_all(els: &Elements) {
    let Some(library) = state::library() else {
        return;
    };
    library.reset(&mut DomView::new(els)).await;
}

/// Open the edit dialog for `book`, prefilled with its current values.
pub fn on_edit_open(els: &Elements, book: Book) {
    let prefill = state::open_edit(book);
    els.edit_title.set_value(&prefill.title);
    els.edit_author.set_value(&prefill.author);
    dom::clear(&els.edit_error);
    dom::add_class(&els.edit_dialog, "open");
    let _ = els.edit_title.focus();
}

pub fn on_edit_cancel(els: &Elements) {
    if state::cancel_edit().is_some() {
        gloo_console::log!("edit book: canceled by user");
    }
    close_edit_dialog(els);
}

/// PUT /Books/PUT/
pub async fn on_edit_save(els: &Elements) {
    let form = BookForm::new(
        dom::get_input_value(&els.edit_title),
        dom::get_input_value(&els.edit_author),
    );

    let book = match state::submit_edit(&form) {
        Ok(book) => book,
        Err(EditError::Invalid(errors)) => {
            let message = [errors.title, errors.author]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(". ");
            dom::set_text(&els.edit_error, &message);
            return;
        }
        Err(EditError::NotPending) => {
            close_edit_dialog(els);
            return;
        }
    };
    close_edit_dialog(els);

    let Some(library) = state::library() else {
        return;
    };
    let outcome = library.edit(&book, &mut DomView::new(els)).await;
    report("edit book", &outcome);
}

/// DELETE /Books/DELETE
pub async fn on_remove(els: &Elements, book: &Book) {
    let Some(library) = state::library() else {
        return;
    };
    let outcome = library
        .remove(book, &BrowserConfirm, &mut DomView::new(els))
        .await;
    report("remove book", &outcome);
}

fn close_edit_dialog(els: &Elements) {
    dom::remove_class(&els.edit_dialog, "open");
    dom::clear(&els.edit_error);
}
