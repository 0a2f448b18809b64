//! Library logic shared by every front end: the table render model, form
//! validation, the edit dialog state and the add/edit/remove flows.
//!
//! Nothing here touches the DOM. A front end implements [`LibraryView`] and
//! [`Confirm`] and hands them to [`Library`].

use shelf_client::FetchFailure;

pub mod edit;
pub mod form;
pub mod library;
pub mod table;

pub use edit::{EditError, EditSession};
pub use form::{BookForm, FormErrors};
pub use library::{Library, Outcome};
pub use table::{TableRow, build_rows};

/// Render target for the library table and the add form.
pub trait LibraryView {
    /// Replace every row of the table body.
    fn render(&mut self, rows: &[TableRow]);
    fn show_form_errors(&mut self, errors: &FormErrors);
    /// Clear the add form inputs and their error texts.
    fn reset_form(&mut self);
    /// Diagnostic channel for a failure that is otherwise swallowed.
    /// `action` reads like "fetching books".
    fn report_failure(&mut self, action: &str, err: &FetchFailure);
}

/// Yes/no question put to the user before a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
