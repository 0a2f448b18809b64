use shelf_api_types::Book;
use shelf_client::{BookStore, FetchFailure};
use tracing::{debug, info, warn};

use crate::form::{BookForm, FormErrors};
use crate::table::build_rows;
use crate::{Confirm, LibraryView};

/// How a user-triggered operation ended.
///
/// Failures have already gone to [`LibraryView::report_failure`] when this is
/// returned; the table is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Invalid(FormErrors),
    Cancelled,
    Failed(FetchFailure),
}

/// Add/edit/remove flows against a remote [`BookStore`]. Every successful
/// mutation re-renders the table from a fresh listing.
pub struct Library<S> {
    store: S,
}

impl<S: BookStore> Library<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch and redraw the whole table. Returns the number of books shown.
    ///
    /// A failed listing is reported and rendered as an empty library.
    pub async fn refresh(&self, view: &mut dyn LibraryView) -> usize {
        let books = match self.store.list().await {
            Ok(books) => books,
            Err(err) => {
                warn!("error fetching books: {}", err);
                view.report_failure("fetching books", &err);
                Vec::new()
            }
        };
        view.render(&build_rows(&books));
        books.len()
    }

    pub async fn add(&self, form: &BookForm, view: &mut dyn LibraryView) -> Outcome {
        let book = match form.validate() {
            Ok(book) => book,
            Err(errors) => {
                view.show_form_errors(&errors);
                return Outcome::Invalid(errors);
            }
        };

        match self.store.create(&book).await {
            Ok(()) => {
                info!("book added: {} by {}", book.name, book.author);
                view.reset_form();
                self.refresh(view).await;
                Outcome::Applied
            }
            Err(err) => {
                warn!("error adding book to library: {}", err);
                view.report_failure("adding book to library", &err);
                Outcome::Failed(err)
            }
        }
    }

    /// Send an edited record, as produced by [`crate::EditSession::submit`].
    pub async fn edit(&self, book: &Book, view: &mut dyn LibraryView) -> Outcome {
        match self.store.update(book).await {
            Ok(()) => {
                info!("book {} updated: {}", book.id, book.summary());
                self.refresh(view).await;
                Outcome::Applied
            }
            Err(err) => {
                warn!("error updating book {}: {}", book.id, err);
                view.report_failure("updating book", &err);
                Outcome::Failed(err)
            }
        }
    }

    pub async fn remove(
        &self,
        book: &Book,
        confirm: &dyn Confirm,
        view: &mut dyn LibraryView,
    ) -> Outcome {
        let question = format!(
            "Are you sure you want to remove \"{}\" by {}?",
            book.name, book.author
        );
        if !confirm.confirm(&question) {
            debug!("remove of book {} cancelled by user", book.id);
            return Outcome::Cancelled;
        }

        match self.store.delete(&book.id).await {
            Ok(()) => {
                info!("book {} removed: {}", book.id, book.summary());
                self.refresh(view).await;
                Outcome::Applied
            }
            Err(err) => {
                warn!("error removing book {}: {}", book.id, err);
                view.report_failure("removing book", &err);
                Outcome::Failed(err)
            }
        }
    }

    /// Clear the add form and redraw. Deletes nothing remotely.
    pub async fn reset(&self, view: &mut dyn LibraryView) -> usize {
        view.reset_form();
        self.refresh(view).await
    }
}
