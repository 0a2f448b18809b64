use shelf_api_types::Book;

use crate::form::{BookForm, FormErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// Submit arrived with no dialog open, e.g. a second click after close.
    NotPending,
    Invalid(FormErrors),
}

/// Pending state of the non-blocking edit dialog.
///
/// Only the interaction that opened the dialog waits on it; the rest of the
/// page stays usable.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    pending: Option<Book>,
}

impl EditSession {
    /// Start editing `book`, replacing any edit already pending. Returns the
    /// values to prefill the dialog with.
    pub fn open(&mut self, book: Book) -> BookForm {
        let prefill = BookForm::new(book.name.clone(), book.author.clone());
        self.pending = Some(book);
        prefill
    }

    pub fn pending(&self) -> Option<&Book> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> Option<Book> {
        self.pending.take()
    }

    /// Close the dialog and return the record to send, keeping its id.
    /// Invalid input leaves the dialog open.
    pub fn submit(&mut self, form: &BookForm) -> Result<Book, EditError> {
        if self.pending.is_none() {
            return Err(EditError::NotPending);
        }
        let values = form.validate().map_err(EditError::Invalid)?;
        let original = self.pending.take().ok_or(EditError::NotPending)?;
        Ok(values.with_id(original.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::TITLE_ERROR;
    use shelf_api_types::BookId;

    #[test]
    fn open_prefills_with_current_values() {
        let mut session = EditSession::default();
        let prefill = session.open(Book::new(1, "Dune", "Herbert"));
        assert_eq!(prefill, BookForm::new("Dune", "Herbert"));
        assert!(session.is_open());
    }

    #[test]
    fn submit_keeps_the_id_and_closes() {
        let mut session = EditSession::default();
        session.open(Book::new(3, "Dune", "Herbert"));

        let book = session
            .submit(&BookForm::new("Dune Messiah", "Frank Herbert"))
            .unwrap();
        assert_eq!(book, Book::new(3, "Dune Messiah", "Frank Herbert"));
        assert!(!session.is_open());
    }

    #[test]
    fn invalid_submit_stays_open() {
        let mut session = EditSession::default();
        session.open(Book::new(3, "Dune", "Herbert"));

        let err = session.submit(&BookForm::new("", "Herbert")).unwrap_err();
        assert!(matches!(err, EditError::Invalid(errors) if errors.title == Some(TITLE_ERROR)));
        assert_eq!(session.pending(), Some(&Book::new(3, "Dune", "Herbert")));
    }

    #[test]
    fn cancel_and_stray_submit() {
        let mut session = EditSession::default();
        session.open(Book::new(3, "Dune", "Herbert"));
        assert_eq!(session.cancel().map(|b| b.id), Some(BookId::from(3)));

        let err = session.submit(&BookForm::new("A", "B")).unwrap_err();
        assert_eq!(err, EditError::NotPending);
    }

    #[test]
    fn reopening_switches_target() {
        let mut session = EditSession::default();
        session.open(Book::new(1, "Dune", "Herbert"));
        session.open(Book::new(2, "Emma", "Austen"));

        let book = session.submit(&BookForm::new("Persuasion", "Austen")).unwrap();
        assert_eq!(book.id, BookId::from(2));
    }
}
