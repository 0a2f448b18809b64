use shelf_api_types::Book;

/// Title, author, edit, remove.
pub const COLUMN_COUNT: u32 = 4;
pub const EMPTY_LIBRARY_TEXT: &str = "No books in the store yet.";
pub const EDIT_LABEL: &str = "\u{270E}";
pub const REMOVE_LABEL: &str = "\u{1F7AC}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Single cell spanning `colspan` columns, shown when the library is empty.
    Placeholder { text: &'static str, colspan: u32 },
    /// One record. Its edit and remove controls act on `Book::id`.
    Book(Book),
}

/// What a row button does, carried in its `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Remove,
}

impl RowAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Remove => "remove",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "edit" => Some(RowAction::Edit),
            "remove" => Some(RowAction::Remove),
            _ => None,
        }
    }
}

/// Key a row's buttons carry in `data-id`.
pub fn row_key(book: &Book) -> String {
    book.id.to_string()
}

/// The rendered book a clicked row button refers to.
pub fn find_by_key<'a>(books: &'a [Book], key: &str) -> Option<&'a Book> {
    books.iter().find(|book| row_key(book) == key)
}

/// Rows for the table body, in server order.
pub fn build_rows(books: &[Book]) -> Vec<TableRow> {
    if books.is_empty() {
        return vec![TableRow::Placeholder {
            text: EMPTY_LIBRARY_TEXT,
            colspan: COLUMN_COUNT,
        }];
    }
    books.iter().cloned().map(TableRow::Book).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_library_renders_one_spanning_placeholder() {
        assert_eq!(
            build_rows(&[]),
            vec![TableRow::Placeholder {
                text: "No books in the store yet.",
                colspan: 4,
            }]
        );
    }

    #[test]
    fn row_keys_find_the_rendered_book() {
        let books = vec![
            Book::new(7, "Dune", "Herbert"),
            Book::new("b-2", "Emma", "Austen"),
        ];
        assert_eq!(row_key(&books[0]), "7");
        assert_eq!(find_by_key(&books, "7"), Some(&books[0]));
        assert_eq!(find_by_key(&books, &row_key(&books[1])), Some(&books[1]));
        assert_eq!(find_by_key(&books, "3"), None);
    }

    #[test]
    fn row_actions_parse_their_attribute_values() {
        for action in [RowAction::Edit, RowAction::Remove] {
            assert_eq!(RowAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(RowAction::parse("rename"), None);
    }

    #[test]
    fn one_row_per_book_in_order() {
        let books = vec![
            Book::new(1, "Dune", "Herbert"),
            Book::new(2, "Emma", "Austen"),
        ];
        let rows = build_rows(&books);
        assert_eq!(
            rows,
            vec![TableRow::Book(books[0].clone()), TableRow::Book(books[1].clone())]
        );
    }
}
