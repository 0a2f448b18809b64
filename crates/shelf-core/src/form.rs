use shelf_api_types::NewBook;

pub const TITLE_ERROR: &str = "Please give a valid title of the book";
pub const AUTHOR_ERROR: &str = "Please give a valid author";

/// Raw title/author input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
}

/// Inline messages for the fields that failed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub author: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

impl BookForm {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Both fields must be non-empty. Values are sent exactly as typed.
    /// Every failing field gets its message.
    pub fn validate(&self) -> Result<NewBook, FormErrors> {
        let title = self.title.as_str();
        let author = self.author.as_str();

        let errors = FormErrors {
            title: title.is_empty().then_some(TITLE_ERROR),
            author: author.is_empty().then_some(AUTHOR_ERROR),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewBook {
            name: title.to_owned(),
            author: author.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_sent_as_typed() {
        let book = BookForm::new("  Dune ", "Herbert").validate().unwrap();
        assert_eq!(book.name, "  Dune ");
        assert_eq!(book.author, "Herbert");
    }

    #[test]
    fn whitespace_counts_as_input() {
        let book = BookForm::new(" ", "Herbert").validate().unwrap();
        assert_eq!(book.name, " ");
    }

    #[test]
    fn each_blank_field_reports_its_own_error() {
        let errors = BookForm::new("", "Herbert").validate().unwrap_err();
        assert_eq!(errors.title, Some(TITLE_ERROR));
        assert_eq!(errors.author, None);

        let errors = BookForm::new("Dune", "").validate().unwrap_err();
        assert_eq!(errors.title, None);
        assert_eq!(errors.author, Some(AUTHOR_ERROR));

        let errors = BookForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            FormErrors {
                title: Some(TITLE_ERROR),
                author: Some(AUTHOR_ERROR),
            }
        );
    }
}
