use serde::{Deserialize, Serialize};
use std::fmt;

/// Route paths of the Books API, relative to the deployment base URL.
pub mod routes {
    pub const LIST: &str = "/Books/GET";
    pub const CREATE: &str = "/Books/POST";
    pub const UPDATE: &str = "/Books/PUT/";
    pub const DELETE: &str = "/Books/DELETE";
}

/// Server-assigned record identifier.
///
/// The API hands out either numbers or strings; the value is echoed back in
/// the shape it arrived in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum BookId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{n}"),
            BookId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        BookId::Number(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: BookId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Author")]
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<BookId>, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
        }
    }

    /// One-line description, e.g. `Dune by Herbert.`
    pub fn summary(&self) -> String {
        format!("{} by {}.", self.name, self.author)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Author")]
    pub author: String,
}

impl NewBook {
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            name: self.name,
            author: self.author,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteBookRequest {
    #[serde(rename = "ID")]
    pub id: BookId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
