//! Audiobook entities. Books only appear in search results; there is no
//! dedicated catalog endpoint for them.

use crate::common::Image;
use crate::entity::{Entity, entity_identity, entity_list, entity_opt};
use serde::{Deserialize, Serialize};

/// An author of an audiobook.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BookAuthor {
    /// Author identifier
    pub id: String,
    /// Author display name
    pub rname: String,
    /// Author image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
}

entity_identity!(BookAuthor { id });
impl Entity for BookAuthor {}

/// Brief audiobook information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimpleBook {
    /// Unique book identifier
    pub id: String,
    /// Book title
    pub title: String,
    /// Author names as plain strings
    pub author_names: Vec<String>,
    /// Author entities
    #[serde(deserialize_with = "entity_list")]
    pub book_authors: Vec<BookAuthor>,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
}

entity_identity!(SimpleBook { id });
impl Entity for SimpleBook {}

impl SimpleBook {
    /// Author names joined with `", "`. Falls back to the plain
    /// `author_names` list when no author entities were returned.
    pub fn authors_str(&self) -> String {
        if !self.book_authors.is_empty() {
            self.book_authors
                .iter()
                .map(|a| a.rname.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            self.author_names.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_str_prefers_entities() {
        let value = serde_json::json!({
            "id": "1",
            "title": "Book",
            "author_names": ["Fallback Name"],
            "book_authors": [{ "id": "9", "rname": "Real Name" }],
        });
        let book = SimpleBook::from_value(&value).unwrap();
        assert_eq!(book.authors_str(), "Real Name");

        let bare = SimpleBook {
            author_names: vec!["Fallback Name".into()],
            ..SimpleBook::default()
        };
        assert_eq!(bare.authors_str(), "Fallback Name");
    }
}
