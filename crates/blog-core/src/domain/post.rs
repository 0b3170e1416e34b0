use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post, always kept as a first/last name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form, e.g. "Ada Lovelace". Never used as a wire value.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// BlogPost entity - the single resource served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID and timestamps.
    pub fn new(title: String, content: String, author: Author) -> Result<Self, DomainError> {
        validate(&title, &content, &author)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field. `id` and `created_at` are kept.
    pub fn replace(
        &mut self,
        title: String,
        content: String,
        author: Author,
    ) -> Result<(), DomainError> {
        validate(&title, &content, &author)?;

        self.title = title;
        self.content = content;
        self.author = author;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate(title: &str, content: &str, author: &Author) -> Result<(), DomainError> {
    let missing: Vec<&str> = [
        ("title", title),
        ("content", content),
        ("author.firstName", author.first_name.as_str()),
        ("author.lastName", author.last_name.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "missing required field(s): {}",
            missing.join(", ")
        )))
    }
}
