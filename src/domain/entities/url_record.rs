//! URL record entity.

/// A stored alias to URL mapping.
///
/// Records are created on save, read on redirect/info and removed on delete.
/// They are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    pub fn new(id: i64, alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            url: url.into(),
        }
    }
}
