//! URL record entity representing an alias to URL mapping.

/// A stored mapping between a short alias and its target URL.
///
/// Records are immutable once created; the only lifecycle transition after
/// insertion is deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: String,
    pub url: String,
}

impl NewUrlRecord {
    pub fn new(url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            url: url.into(),
        }
    }

    /// Materializes the record once storage has assigned its identifier.
    pub fn into_record(self, id: i64) -> UrlRecord {
        UrlRecord::new(id, self.alias, self.url)
    }
}
