//! Mapping entity representing a stored alias -> URL pair.

/// A persisted alias mapping.
///
/// `id` is assigned by the store on insert and only reflects insertion order;
/// lookups always go through `alias`. Mappings are never updated, only deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}
