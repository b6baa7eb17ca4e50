/// Filters accepted by product listings.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductQuery {
    /// Products carrying a category with exactly this name, ignoring case.
    ///
    /// The name is trimmed on construction so `" frutas "` finds `"Frutas"`.
    Category(String),
}

impl ProductQuery {
    pub fn category(name: impl AsRef<str>) -> Self {
        ProductQuery::Category(name.as_ref().trim().to_string())
    }
}
