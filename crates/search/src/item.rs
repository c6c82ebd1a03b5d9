//! Searchable catalog records.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A service, product or professional that can be suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    /// Unique identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Alternate strings matched like an extra field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_synonyms: Option<Vec<String>>,
    /// Flagged for the empty-query suggestion set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
}

impl SearchableItem {
    /// Creates an item with no synonyms that is not flagged popular.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
            search_synonyms: None,
            is_popular: None,
        }
    }

    /// Sets the synonym list.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the popular flag.
    pub fn popular(mut self, popular: bool) -> Self {
        self.is_popular = Some(popular);
        self
    }

    /// Value of a searchable field.
    #[inline]
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Description => &self.description,
            SearchField::Category => &self.category,
        }
    }

    /// Synonyms, empty when none are set.
    #[inline]
    pub fn synonyms(&self) -> &[String] {
        self.search_synonyms.as_deref().unwrap_or_default()
    }

    /// Whether the item is flagged popular.
    #[inline]
    pub fn is_popular(&self) -> bool {
        self.is_popular == Some(true)
    }
}

/// Item property that participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `category`
    Category,
}

impl SearchField {
    /// Default scan order.
    pub const DEFAULT_ORDER: [SearchField; 3] =
        [SearchField::Name, SearchField::Description, SearchField::Category];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Description => "description",
            SearchField::Category => "category",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "description" => Ok(SearchField::Description),
            "category" => Ok(SearchField::Category),
            other => Err(SearchError::InvalidConfig(format!("unknown search field '{other}'"))),
        }
    }
}

/// An owned, validated list of searchable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<SearchableItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<SearchableItem>) -> Result<Self> {
        let catalog = Self { items };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<SearchableItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Checks that ids are non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.id.is_empty() {
                return Err(SearchError::InvalidCatalog(format!(
                    "item '{}' has an empty id",
                    item.name
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(SearchError::InvalidCatalog(format!("duplicate id '{}'", item.id)));
            }
        }
        Ok(())
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AsRef<[SearchableItem]> for Catalog {
    fn as_ref(&self) -> &[SearchableItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"[{"id":"1","name":"Lifting de Pestañas","category":"lashes",
            "description":"Curvado natural","searchSynonyms":["lash lift"],"isPopular":true}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let item = &catalog.items()[0];
        assert_eq!(item.synonyms(), ["lash lift".to_string()]);
        assert!(item.is_popular());
    }

    #[test]
    fn test_missing_optional_fields() {
        let catalog = Catalog::from_json(r#"[{"id":"7","name":"Brow wax"}]"#).unwrap();
        let item = &catalog.items()[0];
        assert_eq!(item.description, "");
        assert!(item.synonyms().is_empty());
        assert!(!item.is_popular());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            SearchableItem::new("1", "A", "x", ""),
            SearchableItem::new("1", "B", "x", ""),
        ];
        assert!(matches!(Catalog::new(items), Err(SearchError::InvalidCatalog(_))));
    }

    #[test]
    fn test_field_access() {
        let item = SearchableItem::new("1", "Gel", "nails", "UV gel");
        assert_eq!(item.field(SearchField::Name), "Gel");
        assert_eq!(item.field(SearchField::Category), "nails");
        assert_eq!(item.field(SearchField::Description), "UV gel");
    }

    #[test]
    fn test_search_field_parse() {
        assert_eq!("Name".parse::<SearchField>().unwrap(), SearchField::Name);
        assert!("price".parse::<SearchField>().is_err());
    }
}
