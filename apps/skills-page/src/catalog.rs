//! The list of valid skill names that backs autocomplete and skill-name validation.

use std::path::Path;

use serde_json::Value;

use crate::errors::PageError;

/// Ordered, externally supplied list of valid skill names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    names: Vec<String>,
}

impl SkillCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses either a JSON array of names or a skills map object
    /// (`{"Display name": "column_name", ...}`), whose keys are the names.
    pub fn from_json(text: &str) -> Result<Self, PageError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    _ => Err(PageError::CatalogShape),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|names| Self { names }),
            Value::Object(map) => Ok(Self {
                names: map.into_iter().map(|(name, _)| name).collect(),
            }),
            _ => Err(PageError::CatalogShape),
        }
    }

    pub fn load(path: &Path) -> Result<Self, PageError> {
        let text = std::fs::read_to_string(path).map_err(|source| PageError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        tracing::debug!("Loaded {} skill names from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Case-sensitive exact membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Autocomplete suggestions: entries containing `term`, ignoring case, in catalog order.
    /// Nothing is suggested for an empty term.
    pub fn suggest(&self, term: &str) -> Vec<&str> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
