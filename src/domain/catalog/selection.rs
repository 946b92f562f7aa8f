//! The user's category filter.

use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated set of selected category names.
///
/// Order is significant: the first selected category defines the order of
/// filtered results. An empty selection means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySelection(Vec<String>);

impl CategorySelection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for name in names {
            selection.insert(name.as_ref());
        }
        selection
    }

    /// Parses the comma-separated `types` query value.
    pub fn from_query(value: &str) -> Self {
        Self::new(value.split(','))
    }

    /// Renders the selection back to its comma-separated query form.
    pub fn to_query(&self) -> String {
        self.0.join(",")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle(&mut self, name: &str) {
        let name = name.trim();
        if self.contains(name) {
            self.0.retain(|n| n != name);
        } else {
            self.insert(name);
        }
    }

    fn insert(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.contains(name) {
            self.0.push(name.to_string());
        }
    }
}

impl From<Vec<String>> for CategorySelection {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<CategorySelection> for Vec<String> {
    fn from(selection: CategorySelection) -> Self {
        selection.0
    }
}
