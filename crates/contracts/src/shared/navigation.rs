//! Navigation tree built from the meta-registry

use serde::{Deserialize, Serialize};

/// Visible sections in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTree {
    pub sections: Vec<NavigationSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tooltip: Option<String>,
    pub items: Vec<NavigationItem>,
}

/// Meta element entry, linked to its views by route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub tooltip: Option<String>,
    /// Route of the list view
    pub route: String,
    pub view: String,
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub id_type: Option<String>,
}

impl NavigationTree {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn find_item(&self, key: &str) -> Option<&NavigationItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|item| item.key == key)
    }
}
