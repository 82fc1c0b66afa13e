//! Grid column configuration for list views

/// Column options; blank texts mean "not set"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumnConfig {
    /// Column id; blank means `column-<lowercased field name>`
    pub id: String,
    /// Column key; blank means the field name
    pub key: String,
    pub header: String,
    pub footer: String,
    pub sortable: bool,
    pub resizable: bool,
    pub auto_width: bool,
    /// Applied only when positive
    pub flex_grow: i32,
    pub frozen: bool,
    pub frozen_to_end: bool,
}

impl Default for GridColumnConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            key: String::new(),
            header: String::new(),
            footer: String::new(),
            sortable: true,
            resizable: true,
            auto_width: true,
            flex_grow: -1,
            frozen: false,
            frozen_to_end: false,
        }
    }
}

impl GridColumnConfig {
    pub fn headed(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn flex_grow(mut self, flex_grow: i32) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    pub fn frozen_to_end(mut self) -> Self {
        self.frozen_to_end = true;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}
