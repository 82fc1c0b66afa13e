//! Sidebar menu built from the navigation tree
//! Groups follow the sections, items follow the meta elements of each section

use contracts::shared::navigation::{NavigationSection, NavigationTree};

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: &'static str,
    pub route: String,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: String,
    pub label: String,
    pub icon: &'static str,
    pub tooltip: Option<String>,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }
}

fn group_icon(section: &NavigationSection) -> &'static str {
    match section.key.as_str() {
        "CatalogsSection" => "database",
        "DocumentsSection" => "file-text",
        "AdminSection" => "settings",
        _ => "layers",
    }
}

pub fn get_menu_groups(tree: &NavigationTree) -> Vec<MenuGroup> {
    tree.sections
        .iter()
        .map(|section| MenuGroup {
            id: section.key.clone(),
            label: section.title.clone(),
            icon: group_icon(section),
            tooltip: section.tooltip.clone(),
            items: section
                .items
                .iter()
                .map(|item| MenuItem {
                    id: item.key.clone(),
                    label: item.title.clone(),
                    icon: "list",
                    route: item.route.clone(),
                    tooltip: item.tooltip.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Группа, в которой находится пункт меню
pub fn find_group_for_item<'a>(groups: &'a [MenuGroup], item_id: &str) -> Option<&'a MenuGroup> {
    groups
        .iter()
        .find(|group| group.items.iter().any(|item| item.id == item_id))
}
