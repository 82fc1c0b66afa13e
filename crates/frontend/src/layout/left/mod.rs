pub mod sidebar;

pub use sidebar::{get_menu_groups, MenuGroup, MenuItem};
