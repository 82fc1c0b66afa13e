pub mod date_utils;
pub mod fields;
pub mod form;
pub mod grid;
