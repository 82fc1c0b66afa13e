pub mod messages;
pub mod metadata;
pub mod navigation;
pub mod type_witness;
pub mod views;
