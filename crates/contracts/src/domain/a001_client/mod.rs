pub mod aggregate;
pub mod providers;

pub use aggregate::Client;
