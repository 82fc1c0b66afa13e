pub mod aggregate;

pub use aggregate::Realtor;
