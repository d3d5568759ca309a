pub mod activity_registry;
pub mod error;
pub mod seed;

pub use activity_registry::ActivityRegistry;
pub use error::RegistryError;
