// Persona Forge - Core Library
// Immutable person records, supplier-fed trait builders, in-memory registry

pub mod builder;
pub mod identity;
pub mod person;
pub mod registry;

// Re-export commonly used types
pub use builder::{ArchitectBuilder, DeveloperBuilder, DEFAULT_LANGUAGE};
pub use identity::PersonId;
pub use person::{oldest, Person, Role};
pub use registry::PersonRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
