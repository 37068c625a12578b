pub mod discovery;
pub mod error;
pub mod notation;
pub mod settings;
pub mod validation;

// Re-export main types
pub use error::*;
pub use notation::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{load_settings, ConfigDiscovery, ConfigSource};
pub use validation::validate;
