pub mod array;
pub mod bootstrap;
pub mod config;
pub mod discovery;
pub mod error;
pub mod plugin_host;
pub mod primitives;
pub mod registry;
pub mod resolver;
pub mod types;

pub use bootstrap::{bootstrap, init_shared, shared};
pub use error::EngineError;
pub use registry::EditorRegistry;
pub use resolver::EditorResolver;
