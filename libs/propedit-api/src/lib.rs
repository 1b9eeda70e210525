pub mod editor;
pub mod error;
pub mod ffi;
pub mod null;
pub mod types;
pub mod value;

pub use editor::PropertyEditor;
pub use error::{EditorError, ErrorKind};
pub use types::TypeDescriptor;
pub use value::Value;
