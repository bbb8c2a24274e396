/// Code generation for blank plugins - C output

pub mod blank_plugin;

pub use crate::error::CodegenError;
pub use blank_plugin::{generate, generate_to_string, validate};
