//! Domain Layer
//!
//! Pure rules with no I/O: the fixed requirement tables, key-path lookup,
//! presence and color classification.

pub mod color;
pub mod environment;
pub mod key_path;
pub mod requirements;
pub mod text;

pub use color::is_hex_color;
pub use environment::{EnvSelector, Environment};
pub use key_path::{is_non_empty, resolve};
pub use text::{escape_controls, quote, strip};
