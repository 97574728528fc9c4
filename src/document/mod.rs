//! Persisted match documents.
//!
//! - `codec`: match state to and from a `serde_json::Value` tree
//! - `file`: `.frc` files on disk

pub mod codec;
pub mod file;

pub use codec::{decode, decode_grid, encode, encode_grid, from_str, required_fields, to_string};
pub use file::{load, save, DEFAULT_FILE_NAME, FILE_EXTENSION};
