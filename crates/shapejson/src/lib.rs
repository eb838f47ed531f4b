#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod shape;
pub mod value;
pub mod encode;
mod number;

#[cfg(feature = "serde")]
pub mod ser;

pub use crate::error::{Error, Result};
pub use crate::options::{Options, TimestampFormat};
pub use crate::shape::{ScalarKind, Shape, ShapeKind};
pub use crate::value::{Number, Value};

use std::io::Write;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Encode `value` as compact JSON, projected through `shape`.
pub fn encode_to_string(shape: &Shape, value: &Value, options: &Options) -> Result<String> {
    crate::encode::encode_value_to_string(shape, value, options)
}

/// Encode `value` through `shape` and write the JSON to `writer`.
pub fn encode_to_writer<W: Write>(mut writer: W, shape: &Shape, value: &Value, options: &Options) -> Result<()> {
    let s = encode_to_string(shape, value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Encode any `Serialize` type by first building a [`Value`] from it.
#[cfg(feature = "serde")]
pub fn encode_serialize_to_string<T: Serialize + ?Sized>(shape: &Shape, value: &T, options: &Options) -> Result<String> {
    crate::ser::to_string(shape, value, options)
}
