//! Serde bridge: turn any `Serialize` into a [`Value`](crate::value::Value).
//!
//! `serialize_bytes` becomes `Value::Bytes`, so `serde_bytes` fields line up
//! with blob shapes. chrono timestamps serialize as RFC 3339 strings, which
//! timestamp shapes accept.

use serde::Serialize;

use crate::{Result, options::Options, shape::Shape};

mod value_builder;

pub use value_builder::to_value;

pub fn to_string<T: Serialize + ?Sized>(shape: &Shape, value: &T, options: &Options) -> Result<String> {
    let v = to_value(value)?;
    crate::encode::encode_value_to_string(shape, &v, options)
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    mut writer: W,
    shape: &Shape,
    value: &T,
    options: &Options,
) -> Result<()> {
    let s = to_string(shape, value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
