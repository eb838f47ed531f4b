//! Shape-directed JSON encoding.
//!
//! The encoder walks the value tree in lock-step with a [`Shape`] and writes
//! compact JSON. Structures project the input: undeclared keys are dropped and
//! absent or null members are omitted.

pub mod encoders;
pub mod path;
pub mod primitives;
pub mod timestamp;
pub mod writer;

use tracing::debug;

use crate::{Result, options::Options, shape::Shape, value::Value};

pub fn encode_value_to_string(shape: &Shape, value: &Value, options: &Options) -> Result<String> {
    debug!(shape = shape.type_name(), strict = options.strict, "encoding value");
    let mut w = writer::JsonWriter::new();
    encoders::encode_value(shape, value, &mut w, options, &path::Path::Root)?;
    Ok(w.into_string())
}
