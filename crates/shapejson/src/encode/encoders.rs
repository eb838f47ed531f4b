use tracing::{Level, trace};

use crate::{
    Result,
    encode::{
        path::Path,
        primitives,
        timestamp::{self, TimestampText},
        writer::JsonWriter,
    },
    error::Error,
    number::format_json_f64,
    options::{Options, TimestampFormat},
    shape::{ScalarKind, Shape, ShapeKind},
    value::{Number, Value},
};

fn mismatch(path: &Path<'_>, expected: &'static str, found: &Value) -> Error {
    Error::Mismatch {
        path: path.to_string(),
        expected,
        found: found.kind_name(),
    }
}

pub fn encode_value(
    shape: &Shape,
    value: &Value,
    w: &mut JsonWriter,
    opts: &Options,
    path: &Path<'_>,
) -> Result<()> {
    if value.is_null() {
        w.null();
        return Ok(());
    }
    match shape.kind() {
        ShapeKind::Structure(members) => encode_structure(members, value, w, opts, path),
        ShapeKind::List(element) => {
            let Value::List(items) = value else {
                return Err(mismatch(path, "list", value));
            };
            w.begin_array();
            for (i, item) in items.iter().enumerate() {
                encode_value(element, item, w, opts, &Path::Index(path, i))?;
            }
            w.end_array();
            Ok(())
        }
        ShapeKind::Map { value: element, .. } => {
            let Value::Map(entries) = value else {
                return Err(mismatch(path, "map", value));
            };
            w.begin_object();
            for (k, v) in entries {
                w.key(k);
                encode_value(element, v, w, opts, &Path::Key(path, k))?;
            }
            w.end_object();
            Ok(())
        }
        ShapeKind::Scalar(kind) => encode_scalar(*kind, shape, value, w, opts, path),
    }
}

fn encode_structure(
    members: &[(String, Shape)],
    value: &Value,
    w: &mut JsonWriter,
    opts: &Options,
    path: &Path<'_>,
) -> Result<()> {
    let Value::Map(entries) = value else {
        return Err(mismatch(path, "map", value));
    };
    w.begin_object();
    for (name, member) in members {
        let Some(v) = value.get(name) else {
            trace!(%path, member = %name, "member absent from input, omitted");
            continue;
        };
        if v.is_null() {
            trace!(%path, member = %name, "member is null, omitted");
            continue;
        }
        w.key(member.output_name().unwrap_or(name));
        encode_value(member, v, w, opts, &Path::Key(path, name))?;
    }
    w.end_object();

    if tracing::enabled!(Level::TRACE) {
        for (k, _) in entries {
            if !members.iter().any(|(name, _)| name == k) {
                trace!(%path, key = %k, "undeclared input key dropped");
            }
        }
    }
    Ok(())
}

fn encode_scalar(
    kind: ScalarKind,
    shape: &Shape,
    value: &Value,
    w: &mut JsonWriter,
    opts: &Options,
    path: &Path<'_>,
) -> Result<()> {
    match kind {
        ScalarKind::Timestamp => {
            let format = match shape.timestamp_format() {
                Some(raw) => raw.parse::<TimestampFormat>()?,
                None => opts.default_timestamp_format,
            };
            let dt = timestamp::to_utc(value, path)?;
            write_timestamp(w, timestamp::format_timestamp(&dt, format));
            Ok(())
        }
        ScalarKind::Blob => match value {
            Value::Bytes(b) => {
                w.string(&primitives::encode_blob(b));
                Ok(())
            }
            Value::String(s) => {
                w.string(&primitives::encode_blob(s.as_bytes()));
                Ok(())
            }
            other => Err(mismatch(path, "bytes", other)),
        },
        ScalarKind::String | ScalarKind::Integer | ScalarKind::Float | ScalarKind::Boolean => {
            if matches!(value, Value::List(_) | Value::Map(_)) {
                return Err(mismatch(path, "scalar", value));
            }
            if opts.strict && !accepts(kind, value) {
                return Err(mismatch(path, kind.as_str(), value));
            }
            match kind {
                ScalarKind::String => encode_string(value, w, opts, path),
                ScalarKind::Integer => encode_integer(value, w, path),
                ScalarKind::Float => encode_float(value, w, path),
                _ => encode_boolean(value, w, path),
            }
        }
    }
}

fn accepts(kind: ScalarKind, value: &Value) -> bool {
    match kind {
        ScalarKind::String => matches!(value, Value::String(_)),
        ScalarKind::Integer => matches!(value, Value::Number(Number::I64(_) | Number::U64(_))),
        ScalarKind::Float => matches!(value, Value::Number(_)),
        ScalarKind::Boolean => matches!(value, Value::Bool(_)),
        ScalarKind::Timestamp | ScalarKind::Blob => false,
    }
}

fn finite(f: f64, path: &Path<'_>) -> Result<f64> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(Error::NonFiniteFloat {
            path: path.to_string(),
        })
    }
}

/// Other scalars are written as their text form inside a JSON string.
fn encode_string(value: &Value, w: &mut JsonWriter, opts: &Options, path: &Path<'_>) -> Result<()> {
    match value {
        Value::String(s) => w.string(s),
        Value::Bool(b) => w.string(primitives::format_bool(*b)),
        Value::Number(Number::F64(f)) => w.string(&format_json_f64(finite(*f, path)?)),
        Value::Number(n) => w.string(&n.to_string()),
        Value::Bytes(b) => w.string(&primitives::encode_blob(b)),
        Value::Timestamp(_) => {
            let dt = timestamp::to_utc(value, path)?;
            match timestamp::format_timestamp(&dt, opts.default_timestamp_format) {
                TimestampText::Quoted(s) => w.string(&s),
                TimestampText::Epoch(secs) => w.string(&secs.to_string()),
            }
        }
        other => return Err(mismatch(path, "string", other)),
    }
    Ok(())
}

// 2^63 and 2^64: the first floats past i64::MAX and u64::MAX.
const I64_END: f64 = 9_223_372_036_854_775_808.0;
const U64_END: f64 = 18_446_744_073_709_551_616.0;

/// Integral floats and numeric strings become integer literals.
fn encode_integer(value: &Value, w: &mut JsonWriter, path: &Path<'_>) -> Result<()> {
    match value {
        Value::Number(Number::F64(f)) => {
            let f = finite(*f, path)?;
            if f.fract() != 0.0 {
                return Err(mismatch(path, "integer", value));
            }
            if (-I64_END..I64_END).contains(&f) {
                w.raw(&(f as i64).to_string());
            } else if (0.0..U64_END).contains(&f) {
                w.raw(&(f as u64).to_string());
            } else {
                return Err(mismatch(path, "integer within 64 bits", value));
            }
        }
        Value::Number(n) => w.raw(&n.to_string()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                w.raw(&i.to_string());
            } else if let Ok(u) = s.parse::<u64>() {
                w.raw(&u.to_string());
            } else {
                return Err(mismatch(path, "integer", value));
            }
        }
        other => return Err(mismatch(path, "integer", other)),
    }
    Ok(())
}

fn encode_float(value: &Value, w: &mut JsonWriter, path: &Path<'_>) -> Result<()> {
    match value {
        Value::Number(Number::F64(f)) => w.raw(&format_json_f64(finite(*f, path)?)),
        Value::Number(n) => w.raw(&n.to_string()),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) => w.raw(&format_json_f64(finite(f, path)?)),
            Err(_) => return Err(mismatch(path, "float", value)),
        },
        other => return Err(mismatch(path, "float", other)),
    }
    Ok(())
}

fn encode_boolean(value: &Value, w: &mut JsonWriter, path: &Path<'_>) -> Result<()> {
    match value {
        Value::Bool(b) => w.bool(*b),
        Value::String(s) if s == "true" => w.bool(true),
        Value::String(s) if s == "false" => w.bool(false),
        other => return Err(mismatch(path, "boolean", other)),
    }
    Ok(())
}

fn write_timestamp(w: &mut JsonWriter, text: TimestampText) {
    match text {
        TimestampText::Quoted(s) => w.string(&s),
        TimestampText::Epoch(secs) => w.raw(&secs.to_string()),
    }
}
