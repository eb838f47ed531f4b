//! Immutable schema tree driving the encoder.
//!
//! A [`Shape`] is built once, either programmatically or from a declarative
//! description, and may then be shared across any number of encode calls and
//! threads. Descriptions look like:
//!
//! ```json
//! {
//!   "type": "structure",
//!   "members": {
//!     "name": { "type": "string", "serialized_name": "FullName" },
//!     "born": { "type": "timestamp", "metadata": { "timestamp_format": "rfc822" } },
//!     "tags": { "type": "list", "members": { "type": "string" } }
//!   }
//! }
//! ```

use serde_json::Value as Description;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Blob,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Timestamp => "timestamp",
            ScalarKind::Blob => "blob",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Members in declaration order, keyed by logical name.
    Structure(Vec<(String, Shape)>),
    List(Box<Shape>),
    /// Key shape is informational; only string keys are encoded.
    Map { key: Box<Shape>, value: Box<Shape> },
    Scalar(ScalarKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    output_name: Option<String>,
    timestamp_format: Option<String>,
}

impl Shape {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            output_name: None,
            timestamp_format: None,
        }
    }

    pub fn structure<K: Into<String>>(members: impl IntoIterator<Item = (K, Shape)>) -> Self {
        Self::new(ShapeKind::Structure(
            members.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        ))
    }

    pub fn list(element: Shape) -> Self {
        Self::new(ShapeKind::List(Box::new(element)))
    }

    pub fn map(value: Shape) -> Self {
        Self::map_with_keys(Shape::scalar(ScalarKind::String), value)
    }

    pub fn map_with_keys(key: Shape, value: Shape) -> Self {
        Self::new(ShapeKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    pub fn scalar(kind: ScalarKind) -> Self {
        Self::new(ShapeKind::Scalar(kind))
    }

    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    pub fn integer() -> Self {
        Self::scalar(ScalarKind::Integer)
    }

    pub fn float() -> Self {
        Self::scalar(ScalarKind::Float)
    }

    pub fn boolean() -> Self {
        Self::scalar(ScalarKind::Boolean)
    }

    pub fn timestamp() -> Self {
        Self::scalar(ScalarKind::Timestamp)
    }

    pub fn blob() -> Self {
        Self::scalar(ScalarKind::Blob)
    }

    /// Key emitted in place of the logical member name.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Raw `timestamp_format` metadata. It is not checked here; an
    /// unrecognized value fails when a timestamp is encoded.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    pub fn timestamp_format(&self) -> Option<&str> {
        self.timestamp_format.as_deref()
    }

    pub fn members(&self) -> &[(String, Shape)] {
        match &self.kind {
            ShapeKind::Structure(members) => members,
            _ => &[],
        }
    }

    pub fn member(&self, name: &str) -> Option<&Shape> {
        self.members()
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, s)| s)
    }

    /// Element shape of a list, or value shape of a map.
    pub fn element(&self) -> Option<&Shape> {
        match &self.kind {
            ShapeKind::List(e) => Some(e),
            ShapeKind::Map { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&Shape> {
        match &self.kind {
            ShapeKind::Map { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ShapeKind::Structure(_) => "structure",
            ShapeKind::List(_) => "list",
            ShapeKind::Map { .. } => "map",
            ShapeKind::Scalar(k) => k.as_str(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let desc: Description = serde_json::from_str(s)?;
        Self::from_description(&desc)
    }

    /// Build a shape tree from a declarative description.
    ///
    /// Fails with [`Error::Schema`] when a `type` tag is missing or unknown, or
    /// when a list/map lacks its element description. Unknown keys are ignored.
    pub fn from_description(desc: &Description) -> Result<Self> {
        build(desc, "$")
    }
}

fn build(desc: &Description, path: &str) -> Result<Shape> {
    let obj = desc
        .as_object()
        .ok_or_else(|| Error::schema(path, "shape description must be an object"))?;
    let type_tag = match obj.get("type") {
        Some(Description::String(t)) => t.as_str(),
        Some(_) => return Err(Error::schema(path, "`type` must be a string")),
        None => return Err(Error::schema(path, "missing `type`")),
    };

    let mut shape = match type_tag {
        "structure" => {
            let mut members = Vec::new();
            match obj.get("members") {
                None | Some(Description::Null) => {}
                Some(Description::Object(m)) => {
                    for (name, child) in m {
                        let child_path = format!("{path}.members.{name}");
                        members.push((name.clone(), build(child, &child_path)?));
                    }
                }
                Some(_) => {
                    return Err(Error::schema(
                        path,
                        "structure `members` must map member names to shapes",
                    ));
                }
            }
            Shape::new(ShapeKind::Structure(members))
        }
        "list" => Shape::list(element(obj, path)?),
        "map" => {
            let key = match obj.get("keys") {
                None | Some(Description::Null) => Shape::string(),
                Some(k) => build(k, &format!("{path}.keys"))?,
            };
            Shape::map_with_keys(key, element(obj, path)?)
        }
        "string" => Shape::string(),
        "integer" => Shape::integer(),
        "float" => Shape::float(),
        "boolean" => Shape::boolean(),
        "timestamp" => Shape::timestamp(),
        "blob" => Shape::blob(),
        other => {
            return Err(Error::schema(path, format!("unrecognized shape type `{other}`")));
        }
    };

    match obj.get("serialized_name") {
        None | Some(Description::Null) => {}
        Some(Description::String(name)) => shape.output_name = Some(name.clone()),
        Some(_) => return Err(Error::schema(path, "`serialized_name` must be a string")),
    }

    if let Some(fmt) = obj
        .get("metadata")
        .and_then(|m| m.get("timestamp_format"))
        .and_then(Description::as_str)
    {
        shape.timestamp_format = Some(fmt.to_string());
    }

    Ok(shape)
}

fn element(obj: &serde_json::Map<String, Description>, path: &str) -> Result<Shape> {
    match obj.get("members") {
        Some(child) if !child.is_null() => build(child, &format!("{path}.members")),
        _ => Err(Error::schema(path, "missing `members` element shape")),
    }
}
