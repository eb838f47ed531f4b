#![cfg(feature = "serde")]
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::json;
use shapejson::{Options, Shape, Value};

struct Raw(Vec<u8>);

impl Serialize for Raw {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bytes(&self.0)
    }
}

#[derive(Serialize)]
struct Person {
    name: String,
    age: u32,
    born: DateTime<Utc>,
    avatar: Raw,
    nickname: Option<String>,
    internal_id: u64,
}

fn person_shape() -> Result<Shape, shapejson::Error> {
    Shape::from_description(&json!({
        "type": "structure",
        "members": {
            "name": {"type": "string", "serialized_name": "FullName"},
            "age": {"type": "integer"},
            "born": {"type": "timestamp", "metadata": {"timestamp_format": "unixtimestamp"}},
            "avatar": {"type": "blob"},
            "nickname": {"type": "string"}
        }
    }))
}

#[test]
fn typed_struct_encodes_through_shape() -> Result<(), Box<dyn std::error::Error>> {
    let p = Person {
        name: "John Doe".into(),
        age: 40,
        born: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        avatar: Raw(b"hello".to_vec()),
        nickname: None,
        internal_id: 9,
    };
    let out = shapejson::encode_serialize_to_string(&person_shape()?, &p, &Options::default())?;
    assert_eq!(
        out,
        r#"{"FullName":"John Doe","age":40,"born":1672531200,"avatar":"aGVsbG8="}"#
    );
    Ok(())
}

#[test]
fn serialize_bytes_becomes_bytes_value() -> Result<(), Box<dyn std::error::Error>> {
    let v = shapejson::ser::to_value(&Raw(vec![1, 2]))?;
    assert_eq!(v, Value::Bytes(vec![1, 2]));
    Ok(())
}

#[derive(Serialize)]
enum Event {
    Ping,
    Moved { x: i32 },
}

#[test]
fn enums_build_tagged_maps() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(shapejson::ser::to_value(&Event::Ping)?, Value::from("Ping"));
    assert_eq!(
        shapejson::ser::to_value(&Event::Moved { x: 3 })?,
        Value::map([("Moved", Value::map([("x", 3)]))])
    );
    Ok(())
}

#[test]
fn integer_map_keys_are_stringified() -> Result<(), Box<dyn std::error::Error>> {
    let mut m = std::collections::BTreeMap::new();
    m.insert(2, "b");
    m.insert(1, "a");
    let out = shapejson::ser::to_string(&Shape::map(Shape::string()), &m, &Options::default())?;
    assert_eq!(out, r#"{"1":"a","2":"b"}"#);
    Ok(())
}

#[test]
fn to_writer_matches_to_string() -> Result<(), Box<dyn std::error::Error>> {
    let shape = Shape::list(Shape::integer());
    let mut buf = Vec::new();
    shapejson::ser::to_writer(&mut buf, &shape, &vec![1, 2, 3], &Options::default())?;
    assert_eq!(String::from_utf8(buf)?, "[1,2,3]");

    let mut buf = Vec::new();
    shapejson::encode_to_writer(&mut buf, &shape, &Value::from(json!([1, 2, 3])), &Options::default())?;
    assert_eq!(String::from_utf8(buf)?, "[1,2,3]");
    Ok(())
}
