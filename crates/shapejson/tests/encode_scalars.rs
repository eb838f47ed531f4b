use serde_json::json;
use shapejson::{Error, Options, Shape, Value, encode_to_string};

fn structure(members: serde_json::Value) -> Result<Shape, shapejson::Error> {
    Shape::from_description(&json!({"type": "structure", "members": members}))
}

#[test]
fn integers_and_floats_are_bare_numbers() -> Result<(), Box<dyn std::error::Error>> {
    let shape = structure(json!({"count": {"type": "integer"}, "ratio": {"type": "float"}}))?;
    let value = Value::map([("count", Value::from(123)), ("ratio", Value::from(12.34))]);
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        r#"{"count":123,"ratio":12.34}"#
    );
    Ok(())
}

#[test]
fn large_unsigned_and_negative_integers() -> Result<(), Box<dyn std::error::Error>> {
    let shape = Shape::list(Shape::integer());
    let value = Value::List(vec![Value::from(u64::MAX), Value::from(-42i64)]);
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        "[18446744073709551615,-42]"
    );
    Ok(())
}

#[test]
fn booleans_are_literals() -> Result<(), Box<dyn std::error::Error>> {
    let shape = structure(json!({"hot": {"type": "boolean"}, "cold": {"type": "boolean"}}))?;
    let value = Value::from(json!({"hot": true, "cold": false}));
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        r#"{"hot":true,"cold":false}"#
    );
    Ok(())
}

#[test]
fn strings_use_json_escaping() -> Result<(), Box<dyn std::error::Error>> {
    let shape = Shape::string();
    let out = encode_to_string(&shape, &Value::from("say \"hi\"\n\\"), &Options::default())?;
    assert_eq!(out, r#""say \"hi\"\n\\""#);
    Ok(())
}

#[test]
fn blob_is_base64() -> Result<(), Box<dyn std::error::Error>> {
    let shape = structure(json!({"data": {"type": "blob"}}))?;
    let value = Value::map([("data", Value::bytes("hello"))]);
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        r#"{"data":"aGVsbG8="}"#
    );
    // string input is taken as its UTF-8 bytes
    let value = Value::map([("data", "hello")]);
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        r#"{"data":"aGVsbG8="}"#
    );
    Ok(())
}

#[test]
fn blob_rejects_numbers() {
    let err = encode_to_string(&Shape::blob(), &Value::from(5), &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Mismatch { expected: "bytes", found: "integer", .. }));
}

#[test]
fn non_finite_floats_are_rejected() {
    let shape = structure(json!({"ratio": {"type": "float"}})).unwrap();
    let value = Value::map([("ratio", f64::NAN)]);
    let err = encode_to_string(&shape, &value, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::NonFiniteFloat { ref path } if path == "$.ratio"));
}

#[test]
fn lenient_mode_applies_the_declared_scalar_codec() -> Result<(), Box<dyn std::error::Error>> {
    let shape = structure(json!({
        "id": {"type": "string"},
        "on": {"type": "string"},
        "n": {"type": "integer"},
        "ratio": {"type": "float"},
        "flag": {"type": "boolean"}
    }))?;
    let value = Value::from(json!({"id": 7, "on": true, "n": "8", "ratio": "0.5", "flag": "false"}));
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        r#"{"id":"7","on":"true","n":8,"ratio":0.5,"flag":false}"#
    );
    Ok(())
}

#[test]
fn numbers_under_string_shape_are_quoted() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode_to_string(&Shape::string(), &Value::from(7), &Options::default())?, r#""7""#);
    assert_eq!(encode_to_string(&Shape::string(), &Value::from(2.5), &Options::default())?, r#""2.5""#);
    Ok(())
}

#[test]
fn integral_float_under_integer_shape_drops_fraction() -> Result<(), Box<dyn std::error::Error>> {
    let shape = Shape::from_description(&json!({
        "type": "map",
        "members": {
            "type": "structure",
            "members": {"age": {"type": "integer", "serialized_name": "AGE"}}
        }
    }))?;
    let value = Value::from(json!({"John": {"age": 40.0}}));
    assert_eq!(
        encode_to_string(&shape, &value, &Options::default())?,
        r#"{"John":{"AGE":40}}"#
    );
    assert_eq!(encode_to_string(&Shape::integer(), &Value::from(-3.0), &Options::default())?, "-3");
    Ok(())
}

#[test]
fn fractional_float_under_integer_shape_is_rejected() {
    let shape = structure(json!({"age": {"type": "integer"}})).unwrap();
    let err = encode_to_string(&shape, &Value::map([("age", 40.5)]), &Options::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Mismatch { ref path, expected: "integer", found: "float" } if path == "$.age"
    ));
}

#[test]
fn unparseable_text_is_rejected_by_numeric_and_boolean_shapes() {
    for shape in [Shape::integer(), Shape::float(), Shape::boolean()] {
        let err = encode_to_string(&shape, &Value::from("abc"), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::Mismatch { found: "string", .. }));
    }
}

#[test]
fn scalar_shape_rejects_containers() {
    let err = encode_to_string(&Shape::string(), &Value::from(json!([1])), &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Mismatch { expected: "scalar", found: "list", .. }));
}
