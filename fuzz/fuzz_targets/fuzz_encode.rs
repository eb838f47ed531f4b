#![no_main]
use libfuzzer_sys::fuzz_target;
use shapejson::{Options, Shape, Value, encode_to_string};

// Any JSON document is tried both as a shape description and as a value.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(s) {
            let value = Value::from(json_value.clone());
            if let Ok(shape) = Shape::from_description(&json_value) {
                for strict in [false, true] {
                    let opts = Options { strict, ..Options::default() };
                    if let Ok(out) = encode_to_string(&shape, &value, &opts) {
                        serde_json::from_str::<serde_json::Value>(&out)
                            .expect("encoder produced invalid JSON");
                    }
                }
            }
        }
    }
});
