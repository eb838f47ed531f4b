#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::{Arbitrary, Unstructured};
use shapejson::{Options, Shape, TimestampFormat, Value, encode_to_string};

const MAX_DEPTH: usize = 6;
const MAX_MEMBERS: usize = 8;

#[derive(Arbitrary, Debug)]
struct FuzzShape {
    choice: u8,
    renamed: bool,
}

impl FuzzShape {
    fn build(&self, u: &mut Unstructured, depth: usize) -> arbitrary::Result<Shape> {
        let choice = if depth >= MAX_DEPTH { self.choice % 6 } else { self.choice % 9 };
        let shape = match choice {
            0 => Shape::string(),
            1 => Shape::integer(),
            2 => Shape::float(),
            3 => Shape::boolean(),
            4 => {
                let fmt: u8 = u.arbitrary()?;
                match fmt % 4 {
                    0 => Shape::timestamp(),
                    1 => Shape::timestamp().with_timestamp_format("rfc822"),
                    2 => Shape::timestamp().with_timestamp_format("unixtimestamp"),
                    _ => Shape::timestamp().with_timestamp_format(u.arbitrary::<String>()?),
                }
            }
            5 => Shape::blob(),
            6 => {
                let n = u.int_in_range(0..=MAX_MEMBERS)?;
                let mut members = Vec::with_capacity(n);
                for i in 0..n {
                    let child: FuzzShape = u.arbitrary()?;
                    members.push((format!("m{}", i), child.build(u, depth + 1)?));
                }
                Shape::structure(members)
            }
            7 => Shape::list(u.arbitrary::<FuzzShape>()?.build(u, depth + 1)?),
            _ => Shape::map(u.arbitrary::<FuzzShape>()?.build(u, depth + 1)?),
        };
        Ok(if self.renamed {
            shape.with_output_name(u.arbitrary::<String>()?)
        } else {
            shape
        })
    }
}

fn arbitrary_value(u: &mut Unstructured, depth: usize) -> arbitrary::Result<Value> {
    let choice: u8 = u.arbitrary()?;
    let choice = if depth >= MAX_DEPTH { choice % 7 } else { choice % 9 };
    Ok(match choice {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => Value::from(u.arbitrary::<i64>()?),
        3 => Value::from(u.arbitrary::<f64>()?),
        4 => Value::String(u.arbitrary()?),
        5 => Value::Bytes(u.arbitrary()?),
        6 => Value::from(u.arbitrary::<i32>()? as i64),
        7 => {
            let n = u.int_in_range(0..=MAX_MEMBERS)?;
            let mut items = Vec::with_capacity(n);
            for _ in 0..n {
                items.push(arbitrary_value(u, depth + 1)?);
            }
            Value::List(items)
        }
        _ => {
            let n = u.int_in_range(0..=MAX_MEMBERS)?;
            let mut entries = Vec::with_capacity(n);
            for i in 0..n {
                let key = if u.arbitrary::<bool>()? { format!("m{}", i) } else { u.arbitrary()? };
                entries.push((key, arbitrary_value(u, depth + 1)?));
            }
            Value::Map(entries)
        }
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(fs) = u.arbitrary::<FuzzShape>() else { return };
    let Ok(shape) = fs.build(&mut u, 0) else { return };
    let Ok(value) = arbitrary_value(&mut u, 0) else { return };

    for default_timestamp_format in [TimestampFormat::Iso8601, TimestampFormat::UnixTimestamp] {
        let opts = Options { default_timestamp_format, strict: false };
        if let Ok(out) = encode_to_string(&shape, &value, &opts) {
            if let Err(e) = serde_json::from_str::<serde_json::Value>(&out) {
                panic!("invalid JSON from encoder: {e}\nshape: {shape:?}\nvalue: {value:?}\nout: {out}");
            }
        }
    }
});
