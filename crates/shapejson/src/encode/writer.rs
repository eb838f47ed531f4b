use crate::encode::primitives;

enum Frame {
    Object { first: bool },
    Array { first: bool },
}

/// Compact JSON sink. Inserts separators; never inserts whitespace.
pub struct JsonWriter {
    out: String,
    stack: Vec<Frame>,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            stack: Vec::new(),
        }
    }

    // Values inside an object follow their key, so only arrays need a comma here.
    fn before_value(&mut self) {
        if let Some(Frame::Array { first }) = self.stack.last_mut() {
            if !*first {
                self.out.push(',');
            }
            *first = false;
        }
    }

    pub fn begin_object(&mut self) {
        self.before_value();
        self.out.push('{');
        self.stack.push(Frame::Object { first: true });
    }

    pub fn end_object(&mut self) {
        debug_assert!(matches!(self.stack.last(), Some(Frame::Object { .. })));
        self.stack.pop();
        self.out.push('}');
    }

    pub fn begin_array(&mut self) {
        self.before_value();
        self.out.push('[');
        self.stack.push(Frame::Array { first: true });
    }

    pub fn end_array(&mut self) {
        debug_assert!(matches!(self.stack.last(), Some(Frame::Array { .. })));
        self.stack.pop();
        self.out.push(']');
    }

    pub fn key(&mut self, key: &str) {
        if let Some(Frame::Object { first }) = self.stack.last_mut() {
            if !*first {
                self.out.push(',');
            }
            *first = false;
        }
        primitives::escape_and_quote_into(&mut self.out, key);
        self.out.push(':');
    }

    pub fn string(&mut self, s: &str) {
        self.before_value();
        primitives::escape_and_quote_into(&mut self.out, s);
    }

    /// Emit an already-valid JSON literal (number, `true`, `null`, ...).
    pub fn raw(&mut self, literal: &str) {
        self.before_value();
        self.out.push_str(literal);
    }

    pub fn null(&mut self) {
        self.raw(primitives::format_null());
    }

    pub fn bool(&mut self, b: bool) {
        self.raw(primitives::format_bool(b));
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
