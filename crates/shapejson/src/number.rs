/// Format a finite f64 as a JSON number literal.
///
/// Uses the shortest representation that round-trips (`12.34` stays `12.34`).
/// Integral values keep a `.0` suffix so they remain floats on the wire.
/// Callers must reject non-finite values first.
pub(crate) fn format_json_f64(value: f64) -> String {
    debug_assert!(value.is_finite(), "format_json_f64 called with non-finite value");
    let mut buf = ryu::Buffer::new();
    String::from(buf.format_finite(value))
}
