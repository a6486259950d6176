// File: ./src/urlenc.rs
// Minimal percent-encoding for URL path segments and query values.

/// Encode everything except RFC 3986 unreserved characters. Strict enough
/// for object names with slashes and for full URLs in a query parameter.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
