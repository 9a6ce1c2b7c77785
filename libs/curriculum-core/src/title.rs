//! Display names for module identifiers.

/// Convert an identifier such as `basic-mathematics` into `Basic Mathematics`.
///
/// `-` and `_` each become a single space. The first character after the
/// start or any space is upper-cased, every other character is lower-cased.
pub fn normalize(id: &str) -> String {
    let mut result = String::with_capacity(id.len());
    let mut capitalize_next = true;

    for c in id.chars() {
        if c == '-' || c == '_' {
            result.push(' ');
            capitalize_next = true;
        } else if c.is_whitespace() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}
