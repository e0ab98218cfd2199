const DEFAULT_NAME: &str = "world";

/// Formats a greeting for the given name.
///
/// The name is embedded verbatim, any text value is accepted.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Trims surrounding whitespace, falling back to the default name when
/// nothing is left.
pub fn resolve_name(input: &str) -> &str {
    let name = input.trim();
    if name.is_empty() {
        DEFAULT_NAME
    } else {
        name
    }
}
