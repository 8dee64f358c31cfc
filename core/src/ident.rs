/// Turn a column name into something C# accepts as a property name.
///
/// Spaces become underscores, anything that is not a letter, digit or underscore is dropped, and
/// a leading digit gets an underscore in front. Numeric symbols that are not digits, like `²` or
/// `½`, are not valid in C# identifiers and are dropped as well. An input with nothing usable
/// yields an empty string.
pub fn sanitize_identifier(input: &str) -> String {
    let mut ident: String = input
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit() || *c == '_')
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
