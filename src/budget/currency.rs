/// Convert a free-text cost such as `"IDR 50.000"` into a number.
///
/// Everything except ASCII digits, commas and periods is dropped and commas are read
/// as decimal points, so `"IDR 50.000"` yields `50.0` and `"1,234.56"` yields `1.234`.
/// The longest leading numeric prefix is parsed; anything unparseable yields `0.0`.
pub fn parse_currency_to_number(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    numeric_prefix(&cleaned)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Longest prefix of the form `digits [. digits]` containing at least one digit.
fn numeric_prefix(cleaned: &str) -> Option<&str> {
    let bytes = cleaned.as_bytes();
    let integer_digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        None
    } else {
        Some(&cleaned[..end])
    }
}
