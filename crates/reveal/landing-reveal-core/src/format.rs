//! Counter text formatting.

/// Render `value` with a separator between each group of three digits,
/// e.g. `1234567` with `","` becomes `"1,234,567"`. An empty separator
/// leaves the digits ungrouped.
pub fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    if separator.is_empty() || digits.len() <= 3 {
        return digits;
    }
    let groups = (digits.len() - 1) / 3;
    let mut out = String::with_capacity(digits.len() + groups * separator.len());
    let lead = digits.len() % 3;
    let lead = if lead == 0 { 3 } else { lead };
    out.push_str(&digits[..lead]);
    let mut rest = &digits[lead..];
    while !rest.is_empty() {
        out.push_str(separator);
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    out
}
