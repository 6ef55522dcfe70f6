//! Phone number masking

/// Maximum number of digits the mask can hold
pub const PHONE_DIGITS: usize = 10;

/// Reformat raw input into the `(AAA) PPP-LLLL` mask, leaving out pieces not yet typed.
///
/// Input with more than ten digits is returned unchanged so over-length
/// values do not keep growing.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > PHONE_DIGITS {
        return raw.to_string();
    }

    let area = &digits[..digits.len().min(3)];
    let prefix = &digits[area.len()..digits.len().min(6)];
    let line = &digits[area.len() + prefix.len()..];

    let mut formatted = String::with_capacity(14);
    if !area.is_empty() {
        formatted.push('(');
        formatted.push_str(area);
    }
    if !prefix.is_empty() {
        formatted.push_str(") ");
        formatted.push_str(prefix);
    }
    if !line.is_empty() {
        formatted.push('-');
        formatted.push_str(line);
    }
    formatted
}

/// True when the digits of `value` are one digit repeated ten times, e.g. `(111) 111-1111`
pub fn has_repeated_digits(value: &str) -> bool {
    let mut digits = value.chars().filter(char::is_ascii_digit);
    let Some(first) = digits.next() else {
        return false;
    };
    let mut count = 1;
    for d in digits {
        if d != first {
            return false;
        }
        count += 1;
    }
    count == PHONE_DIGITS
}
