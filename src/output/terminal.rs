//! Terminal output utilities.

/// Format a label/value pair with the label right-aligned to `width`.
///
/// # Arguments
/// * `label` - The field name
/// * `value` - The value to show after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let value_str = value.to_string();
    if label.len() >= width {
        format!("{label}: {value_str}")
    } else {
        format!("{label:>width$}: {value_str}")
    }
}

/// Group digits in thousands, e.g. `4294967296` -> `4,294,967,296`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", "x", 10), "      test: x");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", "x", 4), "test: x");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_label", 1, 5), "long_label: 1");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field("n", 42, 3), "  n: 42");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(254), "254");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(65536), "65,536");
        assert_eq!(group_digits(4294967296), "4,294,967,296");
    }
}
