//! Display formatting helpers

/// Group an integer with `,` every three digits: 5847 -> "5,847"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Uppercase the first character only
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shortest decimal form: 24.5 -> "24.5", 1.8 -> "1.8", 68.0 -> "68"
pub fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(5847), "5,847");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("feeding"), "Feeding");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal(24.5), "24.5");
        assert_eq!(decimal(1.8), "1.8");
        assert_eq!(decimal(68.0), "68");
    }
}
