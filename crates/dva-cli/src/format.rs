//! Number formatting for terminal output

/// Format with a fixed number of decimals and comma thousands separators
pub fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(150000.0, 2), "150,000.00");
        assert_eq!(grouped(1000000.0, 2), "1,000,000.00");
        assert_eq!(grouped(999.0, 2), "999.00");
        assert_eq!(grouped(9.1535616, 3), "9.154");
        assert_eq!(grouped(0.0, 2), "0.00");
        assert_eq!(grouped(1234.4, 0), "1,234");
    }

    #[test]
    fn test_grouped_negative() {
        assert_eq!(grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(grouped(-0.0001, 2), "0.00");
    }
}
