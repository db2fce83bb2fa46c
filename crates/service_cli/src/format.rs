//! Presentation helpers for command output.

/// Fixed-point `|value|` with comma-separated thousands, and the sign to
/// print in front of it.
fn grouped(value: f64, decimals: usize) -> (&'static str, String) {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }

    // No sign on values that round to zero
    let negative = value < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b));
    (if negative { "-" } else { "" }, out)
}

/// Formats a price as US dollars with three decimals and thousands
/// separators, e.g. `$1,234.568`.
pub fn usd(value: f64) -> String {
    let (sign, digits) = grouped(value, 3);
    format!("{}${}", sign, digits)
}

/// Rounds to four decimal places.
#[inline]
pub fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

/// Formats a decimal volatility as a percentage with two decimals and
/// thousands separators, e.g. `0.2` as `20.00%`.
pub fn percent(value: f64) -> String {
    let (sign, digits) = grouped(value * 100.0, 2);
    format!("{}{}%", sign, digits)
}

/// Renders two-column rows as a box-drawn table.
pub fn table(rows: &[(String, String)]) -> String {
    let left = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let right = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |l: &str, m: &str, r: &str| {
        format!("{}{}{}{}{}", l, "─".repeat(left + 2), m, "─".repeat(right + 2), r)
    };

    let mut out = vec![rule("┌", "┬", "┐")];
    for (key, value) in rows {
        out.push(format!("│ {:<left$} │ {:>right$} │", key, value));
    }
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_thousands_separators() {
        assert_eq!(usd(1234.5678), "$1,234.568");
        assert_eq!(usd(1_234_567.0), "$1,234,567.000");
        assert_eq!(usd(999.9999), "$1,000.000");
    }

    #[test]
    fn test_usd_small_values() {
        assert_eq!(usd(6.888728577680624), "$6.889");
        assert_eq!(usd(0.0), "$0.000");
        assert_eq!(usd(-0.0001), "$0.000");
    }

    #[test]
    fn test_usd_negative() {
        assert_eq!(usd(-1234.5), "-$1,234.500");
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.5977342), 0.5977);
        assert_eq!(round4(-0.02223551), -0.0222);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.2), "20.00%");
        assert_eq!(percent(0.123456), "12.35%");
        assert_eq!(percent(0.001), "0.10%");
    }

    #[test]
    fn test_percent_thousands_separators() {
        // Runaway volatilities from an abandoned search stay readable
        assert_eq!(percent(12.3456), "1,234.56%");
        assert_eq!(percent(49_800.0), "4,980,000.00%");
    }

    #[test]
    fn test_table_layout() {
        let rows = vec![
            ("Price".to_string(), "$6.889".to_string()),
            ("Delta".to_string(), "0.5977".to_string()),
        ];
        let rendered = table(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "│ Price │ $6.889 │");
        assert_eq!(lines[2], "│ Delta │ 0.5977 │");
        assert!(lines[0].starts_with('┌') && lines[3].ends_with('┘'));
    }
}
