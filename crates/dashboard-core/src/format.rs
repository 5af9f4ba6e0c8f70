// File: crates/dashboard-core/src/format.rs
// Summary: Display formatting for metric cards.

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `$1,234.56` style currency with two decimals.
pub fn format_currency(v: f64) -> String {
    if !v.is_finite() {
        return "n/a".to_string();
    }
    let cents = (v.abs() * 100.0).round() as u64;
    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}
