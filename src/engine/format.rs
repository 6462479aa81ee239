//! Dollar formatting shared by the narrative generator and report rendering.
//! On-screen and exported views must agree, so there is exactly one rule.

/// `$X.XM` at a million and up, `$XK` at a thousand and up, otherwise a plain
/// dollar figure with thousands separators.
pub fn fmt_dollar(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${:.0}K", amount / 1_000.0)
    } else {
        format!("${}", thousands(amount.round() as i64))
    }
}

/// Group digits with commas.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}
