//! Rounding and display formatting for monetary amounts

/// Round half-up to `decimals` places
///
/// Half-up means toward positive infinity on ties, so `-0.125` becomes
/// `-0.12` rather than `-0.13`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(decimals);
    // Adding 0.0 turns a negative zero into positive zero
    (value * scale + 0.5).floor() / scale + 0.0
}

/// Round a currency amount to the cent
pub fn round_currency(value: f64) -> f64 {
    round_to(value, 2)
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_ascii_uppercase().as_str() {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Render an amount for display, e.g. `$1,234.50`
pub fn format_currency(amount: f64, currency: &str) -> String {
    let cents = (round_currency(amount) * 100.0).round().abs() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}.{:02}", sign, symbol, grouped, fraction),
        None => format!(
            "{}{} {}.{:02}",
            sign,
            currency.to_ascii_uppercase(),
            grouped,
            fraction
        ),
    }
}

/// Render a percentage with one decimal, e.g. `15.0%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", round_to(value, 1))
}
