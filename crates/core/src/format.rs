//! Text shown next to chart points.

/// Format money with comma thousands separators and two decimals,
/// e.g. `1234567.891` → `"1,234,567.89"`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" reads as noise on a chart
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Cut `text` to `max_chars` characters, appending `ellipsis` when cut.
/// Counts chars, never splits a multi-byte character.
pub fn truncate_label(text: &str, max_chars: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ellipsis}", &text[..byte_idx]),
        None => text.to_string(),
    }
}
