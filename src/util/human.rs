/// Format a raw byte count into a human-readable string: "12.50 MB"
pub fn fmt_bytes(bytes: u64) -> String {
    fmt_bytes_f(bytes as f64)
}

/// Same ladder as `fmt_bytes` for values that arrive as floats.
/// Negative and non-finite input renders as "0 B".
pub fn fmt_bytes_f(b: f64) -> String {
    const TB: f64 = 1e12;
    const GB: f64 = 1e9;
    const MB: f64 = 1e6;
    const KB: f64 = 1e3;
    let b = if b.is_finite() && b > 0.0 { b } else { 0.0 };
    // Tier is picked on the raw value, never on the rounded one.
    if b >= TB      { format!("{:.2} TB", b / TB) }
    else if b >= GB { format!("{:.2} GB", b / GB) }
    else if b >= MB { format!("{:.2} MB", b / MB) }
    else if b >= KB { format!("{:.2} KB", b / KB) }
    else            { format!("{} B", b.trunc() as u64) }
}

/// Format a percentage with no decimals: "84%"
pub fn fmt_pct(pct: f64) -> String {
    format!("{:.0}%", pct)
}

/// Clamp a usage percentage into the drawable 0–100 range.
pub fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}
