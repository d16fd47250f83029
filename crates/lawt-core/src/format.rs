// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Display formatting
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Text renderings of values and history entries for result views.

use crate::history::HistoryEntry;

/// Four decimals; non-finite values as `NaN`, `Infinity`, `-Infinity`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// One line per history entry:
/// `Matrix addition · A: 2x2, B: 2x2, 0.004s, 97.44% · local fallback (model)`.
pub fn history_summary(entry: &HistoryEntry) -> String {
    let c = &entry.computation;
    let mut line = format!(
        "{} · A: {}",
        c.request.operation().display_name(),
        c.request.operand_a().shape()
    );
    if let Some(b) = c.request.operand_b() {
        line.push_str(&format!(", B: {}", b.shape()));
    }
    line.push_str(&format!(", {:.3}s", c.elapsed_seconds));
    if let Some(acc) = c.accuracy {
        line.push_str(&format!(", {acc}"));
    }
    line.push_str(&format!(" · {} ({})", c.source, c.method));
    line
}
