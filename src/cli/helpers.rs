//! Shared helper functions for CLI commands

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::Store;

/// Open the workspace store, honoring the global `--dir` override
pub fn open_store(global: &GlobalOpts) -> Result<Store> {
    let store = match &global.dir {
        Some(dir) => Store::discover_from(dir),
        None => Store::discover(),
    };
    store.map_err(|e| miette::miette!("{}", e))
}

/// Truncate a string to max_len characters, adding "..." if truncated.
/// Counts characters rather than bytes so the cut never splits a
/// multibyte character.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output (RFC 4180)
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render a progress fraction as a fixed-width bar with a percentage
pub fn progress_bar(fraction: f64) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * 10.0).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        clamped * 100.0
    )
}

/// Format an optional statistic for table output
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}
