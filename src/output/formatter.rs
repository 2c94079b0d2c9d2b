use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::valuation::{PriceRange, ScoredProperty};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a point value, trimming a trailing .0 (e.g. "80" not "80.0")
pub fn format_point(point: f64) -> String {
    let formatted = format!("{:.1}", point);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Render a numeric price the way the portal writes them: whole euros,
/// space-grouped thousands ("305 000 €").
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} €", grouped)
    } else {
        format!("{} €", grouped)
    }
}

/// Format a score curve as an indexed table: Index, Point, Price, Id.
/// Point column is right-aligned, 8 chars wide.
pub fn format_ranked_table(curve: &[ScoredProperty], use_colors: bool) -> String {
    if curve.is_empty() {
        return "No listings to rank.".to_string();
    }

    let index_width = 3;
    let point_width = 8;

    curve
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index = format!("{:>width$}.", idx + 1, width = index_width);
            let point = format!("{:>width$}", format_point(scored.point), width = point_width);
            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    index.dimmed(),
                    point.bold(),
                    scored.price.green(),
                    scored.id.cyan()
                )
            } else {
                format!("{} {}  {}  {}", index, point, scored.price, scored.id)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two-line summary of the reference set's price extremes.
pub fn format_range(range: &PriceRange, use_colors: bool) -> String {
    let min_price = format_price(range.min.price);
    let max_price = format_price(range.max.price);
    if use_colors {
        format!(
            "min  {}  {}\nmax  {}  {}",
            min_price.green(),
            range.min.id.cyan(),
            max_price.green(),
            range.max.id.cyan()
        )
    } else {
        format!(
            "min  {}  {}\nmax  {}  {}",
            min_price, range.min.id, max_price, range.max.id
        )
    }
}
