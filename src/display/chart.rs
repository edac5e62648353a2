//! Text chart pieces shared by the report views

const FILLED: char = '█';
const EMPTY: char = '░';

/// A bar `width` cells wide, filled in proportion to `value / max`
///
/// Non-positive values and an empty scale draw blank space.
pub fn bar(value: i64, max: i64, width: usize) -> String {
    if value <= 0 || max <= 0 {
        return " ".repeat(width);
    }

    // i128 keeps the product exact for any pair of i64 totals.
    let filled = (i128::from(value) * width as i128 + i128::from(max) / 2) / i128::from(max);
    let filled = (filled as usize).min(width);

    let mut out = String::with_capacity(width * FILLED.len_utf8());
    out.extend(std::iter::repeat(FILLED).take(filled));
    out.extend(std::iter::repeat(EMPTY).take(width - filled));
    out
}

/// Category share as shown next to its bar: "73%", "4.5%", "<0.1%"
pub fn share(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        "<0.1%".to_string()
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal rule under a chart title
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Cut `text` to at most `width` characters, marking the cut with "..."
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.extend("...".chars().take(width - keep));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_proportional() {
        let half = bar(600, 1200, 10);
        assert_eq!(half.chars().filter(|c| *c == FILLED).count(), 5);
        assert_eq!(half.chars().count(), 10);

        assert_eq!(bar(1200, 1200, 4), "████");
    }

    #[test]
    fn test_bar_blank_for_nothing_spent() {
        assert_eq!(bar(0, 1200, 4), "    ");
        assert_eq!(bar(-50, 1200, 4), "    ");
        assert_eq!(bar(100, 0, 4), "    ");
    }

    #[test]
    fn test_bar_handles_extreme_totals() {
        assert_eq!(bar(i64::MAX, i64::MAX, 3), "███");
        assert_eq!(bar(1, i64::MAX, 3), "░░░");
    }

    #[test]
    fn test_share() {
        assert_eq!(share(0.05), "<0.1%");
        assert_eq!(share(0.0), "0.0%");
        assert_eq!(share(4.5), "4.5%");
        assert_eq!(share(73.33), "73%");
        assert_eq!(share(100.0), "100%");
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("weekly groceries", 10), "weekly ...");
        assert_eq!(clip("rent", 10), "rent");
        assert_eq!(clip("electricity", 2), "..");
        assert_eq!(clip("お昼ごはんとコーヒー", 6), "お昼ご...");
    }
}
