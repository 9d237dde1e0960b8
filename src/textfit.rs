//! Width-budgeted text truncation.
//!
//! The layout only needs a coarse answer to "does this line fit": it works
//! from a fixed per-character pixel width (one constant per font role, see
//! [`crate::config`]) rather than querying glyph metrics. Callers that need
//! exact placement (the centered wind line, the right-aligned clock) use the
//! rasterizer's own alignment handling instead of this estimator.

/// Marker appended to truncated strings.
///
/// Three ASCII dots rather than the single-glyph ellipsis, which the
/// ISO 8859-1 fonts do not carry.
pub const ELLIPSIS: &str = "...";

/// Fit `text` into a pixel budget, truncating with an ellipsis if needed.
///
/// `char_width_px` is the estimated width of one character; the budget is
/// converted to a character count and the string is cut to
/// `count - ELLIPSIS.len()` characters with the marker appended. Budgets
/// smaller than the marker itself collapse to the bare marker. The cut is
/// made on `char` boundaries, so multi-byte input never panics.
pub fn fit_to_width(text: &str, char_width_px: u32, budget_px: u32) -> String {
    let max_chars = (budget_px / char_width_px.max(1)) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept = max_chars.saturating_sub(ELLIPSIS.len());
    let mut fitted: String = text.chars().take(kept).collect();
    fitted.push_str(ELLIPSIS);
    fitted
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_is_untouched() {
        assert_eq!(fit_to_width("Clear sky", 10, 200), "Clear sky");
    }

    #[test]
    fn test_exact_fit_is_untouched() {
        // 9 chars at 10px each in a 90px budget
        assert_eq!(fit_to_width("Clear sky", 10, 90), "Clear sky");
    }

    #[test]
    fn test_long_string_is_truncated_with_ellipsis() {
        let fitted = fit_to_width("overcast clouds with drizzle", 10, 100);
        assert_eq!(fitted, "overcas...");
        assert_eq!(fitted.chars().count(), 10);
    }

    #[test]
    fn test_never_exceeds_character_budget() {
        let text = "a long headline about nothing in particular";
        for budget in 0..300 {
            let fitted = fit_to_width(text, 9, budget);
            let max_chars = (budget / 9) as usize;
            if text.chars().count() > max_chars {
                assert!(
                    fitted.chars().count() <= max_chars.max(ELLIPSIS.len()),
                    "budget {budget}px produced {} chars",
                    fitted.chars().count()
                );
            }
        }
    }

    #[test]
    fn test_tiny_budget_collapses_to_bare_ellipsis() {
        // Budgets below three characters leave no room for content
        assert_eq!(fit_to_width("sunny", 10, 29), ELLIPSIS);
        assert_eq!(fit_to_width("sunny", 10, 0), ELLIPSIS);
    }

    #[test]
    fn test_zero_char_width_does_not_divide_by_zero() {
        assert_eq!(fit_to_width("sunny", 0, 5), "sunny");
    }

    #[test]
    fn test_multibyte_input_cuts_on_char_boundaries() {
        // Each chunk is one char but two bytes in UTF-8
        let fitted = fit_to_width("umidità però è così", 10, 100);
        assert_eq!(fitted.chars().count(), 10);
        assert!(fitted.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fit_to_width("", 10, 100), "");
        assert_eq!(fit_to_width("", 10, 0), "");
    }
}
