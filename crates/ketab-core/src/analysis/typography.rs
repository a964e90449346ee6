//! Typography heuristics over raw text.

/// Ordered substring checks: `(pattern, message)`.
///
/// Each rule contributes its message at most once, no matter how many times
/// the pattern occurs.
pub const TYPOGRAPHY_RULES: &[(&str, &str)] = &[
    (" ,", "remove space before comma."),
    (" ;", "no space should precede semicolon."),
    ("! !", "avoid consecutive exclamation marks."),
    ("? ?", "avoid consecutive question marks."),
];

/// Run every typography rule against `text`, in table order.
#[tracing::instrument(skip_all)]
pub fn check_typography(text: &str) -> Vec<String> {
    TYPOGRAPHY_RULES
        .iter()
        .filter(|(pattern, _)| text.contains(pattern))
        .map(|(_, message)| (*message).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_has_no_alerts() {
        assert!(check_typography("Clean text, nothing wrong; really!").is_empty());
    }

    #[test]
    fn comma_alert_reported_once() {
        let alerts = check_typography("word , next , and , more");
        assert_eq!(alerts, vec!["remove space before comma."]);
    }

    #[test]
    fn alerts_follow_table_order() {
        let alerts = check_typography("wow? ? no ; yes ! ! a , b");
        assert_eq!(
            alerts,
            vec![
                "remove space before comma.",
                "no space should precede semicolon.",
                "avoid consecutive exclamation marks.",
                "avoid consecutive question marks.",
            ]
        );
    }

    #[test]
    fn adjacent_marks_without_space_not_flagged() {
        assert!(check_typography("What?? Stop!!").is_empty());
    }

    #[test]
    fn persian_comma_not_covered() {
        // Only the ASCII comma pattern is checked.
        assert!(check_typography("کتاب ، دفتر").is_empty());
    }
}
