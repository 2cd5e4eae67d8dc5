pub const ELLIPSIS: char = '…';

/// Shortens `value` to at most `limit` characters, appending an ellipsis
/// when anything was cut off.
pub fn truncate(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((end, _)) => {
            let mut short = value[..end].to_owned();
            short.push(ELLIPSIS);
            short
        }
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_values() {
        assert_eq!(truncate("Stamppot", 18), "Stamppot");
        assert_eq!(truncate("exactly eighteen!!", 18), "exactly eighteen!!");
        assert_eq!(truncate("", 18), "");
    }

    #[test]
    fn test_truncate_long_values() {
        assert_eq!(
            truncate("Taco night with friends", 18),
            "Taco night with fr…"
        );
        assert_eq!(truncate("nineteen characters", 18), "nineteen character…");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("crème brûlée à la maison", 12), "crème brûlée…");
    }
}
