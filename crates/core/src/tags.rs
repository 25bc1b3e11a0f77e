//! Tag normalization for prompts.

/// Normalize a raw tag list: trim whitespace, lowercase, drop empties, and
/// deduplicate while preserving first-seen order.
pub fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || out.contains(&tag) {
            continue;
        }
        out.push(tag);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lowercases_and_trims() {
        let result = normalize_tags(tags(&["  Rust ", "GPT-4"]));
        assert_eq!(result, tags(&["rust", "gpt-4"]));
    }

    #[test]
    fn drops_empties_and_duplicates() {
        let result = normalize_tags(tags(&["ai", "", "  ", "AI", "ai", "ml"]));
        assert_eq!(result, tags(&["ai", "ml"]));
    }

    #[test]
    fn preserves_first_seen_order() {
        let result = normalize_tags(tags(&["zeta", "Alpha", "ZETA", "beta"]));
        assert_eq!(result, tags(&["zeta", "alpha", "beta"]));
    }
}
