// Output formatting: terminal display and markdown tables.

pub mod markdown;
pub mod terminal;

use std::collections::BTreeSet;

/// Join labels with ", ", showing at most `max_labels` and a "(+N more)" tail.
///
/// `max_labels == 0` means no limit.
pub fn preview_labels(labels: &BTreeSet<String>, max_labels: usize) -> String {
    if max_labels == 0 || labels.len() <= max_labels {
        return labels.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    }
    let shown: Vec<&str> = labels.iter().take(max_labels).map(String::as_str).collect();
    format!("{} (+{} more)", shown.join(", "), labels.len() - max_labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn preview_short_list_in_full() {
        assert_eq!(preview_labels(&set(&["b", "a"]), 5), "a, b");
    }

    #[test]
    fn preview_truncates_with_count() {
        assert_eq!(preview_labels(&set(&["a", "b", "c", "d"]), 2), "a, b (+2 more)");
    }

    #[test]
    fn preview_zero_means_unlimited() {
        assert_eq!(preview_labels(&set(&["a", "b", "c"]), 0), "a, b, c");
    }
}
