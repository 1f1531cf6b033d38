/*!
# Utilities

Small helpers shared across the crate that do not belong to a specific graph concept.
*/

use std::cmp::Ordering;

/// Orders vertex labels for display: integer labels come first and are compared by value, all
/// other labels follow in lexicographic order. Integer labels of equal value (`"7"`, `"07"`) are
/// ordered by their text, so the order is total.
///
/// # Example
/// ```rust
/// use graphdraw::utils::compare_labels;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_labels("2", "10"), Ordering::Less);
/// assert_eq!(compare_labels("b", "10"), Ordering::Greater);
/// assert_eq!(compare_labels("1a", "2"), Ordering::Greater);
/// ```
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>().ok(), b.parse::<i64>().ok()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn numeric_labels_sort_by_value() {
        let sorted = ["10", "9", "-1", "100"]
            .into_iter()
            .sorted_by(|a, b| compare_labels(a, b))
            .collect_vec();
        assert_eq!(sorted, vec!["-1", "9", "10", "100"]);

        let sorted = ["b", "ab", "a"]
            .into_iter()
            .sorted_by(|a, b| compare_labels(a, b))
            .collect_vec();
        assert_eq!(sorted, vec!["a", "ab", "b"]);

        assert_eq!(compare_labels("07", "7"), Ordering::Less);
        assert_eq!(compare_labels("7", "7"), Ordering::Equal);
    }

    #[test]
    fn integers_precede_text() {
        let labels = ["2", "10", "1a", "b", "07", "-3", "A"];
        let sorted = labels
            .into_iter()
            .sorted_by(|a, b| compare_labels(a, b))
            .collect_vec();
        assert_eq!(sorted, vec!["-3", "2", "07", "10", "1a", "A", "b"]);

        for (a, b, c) in labels.into_iter().tuple_combinations() {
            for [x, y, z] in [[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
                if compare_labels(x, y).is_le() && compare_labels(y, z).is_le() {
                    assert!(compare_labels(x, z).is_le(), "{x} <= {y} <= {z}");
                }
            }
            assert_eq!(compare_labels(a, b), compare_labels(b, a).reverse());
        }
    }
}
