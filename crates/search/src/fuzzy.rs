//! Levenshtein edit distance.

/// Calculate Levenshtein edit distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions
/// or substitutions turning `a` into `b`. Lengths are measured in chars,
/// so inputs are expected to be normalized first.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_same() {
        assert_eq!(edit_distance("manicure", "manicure"), 0);
    }

    #[test]
    fn test_distance_one_edit() {
        assert_eq!(edit_distance("pestanas", "pestanaz"), 1);
    }

    #[test]
    fn test_distance_insert() {
        assert_eq!(edit_distance("manicur", "manicure"), 1);
    }

    #[test]
    fn test_distance_delete() {
        assert_eq!(edit_distance("pedicure", "pedicre"), 1);
    }

    #[test]
    fn test_distance_empty() {
        assert_eq!(edit_distance("", "gel"), 3);
        assert_eq!(edit_distance("gel", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_distance_classic() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("xyz", "nails"), 5);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("uñas", "unas"), 1);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn prop_identity(x in "\\PC{0,16}") {
            prop_assert_eq!(edit_distance(&x, &x), 0);
            prop_assert_eq!(edit_distance("", &x), x.chars().count());
        }

        #[test]
        fn prop_bounded_by_longer(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            let d = edit_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }
    }
}
