//! Subsequence search over ordered sequences.

/// Find the first contiguous occurrence of `needle` in `haystack`.
///
/// Works on any slice whose elements compare by equality: chars, tokens or
/// already-split sentence lists. The lowest matching index wins. An empty
/// `needle` matches at index 0.
///
/// # Example
///
/// ```
/// use sentclean::find_subsequence;
///
/// assert_eq!(find_subsequence(&[1, 2, 3, 2, 3], &[2, 3]), Some(1));
/// assert_eq!(find_subsequence(&["a", "b"], &["c"]), None);
/// ```
pub fn find_subsequence<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Find `needle` in `haystack`, returning a char offset rather than a byte offset.
pub fn find_str(haystack: &str, needle: &str) -> Option<usize> {
    let haystack: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    find_subsequence(&haystack, &needle)
}
