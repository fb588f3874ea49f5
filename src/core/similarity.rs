//! Fuzzy string matching for guess evaluation
//!
//! Implements the Ratcliff/Obershelp ratio: the total length of recursively
//! matched longest common substrings, normalized by the combined length of
//! both inputs. Compatible with Python's `difflib.SequenceMatcher.ratio`.

/// Compare two strings and return a closeness score in `[0.0, 1.0]`.
///
/// 1.0 means identical, 0.0 means no characters in common. The score is
/// monotonically related to the length of matching contiguous runs relative
/// to total length. Case-insensitive comparison is the caller's
/// responsibility: lower-case both inputs before calling.
///
/// # Examples
/// ```
/// use wikiflicks::core::similarity;
///
/// assert_eq!(similarity("inception", "inception"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// assert!(similarity("the matrix", "matrix") > 0.7);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        // Two empty strings are a perfect match
        return 1.0;
    }

    let matches = matching_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

/// Total characters matched by recursively taking the longest common block
/// and then matching the regions to its left and right independently.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + len..], &b[j + len..])
}

/// Find the longest contiguous block common to `a` and `b`.
///
/// Returns `(start_in_a, start_in_b, length)`. Ties resolve to the block
/// appearing earliest in `a`, then earliest in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);

    // Dynamic programming over common-suffix lengths, one row at a time.
    let mut prev = vec![0_usize; b.len() + 1];
    for (i, &a_char) in a.iter().enumerate() {
        let mut current = vec![0_usize; b.len() + 1];
        for (j, &b_char) in b.iter().enumerate() {
            if a_char == b_char {
                let len = prev[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = current;
    }

    best
}
