//! This module contains some functions that will help us managing strings.

/// Replicates a char n times.
pub fn replicate(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

/// Computes the column of a byte, counting chars from another byte.
///
/// ```
/// # use billdex::parser::utils::compute_column;
/// assert_eq!(compute_column("Fé%x", 0, 3), 2);
/// ```
pub fn compute_column(content: &str, start: usize, current: usize) -> usize {
    let mut column = 0;
    let mut pointer = start;

    for c in content[start..].chars() {
        if pointer >= current {
            break;
        }

        column += 1;
        pointer += c.len_utf8();
    }

    column
}

/// Returns the byte offset of a remaining input in the complete one.
pub fn offset(complete: &str, remaining: &str) -> usize {
    complete.len() - remaining.len()
}
