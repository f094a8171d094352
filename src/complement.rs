//! Base complement transform (A <-> T, C <-> G).

/// Returns the complementary base, or `None` for anything other than
/// uppercase A, C, G, T.
pub fn complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Complements every base of `bases`, preserving order.
///
/// Returns `None` if any character is not an uppercase base.
pub fn complement(bases: &str) -> Option<String> {
    bases.chars().map(complement_base).collect()
}
