//! Move comparison helpers shared by both perspective branches.

/// Strip a trailing check or mate marker.
pub fn strip_check_suffix(mv: &str) -> &str {
    mv.trim_end_matches(|c: char| c == '+' || c == '#')
}

/// Equality that ignores `+`/`#`, so `Nc7`, `Nc7+` and `Nc7#` compare equal.
pub fn same_move(a: &str, b: &str) -> bool {
    strip_check_suffix(a) == strip_check_suffix(b)
}

/// True when every target appears somewhere in `moves`. Order is not checked.
pub fn all_present(moves: &[&str], targets: &[&str]) -> bool {
    targets
        .iter()
        .all(|target| moves.iter().any(|mv| same_move(mv, target)))
}
