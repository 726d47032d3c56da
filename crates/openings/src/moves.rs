//! Move-stream views over a SAN move list.
//!
//! Ply 0 is White's first move, ply 1 Black's first move, and so on. Even
//! indices always belong to White and odd indices to Black, whichever side
//! the tracked player had.

/// Number of plies the classifier is allowed to look at.
pub const OPENING_WINDOW_PLIES: usize = 20;

/// White's moves (even plies), in play order.
pub fn white_moves<S: AsRef<str>>(moves: &[S]) -> Vec<&str> {
    moves.iter().step_by(2).map(AsRef::as_ref).collect()
}

/// Black's moves (odd plies), in play order.
pub fn black_moves<S: AsRef<str>>(moves: &[S]) -> Vec<&str> {
    moves.iter().skip(1).step_by(2).map(AsRef::as_ref).collect()
}

/// The first `OPENING_WINDOW_PLIES` plies (or fewer for short games).
pub fn opening_window<S: AsRef<str>>(moves: &[S]) -> Vec<&str> {
    moves
        .iter()
        .take(OPENING_WINDOW_PLIES)
        .map(AsRef::as_ref)
        .collect()
}

/// The opening window of a game with its per-side views precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningWindow<'a> {
    plies: Vec<&'a str>,
    white: Vec<&'a str>,
    black: Vec<&'a str>,
}

impl<'a> OpeningWindow<'a> {
    pub fn new<S: AsRef<str>>(moves: &'a [S]) -> Self {
        let plies = opening_window(moves);
        let white = plies.iter().step_by(2).copied().collect();
        let black = plies.iter().skip(1).step_by(2).copied().collect();
        Self { plies, white, black }
    }

    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// Token at `index`, or `None` past the end of the window.
    pub fn ply(&self, index: usize) -> Option<&'a str> {
        self.plies.get(index).copied()
    }

    pub fn plies(&self) -> &[&'a str] {
        &self.plies
    }

    /// White's first `n` moves inside the window.
    pub fn white_first(&self, n: usize) -> &[&'a str] {
        &self.white[..n.min(self.white.len())]
    }

    /// Black's first `n` moves inside the window.
    pub fn black_first(&self, n: usize) -> &[&'a str] {
        &self.black[..n.min(self.black.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUY: [&str; 7] = ["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4"];

    #[test]
    fn test_side_views() {
        assert_eq!(white_moves(&RUY), vec!["e4", "Nf3", "Bb5", "Ba4"]);
        assert_eq!(black_moves(&RUY), vec!["e5", "Nc6", "a6"]);
    }

    #[test]
    fn test_side_view_lengths() {
        for n in 0..25usize {
            let moves: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
            assert_eq!(white_moves(&moves).len(), n.div_ceil(2));
            assert_eq!(black_moves(&moves).len(), n / 2);
            assert_eq!(opening_window(&moves).len(), n.min(OPENING_WINDOW_PLIES));
        }
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(white_moves(&empty).is_empty());
        assert!(black_moves(&empty).is_empty());
        assert!(opening_window(&empty).is_empty());
        assert!(OpeningWindow::new(&empty).is_empty());
    }

    #[test]
    fn test_window_truncates() {
        let moves: Vec<String> = (0..30).map(|i| format!("m{i}")).collect();
        let window = OpeningWindow::new(&moves);
        assert_eq!(window.len(), 20);
        assert_eq!(window.ply(19), Some("m19"));
        assert_eq!(window.ply(20), None);
        assert_eq!(window.white_first(99).len(), 10);
        assert_eq!(window.black_first(99).last(), Some(&"m19"));
    }

    #[test]
    fn test_first_n_clamps() {
        let window = OpeningWindow::new(&RUY);
        assert_eq!(window.white_first(2), &["e4", "Nf3"]);
        assert_eq!(window.black_first(8), &["e5", "Nc6", "a6"]);
        assert!(window.black_first(0).is_empty());
    }
}
