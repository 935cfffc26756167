//! Board utilities
//!
//! Vertical mirroring, used to read White-oriented tables for Black.

use crate::types::Square;

/// Reflect a raw square index across the board's horizontal midline.
///
/// The rank is flipped (`7 - rank`) and the file is kept, so `a1 <-> a8` and
/// `e4 <-> e5`.
///
/// # Panics
///
/// Panics if `index >= 64`; callers guarantee the range.
#[inline]
pub fn mirror_index(index: usize) -> usize {
    assert!(
        index < 64,
        "mirror: square index {index} out of range (must be 0-63)"
    );
    let rank = index / 8;
    let file = index % 8;
    (7 - rank) * 8 + file
}

/// Reflect a square vertically.
///
/// Involutive: `mirror(mirror(s)) == s` for every square.
///
/// # Examples
///
/// ```
/// use chess_eval::board::mirror;
/// use chess_eval::Square;
///
/// assert_eq!(mirror(Square::new(0)), Square::new(56));
/// assert_eq!(mirror(Square::new(28)), Square::new(36));
/// ```
#[inline]
pub fn mirror(square: Square) -> Square {
    Square::new(mirror_index(square.index()) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_known_squares() {
        assert_eq!(mirror(Square::new(0)), Square::new(56));
        assert_eq!(mirror(Square::new(63)), Square::new(7));
        assert_eq!(mirror(Square::new(28)), Square::new(36));
        assert_eq!(mirror(Square::new(59)), Square::new(3));
    }

    #[test]
    fn test_mirror_is_involution() {
        for square in Square::all() {
            assert_eq!(mirror(mirror(square)), square);
        }
    }

    #[test]
    fn test_mirror_keeps_file() {
        for square in Square::all() {
            let m = mirror(square);
            assert_eq!(m.file(), square.file());
            assert_eq!(m.rank(), 7 - square.rank());
        }
    }

    #[test]
    fn test_mirror_is_bijection() {
        let mut seen = [false; 64];
        for square in Square::all() {
            seen[mirror(square).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_mirror_index_fails_fast() {
        mirror_index(64);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_mirror_index_rejects_huge_index() {
        mirror_index(usize::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "out of range")]
    fn test_mirror_index_does_not_truncate() {
        // low 32 bits are a valid square
        mirror_index((1usize << 32) | 5);
    }
}
