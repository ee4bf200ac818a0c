//! Byte offsets to annotation lines.

/// 1-based line number of a byte offset in `source`.
///
/// Offsets past the end resolve to the last line.
#[must_use]
pub fn line_at(source: &str, offset: usize) -> u32 {
    let end = offset.min(source.len());
    let newlines = source.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    u32::try_from(newlines + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_line_at() {
        let sdl = "type Query {\n  a: Int\n  b: String\n}\n";
        assert_eq!(line_at(sdl, 0), 1);
        assert_eq!(line_at(sdl, sdl.find("a:").unwrap()), 2);
        assert_eq!(line_at(sdl, sdl.find("b:").unwrap()), 3);
        assert_eq!(line_at(sdl, 10_000), 5);
    }

    proptest! {
        #[test]
        fn line_is_at_least_one(source in ".*", offset in 0usize..256) {
            prop_assert!(line_at(&source, offset) >= 1);
        }

        #[test]
        fn line_never_decreases(source in "[a-z\n]{0,64}", a in 0usize..64, b in 0usize..64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(line_at(&source, lo) <= line_at(&source, hi));
        }
    }
}
