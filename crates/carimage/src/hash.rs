//! The 31-multiplier string hash shared by seeds and fallback colors.

/// Folds the Unicode scalar values of `s` into `acc * 31 + c`, wrapping at 32 bits.
///
/// The arithmetic is done on `u32` and reinterpreted at the end, which gives
/// the same bits as two's-complement `i32` wraparound.
#[must_use]
pub fn string_hash(s: &str) -> i32 {
    s.chars()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(u32::from(c)))
        .cast_signed()
}

/// Absolute value of [`string_hash`]. `i32::MIN` maps to `2^31`.
#[must_use]
pub fn unsigned_hash(s: &str) -> u32 {
    string_hash(s).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("a", 97)]
    #[case("ab", 3105)]
    #[case("hello", 99_162_322)]
    #[case("Mauve Unicorn", 458_944_520)]
    #[case("VolvoXC902021Saville Grey", -1_695_979_162)]
    fn known_values(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(expected, string_hash(input));
    }

    #[test]
    fn repeated_calls_agree() {
        let input = "Fiat X1/9 1986 Ferrari Red";
        assert_eq!(string_hash(input), string_hash(input));
    }

    #[test]
    fn colliding_inputs() {
        assert_eq!(string_hash("Aa"), string_hash("BB"));
    }

    #[test]
    fn minimum_value_has_unsigned_abs() {
        assert_eq!(i32::MIN, string_hash("polygenelubricants"));
        assert_eq!(2_147_483_648, unsigned_hash("polygenelubricants"));
    }

    #[test]
    fn non_ascii_uses_scalar_values() {
        // 'é' is U+00E9
        assert_eq!(0xE9, string_hash("é"));
        assert_eq!(0x1F697, string_hash("🚗"));
    }
}
