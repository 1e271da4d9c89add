//! Fixed-width right-justified decimal fields.

use heapless::String;

/// Field width for `u8` values.
pub const U8_WIDTH: usize = 3;
/// Field width for `u16` values.
pub const U16_WIDTH: usize = 5;
/// Field width for comma-grouped `u32` values (`4,294,967,295`).
pub const GROUPED_WIDTH: usize = 13;
/// Field width for scaled frequency values.
pub const FREQ_WIDTH: usize = 10;
/// Divisor taking a frequency in hundredths down to whole units.
pub const FREQ_SCALE: u32 = 100;

/// Digits between thousands separators.
const GROUP_DIGITS: usize = 3;

fn fill_right(out: &mut [u8], mut val: u32, grouped: bool) {
    out.fill(b' ');

    let mut i = out.len();
    let mut digits = 0usize;

    while i > 0 {
        i -= 1;
        out[i] = b'0' + (val % 10) as u8;
        val /= 10;
        digits += 1;

        if val == 0 {
            break;
        }
        if grouped && digits % GROUP_DIGITS == 0 && i > 0 {
            i -= 1;
            out[i] = b',';
        }
    }
}

fn to_string<const N: usize>(bytes: &[u8; N]) -> String<N> {
    let mut s = String::new();
    for &b in bytes {
        // Capacity equals the field width.
        let _ = s.push(char::from(b));
    }
    s
}

/// Right-justifies `val` in an `N`-wide blank-padded field.
///
/// Digits that do not fit are cut from the most significant end.
pub fn padded<const N: usize>(val: u32) -> String<N> {
    let mut buf = [b' '; N];
    fill_right(&mut buf, val, false);
    to_string(&buf)
}

/// Right-justifies `val` with a comma between each group of three digits.
pub fn grouped(val: u32) -> String<GROUPED_WIDTH> {
    let mut buf = [b' '; GROUPED_WIDTH];
    fill_right(&mut buf, val, true);
    to_string(&buf)
}

/// Scales a frequency in hundredths to whole units and right-justifies it.
pub fn frequency(val: u32) -> String<FREQ_WIDTH> {
    padded(val / FREQ_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_single_rightmost_digit() {
        assert_eq!(padded::<U8_WIDTH>(0).as_str(), "  0");
        assert_eq!(grouped(0).as_str(), "            0");
        assert_eq!(grouped(0).trim_start(), "0");
    }

    #[test]
    fn fields_are_right_justified() {
        assert_eq!(padded::<U8_WIDTH>(7).as_str(), "  7");
        assert_eq!(padded::<U8_WIDTH>(255).as_str(), "255");
        assert_eq!(padded::<U16_WIDTH>(1024).as_str(), " 1024");
        assert_eq!(padded::<U16_WIDTH>(65535).as_str(), "65535");
    }

    #[test]
    fn separators_fall_on_thousands_boundaries() {
        assert_eq!(grouped(999).trim_start(), "999");
        assert_eq!(grouped(1000).trim_start(), "1,000");
        assert_eq!(grouped(1234567).trim_start(), "1,234,567");
        assert_eq!(grouped(1234567).as_str(), "    1,234,567");
        assert_eq!(grouped(99_999_999).trim_start(), "99,999,999");
        assert_eq!(grouped(u32::MAX).as_str(), "4,294,967,295");
    }

    #[test]
    fn no_trailing_separator_before_the_last_group() {
        assert_eq!(grouped(100_000).trim_start(), "100,000");
        assert_eq!(grouped(1_000_000).trim_start(), "1,000,000");
    }

    #[test]
    fn overlong_value_keeps_low_digits() {
        assert_eq!(padded::<U8_WIDTH>(12345).as_str(), "345");
    }

    #[test]
    fn frequency_drops_hundredths_without_separators() {
        assert_eq!(frequency(1_407_412_345).as_str(), "  14074123");
        assert_eq!(frequency(99).trim_start(), "0");
        assert_eq!(frequency(u32::MAX).trim_start(), "42949672");
    }
}
