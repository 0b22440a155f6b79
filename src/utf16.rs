use smallvec::SmallVec;
use std::fmt::Write;

const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_START: u32 = 0xDC00;
const SURROGATE_BLOCK: u32 = 0x400;
const SUPPLEMENTARY_START: u32 = 0x10000;

/// Code units of one matched emoji; the longest rule match is a flag, four units.
pub(crate) type CodeUnitVec = SmallVec<[u16; 4]>;

pub(crate) fn code_units(text: &str) -> CodeUnitVec {
    text.encode_utf16().collect()
}

/// Decodes a UTF-16 high/low surrogate pair into the scalar value it encodes.
///
/// No range check is done on either unit; callers pass genuine surrogates.
#[inline]
pub fn surrogate_pair_to_scalar(high: u16, low: u16) -> u32 {
    (u32::from(high).wrapping_sub(HIGH_SURROGATE_START))
        .wrapping_mul(SURROGATE_BLOCK)
        .wrapping_add(u32::from(low).wrapping_sub(LOW_SURROGATE_START))
        .wrapping_add(SUPPLEMENTARY_START)
}

/// Appends `value` as lowercase hex, without prefix or padding.
#[inline]
pub(crate) fn push_hex(out: &mut String, value: u32) {
    // writing into a `String` never fails
    let _ = write!(out, "{:x}", value);
}

#[cfg(test)]
mod tests {
    use super::{code_units, push_hex, surrogate_pair_to_scalar};

    #[test]
    fn test_surrogate_pair_to_scalar() {
        // U+1F600 GRINNING FACE
        assert_eq!(0x1F600, surrogate_pair_to_scalar(0xD83D, 0xDE00));
        assert_eq!(0x10000, surrogate_pair_to_scalar(0xD800, 0xDC00));
        assert_eq!(0x10FFFF, surrogate_pair_to_scalar(0xDBFF, 0xDFFF));
    }

    #[test]
    fn test_surrogate_pair_matches_std_decoding() {
        for ch in ['\u{1F1FA}', '\u{1F44D}', '\u{2A6D6}', '\u{E0001}'] {
            let units = code_units(ch.encode_utf8(&mut [0; 4]));
            assert_eq!(2, units.len());
            assert_eq!(ch as u32, surrogate_pair_to_scalar(units[0], units[1]));
        }
    }

    #[test]
    fn test_code_units_bmp() {
        assert_eq!(&[0x33, 0x20E3][..], &code_units("3\u{20E3}")[..]);
        assert!(!code_units("\u{1F1FA}\u{1F1F8}").spilled());
    }

    #[test]
    fn test_push_hex() {
        let mut s = String::new();
        push_hex(&mut s, 0x1F1FA);
        push_hex(&mut s, 0x33);
        push_hex(&mut s, 0x0);
        assert_eq!("1f1fa330", s);
    }
}
