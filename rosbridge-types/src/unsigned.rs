//! Unsigned integer codec
//!
//! rosbridge carries `uint8` .. `uint64` fields, while the values handed to
//! and from the wire layer are signed. These functions move between the two
//! views without sign corruption:
//!
//! - `to_uintW` keeps the low `W` bits of a wider signed value and returns
//!   them as a `W`-bit signed bit pattern (the wire representation).
//! - `from_uintW` reinterprets a `W`-bit signed bit pattern as unsigned and
//!   returns it in a wider signed type, so the result is never negative.
//!
//! All conversions are total; out-of-range input is truncated exactly like
//! two's-complement masking. The `_array` variants map element-wise and
//! preserve length and order.
//!
//! ```
//! use rosbridge_types::unsigned::{from_uint8, to_uint8};
//!
//! assert_eq!(to_uint8(300), 44);
//! assert_eq!(from_uint8(-1), 255);
//! ```

use num_bigint::BigInt;
use num_traits::ToPrimitive;

macro_rules! def_unsigned {
    (
        $bits: literal,
        $wide: ty,
        $wire: ty,
        $unsigned: ty,
        $to: ident,
        $to_array: ident,
        $from: ident,
        $from_array: ident
    ) => {
        #[doc = concat!("Encode `value` as an unsigned ", $bits, "-bit wire value.")]
        ///
        #[doc = concat!("Bits above position ", $bits, " - 1 are discarded.")]
        #[inline]
        pub const fn $to(value: $wide) -> $wire {
            value as $wire
        }

        #[doc = concat!("Encode each value as an unsigned ", $bits, "-bit wire value.")]
        pub fn $to_array(values: &[$wide]) -> Vec<$wire> {
            values.iter().map(|&v| $to(v)).collect()
        }

        #[doc = concat!("Decode an unsigned ", $bits, "-bit wire value into its non-negative value.")]
        #[inline]
        pub const fn $from(value: $wire) -> $wide {
            (value as $wide) & (<$unsigned>::MAX as $wide)
        }

        #[doc = concat!("Decode each unsigned ", $bits, "-bit wire value.")]
        pub fn $from_array(values: &[$wire]) -> Vec<$wide> {
            values.iter().map(|&v| $from(v)).collect()
        }
    };
}

def_unsigned!(8, i16, i8, u8, to_uint8, to_uint8_array, from_uint8, from_uint8_array);
def_unsigned!(16, i32, i16, u16, to_uint16, to_uint16_array, from_uint16, from_uint16_array);
def_unsigned!(32, i64, i32, u32, to_uint32, to_uint32_array, from_uint32, from_uint32_array);

fn uint64_mask() -> BigInt {
    BigInt::from(u64::MAX)
}

/// Encode `value` as an unsigned 64-bit wire value.
///
/// Only the low 64 bits are kept; negative values are masked in
/// two's complement like the narrower widths.
pub fn to_uint64(value: &BigInt) -> i64 {
    let low = value & &uint64_mask();
    // `low` is in 0..=u64::MAX after masking.
    low.to_u64().unwrap_or_default() as i64
}

/// Encode each value as an unsigned 64-bit wire value.
pub fn to_uint64_array(values: &[BigInt]) -> Vec<i64> {
    values.iter().map(to_uint64).collect()
}

/// Decode an unsigned 64-bit wire value into its non-negative value.
pub fn from_uint64(value: i64) -> BigInt {
    BigInt::from(value) & uint64_mask()
}

/// Decode each unsigned 64-bit wire value.
pub fn from_uint64_array(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&v| from_uint64(v)).collect()
}
