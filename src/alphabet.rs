//! ASCII nucleotide symbols folded to 4-bit IUPAC codes.
//!
//! Each code is a bitmask over `{A, C, G, T}`: bit 0 is A, bit 1 is C, bit 2 is G, bit 3
//! is T/U. Two codes are compatible (ambiguity-overlapping) bases iff `x & y != 0`.

/// Folds an ASCII byte to its 4-bit IUPAC code.
///
/// Lowercase equals uppercase; `U` aliases `T`. Any byte outside the IUPAC table
/// (including `-`) maps to `0`, which cannot match anything.
pub const fn code_of(byte: u8) -> u8 {
    match byte.to_ascii_uppercase() {
        b'A' => 1,
        b'C' => 2,
        b'M' => 3,
        b'G' => 4,
        b'R' => 5,
        b'S' => 6,
        b'V' => 7,
        b'T' | b'U' => 8,
        b'W' => 9,
        b'Y' => 10,
        b'H' => 11,
        b'K' => 12,
        b'D' => 13,
        b'B' => 14,
        b'N' => 15,
        _ => 0,
    }
}

/// Codes that represent an ambiguous (non-singleton) base, including the invalid code 0.
///
/// The unambiguous set is `{A=1, C=2, G=4, T=8}`; everything else is ambiguous.
pub const fn is_ambiguous(code: u8) -> bool {
    !matches!(code, 1 | 2 | 4 | 8)
}
