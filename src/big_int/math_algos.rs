#![allow(clippy::wildcard_imports)]
//! byte level building blocks of the public operations.
//! Everything takes its inputs by value and writes into a fresh buffer, so no result can alias an input.
use super::BigInt;

/// LE bytes of a [`BigInt`]
pub type Bytes = [u8; BigInt::BYTES];
const BYTES: usize = BigInt::BYTES;

pub mod add {
    use super::*;

    /// (`res`, `out_carry`) = `lhs` + `rhs` + `in_carry`
    const fn carrying_add(lhs: u8, rhs: u8, in_carry: bool) -> (u8, bool) {
        let (res, carry_1) = lhs.overflowing_add(rhs);
        let (res, carry_2) = res.overflowing_add(in_carry as u8);
        (res, carry_1 | carry_2)
    }

    /// adds byte by byte from the lowest up, returns the carry out of the top byte
    pub fn ripple_carry(lhs: Bytes, rhs: Bytes, mut carry: bool) -> (Bytes, bool) {
        let mut out = [0; BYTES];
        for ((digit, lhs), rhs) in out.iter_mut().zip(lhs).zip(rhs) {
            (*digit, carry) = carrying_add(lhs, rhs, carry);
        }
        (out, carry)
    }

    /// `lhs` + `rhs` mod 2^128
    pub fn wrapping(lhs: Bytes, rhs: Bytes) -> Bytes {
        ripple_carry(lhs, rhs, false).0
    }
}

pub mod negate {
    use super::*;

    pub fn complement(value: Bytes) -> Bytes {
        value.map(|digit| !digit)
    }
    /// !`value` + 1, [`BigInt::MIN`] maps to itself
    pub fn twos_complement(value: Bytes) -> Bytes {
        add::ripple_carry(complement(value), [0; BYTES], true).0
    }
}

pub mod sub {
    use super::*;

    /// `lhs` + (-`rhs`) mod 2^128
    pub fn wrapping(lhs: Bytes, rhs: Bytes) -> Bytes {
        add::wrapping(lhs, negate::twos_complement(rhs))
    }
}

pub mod shift {
    use super::*;

    /// how a shift count acts on 128 bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Steps {
        /// `n <= 0`, the value stays as it is
        Nothing,
        Partial(u32),
        /// `n >= 128`, every bit is shifted out
        Everything,
    }
    impl Steps {
        pub const fn of(n: i32) -> Self {
            if n <= 0 {
                Self::Nothing
            } else if n >= BigInt::BITS as i32 {
                Self::Everything
            } else {
                Self::Partial(n as u32)
            }
        }
    }

    pub const fn sign_bit(value: &Bytes) -> bool {
        value[BYTES - 1] & 0x80 != 0
    }
    /// all bytes 0xFF for negative `value`, 0x00 otherwise
    pub const fn sign_fill(value: &Bytes) -> Bytes {
        [if sign_bit(value) { 0xFF } else { 0x00 }; BYTES]
    }

    /// `value` << 1, the top bit is lost
    pub fn shl1(value: Bytes) -> Bytes {
        let mut out = [0; BYTES];
        let mut carry = 0;
        for (digit, value) in out.iter_mut().zip(value) {
            *digit = (value << 1) | carry;
            carry = value >> 7;
        }
        out
    }
    /// `value` >> 1, filling the top bit with 0
    pub fn shr1(value: Bytes) -> Bytes {
        shr1_filled(value, false)
    }
    /// `value` >> 1, filling the top bit with the sign bit of `value`
    pub fn sar1(value: Bytes) -> Bytes {
        shr1_filled(value, sign_bit(&value))
    }
    fn shr1_filled(value: Bytes, fill: bool) -> Bytes {
        let mut out = [0; BYTES];
        let mut carry = u8::from(fill);
        for (digit, value) in out.iter_mut().zip(value).rev() {
            *digit = (value >> 1) | (carry << 7);
            carry = value & 1;
        }
        out
    }

    fn clamped(
        value: Bytes,
        n: i32,
        everything: Bytes,
        partial: impl FnOnce(Bytes, u32) -> Bytes,
    ) -> Bytes {
        match Steps::of(n) {
            Steps::Nothing => value,
            Steps::Partial(n) => partial(value, n),
            Steps::Everything => everything,
        }
    }
    fn repeat(value: Bytes, n: u32, step: fn(Bytes) -> Bytes) -> Bytes {
        (0..n).fold(value, |value, _| step(value))
    }

    pub fn shl(value: Bytes, n: i32) -> Bytes {
        clamped(value, n, [0; BYTES], |value, n| repeat(value, n, shl1))
    }
    pub fn shr(value: Bytes, n: i32) -> Bytes {
        clamped(value, n, [0; BYTES], |value, n| repeat(value, n, shr1))
    }
    pub fn sar(value: Bytes, n: i32) -> Bytes {
        clamped(value, n, sign_fill(&value), |value, n| {
            repeat(value, n, sar1)
        })
    }

    /// moves whole bytes first and only the remaining `n % 8` bits one by one.
    /// Gives the same results as the single bit versions in [`super::shift`].
    pub mod bytewise {
        use super::*;

        pub fn shl(value: Bytes, n: i32) -> Bytes {
            clamped(value, n, [0; BYTES], |value, n| {
                let (full, partial) = ((n / 8) as usize, n % 8);
                let mut out = [0; BYTES];
                out[full..].copy_from_slice(&value[..BYTES - full]);
                if partial > 0 {
                    let mut carry = 0;
                    for digit in &mut out[full..] {
                        let next = *digit >> (8 - partial);
                        *digit = (*digit << partial) | carry;
                        carry = next;
                    }
                }
                out
            })
        }
        pub fn shr(value: Bytes, n: i32) -> Bytes {
            clamped(value, n, [0; BYTES], |value, n| shr_filled(value, n, 0x00))
        }
        pub fn sar(value: Bytes, n: i32) -> Bytes {
            let fill = sign_fill(&value);
            clamped(value, n, fill, |value, n| shr_filled(value, n, fill[0]))
        }

        /// `fill` needs to be either 0x00 or 0xFF
        fn shr_filled(value: Bytes, n: u32, fill: u8) -> Bytes {
            let (full, partial) = ((n / 8) as usize, n % 8);
            let mut out = [fill; BYTES];
            out[..BYTES - full].copy_from_slice(&value[full..]);
            if partial > 0 {
                let mut carry = fill << (8 - partial);
                for digit in out[..BYTES - full].iter_mut().rev() {
                    let next = *digit << (8 - partial);
                    *digit = (*digit >> partial) | carry;
                    carry = next;
                }
            }
            out
        }
    }
}

pub mod mul {
    use super::*;

    /// adds `lhs` * 2^i for every set bit i of `rhs`, which is read as unsigned.
    /// Two's complement makes the truncated result correct for any signs.
    pub fn shift_and_add(lhs: Bytes, rhs: Bytes) -> Bytes {
        let mut acc = [0; BYTES];
        let mut multiplicand = lhs;
        let mut multiplier = rhs;
        for _ in 0..BigInt::BITS {
            if multiplier[0] & 1 == 1 {
                acc = add::wrapping(acc, multiplicand);
            }
            multiplicand = shift::shl1(multiplicand);
            multiplier = shift::shr1(multiplier);
        }
        acc
    }
}
