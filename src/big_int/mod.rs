// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use itertools::Itertools;
use rand::RngCore;
use std::fmt::{Debug, Display};

pub mod math_algos;
mod ops;
mod primitve;

pub use primitve::{Primitive, TryFromBigIntError};

const BYTES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum SigNum {
    Negative = -1,
    #[default]
    Zero = 0,
    Positive = 1,
}
impl From<SigNum> for i8 {
    fn from(value: SigNum) -> Self {
        value.into_i8()
    }
}
impl SigNum {
    const fn into_i8(self) -> i8 {
        self as i8
    }
    pub const fn is_negative(self) -> bool {
        self.into_i8().is_negative()
    }
    pub const fn is_positive(self) -> bool {
        self.into_i8().is_positive()
    }
    pub const fn is_zero(self) -> bool {
        self.into_i8() == 0
    }
}

/// A signed 128 bit integer in two's complement.
///
/// All arithmetic wraps modulo 2^128, every one of the 2^128 bit patterns is a valid value
/// and two values are equal iff all of their bytes are.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    /// holds the bytes in LE order, the top bit of the last one is the sign
    bytes: [u8; BYTES],
}

impl BigInt {
    pub const BYTES: usize = BYTES;
    pub const BITS: u32 = 128;

    pub const ZERO: Self = Self::from_le_bytes([0; Self::BYTES]);
    pub const ONE: Self = {
        let mut bytes = [0; Self::BYTES];
        bytes[0] = 1;
        Self::from_le_bytes(bytes)
    };
    pub const NEG_ONE: Self = Self::from_le_bytes([0xFF; Self::BYTES]);
    pub const MIN: Self = {
        let mut bytes = [0; Self::BYTES];
        bytes[Self::BYTES - 1] = 0x80;
        Self::from_le_bytes(bytes)
    };
    pub const MAX: Self = {
        let mut bytes = [0xFF; Self::BYTES];
        bytes[Self::BYTES - 1] = 0x7F;
        Self::from_le_bytes(bytes)
    };

    pub const fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self { bytes }
    }
    pub fn from_be_bytes(mut bytes: [u8; Self::BYTES]) -> Self {
        bytes.reverse();
        Self::from_le_bytes(bytes)
    }
    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        self.bytes
    }
    pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }
    pub const fn as_le_bytes(&self) -> &[u8; Self::BYTES] {
        &self.bytes
    }

    /// copies the LE bytes of `value` into the lower bytes and fills the rest with its sign.
    /// Unsigned values are never negative and so get zero extended.
    ///
    /// A `u128` fills all bytes, so it is reinterpreted bit for bit like `value as i128`:
    /// everything from 2^127 up becomes negative, e.g. `u128::MAX` gives [`BigInt::NEG_ONE`].
    /// [`BigInt::truncate`] gives the original `u128` back.
    pub fn from_integer<P: Primitive>(value: P) -> Self {
        let fill = if value.is_negative() { 0xFF } else { 0x00 };
        let mut bytes = [fill; Self::BYTES];
        for (byte, value) in bytes.iter_mut().zip(value.to_le_bytes()) {
            *byte = value;
        }
        Self { bytes }
    }
    /// reinterprets the lowest `P::BYTES` bytes as `P`, dropping everything above
    pub fn truncate<P: Primitive>(self) -> P {
        P::from_le_prefix(&self.bytes)
    }

    /// draws every bit uniformly
    pub fn new_random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0; Self::BYTES];
        rng.fill_bytes(&mut bytes);
        Self { bytes }
    }
    pub fn try_new_random(mut rng: impl RngCore) -> Result<Self, rand::Error> {
        crate::util::rng::generate_array(&mut rng).map(Self::from_le_bytes)
    }

    pub const fn sign_bit(&self) -> bool {
        math_algos::shift::sign_bit(&self.bytes)
    }
    pub const fn is_negative(&self) -> bool {
        self.sign_bit()
    }
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
    pub fn signum(&self) -> SigNum {
        if self.is_negative() {
            SigNum::Negative
        } else if self.is_zero() {
            SigNum::Zero
        } else {
            SigNum::Positive
        }
    }
    /// the bit of weight 2^`i`
    pub const fn bit(&self, i: u32) -> bool {
        assert!(i < Self::BITS, "bit index out of range");
        (self.bytes[(i / 8) as usize] >> (i % 8)) & 1 == 1
    }

    /// exact byte equality, same as `==`
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// two upper case hex digits per byte, most significant byte first, without prefix or separators
    pub fn to_hex_string(&self) -> String {
        self.bytes
            .iter()
            .rev()
            .format_with("", |digit, f| f(&format_args!("{digit:02X}")))
            .to_string()
    }

    /// encodes the LE bytes
    #[cfg(feature = "base64")]
    pub fn as_base64(&self, engine: &impl base64::Engine) -> String {
        engine.encode(self.bytes)
    }
    #[cfg(feature = "base64")]
    pub fn from_base64(
        data: impl AsRef<[u8]>,
        engine: &impl base64::Engine,
    ) -> Result<Self, FromBase64Error> {
        let decoded = engine.decode(data)?;
        Ok(Self::try_from(decoded.as_slice())?)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInt({self:#x})")
    }
}
impl std::fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for digit in self.bytes.iter().rev() {
            write!(f, "{digit:02x}")?;
        }
        Ok(())
    }
}
impl std::fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "0X")?;
        }
        f.write_str(&self.to_hex_string())
    }
}

// From traits
impl From<[u8; BigInt::BYTES]> for BigInt {
    /// the bytes in LE order
    fn from(bytes: [u8; BigInt::BYTES]) -> Self {
        Self::from_le_bytes(bytes)
    }
}
impl From<BigInt> for [u8; BigInt::BYTES] {
    fn from(value: BigInt) -> Self {
        value.bytes
    }
}
impl TryFrom<&[u8]> for BigInt {
    type Error = TryFromSliceError;

    /// the bytes in LE order, needs exactly [`BigInt::BYTES`] of them
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::BYTES]>::try_from(value)
            .map(Self::from_le_bytes)
            .map_err(|_| TryFromSliceError { len: value.len() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromSliceError {
    pub len: usize,
}
impl Display for TryFromSliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected exactly {} bytes, got {}",
            BigInt::BYTES,
            self.len
        )
    }
}
impl std::error::Error for TryFromSliceError {}

#[cfg(feature = "base64")]
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum FromBase64Error {
    Decode(base64::DecodeError),
    Length(TryFromSliceError),
}
#[cfg(feature = "base64")]
impl Display for FromBase64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid base64: {err}"),
            Self::Length(err) => Display::fmt(err, f),
        }
    }
}
#[cfg(feature = "base64")]
impl std::error::Error for FromBase64Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Length(err) => Some(err),
        }
    }
}
