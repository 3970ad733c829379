use std::fmt::Display;

use super::BigInt;

/// the builtin integers a [`BigInt`] can be created from and truncated to
pub trait Primitive: Copy + Eq + Ord {
    const BYTES: usize;
    const ZERO: Self;

    fn to_le_bytes(self) -> impl ExactSizeIterator<Item = u8> + DoubleEndedIterator;
    /// reads the first `Self::BYTES` bytes as LE
    fn from_le_prefix(bytes: &[u8; BigInt::BYTES]) -> Self;

    /// always `false` for unsigned types
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

/// the value didn't fit into the requested primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromBigIntError(pub(super) ());
impl Display for TryFromBigIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("out of range integral type conversion attempted")
    }
}
impl std::error::Error for TryFromBigIntError {}

macro_rules! implPrim {
    (narrowing $($type: ty),+ $(,)?) => {
        implPrim!($($type),+);
        $(
            impl TryFrom<BigInt> for $type {
                type Error = TryFromBigIntError;

                /// fails when truncating would change the value or its sign
                fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                    let truncated = value.truncate::<$type>();
                    // u128 keeps all bytes, so only the sign can tell a negative value apart
                    if BigInt::from_integer(truncated) == value
                        && truncated.is_negative() == value.is_negative()
                    {
                        Ok(truncated)
                    } else {
                        Err(TryFromBigIntError(()))
                    }
                }
            }
        )+
    };
    ($($type: ty),+ $(,)?) => {$(
        impl Primitive for $type {
            const BYTES: usize = std::mem::size_of::<$type>();
            const ZERO: Self = 0;

            fn to_le_bytes(self) -> impl ExactSizeIterator<Item = u8> + DoubleEndedIterator {
                self.to_le_bytes().into_iter()
            }
            fn from_le_prefix(bytes: &[u8; BigInt::BYTES]) -> Self {
                let mut buf = [0; std::mem::size_of::<$type>()];
                buf.copy_from_slice(&bytes[..Self::BYTES]);
                Self::from_le_bytes(buf)
            }
        }
        impl From<$type> for BigInt {
            fn from(value: $type) -> Self {
                Self::from_integer(value)
            }
        }
    )+};
}

implPrim!(narrowing i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, u128);
implPrim!(i128);

impl From<BigInt> for i128 {
    fn from(value: BigInt) -> Self {
        Self::from_le_bytes(value.to_le_bytes())
    }
}
