//! types for working with raw little-endian bytes

/// A trait for font scalars.
///
/// This is an internal trait for encoding and decoding little-endian bytes.
///
/// You do not need to implement this trait directly; it is an implemention
/// detail of the [`LittleEndian`] wrapper.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: sealed::LeByteArray;

    /// Create an instance of this type from raw little-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw little-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::LeByteArray::from_slice(slice).map(Self::from_raw)
    }
}

/// A trait for types that have a known, constant size.
pub trait FixedSize: Sized {
    /// The raw size of this type, in bytes.
    ///
    /// This is the size required to represent this type in a font file, which
    /// may differ from the size of the native type:
    ///
    /// ```
    /// # use psf_types::*;
    /// assert_eq!(u32::RAW_BYTE_LEN, 4);
    /// assert_eq!(LittleEndian::<u16>::RAW_BYTE_LEN, 2);
    /// ```
    const RAW_BYTE_LEN: usize;
}

// a sealed trait. see <https://rust-lang.github.io/api-guidelines/future-proofing.html>
pub(crate) mod sealed {
    /// A trait for raw byte arrays of a fixed length.
    ///
    /// This is only implemented for `[u8; N]` where `N` is the width of one
    /// of the scalar types we read from font files.
    pub trait LeByteArray: Copy + AsRef<[u8]> {
        /// Must always succeed for `[u8; N]` if `slice.len() == N`, must fail otherwise
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> LeByteArray for [u8; N] {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

/// A wrapper around raw little-endian bytes for some type.
///
/// This is the field type used in the fixed header structs, which are cast
/// directly out of the file bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LittleEndian<T: Scalar>(pub(crate) T::Raw);

// # SAFETY:
//
// `LittleEndian<T>` has the bound `T: Scalar`, and contains only a single value,
// `<T as Scalar>::Raw` which is only ever a byte array.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<T> bytemuck::Zeroable for LittleEndian<T> where T: Scalar + Copy {}
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<T> bytemuck::AnyBitPattern for LittleEndian<T> where T: Scalar + Copy + 'static {}

impl<T: Scalar> LittleEndian<T> {
    /// construct a new `LittleEndian<T>` from raw bytes
    pub fn new(raw: T::Raw) -> LittleEndian<T> {
        LittleEndian(raw)
    }

    /// Attempt to construct a new raw value from this slice.
    ///
    /// This will fail if `slice.len() != T::RAW_BYTE_LEN`.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        sealed::LeByteArray::from_slice(slice).map(Self)
    }

    /// Convert this raw type to its native representation.
    #[inline(always)]
    pub fn get(&self) -> T {
        T::from_raw(self.0)
    }

    /// Set the value, overwriting the bytes.
    pub fn set(&mut self, value: T) {
        self.0 = value.to_raw();
    }

    /// Get the raw little-endian bytes.
    pub fn le_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<T: Scalar> From<T> for LittleEndian<T> {
    #[inline]
    fn from(val: T) -> Self {
        LittleEndian(val.to_raw())
    }
}

impl<T: Scalar + Default> Default for LittleEndian<T> {
    fn default() -> Self {
        Self::from(T::default())
    }
}

// NOTE: do to the orphan rules, we cannot impl the inverse of this, e.g.
// impl<T> PartialEq<LittleEndian<T>> for T (<https://doc.rust-lang.org/error_codes/E0210.html>)
impl<T: Scalar + Copy + PartialEq> PartialEq<T> for LittleEndian<T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T: Scalar> FixedSize for LittleEndian<T> {
    const RAW_BYTE_LEN: usize = core::mem::size_of::<T::Raw>();
}

impl<T: std::fmt::Debug + Scalar + Copy> std::fmt::Debug for LittleEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: std::fmt::Display + Scalar + Copy> std::fmt::Display for LittleEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_le_bytes()
            }

            #[inline(always)]
            fn from_raw(raw: $raw) -> $ty {
                Self::from_le_bytes(raw)
            }
        }

        impl crate::raw::FixedSize for $ty {
            const RAW_BYTE_LEN: usize = core::mem::size_of::<$raw>();
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_read() {
        assert_eq!(u16::read(&[0xFE, 0xFF]), Some(0xFFFE));
        assert_eq!(u32::read(&[0x72, 0xb5, 0x4a, 0x86]), Some(0x864a_b572));
        assert_eq!(u32::read(&[1, 2, 3]), None);
    }

    #[test]
    fn wrapper_round_trip() {
        let mut raw = LittleEndian::<u32>::from(32);
        assert_eq!(raw.le_bytes(), &[32, 0, 0, 0]);
        raw.set(0x0102_0304);
        assert_eq!(raw.le_bytes(), &[4, 3, 2, 1]);
        assert_eq!(raw, 0x0102_0304u32);
        assert_eq!(LittleEndian::<u16>::from_slice(&[1]), None);
    }
}
