//! small utilities used in tests

use psf_types::Scalar;
use std::collections::HashMap;

/// A convenience type for generating a buffer of little-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct LeBuffer {
    data: Vec<u8>,
    tagged_locations: HashMap<String, usize>,
}

impl LeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    pub fn push_with_tag(mut self, item: impl Scalar, tag: &str) -> Self {
        self.tagged_locations
            .insert(tag.to_string(), self.data.len());
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Append raw bytes, such as a glyph body.
    pub fn extend_bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Drop bytes from the end of the buffer.
    pub fn truncate(mut self, len: usize) -> Self {
        self.data.truncate(len);
        self
    }

    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unrecognized tags
        self.tagged_locations.get(tag).copied().unwrap()
    }

    fn data_for(&mut self, tag: &str) -> &mut [u8] {
        let offset = self.offset_for(tag);
        &mut self.data[offset..]
    }

    pub fn write_at(&mut self, tag: &str, item: impl Scalar) {
        let data = self.data_for(tag);
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();

        if data.len() < new_data.len() {
            panic!("not enough room left in buffer for the requested write.");
        }

        for (left, right) in data.iter_mut().zip(new_data) {
            *left = *right
        }
    }
}

impl std::ops::Deref for LeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Build an [`LeBuffer`] from a list of scalars.
///
/// Each item is either a literal or parenthesized expression, a bracketed
/// list of literals (written with [`LeBuffer::extend`]), or a
/// `{value: "tag"}` pair whose position can later be patched with
/// [`LeBuffer::write_at`].
#[macro_export]
macro_rules! le_buffer {
    ( $( $x:tt ),* $(,)? ) => {
        {
            let mut temp = $crate::lebuffer::LeBuffer::new();
            $(
                temp = $crate::le_buffer_add!(temp, $x);
            )*
            temp
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! le_buffer_add {
    ($b:ident, $v:literal) => {
        $b.push($v)
    };
    ($b:ident, [$($v:literal),+]) => {
        $b.extend([$($v),*])
    };
    ($b:ident, {$v:tt : $tag:literal}) => {
        $b.push_with_tag($v, $tag)
    };
    ($b:ident, $v:tt) => {
        $b.push($v)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macro_layout() {
        let mut buf = le_buffer! {
            [0x72u8, 0xb5, 0x4a, 0x86],
            {0u32: "version"},
            32u32,
            (0xFFFEu16)
        };
        assert_eq!(buf.len(), 14);
        assert_eq!(buf.offset_for("version"), 4);
        buf.write_at("version", 7u32);
        assert_eq!(&buf[4..8], &[7, 0, 0, 0]);
        assert_eq!(&buf[12..], &[0xFE, 0xFF]);
    }
}
