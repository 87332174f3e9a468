//! Access to glyph bitmaps.

/// A borrowed view of one glyph bitmap.
///
/// The bitmap is `height` rows of `stride` bytes each. Within a row, the
/// leftmost pixel is the most significant bit of the first byte; bits past
/// `width` are padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a [u8],
}

impl<'a> Glyph<'a> {
    pub(crate) fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Glyph {
            width,
            height,
            stride: (width as usize).div_ceil(8),
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of bytes in each row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw bitmap.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The bytes of row `y`, or `None` if `y` is out of range.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        let start = (y as usize).checked_mul(self.stride)?;
        self.data.get(start..start.checked_add(self.stride)?)
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> Rows<'a> {
        Rows {
            inner: self.data.chunks_exact(self.stride),
        }
    }

    /// `true` if the pixel at (`x`, `y`) is set.
    ///
    /// Pixels outside the glyph are never set.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width {
            return false;
        }
        let Some(row) = self.row(y) else {
            return false;
        };
        let byte = row[x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// An iterator over the rows of a [`Glyph`].
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    inner: core::slice::ChunksExact<'a, u8>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_pixels() {
        // a 10x3 glyph: two bytes per row
        #[rustfmt::skip]
        let data = [
            0b1000_0001, 0b0100_0000,
            0b0000_0000, 0b1111_1111,
            0b1111_1111, 0b1100_0000,
        ];
        let glyph = Glyph::new(10, 3, &data);
        assert_eq!(glyph.stride(), 2);
        assert_eq!(glyph.row(1), Some(&data[2..4]));
        assert_eq!(glyph.row(3), None);
        assert_eq!(glyph.rows().len(), 3);

        assert!(glyph.pixel(0, 0));
        assert!(!glyph.pixel(1, 0));
        assert!(glyph.pixel(7, 0));
        assert!(glyph.pixel(9, 0));
        assert!(!glyph.pixel(0, 1));
        assert!(glyph.pixel(8, 1));
        // padding bits are not pixels
        assert!(!glyph.pixel(10, 1));
        assert!(!glyph.pixel(0, 3));

        let ascii: Vec<String> = (0..3)
            .map(|y| {
                (0..10)
                    .map(|x| if glyph.pixel(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect();
        assert_eq!(ascii, ["#......#.#", "........##", "##########"]);
    }
}
