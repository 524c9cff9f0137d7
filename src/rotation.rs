//! Logical-to-physical layout rotation
//!
//! The SH1107 display RAM is 64 columns by 16 pages (64x128, portrait). A
//! landscape driver draws into a 128x64 buffer with the same page format,
//! which this module rotates 90° counter-clockwise into the native layout:
//!
//! ```text
//! logical (x, y)  ->  physical (y, 127 - x)
//! ```
//!
//! The physical buffer is cleared and rebuilt on every call, so the output
//! depends only on the current logical contents.
//!
//! ## Example
//!
//! ```
//! use sh1107::rotation::{physical_location, rotate_landscape};
//! use sh1107::BUFFER_SIZE;
//!
//! let mut logical = [0u8; BUFFER_SIZE];
//! let mut physical = [0u8; BUFFER_SIZE];
//!
//! // Logical pixel (127, 0): page 0, column 127, bit 0
//! logical[127] = 0x01;
//! rotate_landscape(&logical, &mut physical);
//!
//! // Lands on physical (0, 0)
//! assert_eq!(physical_location(127, 0), (0, 0x01));
//! assert_eq!(physical[0], 0x01);
//! ```

use crate::config::{BUFFER_SIZE, PHYSICAL_HEIGHT, PHYSICAL_WIDTH};

const LANDSCAPE_WIDTH: usize = PHYSICAL_HEIGHT as usize;
const LANDSCAPE_PAGES: usize = PHYSICAL_WIDTH as usize / 8;

/// Physical buffer index and bit mask for a landscape logical pixel
///
/// # Arguments
///
/// * `x` - Logical column, 0..128
/// * `y` - Logical row, 0..64
///
/// # Returns
///
/// Returns a tuple of (byte_index, bit_mask) into the 64x128 page-format
/// physical buffer.
pub fn physical_location(x: usize, y: usize) -> (usize, u8) {
    let dst_x = y;
    let dst_y = LANDSCAPE_WIDTH - 1 - x;
    let index = (dst_y / 8) * PHYSICAL_WIDTH as usize + dst_x;
    (index, 1 << (dst_y % 8))
}

/// Rotate a 128x64 logical buffer into the 64x128 physical layout
///
/// `physical` is cleared first. Zero source bytes are skipped.
pub fn rotate_landscape(logical: &[u8; BUFFER_SIZE], physical: &mut [u8; BUFFER_SIZE]) {
    physical.fill(0);

    for page in 0..LANDSCAPE_PAGES {
        let row = &logical[page * LANDSCAPE_WIDTH..(page + 1) * LANDSCAPE_WIDTH];
        for (x, &byte) in row.iter().enumerate() {
            if byte == 0 {
                continue;
            }
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    let (index, mask) = physical_location(x, page * 8 + bit);
                    physical[index] |= mask;
                }
            }
        }
    }
}
