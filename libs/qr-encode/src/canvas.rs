//! # Symbol Canvas
//!
//! Mutable module grid used while a symbol is being drawn. Coordinates are
//! `(x, y)` = `(column, row)`, stored row-major. A parallel grid marks the
//! function modules that data placement and masking must not touch.

use crate::ec_level::EcLevel;
use crate::mask::{penalty_score, Mask};
use crate::matrix::QrMatrix;
use crate::version::Version;

/// BCH(15,5) generator for format information.
const FORMAT_INFO_GENERATOR: u32 = 0x537;

/// XOR mask applied to format information.
const FORMAT_INFO_MASK: u32 = 0x5412;

/// 15-bit format information word for an error correction level and mask.
pub(crate) fn format_info_bits(ec_level: EcLevel, mask: Mask) -> u32 {
    let data = ec_level.format_bits() << 3 | u32::from(mask.index());
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_INFO_GENERATOR);
    }
    (data << 10 | rem) ^ FORMAT_INFO_MASK
}

#[inline]
fn bit(word: u32, i: usize) -> bool {
    (word >> i) & 1 != 0
}

pub(crate) struct Canvas {
    version: Version,
    ec_level: EcLevel,
    size: usize,
    modules: Vec<bool>,
    is_function: Vec<bool>,
}

impl Canvas {
    /// Creates a canvas with every function pattern drawn.
    pub(crate) fn new(version: Version, ec_level: EcLevel) -> Self {
        let size = version.size();
        let mut canvas = Self {
            version,
            ec_level,
            size,
            modules: vec![false; size * size],
            is_function: vec![false; size * size],
        };
        canvas.draw_function_patterns();
        canvas
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        let i = self.index(x, y);
        self.modules[i] = dark;
        self.is_function[i] = true;
    }

    fn draw_function_patterns(&mut self) {
        let size = self.size;

        // Timing patterns
        for i in 0..size {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }

        // Finder patterns with separators (overwrite timing ends)
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Alignment patterns, skipping the three finder corners
        let positions = self.version.alignment_positions();
        let last = positions.len().saturating_sub(1);
        for (i, &px) in positions.iter().enumerate() {
            for (j, &py) in positions.iter().enumerate() {
                let on_finder = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
                if !on_finder {
                    self.draw_alignment_pattern(px, py);
                }
            }
        }

        // Reserve format areas now; real bits are drawn once a mask is chosen.
        self.draw_format_bits(Mask::default());
        self.draw_version_bits();
    }

    /// 9×9 finder (7×7 pattern plus separator) centred at `(cx, cy)`,
    /// clipped to the symbol.
    fn draw_finder_pattern(&mut self, cx: usize, cy: usize) {
        let size = self.size as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
                }
            }
        }
    }

    /// 5×5 alignment pattern centred at `(cx, cy)`.
    fn draw_alignment_pattern(&mut self, cx: usize, cy: usize) {
        for dy in -2isize..=2 {
            for dx in -2isize..=2 {
                let x = (cx as isize + dx) as usize;
                let y = (cy as isize + dy) as usize;
                self.set_function(x, y, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    /// Both copies of the format information, plus the dark module.
    fn draw_format_bits(&mut self, mask: Mask) {
        let bits = format_info_bits(self.ec_level, mask);
        let size = self.size;

        // First copy, around the top-left finder
        for i in 0..=5 {
            self.set_function(8, i, bit(bits, i));
        }
        self.set_function(8, 7, bit(bits, 6));
        self.set_function(8, 8, bit(bits, 7));
        self.set_function(7, 8, bit(bits, 8));
        for i in 9..15 {
            self.set_function(14 - i, 8, bit(bits, i));
        }

        // Second copy, split between the other two finders
        for i in 0..8 {
            self.set_function(size - 1 - i, 8, bit(bits, i));
        }
        for i in 8..15 {
            self.set_function(8, size - 15 + i, bit(bits, i));
        }
        self.set_function(8, size - 8, true);
    }

    /// Both 6×3 version information blocks (versions 7 and up).
    fn draw_version_bits(&mut self) {
        if self.version.number() < 7 {
            return;
        }
        let bits = self.version.info_bits();
        for i in 0..18 {
            let dark = bit(bits, i);
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function(a, b, dark);
            self.set_function(b, a, dark);
        }
    }

    /// Places the interleaved codewords in the zig-zag order, two columns at a
    /// time from the right, skipping the vertical timing column. Modules left
    /// over after the last codeword stay light (remainder bits).
    pub(crate) fn draw_codewords(&mut self, codewords: &[u8]) {
        let size = self.size;
        let total_bits = codewords.len() * 8;
        let mut i = 0;
        let mut right = size - 1;
        loop {
            if right == 6 {
                right = 5;
            }
            let upward = (right + 1) & 2 == 0;
            for vert in 0..size {
                let y = if upward { size - 1 - vert } else { vert };
                for j in 0..2 {
                    let x = right - j;
                    let idx = self.index(x, y);
                    if !self.is_function[idx] && i < total_bits {
                        self.modules[idx] = bit(u32::from(codewords[i >> 3]), 7 - (i & 7));
                        i += 1;
                    }
                }
            }
            if right < 2 {
                break;
            }
            right -= 2;
        }
        debug_assert_eq!(i, total_bits);
    }

    /// XORs the mask over every non-function module. Applying twice undoes it.
    fn apply_mask(&mut self, mask: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let idx = self.index(x, y);
                if !self.is_function[idx] && mask.inverts(y, x) {
                    self.modules[idx] = !self.modules[idx];
                }
            }
        }
    }

    /// Tries every mask and returns the one with the lowest penalty, the
    /// lowest index winning ties. Leaves the canvas unmasked.
    pub(crate) fn select_mask(&mut self) -> Mask {
        let mut best = (Mask::default(), u32::MAX);
        for mask in Mask::all() {
            self.apply_mask(mask);
            self.draw_format_bits(mask);
            let penalty = penalty_score(&self.modules, self.size);
            if penalty < best.1 {
                best = (mask, penalty);
            }
            self.apply_mask(mask);
        }
        best.0
    }

    /// Applies the final mask and freezes the grid.
    pub(crate) fn finish(mut self, mask: Mask) -> QrMatrix {
        self.apply_mask(mask);
        self.draw_format_bits(mask);
        QrMatrix::new(self.size, self.modules, self.version, self.ec_level, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(i: u8) -> Mask {
        Mask::new(i).unwrap()
    }

    #[test]
    fn test_format_bits_low_mask_zero() {
        assert_eq!(format_info_bits(EcLevel::Low, mask(0)), 0b111011111000100);
    }

    #[test]
    fn test_format_bits_medium_mask_five() {
        assert_eq!(format_info_bits(EcLevel::Medium, mask(5)), 0b100000011001110);
    }

    #[test]
    fn test_function_patterns_reserve_expected_modules() {
        let canvas = Canvas::new(Version::MIN, EcLevel::Low);
        let data_modules = canvas.is_function.iter().filter(|&&f| !f).count();
        assert_eq!(data_modules, Version::MIN.raw_data_modules());
    }

    #[test]
    fn test_function_patterns_reserve_expected_modules_with_version_info() {
        for number in [7, 21, 40] {
            let version = Version::new(number).unwrap();
            let canvas = Canvas::new(version, EcLevel::Low);
            let data_modules = canvas.is_function.iter().filter(|&&f| !f).count();
            assert_eq!(data_modules, version.raw_data_modules(), "version {number}");
        }
    }

    #[test]
    fn test_finder_corner_is_dark() {
        let canvas = Canvas::new(Version::MIN, EcLevel::Low);
        assert!(canvas.modules[canvas.index(0, 0)]);
        assert!(!canvas.modules[canvas.index(7, 0)]); // separator
    }

    #[test]
    fn test_apply_mask_twice_is_identity() {
        let mut canvas = Canvas::new(Version::new(3).unwrap(), EcLevel::Low);
        canvas.draw_codewords(&vec![0xA5; Version::new(3).unwrap().total_codewords()]);
        let before = canvas.modules.clone();
        canvas.apply_mask(mask(6));
        canvas.apply_mask(mask(6));
        assert_eq!(canvas.modules, before);
    }
}
