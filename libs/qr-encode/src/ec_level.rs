//! # Error Correction Levels

use std::fmt;

/// Error correction level of a QR symbol.
///
/// The pipeline always encodes at [`EcLevel::Low`]; the other levels exist
/// for callers that construct their own [`QrEncoder`](crate::QrEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EcLevel {
    /// Recovers roughly 7% of codewords.
    #[default]
    Low,
    /// Recovers roughly 15% of codewords.
    Medium,
    /// Recovers roughly 25% of codewords.
    Quartile,
    /// Recovers roughly 30% of codewords.
    High,
}

impl EcLevel {
    /// Row of this level in the block tables.
    pub(crate) fn ordinal(self) -> usize {
        match self {
            EcLevel::Low => 0,
            EcLevel::Medium => 1,
            EcLevel::Quartile => 2,
            EcLevel::High => 3,
        }
    }

    /// Two-bit indicator stored in the format information.
    pub(crate) fn format_bits(self) -> u32 {
        match self {
            EcLevel::Low => 1,
            EcLevel::Medium => 0,
            EcLevel::Quartile => 3,
            EcLevel::High => 2,
        }
    }

    /// Single-letter name used by the standard (`L`, `M`, `Q`, `H`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use qr_encode::EcLevel;
    ///
    /// assert_eq!(EcLevel::default().symbol(), 'L');
    /// ```
    pub fn symbol(self) -> char {
        match self {
            EcLevel::Low => 'L',
            EcLevel::Medium => 'M',
            EcLevel::Quartile => 'Q',
            EcLevel::High => 'H',
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
