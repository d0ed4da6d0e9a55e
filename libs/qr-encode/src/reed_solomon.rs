//! # Reed-Solomon Error Correction
//!
//! Arithmetic over GF(2^8) with the reducing polynomial x^8 + x^4 + x^3 + x^2 + 1
//! (0x11D), and remainder computation against a generator with roots α^0..α^(n-1).

const FIELD_POLYNOMIAL: u16 = 0x11D;

/// Multiplies two field elements (Russian peasant multiplication).
pub(crate) fn gf_multiply(x: u8, y: u8) -> u8 {
    let mut z: u16 = 0;
    for i in (0..8).rev() {
        z = (z << 1) ^ ((z >> 7) * FIELD_POLYNOMIAL);
        z ^= ((u16::from(y) >> i) & 1) * u16::from(x);
    }
    z as u8
}

/// Reed-Solomon encoder for a fixed number of error correction codewords.
#[derive(Debug, Clone)]
pub(crate) struct ReedSolomon {
    /// Generator coefficients, highest degree first, leading 1 omitted.
    divisor: Vec<u8>,
}

impl ReedSolomon {
    /// Builds the generator polynomial of the given degree (1..=255).
    pub(crate) fn new(degree: usize) -> Self {
        debug_assert!((1..=255).contains(&degree));
        let mut divisor = vec![0u8; degree - 1];
        divisor.push(1);

        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                divisor[j] = gf_multiply(divisor[j], root);
                if j + 1 < degree {
                    divisor[j] ^= divisor[j + 1];
                }
            }
            root = gf_multiply(root, 0x02);
        }
        Self { divisor }
    }

    /// Error correction codewords for `data`.
    pub(crate) fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; self.divisor.len()];
        for &byte in data {
            let factor = byte ^ result.remove(0);
            result.push(0);
            for (r, &coef) in result.iter_mut().zip(&self.divisor) {
                *r ^= gf_multiply(coef, factor);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_identities() {
        for x in 0..=255u8 {
            assert_eq!(gf_multiply(x, 1), x);
            assert_eq!(gf_multiply(x, 0), 0);
        }
    }

    #[test]
    fn test_multiply_wraps_polynomial() {
        // α^8 = α^4 + α^3 + α^2 + 1
        assert_eq!(gf_multiply(0x80, 0x02), 0x1D);
    }

    #[test]
    fn test_multiply_commutes() {
        for (x, y) in [(0x53, 0xCA), (0x02, 0x8E), (0xFF, 0xFF)] {
            assert_eq!(gf_multiply(x, y), gf_multiply(y, x));
        }
    }

    #[test]
    fn test_hello_world_1q_codewords() {
        // Version 1-Q "HELLO WORLD" (alphanumeric) from the standard walkthrough.
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236];
        let rs = ReedSolomon::new(13);
        assert_eq!(
            rs.remainder(&data),
            vec![168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_remainder_length_matches_degree() {
        let rs = ReedSolomon::new(7);
        assert_eq!(rs.remainder(&[]).len(), 7);
        assert_eq!(rs.remainder(&[1, 2, 3]).len(), 7);
    }
}
