//! # Data Masks
//!
//! The eight mask patterns and the four penalty rules used to choose between
//! them.

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// One of the eight data mask patterns. The default is pattern 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask(u8);

impl Mask {
    /// Number of mask patterns defined by the standard.
    pub const COUNT: u8 = 8;

    /// Creates a mask from its index (0..=7).
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// All masks in index order.
    pub fn all() -> impl Iterator<Item = Mask> {
        (0..Self::COUNT).map(Mask)
    }

    /// The mask index.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Whether this mask flips the module at `(row, col)`.
    pub fn inverts(self, row: usize, col: usize) -> bool {
        let (x, y) = (col, row);
        match self.0 {
            0 => (x + y) % 2 == 0,
            1 => y % 2 == 0,
            2 => x % 3 == 0,
            3 => (x + y) % 3 == 0,
            4 => (x / 3 + y / 2) % 2 == 0,
            5 => x * y % 2 + x * y % 3 == 0,
            6 => (x * y % 2 + x * y % 3) % 2 == 0,
            _ => ((x + y) % 2 + x * y % 3) % 2 == 0,
        }
    }
}

/// Total penalty of a row-major `size × size` module grid.
pub(crate) fn penalty_score(modules: &[bool], size: usize) -> u32 {
    let at = |row: usize, col: usize| modules[row * size + col];
    let mut result = 0;

    // Rules 1 and 3 along rows, then columns.
    for a in 0..size {
        result += line_penalty(size, |b| at(a, b));
        result += line_penalty(size, |b| at(b, a));
    }

    // Rule 2: 2×2 blocks of one colour.
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let c = at(row, col);
            if c == at(row, col + 1) && c == at(row + 1, col) && c == at(row + 1, col + 1) {
                result += PENALTY_N2;
            }
        }
    }

    // Rule 4: dark/light balance in 5% steps away from 50%.
    let dark = modules.iter().filter(|&&m| m).count() as i64;
    let total = (size * size) as i64;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    result += k as u32 * PENALTY_N4;

    result
}

/// Rules 1 and 3 for a single row or column.
fn line_penalty(size: usize, cell: impl Fn(usize) -> bool) -> u32 {
    let mut result = 0;
    let mut run_dark = false;
    let mut run_len = 0;
    let mut history = FinderRunHistory::new(size);

    for i in 0..size {
        if cell(i) == run_dark {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            history.push(run_len);
            if !run_dark {
                result += history.count_patterns() * PENALTY_N3;
            }
            run_dark = cell(i);
            run_len = 1;
        }
    }
    result + history.terminate(run_dark, run_len) * PENALTY_N3
}

/// The last seven run lengths of a line, most recent first. The area outside
/// the symbol counts as light, so the first and last light runs are padded by
/// the symbol size.
struct FinderRunHistory {
    runs: [usize; 7],
    size: usize,
}

impl FinderRunHistory {
    fn new(size: usize) -> Self {
        Self { runs: [0; 7], size }
    }

    fn push(&mut self, mut run_len: usize) {
        if self.runs[0] == 0 {
            run_len += self.size;
        }
        self.runs.copy_within(0..6, 1);
        self.runs[0] = run_len;
    }

    /// Counts 1:1:3:1:1 patterns with a 4-wide light run on either side.
    fn count_patterns(&self) -> u32 {
        let r = &self.runs;
        let n = r[1];
        let core = n > 0 && r[2] == n && r[3] == n * 3 && r[4] == n && r[5] == n;
        u32::from(core && r[0] >= n * 4 && r[6] >= n)
            + u32::from(core && r[6] >= n * 4 && r[0] >= n)
    }

    fn terminate(mut self, run_dark: bool, mut run_len: usize) -> u32 {
        if run_dark {
            self.push(run_len);
            run_len = 0;
        }
        run_len += self.size;
        self.push(run_len);
        self.count_patterns()
    }
}
