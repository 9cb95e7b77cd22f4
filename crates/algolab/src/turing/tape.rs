//! Sparse two-way infinite tape.

use std::collections::BTreeMap;

/// Blank symbol. Blank cells are never materialized in storage.
pub const BLANK: char = '_';

/// Tape over integer cell indices, unbounded in both directions.
#[derive(Clone, Debug, Default)]
pub struct SparseTape {
    cells: BTreeMap<i64, char>,
}

impl SparseTape {
    /// Seed the tape with `text` starting at cell 0.
    pub fn seeded(text: &str) -> Self {
        let mut tape = Self::default();
        for (i, ch) in text.chars().enumerate() {
            tape.write(i as i64, ch);
        }
        tape
    }

    #[inline]
    pub fn read(&self, i: i64) -> char {
        self.cells.get(&i).copied().unwrap_or(BLANK)
    }

    #[inline]
    pub fn write(&mut self, i: i64, sym: char) {
        if sym == BLANK {
            self.cells.remove(&i);
        } else {
            self.cells.insert(i, sym);
        }
    }

    /// Contents between the outermost non-blank cells, with surrounding
    /// blanks stripped. Empty tape renders as "".
    pub fn to_string_trimmed(&self) -> String {
        let (Some((&lo, _)), Some((&hi, _))) =
            (self.cells.first_key_value(), self.cells.last_key_value())
        else {
            return String::new();
        };
        (lo..=hi)
            .map(|i| self.read(i))
            .collect::<String>()
            .trim_matches(BLANK)
            .to_string()
    }

    /// Fixed-radius window around `center`, blanks included. Debug aid.
    pub fn window(&self, center: i64, radius: i64) -> String {
        (center - radius..=center + radius)
            .map(|i| self.read(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_are_not_stored() {
        let mut t = SparseTape::seeded("01");
        t.write(0, BLANK);
        assert_eq!(t.read(0), BLANK);
        assert_eq!(t.to_string_trimmed(), "1");
        t.write(1, BLANK);
        assert_eq!(t.to_string_trimmed(), "");
    }

    #[test]
    fn trimmed_spans_negative_indices() {
        let mut t = SparseTape::default();
        t.write(-2, '1');
        t.write(-1, '0');
        t.write(0, '1');
        assert_eq!(t.to_string_trimmed(), "101");
        assert_eq!(t.window(-1, 2), "_101_");
    }
}
