#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    // Cells laid out row-major (r * side + c); None is a blank awaiting fill.
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Fresh all-blank grid. Side must be 1..=256 so coordinates fit in u8.
    pub fn new(side: usize) -> Self {
        debug_assert!(side > 0 && side <= 256, "grid side must fit u8 coordinates");
        Self {
            side,
            cells: vec![None; side * side],
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.side && c < self.side);
        r * self.side + c
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        self.cells[self.idx(r, c)]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, letter: u8) {
        let i = self.idx(r, c);
        self.cells[i] = Some(letter);
    }

    #[inline]
    pub fn is_blank(&self, r: usize, c: usize) -> bool {
        self.get(r, c).is_none()
    }

    /// Cell letter as a char; blanks (pre-fill only) come out as a space.
    #[inline]
    pub fn char_at(&self, r: usize, c: usize) -> char {
        self.get(r, c).map_or(' ', char::from)
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == self.side * self.side
    }

    /// Render rows top-to-bottom as strings.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.side)
            .map(|r| (0..self.side).map(|c| self.char_at(r, c)).collect())
            .collect()
    }

    /// Parse a grid from text rows, one row per line. The row count fixes the
    /// side; every row must match it and hold letters only. Lowercase input
    /// is folded to uppercase.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, String> {
        let side = rows.len();
        if side == 0 {
            return Err("grid text is empty".to_string());
        }
        if side > 256 {
            return Err(format!("grid side {side} exceeds the supported maximum of 256"));
        }
        let mut grid = Grid::new(side);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            if row.len() != side {
                return Err(format!(
                    "row {} has {} letters, expected {}",
                    r + 1,
                    row.len(),
                    side
                ));
            }
            for (c, ch) in row.chars().enumerate() {
                let up = ch.to_ascii_uppercase();
                if !up.is_ascii_uppercase() {
                    return Err(format!("row {} column {}: '{ch}' is not a letter", r + 1, c + 1));
                }
                grid.set(r, c, up as u8);
            }
        }
        Ok(grid)
    }
}
