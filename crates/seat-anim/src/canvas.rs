//! Fixed-size character grid.

/// A `width × height` grid of characters, initially all spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width:  usize,
    height: usize,
    cells:  Vec<char>,
}

impl Canvas {
    pub fn blank(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![' '; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    /// Draw `art` with its top-left corner at (`row`, `col`).
    ///
    /// Spaces in `art` leave the canvas untouched; anything falling outside
    /// the grid is clipped.  A single leading newline is ignored so art can
    /// be written as raw string literals starting on their own line.
    pub fn stamp(&mut self, art: &str, row: usize, col: usize) {
        let art = art.strip_prefix('\n').unwrap_or(art);
        for (dy, line) in art.lines().enumerate() {
            let r = row + dy;
            if r >= self.height {
                break;
            }
            for (dx, ch) in line.chars().enumerate() {
                let c = col + dx;
                if c >= self.width {
                    break;
                }
                if ch != ' ' {
                    self.cells[r * self.width + c] = ch;
                }
            }
        }
    }

    /// Rows as strings with trailing spaces removed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}
