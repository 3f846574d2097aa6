/// An ascii table
#[derive(Debug)]
pub struct AsciiTable<'a> {
    data: Vec<Vec<&'a str>>,

    max_cell_widths: Vec<usize>,
}

impl<'a> AsciiTable<'a> {
    /// Make a new table
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![vec![""; width]; height],
            max_cell_widths: vec![0; width],
        }
    }

    /// Make a table from rows of owned cells.
    ///
    /// The first row is treated like any other, so it can be used as a header.
    pub fn from_rows(rows: &'a [Vec<String>]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut table = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                table.set_cell(x, y, cell);
            }
        }

        table
    }

    /// Set the value of the given cell.
    ///
    /// Indexing starts at 0. It starts at the top left corner and ends at the bottom right.
    pub fn set_cell(&mut self, x: usize, y: usize, data: &'a str) {
        self.data[y][x] = data;
        self.max_cell_widths[x] = std::cmp::max(self.max_cell_widths[x], cell_width(data));
    }

    fn fmt_row_border(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+")?;
        for max_cell_width in self.max_cell_widths.iter() {
            write!(f, "{}+", "-".repeat(max_cell_width + 2))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

/// Hero names are not always ascii
fn cell_width(data: &str) -> usize {
    data.chars().count()
}

impl std::fmt::Display for AsciiTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_row_border(f)?;
        for row in self.data.iter() {
            write!(f, "|")?;
            for (x, (cell, max_cell_width)) in row.iter().zip(self.max_cell_widths.iter()).enumerate()
            {
                let padding = max_cell_width.saturating_sub(cell_width(cell));

                // Labels go left, values go right
                if x == 0 {
                    write!(f, " {}{} |", cell, " ".repeat(padding))?;
                } else {
                    write!(f, " {}{} |", " ".repeat(padding), cell)?;
                }
            }
            writeln!(f)?;
        }
        self.fmt_row_border(f)?;

        Ok(())
    }
}
