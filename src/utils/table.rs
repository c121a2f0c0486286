//! Fixed-width table rendering for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let mut header = String::new();
        for col in &self.columns {
            header.push_str(&format!("{:<width$}", col.header, width = col.width));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                line.push_str(&format!("{:<width$}", row[i], width = col.width));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
