//! Grid-style text tables for console reports.

use std::fmt::{self, Display, Formatter};

use orders_types::domain::report::{ReportRow, REPORT_HEADERS};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub align: Align,
}

/// Every row is framed by a `-` rule, the header by a `=` rule.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render empty, extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, col)| {
                self.rows
                    .iter()
                    .map(|row| row[idx].width())
                    .fold(col.name.width(), usize::max)
            })
            .collect()
    }
}

fn rule(f: &mut Formatter<'_>, widths: &[usize], fill: &str) -> fmt::Result {
    let parts: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
    writeln!(f, "+{}+", parts.join("+"))
}

fn line(f: &mut Formatter<'_>, widths: &[usize], columns: &[Column], cells: &[String]) -> fmt::Result {
    let parts: Vec<String> = cells
        .iter()
        .zip(columns)
        .zip(widths)
        .map(|((cell, col), w)| {
            let pad = " ".repeat(w - cell.width());
            match col.align {
                Align::Left => format!(" {}{} ", cell, pad),
                Align::Right => format!(" {}{} ", pad, cell),
            }
        })
        .collect();
    writeln!(f, "|{}|", parts.join("|"))
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.name.clone()).collect();

        rule(f, &widths, "-")?;
        line(f, &widths, &self.columns, &header)?;
        rule(f, &widths, "=")?;
        for row in &self.rows {
            line(f, &widths, &self.columns, row)?;
            rule(f, &widths, "-")?;
        }
        Ok(())
    }
}

/// The order listing: row number, product name, price, quantity, line total.
pub fn report_table(rows: &[ReportRow]) -> Table {
    let columns = REPORT_HEADERS
        .iter()
        .enumerate()
        .map(|(idx, name)| Column {
            name: name.to_string(),
            align: if idx == 1 { Align::Left } else { Align::Right },
        })
        .collect();
    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(vec![
            row.no.to_string(),
            row.product_name.clone(),
            row.price.to_string(),
            row.quantity.to_string(),
            row.total.to_string(),
        ]);
    }
    table
}
