use crate::errors::AppResult;
use crate::models::{Trip, TripTable};
use crate::ui::Console;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};

/// Fixed-size windows over the table rows, in original order.
pub struct Pager<'a> {
    rows: &'a [Trip],
    page_size: usize,
    cursor: usize,
}

impl<'a> Pager<'a> {
    pub fn new(rows: &'a [Trip], page_size: usize) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    /// Return the next window and its starting row index.
    /// Past the end the window is empty.
    pub fn next_page(&mut self) -> (usize, &'a [Trip]) {
        let rows = self.rows;
        let start = self.cursor;
        let from = start.min(rows.len());
        let to = (start + self.page_size).min(rows.len());
        self.cursor += self.page_size;
        (start, &rows[from..to])
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.rows.len()
    }
}

/// Render a page with a leading row-index column and the table's columns.
pub fn render_page(columns: &[String], start: usize, rows: &[Trip]) -> String {
    let mut cols = vec![Column::right("")];
    cols.extend(columns.iter().map(|c| Column::left(c.as_str())));

    let mut table = Table::new(cols);
    for (i, trip) in rows.iter().enumerate() {
        let mut row = vec![(start + i).to_string()];
        row.extend(columns.iter().map(|c| trip.cell(c)));
        table.add_row(row);
    }
    table.render()
}

/// Show the filtered table `page_size` rows at a time while the user answers "yes".
pub fn display_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    header(console.out(), "Displaying Data...")?;

    if table.is_empty() {
        info(console.out(), "No rows to display.")?;
        return Ok(());
    }

    let mut pager = Pager::new(&table.rows, page_size);
    let mut first = true;

    loop {
        let prompt = if first {
            format!("Would you like to see the first {page_size} rows of data? Enter yes or no:")
        } else {
            format!("Would you like to see the next {page_size} rows? Enter yes or no:")
        };
        first = false;

        if !console.confirm(&prompt)? {
            break;
        }

        let (start, rows) = pager.next_page();
        write!(console.out(), "{}", render_page(&table.columns, start, rows))?;

        if pager.is_exhausted() {
            info(console.out(), "No more rows to display.")?;
            break;
        }
    }

    Ok(())
}
