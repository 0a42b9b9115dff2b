// Benchdiff - Benchmark report comparison toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Column aligned text tables.
//!
//! [`TableBuilder`] collects an optional header and any number of rows, then
//! pads every cell to its column width. Widths are measured in characters.

use thiserror::Error;

/// Gap appended to every column except the last.
pub const SPACE_BETWEEN_COLUMNS: usize = 5;

/// Character used for the separator row under the header.
pub const SEPARATOR: char = '─';

/// Misuse of the [`TableBuilder`] API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Header has already been added")]
    HeaderAlreadyAdded,

    #[error("Rows have already been added, cannot add header now")]
    RowsAlreadyAdded,

    #[error("Cannot add row with a different number of columns than already defined before")]
    ColumnCountMismatch {
        /// Columns established by the header or the first row
        expected: usize,
        /// Columns in the rejected row
        actual: usize,
    },
}

/// Text of a single cell. Absent text renders as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell(String);

impl Cell {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell(text.to_string())
    }
}

impl From<&String> for Cell {
    fn from(text: &String) -> Self {
        Cell(text.clone())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(text: Option<T>) -> Self {
        text.map(Into::into).unwrap_or_default()
    }
}

/// Builder for fixed width text tables.
///
/// # Examples
///
/// ```
/// use benchdiff_core::table::TableBuilder;
///
/// let mut table = TableBuilder::new();
/// table.add_header(["Name", "Value"]).unwrap();
/// table.add_row(["alpha", "1"]).unwrap();
///
/// let rows = table.build();
/// assert_eq!(rows[0], vec!["Name      ", "Value"]);
/// assert_eq!(rows[2], vec!["alpha     ", "1    "]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    header: Option<Vec<Cell>>,
    rows: Vec<Vec<Cell>>,
    column_widths: Vec<usize>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header row.
    ///
    /// An empty header is ignored.
    ///
    /// # Errors
    ///
    /// Fails when a header was already set or rows were already added.
    pub fn add_header<I, C>(&mut self, columns: I) -> Result<&mut Self, TableError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let columns: Vec<Cell> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Ok(self);
        }
        if self.header.is_some() {
            return Err(TableError::HeaderAlreadyAdded);
        }
        if !self.rows.is_empty() {
            return Err(TableError::RowsAlreadyAdded);
        }

        self.track_widths(&columns);
        self.header = Some(columns);
        Ok(self)
    }

    /// Appends a data row.
    ///
    /// An empty row is ignored.
    ///
    /// # Errors
    ///
    /// Fails when the column count differs from the header or earlier rows.
    pub fn add_row<I, C>(&mut self, columns: I) -> Result<&mut Self, TableError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let columns: Vec<Cell> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Ok(self);
        }
        if !self.column_widths.is_empty() && self.column_widths.len() != columns.len() {
            return Err(TableError::ColumnCountMismatch {
                expected: self.column_widths.len(),
                actual: columns.len(),
            });
        }

        self.track_widths(&columns);
        self.rows.push(columns);
        Ok(self)
    }

    /// Lays out the table.
    ///
    /// Returns no rows when no data row was added, even if a header exists.
    /// Otherwise the header and a separator row come first (when a header
    /// was set), followed by the data rows, every cell padded to its column.
    pub fn build(&self) -> Vec<Vec<String>> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let widths: Vec<usize> = (0..self.column_widths.len())
            .map(|i| self.padded_width(i))
            .collect();

        let mut table = Vec::with_capacity(self.rows.len() + 2);
        if let Some(header) = &self.header {
            table.push(pad_row(header, &widths));
            table.push(
                widths
                    .iter()
                    .map(|&width| SEPARATOR.to_string().repeat(width))
                    .collect(),
            );
        }
        table.extend(self.rows.iter().map(|row| pad_row(row, &widths)));
        table
    }

    /// Returns true when no data row was added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn padded_width(&self, column: usize) -> usize {
        let gap = if column + 1 < self.column_widths.len() {
            SPACE_BETWEEN_COLUMNS
        } else {
            0
        };
        self.column_widths[column] + gap
    }

    fn track_widths(&mut self, columns: &[Cell]) {
        for (i, cell) in columns.iter().enumerate() {
            match self.column_widths.get_mut(i) {
                Some(width) => *width = (*width).max(cell.width()),
                None => self.column_widths.push(cell.width()),
            }
        }
    }
}

fn pad_row(row: &[Cell], widths: &[usize]) -> Vec<String> {
    row.iter()
        .zip(widths)
        .map(|(cell, &width)| pad_right(cell.as_str(), width))
        .collect()
}

/// Pads `text` with spaces up to `width` characters.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(len));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

/// Pads `text` with leading spaces up to `width` characters.
pub fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded: String = std::iter::repeat(' ')
        .take(width.saturating_sub(len))
        .collect();
    padded.push_str(text);
    padded
}
