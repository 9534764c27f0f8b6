// csvcursor - incremental, header-keyed CSV reading
//
// Copyright (c) 2026 csvcursor contributors.
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

//! The incremental row reader.
//!
//! [`CsvReader`] loads the entire file text once at construction, resolves
//! the header, and keeps the data lines in memory. What it does *not* do at
//! construction is parse those lines into records: record materialization
//! happens batch by batch through [`read_next`], so peak memory for parsed
//! output is proportional to the requested batch size, not the file size.
//! A multi-million-line file whose full record form would need tens of
//! gigabytes can be walked in small batches with a modest footprint.
//!
//! The raw text and the line buffer are still held for the reader's
//! lifetime; that is the deliberate ceiling of this design. It trades memory
//! for simplicity and is not a substitute for true line-at-a-time file
//! streaming.
//!
//! [`read_next`]: CsvReader::read_next
//!
//! # Examples
//!
//! ```rust
//! use csvcursor::{CsvReader, ReaderConfig};
//!
//! let text = "first,second\n1,2\n3,4\n";
//! let config = ReaderConfig {
//!     separator: "\n".to_string(),
//!     ..Default::default()
//! };
//! let mut reader = CsvReader::from_string_with_config(text, &["first", "second"], config).unwrap();
//!
//! while reader.has_next() {
//!     for record in reader.read_next(1) {
//!         println!("first = {}", record["first"]);
//!     }
//! }
//! ```

use crate::error::{CsvError, CsvResult};
use crate::header::HeaderIndex;
use crate::tokenize::split_fields;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One row of output: requested key name to the field value found at that
/// key's resolved column index.
///
/// Produced fresh per read call and never retained by the reader. A key
/// absent from the header, or whose index falls outside a short row, is
/// omitted from that record entirely.
pub type Record = HashMap<String, String>;

/// Configuration for [`CsvReader`].
///
/// # Examples
///
/// ## Default Configuration
///
/// ```rust
/// use csvcursor::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.separator, "\r\n");
/// assert_eq!(config.delimiter, ',');
/// assert_eq!(config.quote, '"');
/// ```
///
/// ## Unix Line Endings
///
/// ```rust
/// use csvcursor::ReaderConfig;
///
/// let config = ReaderConfig {
///     separator: "\n".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Line separator the file was written with (default: `"\r\n"`).
    ///
    /// The file text is split on this exact string; a file using bare `\n`
    /// read with the CRLF default will come back as a single line.
    pub separator: String,

    /// Field delimiter character (default: `,`).
    pub delimiter: char,

    /// Quote character for fields containing embedded delimiters
    /// (default: `"`).
    pub quote: char,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            separator: "\r\n".to_string(),
            delimiter: ',',
            quote: '"',
        }
    }
}

/// Incremental CSV reader keyed by header column names.
///
/// Construction loads and splits the file, resolves the header against the
/// requested keys, and filters out empty lines. After that the reader is a
/// cursor over the data lines: each [`read_next`] call parses only the next
/// batch of lines into [`Record`]s and advances the cursor, which moves
/// monotonically from `0` to the data line count and never past it,
/// no matter how large a batch is requested.
///
/// All failure is at construction; see [`CsvError`]. The read operations are
/// total and infallible.
///
/// [`read_next`]: CsvReader::read_next
///
/// # Examples
///
/// ## Reading selected columns in batches
///
/// ```rust
/// use csvcursor::{CsvReader, ReaderConfig};
///
/// let text = "stop_id,stop_name,stop_lat\ns1,Alpha,43.1\ns2,Beta,43.2\n";
/// let config = ReaderConfig {
///     separator: "\n".to_string(),
///     ..Default::default()
/// };
/// let mut reader =
///     CsvReader::from_string_with_config(text, &["stop_id", "stop_name"], config).unwrap();
///
/// let batch = reader.read_next(10);
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[0]["stop_name"], "Alpha");
/// assert!(!reader.has_next());
/// ```
///
/// ## From a file on disk
///
/// ```rust,no_run
/// use csvcursor::CsvReader;
///
/// let mut reader = CsvReader::from_path("stops.txt", &["stop_id", "stop_name"]).unwrap();
/// while reader.has_next() {
///     let batch = reader.read_next(10_000);
///     // process batch...
/// }
/// ```
pub struct CsvReader {
    header: HeaderIndex,
    rows: Vec<String>,
    cursor: usize,
    config: ReaderConfig,
}

impl CsvReader {
    /// Construct a reader from a file path with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`CsvError::FileNotFound`] if the path does not exist.
    /// - [`CsvError::Io`] if the file cannot be read.
    /// - [`CsvError::Decode`] if the bytes are not valid UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P, keys: &[&str]) -> CsvResult<Self> {
        Self::from_path_with_config(path, keys, ReaderConfig::default())
    }

    /// Construct a reader from a file path with a custom configuration.
    ///
    /// # Errors
    ///
    /// Same as [`from_path`](Self::from_path).
    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        keys: &[&str],
        config: ReaderConfig,
    ) -> CsvResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CsvError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| CsvError::Decode {
            message: e.utf8_error().to_string(),
        })?;

        Self::from_string_with_config(&text, keys, config)
    }

    /// Construct a reader from already-loaded text with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// [`CsvError::MissingHeader`] if separator splitting yields no lines
    /// (not reachable for `&str` input, which always yields at least one).
    pub fn from_string(text: &str, keys: &[&str]) -> CsvResult<Self> {
        Self::from_string_with_config(text, keys, ReaderConfig::default())
    }

    /// Construct a reader from already-loaded text with a custom
    /// configuration.
    ///
    /// The first separator-delimited line is the header. Every following
    /// line equal to the empty string is dropped: this removes the trailing
    /// artifact of a final line terminator, and also silently drops any
    /// genuinely blank row. That drop-all-empty-lines policy is deliberate.
    ///
    /// # Errors
    ///
    /// Same as [`from_string`](Self::from_string).
    pub fn from_string_with_config(
        text: &str,
        keys: &[&str],
        config: ReaderConfig,
    ) -> CsvResult<Self> {
        let mut lines = text.split(config.separator.as_str());
        let header_line = lines.next().ok_or(CsvError::MissingHeader)?;

        let header = HeaderIndex::resolve(header_line, keys, config.delimiter);
        let rows: Vec<String> = lines
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();

        Ok(Self {
            header,
            rows,
            cursor: 0,
            config,
        })
    }

    /// Whether any data lines remain to be read.
    ///
    /// Pure query; does not move the cursor.
    pub fn has_next(&self) -> bool {
        self.cursor < self.rows.len()
    }

    /// Parse and return up to `count` more records, advancing the cursor.
    ///
    /// The effective upper bound is clamped to the data line count, so any
    /// `count` is safe, including zero and values far past the end. Returns
    /// an empty vec once the reader is exhausted.
    ///
    /// For each line, every requested key with a resolved column index that
    /// is within the line's field count contributes one entry to that line's
    /// record; unresolved keys and indices beyond a short row are omitted,
    /// never errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvcursor::{CsvReader, ReaderConfig};
    ///
    /// let text = "k\n1\n2\n3\n";
    /// let config = ReaderConfig { separator: "\n".to_string(), ..Default::default() };
    /// let mut reader = CsvReader::from_string_with_config(text, &["k"], config).unwrap();
    ///
    /// assert_eq!(reader.read_next(2).len(), 2);
    /// assert_eq!(reader.read_next(999).len(), 1);
    /// assert_eq!(reader.read_next(999).len(), 0);
    /// ```
    pub fn read_next(&mut self, count: usize) -> Vec<Record> {
        let upper = usize::min(self.cursor.saturating_add(count), self.rows.len());
        let mut records = Vec::with_capacity(upper - self.cursor);

        for line in &self.rows[self.cursor..upper] {
            let fields = split_fields(line, self.config.delimiter, self.config.quote);

            let mut record = Record::new();
            for (key, index) in self.header.iter() {
                let Some(index) = index else { continue };
                if let Some(value) = fields.get(index) {
                    record.insert(key.to_string(), value.clone());
                }
            }

            records.push(record);
        }

        // Advance only after every record in the window is built.
        self.cursor = upper;
        records
    }

    /// Parse and return every remaining record in one call.
    ///
    /// Equivalent to `read_next(total_rows())`. This materializes all
    /// remaining records at once; intended for small files.
    pub fn read_all(&mut self) -> Vec<Record> {
        self.read_next(self.rows.len())
    }

    /// The resolved header mapping.
    pub fn header(&self) -> &HeaderIndex {
        &self.header
    }

    /// Count of data lines already emitted.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total count of data lines (excluding the header and empty lines).
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Count of data lines not yet emitted.
    pub fn remaining(&self) -> usize {
        self.rows.len() - self.cursor
    }
}

/// Record-at-a-time iteration, sharing the cursor with [`read_next`].
///
/// Infallible: all validation happened at construction.
///
/// [`read_next`]: CsvReader::read_next
///
/// # Examples
///
/// ```rust
/// use csvcursor::{CsvReader, ReaderConfig};
///
/// let text = "id,name\n1,a\n2,b\n";
/// let config = ReaderConfig { separator: "\n".to_string(), ..Default::default() };
/// let reader = CsvReader::from_string_with_config(text, &["name"], config).unwrap();
///
/// let names: Vec<String> = reader.map(|r| r["name"].clone()).collect();
/// assert_eq!(names, vec!["a", "b"]);
/// ```
impl Iterator for CsvReader {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next(1).pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}
