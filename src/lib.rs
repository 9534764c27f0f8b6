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

//! Incremental, header-keyed CSV reader.
//!
//! This crate reads delimited text files into row records keyed by header
//! column names, batch by batch, so peak memory for parsed records is
//! proportional to the requested batch size rather than the file size.
//! Converting a multi-million-line file into keyed records all at once can
//! take an order of magnitude more memory than the file itself; reading it
//! through a cursor in bounded batches does not.
//!
//! # Features
//!
//! - **Bounded batches**: `read_next(n)` parses at most `n` lines per call
//! - **Header-keyed records**: each row comes back as a key-to-value map for
//!   exactly the columns you asked for
//! - **Cursor semantics**: monotone read position, clamped at end of data,
//!   over-requesting is always safe
//! - **Total reads**: every failure is a construction failure; reading never
//!   errors
//! - **Iterator interface**: record-at-a-time iteration via standard
//!   [`Iterator`]
//!
//! # Example
//!
//! ```rust
//! use csvcursor::{CsvReader, ReaderConfig};
//!
//! let text = "\
//! stop_id,stop_name,stop_lat
//! s1,Central,43.65
//! s2,Harbour,43.64
//! s3,Airport,43.68
//! ";
//!
//! let config = ReaderConfig {
//!     separator: "\n".to_string(),
//!     ..Default::default()
//! };
//! let mut reader =
//!     CsvReader::from_string_with_config(text, &["stop_id", "stop_name"], config).unwrap();
//!
//! while reader.has_next() {
//!     for record in reader.read_next(2) {
//!         println!("{} -> {}", record["stop_id"], record["stop_name"]);
//!     }
//! }
//! ```
//!
//! # Quoting rules and their known limitation
//!
//! Fields wrapped in the quote character may contain embedded delimiters
//! (`6,"7,7,7",8` has three fields, the middle one `7,7,7`). One documented
//! exception is preserved deliberately: a quoted *final* field containing an
//! embedded delimiter truncates at that delimiter and keeps its leading
//! quote. See [`tokenize`] for the exact rules.
//!
//! # Memory model
//!
//! The full file text is loaded once at construction and the data lines are
//! held in memory for the reader's lifetime; only record materialization is
//! batched. For files beyond tens of gigabytes this crate is the wrong tool.

mod error;
mod header;
mod reader;
pub mod tokenize;

pub use error::{CsvError, CsvResult};
pub use header::HeaderIndex;
pub use reader::{CsvReader, Record, ReaderConfig};
