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

//! Error types for CSV reading.
//!
//! Every error in this crate is a *construction* error: once a [`CsvReader`]
//! exists, all of its state has been validated and loaded, and the read
//! operations (`has_next`, `read_next`, `read_all`) are total functions that
//! never fail. Out-of-range batch counts, keys missing from the header, and
//! short rows are handled by clamping or omission, not by errors.
//!
//! [`CsvReader`]: crate::CsvReader
//!
//! # Examples
//!
//! ```rust
//! use csvcursor::{CsvError, CsvReader};
//!
//! let result = CsvReader::from_path("/no/such/file.csv", &["id"]);
//! match result {
//!     Err(CsvError::FileNotFound { path }) => {
//!         eprintln!("missing input: {}", path.display());
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while constructing a [`CsvReader`].
///
/// [`CsvReader`]: crate::CsvReader
#[derive(Debug, Error)]
pub enum CsvError {
    /// The source path does not resolve to an existing file.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The file bytes are not valid UTF-8 text.
    ///
    /// Raised before any line splitting is attempted.
    #[error("invalid UTF-8 in input: {message}")]
    Decode {
        /// Description of the offending byte sequence.
        message: String,
    },

    /// Separator splitting produced no lines at all, so there is no header.
    ///
    /// `str::split` always yields at least one element, so this cannot be hit
    /// through the public constructors; the variant exists so callers that
    /// build readers through their own splitting layer have a name for the
    /// condition.
    #[error("input produced no header line")]
    MissingHeader,

    /// I/O failure other than a missing file (permissions, transient errors).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result` with [`CsvError`].
pub type CsvResult<T> = Result<T, CsvError>;
