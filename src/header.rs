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

//! Header resolution: requested key names to column indices.
//!
//! The header line is split on the field delimiter with a plain split (no
//! quote-awareness — headers are assumed unquoted), each column name is
//! trimmed of surrounding whitespace, and every requested key resolves to
//! the index of the first column exactly equal to it. Keys not present in
//! the header resolve to absent rather than failing; such keys are simply
//! skipped when records are built.

/// Mapping from requested key names to optional column indices.
///
/// Built once at reader construction and immutable afterwards. Requested-key
/// order is preserved. "Resolved" vs. "absent" is a tagged `Option<usize>`,
/// never a sentinel index.
///
/// # Examples
///
/// ```rust
/// use csvcursor::HeaderIndex;
///
/// let header = HeaderIndex::resolve("stop_id, stop_name ,stop_lat", &["stop_name", "zone_id"], ',');
/// assert_eq!(header.index_of("stop_name"), Some(1));
/// assert_eq!(header.index_of("zone_id"), None);
/// ```
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    entries: Vec<(String, Option<usize>)>,
}

impl HeaderIndex {
    /// Resolve the requested keys against a header line.
    ///
    /// Pure function of its inputs; never fails. Unmatched keys degrade to
    /// absent.
    pub fn resolve(header_line: &str, keys: &[&str], delimiter: char) -> Self {
        let columns: Vec<&str> = header_line.split(delimiter).map(str::trim).collect();

        let entries = keys
            .iter()
            .map(|key| {
                let index = columns.iter().position(|column| column == key);
                (key.to_string(), index)
            })
            .collect();

        Self { entries }
    }

    /// Column index for a requested key, or `None` if the key was not
    /// requested or is absent from the header.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .and_then(|(_, index)| *index)
    }

    /// Requested keys, in request order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Requested keys with their resolution, in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<usize>)> {
        self.entries
            .iter()
            .map(|(name, index)| (name.as_str(), *index))
    }

    /// Number of requested keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no keys were requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
