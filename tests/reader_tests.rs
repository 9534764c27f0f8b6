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

//! Integration tests for csvcursor

use csvcursor::{CsvError, CsvReader, ReaderConfig};
use proptest::prelude::*;

/// Five data rows exercising plain fields, quoted fields with embedded
/// commas, and the documented quoted-final-field truncation.
const COUNTS_CSV: &str = "\
first,second,third,fourth,fifth
1,2,3,4,5
6,\"7,7,7\",8,9,10
11,12,13,14,15
\"16,16,16\",\"17,17,17\",18,19,20
21,22,23,24,\"25,25,25\"
";

const COUNTS_KEYS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

fn lf_config() -> ReaderConfig {
    ReaderConfig {
        separator: "\n".to_string(),
        ..Default::default()
    }
}

fn counts_reader() -> CsvReader {
    CsvReader::from_string_with_config(COUNTS_CSV, &COUNTS_KEYS, lf_config()).unwrap()
}

// ==================== Fixture Scenario Tests ====================

#[test]
fn test_plain_row_all_fields() {
    let mut reader = counts_reader();
    let batch = reader.read_next(1);
    assert_eq!(batch.len(), 1);

    let record = &batch[0];
    assert_eq!(record["first"], "1");
    assert_eq!(record["second"], "2");
    assert_eq!(record["third"], "3");
    assert_eq!(record["fourth"], "4");
    assert_eq!(record["fifth"], "5");
}

#[test]
fn test_incremental_batches() {
    let mut reader = counts_reader();

    let batch1 = reader.read_next(2);
    assert_eq!(batch1.len(), 2);
    assert_eq!(batch1[0]["first"], "1");
    // Embedded comma preserved inside the quoted field.
    assert_eq!(batch1[1]["second"], "7,7,7");

    let batch2 = reader.read_next(1);
    assert_eq!(batch2[0]["fourth"], "14");
    assert_eq!(batch2[0]["fifth"], "15");

    let batch3 = reader.read_next(1);
    assert_eq!(batch3[0]["first"], "16,16,16");
    assert_eq!(batch3[0]["second"], "17,17,17");

    // Quoted final field with embedded commas: truncates at the first
    // embedded comma and keeps the leading quote. Asserted verbatim.
    let batch4 = reader.read_next(1);
    assert_eq!(batch4[0]["fifth"], "\"25");

    let batch5 = reader.read_next(100);
    assert!(batch5.is_empty());
}

#[test]
fn test_read_all_count() {
    let mut reader = counts_reader();
    assert_eq!(reader.read_all().len(), 5);
}

#[test]
fn test_has_next_true_before_last_row() {
    let mut reader = counts_reader();
    reader.read_next(4);
    assert!(reader.has_next());
}

#[test]
fn test_has_next_false_at_end() {
    let mut reader = counts_reader();
    reader.read_next(5);
    assert!(!reader.has_next());
}

#[test]
fn test_has_next_false_past_end() {
    let mut reader = counts_reader();
    reader.read_next(999);
    assert!(!reader.has_next());
}

#[test]
fn test_batched_reads_concatenate_to_read_all() {
    let mut batched = counts_reader();
    let mut collected = batched.read_next(2);
    collected.extend(batched.read_next(1));
    collected.extend(batched.read_next(99));

    let mut whole = counts_reader();
    assert_eq!(collected, whole.read_all());
}

// ==================== Header-Only Input Tests ====================

#[test]
fn test_only_header_read_is_empty() {
    let mut reader =
        CsvReader::from_string_with_config("one,two,three\n", &["one", "two", "three"], lf_config())
            .unwrap();
    assert!(reader.read_next(1).is_empty());
}

#[test]
fn test_only_header_has_next_false() {
    let reader =
        CsvReader::from_string_with_config("one,two,three\n", &["one", "two", "three"], lf_config())
            .unwrap();
    assert!(!reader.has_next());
}

// ==================== Large Input Tests ====================

#[test]
fn test_over_request_on_13038_rows() {
    let mut text = String::from("stop_id,stop_code,stop_name\n");
    for i in 0..13038 {
        text.push_str(&format!("s{i},{i},Stop {i}\n"));
    }

    let mut reader =
        CsvReader::from_string_with_config(&text, &["stop_id", "stop_name"], lf_config()).unwrap();
    assert_eq!(reader.total_rows(), 13038);

    // Ask for one more line than exists; clamps with no error.
    let records = reader.read_next(13039);
    assert_eq!(records.len(), 13038);
    assert_eq!(records[13037]["stop_id"], "s13037");
    assert!(!reader.has_next());
}

#[test]
fn test_bounded_batches_over_large_input() {
    let mut text = String::from("k,v\n");
    for i in 0..10_000 {
        text.push_str(&format!("{i},{i}\n"));
    }

    let mut reader = CsvReader::from_string_with_config(&text, &["v"], lf_config()).unwrap();
    let mut seen = 0;
    while reader.has_next() {
        let batch = reader.read_next(512);
        assert!(batch.len() <= 512);
        seen += batch.len();
    }
    assert_eq!(seen, 10_000);
}

// ==================== File Construction Tests ====================

#[test]
fn test_from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counts.csv");
    std::fs::write(&path, COUNTS_CSV).unwrap();

    let mut reader = CsvReader::from_path_with_config(&path, &COUNTS_KEYS, lf_config()).unwrap();
    assert_eq!(reader.read_all().len(), 5);
}

#[test]
fn test_from_path_default_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.csv");
    std::fs::write(&path, "a,b\r\n1,2\r\n3,4\r\n").unwrap();

    let mut reader = CsvReader::from_path(&path, &["a", "b"]).unwrap();
    let records = reader.read_all();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["a"], "3");
}

#[test]
fn test_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let result = CsvReader::from_path(&path, &["a"]);
    match result {
        Err(CsvError::FileNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_invalid_utf8_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.csv");
    std::fs::write(&path, [0x61, 0x2c, 0x62, 0x0a, 0xff, 0xfe, 0x0a]).unwrap();

    let result = CsvReader::from_path_with_config(&path, &["a"], lf_config());
    assert!(matches!(result, Err(CsvError::Decode { .. })));
}

// ==================== Property Tests ====================

fn numbered_csv(rows: usize) -> String {
    let mut text = String::from("a,b,c\n");
    for i in 0..rows {
        text.push_str(&format!("{i},{},{}\n", i * 2, i * 3));
    }
    text
}

proptest! {
    #[test]
    fn prop_cursor_monotone_bounded_and_exact(
        rows in 0usize..150,
        batches in proptest::collection::vec(0usize..50, 0..16),
    ) {
        let text = numbered_csv(rows);
        let mut reader =
            CsvReader::from_string_with_config(&text, &["a", "c", "zzz"], lf_config()).unwrap();
        prop_assert_eq!(reader.total_rows(), rows);

        let mut previous = 0;
        let mut emitted = 0;
        for count in batches {
            let batch = reader.read_next(count);
            prop_assert!(batch.len() <= count);
            emitted += batch.len();

            prop_assert!(reader.position() >= previous);
            prop_assert!(reader.position() <= rows);
            prop_assert_eq!(reader.position(), emitted);
            previous = reader.position();
        }

        // Whatever the batch schedule was, the rest is exactly the remainder.
        let rest = reader.read_all();
        prop_assert_eq!(emitted + rest.len(), rows);
        prop_assert!(!reader.has_next());
    }

    #[test]
    fn prop_exhausted_reader_stays_empty(
        rows in 0usize..60,
        count in 0usize..200,
    ) {
        let text = numbered_csv(rows);
        let mut reader =
            CsvReader::from_string_with_config(&text, &["a"], lf_config()).unwrap();
        reader.read_all();
        prop_assert!(!reader.has_next());
        prop_assert!(reader.read_next(count).is_empty());
        prop_assert_eq!(reader.position(), rows);
    }

    #[test]
    fn prop_absent_key_never_appears(
        rows in 0usize..60,
        count in 1usize..80,
    ) {
        let text = numbered_csv(rows);
        let mut reader =
            CsvReader::from_string_with_config(&text, &["b", "zzz"], lf_config()).unwrap();
        while reader.has_next() {
            for record in reader.read_next(count) {
                prop_assert!(!record.contains_key("zzz"));
                prop_assert!(record.contains_key("b"));
            }
        }
    }

    #[test]
    fn prop_over_request_returns_exact_remainder(rows in 0usize..120) {
        let text = numbered_csv(rows);
        let mut reader =
            CsvReader::from_string_with_config(&text, &["a", "b", "c"], lf_config()).unwrap();
        let records = reader.read_next(rows + 1);
        prop_assert_eq!(records.len(), rows);
        prop_assert!(!reader.has_next());
    }
}
