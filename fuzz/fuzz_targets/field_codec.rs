// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stored range fields under adversarial input.
//!
//! Range fields come from an indexing pipeline we don't control. A corrupt
//! field must come back as an error naming the entry, never a panic.

#![no_main]

use bible_ranges::RangeCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let codec = RangeCodec::default();

    match codec.decode(text) {
        Ok(ranges) => {
            // Canonical text decodes to the same set and re-encodes identically
            let canonical = codec.encode(&ranges);
            let again = codec
                .decode(&canonical)
                .expect("canonical encoding must decode");
            assert_eq!(ranges, again, "round trip changed the set");
            assert_eq!(canonical, codec.encode(&again), "encoding not canonical");

            for range in &again {
                assert!(range.start() <= range.end(), "reversed range decoded");
            }
        }
        Err(err) => {
            let entries = text.trim().split(codec.range_separator()).count();
            assert!(
                err.entry < entries,
                "error names entry {} of {}",
                err.entry,
                entries
            );
        }
    }
});
