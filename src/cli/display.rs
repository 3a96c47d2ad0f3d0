// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the bible-ranges CLI.
//!
//! Plain ANSI colors, switched off by `NO_COLOR` or a non-TTY stdout so the
//! tables can be piped into other tools.

use bible_ranges::{Proximity, BEST_SCORE, NOT_RELEVANT};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap text in the given escape codes when colors are on.
pub fn themed(codes: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", codes.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Bold title line.
pub fn heading(title: &str) {
    println!("{}", themed(&[BOLD], title));
}

/// Score with the sentinels spelled out.
pub fn score_value(score: f64) -> String {
    if score == BEST_SCORE {
        themed(&[BOLD, GREEN], "best")
    } else if score == NOT_RELEVANT {
        themed(&[GRAY], "none")
    } else if score >= 0.5 {
        themed(&[GREEN], &format!("{:.4}", score))
    } else if score >= 0.05 {
        themed(&[YELLOW], &format!("{:.4}", score))
    } else {
        themed(&[RED], &format!("{:.3e}", score))
    }
}

/// What the score means, in words.
pub fn proximity_label(proximity: Option<Proximity>) -> String {
    match proximity {
        None => themed(&[GRAY], "no range field"),
        Some(Proximity::Unrelated) => themed(&[GRAY], "no ranges"),
        Some(Proximity::Overlapping) => themed(&[BOLD, GREEN], "overlap"),
        Some(Proximity::Gap(d)) => format!("gap {}", d),
    }
}
