//! Manager Flash line classifier.
//!
//! The flash summary keeps its figures in a fixed band of lines. Each
//! line is a label column joined to a run of numeric columns; the gap
//! between label and first figure is closed, the line is clipped to the
//! report's width, and every digit run is broken out onto its own line.

use tracing::debug;

use super::lines::first_digit_index;
use crate::models::config::ManagerFlashConfig;
use crate::models::record::FlashBlock;

/// Extract re-segmented blocks from Manager Flash page text.
///
/// Only lines inside the configured band (1-indexed, inclusive) are
/// considered. A banded line with no digit at all is malformed and
/// skipped.
pub fn blocks(text: &str, config: &ManagerFlashConfig) -> Vec<FlashBlock> {
    let mut blocks = Vec::new();

    for (number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if number < config.first_line || number > config.last_line {
            continue;
        }

        let Some(index) = first_digit_index(line) else {
            debug!("manager flash line {}: no digit column, skipping", number);
            continue;
        };

        let cleaned = format!("{}{}", line[..index].trim_end(), &line[index..]);
        let clipped: String = cleaned.chars().take(config.max_width).collect();

        blocks.push(FlashBlock {
            lines: split_digit_runs(&clipped),
        });
    }

    debug!("manager flash: {} blocks", blocks.len());
    blocks
}

/// Break every digit run onto its own line, then trim the whole block.
fn split_digit_runs(line: &str) -> Vec<String> {
    let mut segmented = String::with_capacity(line.len() + 8);
    let mut prev_is_digit = false;

    for ch in line.chars() {
        if ch.is_ascii_digit() {
            if !prev_is_digit {
                segmented.push('\n');
            }
            segmented.push(ch);
            prev_is_digit = true;
        } else {
            segmented.push(ch);
            prev_is_digit = false;
        }
    }

    segmented.trim().lines().map(str::to_string).collect()
}

/// Classify Manager Flash text straight to output tokens.
pub fn extract(text: &str, config: &ManagerFlashConfig) -> Vec<String> {
    blocks(text, config)
        .into_iter()
        .flat_map(|block| block.lines)
        .collect()
}
