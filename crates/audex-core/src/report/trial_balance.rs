//! Trial Balance line classifier.
//!
//! A data row carries a 4-digit row-code followed by one or more
//! label+amount columns that PDF flattening joins into a single run,
//! e.g. `1001Cash1,234.56`. Whitespace is squeezed out, a space is
//! re-inserted where the code meets the first label, the code is
//! dropped, and the rest is split with the [`LINE_ITEM`] pattern.
//!
//! [`LINE_ITEM`]: super::patterns::LINE_ITEM

use tracing::debug;

use super::lines::{skip_chars, starts_with_digit, strip_whitespace};
use super::patterns::{CODE_BOUNDARY, LINE_ITEM};
use crate::models::record::LineItem;

/// Character width of the leading numeric row-code.
const ROW_CODE_WIDTH: usize = 4;

/// Extract label/amount pairs from Trial Balance page text.
///
/// Lines that are empty after whitespace removal, or that do not open
/// with a row-code digit, are headers or rulings and are skipped.
pub fn line_items(text: &str) -> Vec<LineItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        let squeezed = strip_whitespace(line);
        if !starts_with_digit(&squeezed) {
            continue;
        }

        let spaced = CODE_BOUNDARY.replace_all(&squeezed, "$1 $2");
        let fragment = skip_chars(&spaced, ROW_CODE_WIDTH);

        for caps in LINE_ITEM.captures_iter(fragment) {
            items.push(LineItem {
                label: caps[1].to_string(),
                amount: caps[2].replace(',', ""),
            });
        }
    }

    debug!("trial balance: {} line items", items.len());
    items
}

/// Render line items as output tokens, label then amount.
pub fn output_lines(items: &[LineItem]) -> Vec<String> {
    let mut out = Vec::with_capacity(items.len() * 2);
    for item in items {
        out.push(item.label.clone());
        out.push(item.amount.clone());
    }
    out
}

/// Classify Trial Balance text straight to output tokens.
pub fn extract(text: &str) -> Vec<String> {
    output_lines(&line_items(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_joined_label_and_amount() {
        let items = line_items("1001Cash1,234.56");
        assert_eq!(
            items,
            vec![LineItem {
                label: "Cash".to_string(),
                amount: "1234.56".to_string(),
            }]
        );
    }

    #[test]
    fn test_whitespace_is_squeezed_before_matching() {
        let items = line_items("  1001   Cash   1,234.56  ");
        assert_eq!(items[0].label, "Cash");
        assert_eq!(items[0].amount, "1234.56");
    }

    #[test]
    fn test_multiple_columns_per_line() {
        let items = line_items("2010Rooms12,000.00Food3,500.25");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Rooms");
        assert_eq!(items[0].amount, "12000.00");
        assert_eq!(items[1].label, "Food");
        assert_eq!(items[1].amount, "3500.25");
    }

    #[test]
    fn test_signed_amounts_and_special_labels() {
        let items = line_items("3055Adj*/Comp-1,500.00");
        assert_eq!(items[0].label, "Adj*/Comp");
        assert_eq!(items[0].amount, "-1500.00");
    }

    #[test]
    fn test_header_and_empty_lines_are_skipped() {
        let text = "Trial Balance Report\n\n   \n1001Cash10.00\nTotals\n";
        let items = line_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Cash");
    }

    #[test]
    fn test_output_token_count_is_even_and_amounts_parse() {
        let text = "1001Cash1,234.56\n2010Rooms12,000.00Food3,500.25\n3055Adj-9.99\n";
        let items = line_items(text);
        let tokens = extract(text);
        assert_eq!(tokens.len(), items.len() * 2);
        assert_eq!(tokens.len() % 2, 0);
        for item in &items {
            assert!(item.amount_value().is_some(), "{} should parse", item.amount);
        }
    }

    #[test]
    fn test_short_row_code_only_line() {
        // A bare code spaces out to fewer than 5 chars; nothing to match.
        assert_eq!(line_items("1001"), vec![]);
    }
}
