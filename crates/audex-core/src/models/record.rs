//! Record types produced by the report classifiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A Trial Balance label/amount pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Account label, verbatim from the report.
    pub label: String,
    /// Amount as a sign-optional decimal string, thousands separators
    /// removed.
    pub amount: String,
}

impl LineItem {
    /// The amount as a typed decimal value.
    pub fn amount_value(&self) -> Option<Decimal> {
        Decimal::from_str(&self.amount).ok()
    }
}

/// One re-segmented Manager Flash line: the label text followed by each
/// digit run on its own line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashBlock {
    pub lines: Vec<String>,
}

/// A Tax Exempt report record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxExemptRecord {
    /// A guest stay row, sliced from the fixed-width columns verbatim.
    Entry {
        guest_name: String,
        room_number: String,
        price: String,
    },
    /// A routing-instruction label redirecting a charge to another
    /// account.
    Routing(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_item_amount_value() {
        let item = LineItem {
            label: "Cash".to_string(),
            amount: "1234.56".to_string(),
        };
        assert_eq!(item.amount_value(), Decimal::from_str("1234.56").ok());

        let negative = LineItem {
            label: "Refund".to_string(),
            amount: "-42".to_string(),
        };
        assert_eq!(negative.amount_value(), Decimal::from_str("-42").ok());
    }
}
