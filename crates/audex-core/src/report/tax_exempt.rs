//! Tax Exempt report classifier.
//!
//! The report is a fixed-width table: after a seven-line page header,
//! each row is either a guest stay (name/room/price columns), a `T-`
//! tax-code row, or a routing instruction. The first "Tax Type Total"
//! row closes the table; everything after it is ignored.

use tracing::debug;

use super::lines::{skip_chars, slice_chars};
use crate::models::config::{TaxExemptConfig, TaxExemptLayout};
use crate::models::record::TaxExemptRecord;

/// Substring marking the end of the guest table.
const TABLE_END_MARKER: &str = "Tax Type Total";

/// Characters dropped from the front of a routing-instruction line
/// before the account label.
const ROUTING_PREFIX_WIDTH: usize = 37;

/// Fixed-width column offsets, in characters from the left-trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub guest_name: (usize, usize),
    pub room_number: (usize, usize),
    pub price: (usize, usize),
}

/// Offsets for the standard report layout.
pub const STANDARD_COLUMNS: ColumnLayout = ColumnLayout {
    guest_name: (0, 40),
    room_number: (46, 49),
    price: (133, 139),
};

/// Offsets for the wide report variant.
pub const WIDE_COLUMNS: ColumnLayout = ColumnLayout {
    guest_name: (0, 45),
    room_number: (46, 49),
    price: (129, 136),
};

/// The column offsets for a configured layout.
pub fn columns_for(layout: TaxExemptLayout) -> &'static ColumnLayout {
    match layout {
        TaxExemptLayout::Standard => &STANDARD_COLUMNS,
        TaxExemptLayout::Wide => &WIDE_COLUMNS,
    }
}

/// Scanner state while walking the report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    HeaderSkip,
    Scanning,
    Done,
}

/// Extract guest stay and routing records from Tax Exempt page text.
pub fn records(text: &str, config: &TaxExemptConfig) -> Vec<TaxExemptRecord> {
    let columns = columns_for(config.layout);
    let mut state = State::HeaderSkip;
    let mut records = Vec::new();

    for (number, raw) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        match state {
            State::Done => break,
            State::HeaderSkip if number <= config.header_lines => continue,
            State::HeaderSkip => state = State::Scanning,
            State::Scanning => {}
        }

        let line = raw.trim_start();

        if line.contains(TABLE_END_MARKER) {
            debug!("tax exempt line {}: table end marker, stopping", number);
            state = State::Done;
            continue;
        }

        if line.starts_with("Routing Instruction") {
            let routed = skip_chars(line, ROUTING_PREFIX_WIDTH);
            let label = match routed.split_once(':') {
                Some((head, _)) => head,
                None => routed,
            };
            records.push(TaxExemptRecord::Routing(label.to_string()));
        } else if !line.starts_with("T-") {
            records.push(TaxExemptRecord::Entry {
                guest_name: slice_chars(line, columns.guest_name.0, columns.guest_name.1)
                    .to_string(),
                room_number: slice_chars(line, columns.room_number.0, columns.room_number.1)
                    .to_string(),
                price: slice_chars(line, columns.price.0, columns.price.1).to_string(),
            });
        }
    }

    debug!("tax exempt: {} records", records.len());
    records
}

/// Render records as output tokens: three lines per guest stay, one per
/// routing instruction.
pub fn output_lines(records: &[TaxExemptRecord]) -> Vec<String> {
    let mut out = Vec::new();
    for record in records {
        match record {
            TaxExemptRecord::Entry {
                guest_name,
                room_number,
                price,
            } => {
                out.push(guest_name.clone());
                out.push(room_number.clone());
                out.push(price.clone());
            }
            TaxExemptRecord::Routing(label) => out.push(label.clone()),
        }
    }
    out
}

/// Classify Tax Exempt text straight to output tokens.
pub fn extract(text: &str, config: &TaxExemptConfig) -> Vec<String> {
    output_lines(&records(text, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A guest row with the standard column positions populated.
    fn guest_row(name: &str, room: &str, price: &str) -> String {
        let mut row = format!("{:<46}{:<3}", name, room);
        while row.chars().count() < 133 {
            row.push(' ');
        }
        row.push_str(&format!("{:<6}", price));
        row
    }

    fn with_header(rows: &[String]) -> String {
        let mut lines: Vec<String> = (1..=7).map(|i| format!("Header line {}", i)).collect();
        lines.extend(rows.iter().cloned());
        lines.join("\n")
    }

    #[test]
    fn test_guest_row_columns() {
        let text = with_header(&[guest_row("SMITH, JOHN", "412", "12.50")]);
        let records = records(&text, &TaxExemptConfig::default());

        assert_eq!(records.len(), 1);
        let TaxExemptRecord::Entry {
            guest_name,
            room_number,
            price,
        } = &records[0]
        else {
            panic!("expected a guest entry");
        };
        assert_eq!(guest_name.trim_end(), "SMITH, JOHN");
        // Column slices are verbatim, padding included.
        assert_eq!(guest_name.chars().count(), 40);
        assert_eq!(room_number, "412");
        assert_eq!(price, "12.50 ");
    }

    #[test]
    fn test_header_lines_are_skipped() {
        // Header rows would otherwise classify as guest entries.
        let text = with_header(&[]);
        assert_eq!(records(&text, &TaxExemptConfig::default()), vec![]);
    }

    #[test]
    fn test_tax_code_rows_are_ignored() {
        let text = with_header(&[
            "T-OCC  Occupancy Tax".to_string(),
            guest_row("DOE, JANE", "101", "9.00"),
        ]);
        let records = records(&text, &TaxExemptConfig::default());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_stops_permanently_at_table_end() {
        let text = with_header(&[
            guest_row("DOE, JANE", "101", "9.00"),
            "   Tax Type Total                 123.00".to_string(),
            guest_row("LATE, ENTRY", "202", "5.00"),
        ]);
        let records = records(&text, &TaxExemptConfig::default());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_routing_instruction_label() {
        let mut line = String::from("Routing Instruction");
        while line.chars().count() < 37 {
            line.push(' ');
        }
        line.push_str("ABC123: route to master");
        let text = with_header(&[line]);

        let records = records(&text, &TaxExemptConfig::default());
        assert_eq!(records, vec![TaxExemptRecord::Routing("ABC123".to_string())]);
        assert_eq!(
            extract(&text, &TaxExemptConfig::default()),
            vec!["ABC123".to_string()]
        );
    }

    #[test]
    fn test_routing_instruction_without_colon() {
        let mut line = String::from("Routing Instruction");
        while line.chars().count() < 37 {
            line.push(' ');
        }
        line.push_str("DEF456");
        let text = with_header(&[line]);

        let records = records(&text, &TaxExemptConfig::default());
        assert_eq!(records, vec![TaxExemptRecord::Routing("DEF456".to_string())]);
    }

    #[test]
    fn test_short_line_slices_clamp() {
        let text = with_header(&["stub".to_string()]);
        let records = records(&text, &TaxExemptConfig::default());

        let TaxExemptRecord::Entry {
            guest_name,
            room_number,
            price,
        } = &records[0]
        else {
            panic!("expected a guest entry");
        };
        assert_eq!(guest_name, "stub");
        assert_eq!(room_number, "");
        assert_eq!(price, "");
    }

    #[test]
    fn test_wide_layout_offsets() {
        let config = TaxExemptConfig {
            layout: TaxExemptLayout::Wide,
            ..TaxExemptConfig::default()
        };
        let mut row = format!("{:<46}{:<3}", "LONG NAME THAT RUNS PAST FORTY CHARACTERS", "7");
        while row.chars().count() < 129 {
            row.push(' ');
        }
        row.push_str("1234.56");
        let text = with_header(&[row]);

        let records = records(&text, &config);
        let TaxExemptRecord::Entry {
            guest_name, price, ..
        } = &records[0]
        else {
            panic!("expected a guest entry");
        };
        assert_eq!(guest_name.chars().count(), 45);
        assert_eq!(price, "1234.56");
    }
}
