//! Shared regex patterns for report line classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of whitespace, for squeezing a line flat.
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// A digit followed directly by a letter, where the row-code meets
    /// the first label after whitespace removal.
    pub static ref CODE_BOUNDARY: Regex = Regex::new(r"(\d)([a-zA-Z])").unwrap();

    /// A label run (letters, `*`, `/`) joined to a sign-optional decimal
    /// number with optional `,` group separators.
    pub static ref LINE_ITEM: Regex =
        Regex::new(r"([a-zA-Z*/]+)([-+]?[\d,]+(?:\.\d+)?)").unwrap();
}
