//! Date and time renderings mandated by the X12 envelope segments.

use chrono::NaiveDateTime;

/// `YYMMDD`, used by `ISA09`.
pub fn isa_date(at: &NaiveDateTime) -> String {
    at.format("%y%m%d").to_string()
}

/// `CCYYMMDD`, used by `GS04` and most body date elements.
pub fn ccyymmdd(at: &NaiveDateTime) -> String {
    at.format("%Y%m%d").to_string()
}

/// `HHMM`, used by `ISA10`, `GS05` and body time elements.
pub fn hhmm(at: &NaiveDateTime) -> String {
    at.format("%H%M").to_string()
}
