//! Data models for the library

pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookListing, CreateBook};
pub use loan::{BorrowedBook, CreateLoan, Loan};
pub use member::{CreateMember, Member};

/// Parse a record id typed into a form field.
///
/// Integer-valued numbers such as `1.0` name the same row as `1`, the way
/// SQLite compares text against an integer column. Anything else cannot
/// match a row, so callers treat `None` the same way as an unknown id.
pub fn parse_record_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }

    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(value as i64)
    } else {
        None
    }
}
