//! Reads transaction statements exported as CSV.
//!
//! Expects a header row followed by `title,type,category,amount,created_at`
//! records, where `type` is `deposit` or `withdraw` and `created_at` is a
//! `YYYY-MM-DD HH:MM:SS` timestamp.

use std::io::Read;

use serde::Deserialize;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    transaction::{TransactionBuilder, TransactionKind},
};

const CREATED_AT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug, Deserialize)]
struct StatementRecord {
    title: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    amount: f64,
    created_at: String,
}

/// Parses a CSV statement into transaction builders, in file order.
///
/// The builders still go through the usual validation when a store creates
/// them, so a statement with, say, a negative amount parses here and is
/// rejected there.
///
/// # Errors
/// Returns an [Error::InvalidCsv] if a record does not match the expected
/// columns or its timestamp cannot be parsed.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<TransactionBuilder>, Error> {
    let mut statement = ::csv::Reader::from_reader(reader);
    let mut builders = Vec::new();

    for result in statement.deserialize::<StatementRecord>() {
        let record = result.map_err(|error| Error::InvalidCsv(error.to_string()))?;

        let created_at = PrimitiveDateTime::parse(&record.created_at, CREATED_AT_FORMAT)
            .map_err(|error| {
                Error::InvalidCsv(format!(
                    "bad created_at {:?}: {error}",
                    record.created_at
                ))
            })?
            .assume_utc();

        builders.push(
            TransactionBuilder::new(record.title, record.amount, record.kind)
                .category(record.category)
                .created_at(created_at),
        );
    }

    Ok(builders)
}
