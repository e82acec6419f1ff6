//! Quotation report export.
//!
//! Writes the computed report as delimited text: one numeric row per staff
//! group followed by the synthesized total row. The file is UTF-8 with a
//! byte-order marker so spreadsheet applications detect the encoding.

use std::io::Write;

use crate::error::{EngineError, EngineResult};
use crate::models::QuoteReport;

/// The UTF-8 byte-order marker prepended to every export.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// The sentinel written in the weekday-days column of the total row.
pub const TOTAL_ROW_SENTINEL: &str = "Total";

/// Column headers of the export file.
pub const CSV_HEADERS: [&str; 9] = [
    "annual_salary",
    "headcount",
    "weekday_days",
    "holiday_days",
    "overtime_hours",
    "weekday_total",
    "holiday_total",
    "overtime_total",
    "grand_total",
];

/// Writes the quotation report as UTF-8-with-BOM delimited text.
///
/// Group rows carry raw numeric (unformatted) values so the file can be
/// re-summed; the total row zeroes the salary column and replaces the
/// weekday-days column with the `Total` sentinel, dashing the remaining
/// input columns.
///
/// # Arguments
///
/// * `report` - The computed quotation report
/// * `writer` - The destination for the encoded bytes
///
/// # Examples
///
/// ```
/// use quote_engine::export::write_quote_csv;
/// use quote_engine::calculation::build_quote;
/// use quote_engine::models::BillingRates;
///
/// let report = build_quote(&[], &BillingRates::default());
/// let mut buffer = Vec::new();
/// write_quote_csv(&report, &mut buffer).unwrap();
/// assert!(buffer.starts_with(&[0xEF, 0xBB, 0xBF]));
/// ```
pub fn write_quote_csv<W: Write>(report: &QuoteReport, writer: &mut W) -> EngineResult<()> {
    writer
        .write_all(UTF8_BOM)
        .map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })?;

    for row in &report.rows {
        csv_writer
            .write_record([
                row.annual_salary.to_string(),
                row.headcount.to_string(),
                row.weekday_days.to_string(),
                row.holiday_days.to_string(),
                row.overtime_hours.normalize().to_string(),
                row.weekday_total.normalize().to_string(),
                row.holiday_total.normalize().to_string(),
                row.overtime_total.normalize().to_string(),
                row.grand_total.normalize().to_string(),
            ])
            .map_err(|e| EngineError::ExportError {
                message: e.to_string(),
            })?;
    }

    let totals = &report.totals;
    csv_writer
        .write_record([
            "0".to_string(),
            totals.headcount.to_string(),
            TOTAL_ROW_SENTINEL.to_string(),
            "-".to_string(),
            "-".to_string(),
            totals.weekday_total.normalize().to_string(),
            totals.holiday_total.normalize().to_string(),
            totals.overtime_total.normalize().to_string(),
            totals.grand_total.normalize().to_string(),
        ])
        .map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })?;

    csv_writer.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// Renders the quotation report export into a byte buffer.
pub fn quote_csv_bytes(report: &QuoteReport) -> EngineResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_quote_csv(report, &mut buffer)?;
    Ok(buffer)
}
