use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::engine;
use crate::errors::RedactError;

pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
	record_id: &'a str,
	redacted_data_json: &'a str,
	is_pii: bool,
}

/// Totals for one adapter run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
	pub rows_read: usize,
	pub rows_skipped: usize,
	pub rows_flagged: usize,
}

/// Reads `record_id, data_json` rows from `input`, classifies and redacts
/// each embedded record, and writes the redacted rows to `output`.
pub fn run(input: &Path, output: &Path) -> Result<RunSummary, RedactError> {
	// flexible so short/long rows reach our own skip logic instead of
	// failing the whole run
	let reader = ReaderBuilder::new()
		.has_headers(true)
		.flexible(true)
		.from_path(input)?;
	// Header is written by hand so it appears even for an empty input
	let writer = WriterBuilder::new().has_headers(false).from_path(output)?;

	let summary = process(reader, writer)?;
	info!(
		rows_read = summary.rows_read,
		rows_skipped = summary.rows_skipped,
		rows_flagged = summary.rows_flagged,
		"redaction run finished"
	);
	Ok(summary)
}

fn process<R: Read, W: Write>(
	mut reader: csv::Reader<R>,
	mut writer: csv::Writer<W>,
) -> Result<RunSummary, RedactError> {
	writer.write_record(OUTPUT_HEADER)?;

	let mut summary = RunSummary::default();
	for row in reader.records() {
		let row = row?;
		summary.rows_read += 1;

		if row.len() != 2 {
			debug!(columns = row.len(), "skipping row without exactly two columns");
			summary.rows_skipped += 1;
			continue;
		}
		let record_id = &row[0];

		let fields = match serde_json::from_str::<Value>(&row[1]) {
			Ok(Value::Object(map)) => map,
			Ok(_) => {
				warn!(record_id, "skipping row whose payload is not a JSON object");
				summary.rows_skipped += 1;
				continue;
			},
			Err(err) => {
				warn!(record_id, %err, "skipping row with malformed JSON payload");
				summary.rows_skipped += 1;
				continue;
			},
		};

		let processed = engine::process_record(&fields);
		if processed.is_pii {
			summary.rows_flagged += 1;
		}

		let redacted_json = serde_json::to_string(&processed.fields)?;
		writer.serialize(OutputRow {
			record_id,
			redacted_data_json: &redacted_json,
			is_pii: processed.is_pii,
		})?;
	}
	writer.flush()?;

	Ok(summary)
}
