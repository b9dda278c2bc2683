use thiserror::Error;

/// Failures the CSV adapter can surface. Malformed rows and payloads are not
/// errors; the adapter skips them and keeps going.
#[derive(Debug, Error)]
pub enum RedactError {
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error("json serialization error: {0}")]
	Json(#[from] serde_json::Error),
}
