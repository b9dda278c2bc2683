use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use pii_redact::{csv_io, trace};

const OUTPUT_FILE: &str = "redacted_output.csv";

/// Classifies CSV-exported records as PII and writes a redacted copy.
#[derive(Parser)]
#[command(name = "pii-redact", version, about)]
struct Cli {
	/// Input CSV with `record_id` and `data_json` columns.
	input: PathBuf,
}

fn main() -> ExitCode {
	trace::init();
	let cli = Cli::parse();

	match csv_io::run(&cli.input, Path::new(OUTPUT_FILE)) {
		Ok(_) => ExitCode::SUCCESS,
		Err(err) => {
			error!(%err, "redaction failed");
			ExitCode::FAILURE
		},
	}
}
