use serde_json::{Map, Value};

pub mod classify;
pub mod field;
pub mod mask;

use field::FieldKind;

/// Two or more quasi-identifier signals in one record make it PII.
const COMBINATORIAL_THRESHOLD: usize = 2;

/// One record after classification: the redacted field mapping and the
/// overall PII verdict. Fields never selected keep their original value,
/// original JSON type included; masked fields always become strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRecord {
	pub fields: Map<String, Value>,
	pub is_pii: bool,
}

/// Classifies and redacts one record. Stateless across invocations.
///
/// Runs the standalone pass over the four standalone identifier kinds, then
/// the combinatorial pass over the five quasi-identifier signals. The
/// combinatorial pass always runs, even after a standalone hit, since it can
/// select fields the standalone pass never touches.
pub fn process_record(fields: &Map<String, Value>) -> ProcessedRecord {
	let mut redacted = fields.clone();
	let mut is_pii = false;

	for kind in FieldKind::STANDALONE {
		if let Some(value) = fields.get(kind.as_str()) {
			let text = classify::text_value(value);
			if kind.matches_standalone(&text) {
				is_pii = true;
				redacted.insert(kind.as_str().to_string(), Value::String(kind.mask(&text)));
			}
		}
	}

	let combination = classify::evaluate_combinatorial(fields);
	if combination.signals.count() >= COMBINATORIAL_THRESHOLD {
		is_pii = true;
		for kind in combination.contributing {
			if let Some(value) = fields.get(kind.as_str()) {
				let text = classify::text_value(value);
				redacted.insert(kind.as_str().to_string(), Value::String(kind.mask(&text)));
			}
		}
	}

	ProcessedRecord {
		fields: redacted,
		is_pii,
	}
}
