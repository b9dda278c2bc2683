use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::field::FieldKind;

static PHONE_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^\d{10}$").expect("Hard-coded regex expression should be valid"));
static AADHAR_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^\d{12}$").expect("Hard-coded regex expression should be valid"));
static PASSPORT_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[A-Z]\d{7}$").expect("Hard-coded regex expression should be valid")
});
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Hard-coded regex expression should be valid")
});
// 5-6 digit postal code as a standalone token
static PIN_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\b\d{5,6}\b").expect("Hard-coded regex expression should be valid")
});
static IP_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("Hard-coded regex expression should be valid")
});
static WHITESPACE_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\s+").expect("Hard-coded regex expression should be valid"));

/// Coerces a JSON value to the text form the detectors and maskers operate
/// on. Null coerces to the empty string so it behaves like an absent field.
pub(crate) fn text_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

pub(crate) fn strip_whitespace(value: &str) -> String {
	WHITESPACE_REGEX.replace_all(value, "").into_owned()
}

pub(crate) fn is_dotted_quad(value: &str) -> bool {
	IP_REGEX.is_match(value)
}

/// Standalone detection: true when the trimmed value alone identifies a
/// person under this kind's strict pattern.
pub fn is_standalone_pii(kind: FieldKind, value: &str) -> bool {
	let value = value.trim();
	match kind {
		FieldKind::Phone => PHONE_REGEX.is_match(value),
		FieldKind::Aadhar => AADHAR_REGEX.is_match(&strip_whitespace(value)),
		FieldKind::Passport => PASSPORT_REGEX.is_match(value),
		FieldKind::UpiId => match value.split_once('@') {
			Some((_, domain)) => !domain.is_empty() && !domain.contains('@'),
			None => false,
		},
		_ => false,
	}
}

/// The five quasi-identifier signals evaluated independently over one
/// record. A single true signal is not PII; two or more together are.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
	pub full_name: bool,
	pub email: bool,
	pub address: bool,
	pub device_id: bool,
	pub ip_address: bool,
}

impl Signals {
	pub fn count(self) -> usize {
		[
			self.full_name,
			self.email,
			self.address,
			self.device_id,
			self.ip_address,
		]
		.iter()
		.filter(|signal| **signal)
		.count()
	}
}

/// Outcome of the combinatorial pass: which signals fired and which fields
/// contributed to them. Contributing fields are only masked once the caller
/// confirms the signal count meets the threshold.
#[derive(Debug, Default)]
pub struct Combination {
	pub signals: Signals,
	pub contributing: Vec<FieldKind>,
}

pub fn evaluate_combinatorial(fields: &Map<String, Value>) -> Combination {
	let mut signals = Signals::default();
	let mut contributing = Vec::new();

	if let Some(value) = fields.get(FieldKind::Name.as_str()) {
		if text_value(value).trim().split_whitespace().count() >= 2 {
			signals.full_name = true;
			contributing.push(FieldKind::Name);
		}
	}
	if fields.contains_key(FieldKind::FirstName.as_str()) {
		if let Some(last) = fields.get(FieldKind::LastName.as_str()) {
			// A single-letter last name is too weak to pair up
			if text_value(last).trim().chars().count() > 1 {
				signals.full_name = true;
				contributing.push(FieldKind::FirstName);
				contributing.push(FieldKind::LastName);
			}
		}
	}

	if let Some(value) = fields.get(FieldKind::Email.as_str()) {
		if EMAIL_REGEX.is_match(text_value(value).trim()) {
			signals.email = true;
			contributing.push(FieldKind::Email);
		}
	}

	if let Some(value) = fields.get(FieldKind::Address.as_str()) {
		let text = text_value(value);
		let trimmed = text.trim();
		let has_pin = PIN_CODE_REGEX.is_match(trimmed);
		let has_parts = trimmed.contains(',') || trimmed.split_whitespace().count() > 4;
		// Both required: a postal code alone or a long text alone is not
		// enough to call it an address
		if has_pin && has_parts {
			signals.address = true;
			contributing.push(FieldKind::Address);
		}
	}

	if let Some(value) = fields.get(FieldKind::DeviceId.as_str()) {
		if !text_value(value).trim().is_empty() {
			signals.device_id = true;
			contributing.push(FieldKind::DeviceId);
		}
	}

	if let Some(value) = fields.get(FieldKind::IpAddress.as_str()) {
		if is_dotted_quad(text_value(value).trim()) {
			signals.ip_address = true;
			contributing.push(FieldKind::IpAddress);
		}
	}

	Combination {
		signals,
		contributing,
	}
}
