use strum::{EnumIter, EnumString, IntoStaticStr};

use super::{classify, mask};

/// Semantic kind of a recognized field name.
///
/// The variant names double as the wire-level field names via strum's
/// snake_case mapping, so the name → rule dispatch is a lookup rather than a
/// chain of string comparisons. Field names outside this set are never
/// classified or masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
	Phone,
	Aadhar,
	Passport,
	UpiId,
	Name,
	FirstName,
	LastName,
	Email,
	Address,
	DeviceId,
	IpAddress,
}

impl FieldKind {
	/// Kinds whose value alone can mark a record as PII.
	pub const STANDALONE: [FieldKind; 4] =
		[Self::Phone, Self::Aadhar, Self::Passport, Self::UpiId];

	pub fn is_standalone(self) -> bool {
		Self::STANDALONE.contains(&self)
	}

	/// Strict per-kind detection predicate. Always false for the
	/// combinatorial kinds; those are only sensitive in combination.
	pub fn matches_standalone(self, value: &str) -> bool {
		classify::is_standalone_pii(self, value)
	}

	/// Masks a value already selected for redaction. Total over text input:
	/// a value that does not satisfy this kind's detection predicate comes
	/// back unchanged rather than half-masked.
	pub fn mask(self, value: &str) -> String {
		mask::mask_value(self, value)
	}

	pub fn as_str(self) -> &'static str {
		self.into()
	}
}
