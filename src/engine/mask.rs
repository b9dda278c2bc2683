use super::classify;
use super::field::FieldKind;

/// Addresses carry too much free-form structure to mask partially.
pub const REDACTED_ADDRESS: &str = "[REDACTED_ADDRESS]";

/// Masks a value under the rule for its field kind. Input is trimmed first;
/// the standalone kinds re-check their detection predicate and fall through
/// unchanged when it fails, so a malformed value is never half-masked.
pub fn mask_value(kind: FieldKind, value: &str) -> String {
	let value = value.trim();
	match kind {
		FieldKind::Phone => mask_phone(value),
		FieldKind::Aadhar => mask_aadhar(value),
		FieldKind::Passport => mask_passport(value),
		FieldKind::UpiId => mask_upi(value),
		FieldKind::Name => value
			.split_whitespace()
			.map(mask_string)
			.collect::<Vec<_>>()
			.join(" "),
		FieldKind::FirstName | FieldKind::LastName | FieldKind::DeviceId => mask_string(value),
		FieldKind::Email => mask_email(value),
		FieldKind::Address => REDACTED_ADDRESS.to_string(),
		FieldKind::IpAddress => mask_ip(value),
	}
}

// Detection guarantees 10 ASCII digits, so byte slicing is safe here.
fn mask_phone(value: &str) -> String {
	if !classify::is_standalone_pii(FieldKind::Phone, value) {
		return value.to_string();
	}
	format!("{}XXXXXX{}", &value[..2], &value[8..])
}

fn mask_aadhar(value: &str) -> String {
	if !classify::is_standalone_pii(FieldKind::Aadhar, value) {
		return value.to_string();
	}
	let cleaned = classify::strip_whitespace(value);
	format!("{}XXXX{}", &cleaned[..4], &cleaned[8..])
}

fn mask_passport(value: &str) -> String {
	if !classify::is_standalone_pii(FieldKind::Passport, value) {
		return value.to_string();
	}
	format!("{}XXXXXX{}", &value[..1], &value[7..])
}

fn mask_upi(value: &str) -> String {
	if !classify::is_standalone_pii(FieldKind::UpiId, value) {
		return value.to_string();
	}
	let Some((user, domain)) = value.split_once('@') else {
		return value.to_string();
	};
	// A bare phone number used as the UPI handle keeps the phone shape
	let masked_user = if classify::is_standalone_pii(FieldKind::Phone, user) {
		mask_phone(user)
	} else {
		mask_string(user)
	};
	format!("{masked_user}@{domain}")
}

fn mask_email(value: &str) -> String {
	let Some((local, domain)) = value.split_once('@') else {
		return value.to_string();
	};
	let masked_local = local
		.split('.')
		.map(mask_local_part)
		.collect::<Vec<_>>()
		.join(".");
	format!("{masked_local}@{domain}")
}

fn mask_ip(value: &str) -> String {
	if !classify::is_dotted_quad(value) {
		return value.to_string();
	}
	match value.rsplit_once('.') {
		Some((prefix, _)) => format!("{prefix}.XXX"),
		None => value.to_string(),
	}
}

/// Generic string rule: short values mask fully, longer ones keep their
/// first and last character.
fn mask_string(value: &str) -> String {
	let chars: Vec<char> = value.chars().collect();
	if chars.len() <= 3 {
		return "X".repeat(chars.len());
	}
	format!(
		"{}{}{}",
		chars[0],
		"X".repeat(chars.len() - 2),
		chars[chars.len() - 1]
	)
}

/// Email local-part rule: fixed-width tail so the masked length leaks
/// nothing beyond the two kept characters.
fn mask_local_part(part: &str) -> String {
	let chars: Vec<char> = part.chars().collect();
	if chars.len() <= 3 {
		return "X".repeat(chars.len());
	}
	format!("{}{}XXX", chars[0], chars[1])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mask_phone_keeps_edges() {
		assert_eq!(mask_value(FieldKind::Phone, "9876543210"), "98XXXXXX10");
		assert_eq!(mask_value(FieldKind::Phone, " 9876543210 "), "98XXXXXX10");
	}

	#[test]
	fn test_mask_phone_falls_through_on_non_match() {
		assert_eq!(mask_value(FieldKind::Phone, "12345"), "12345");
		assert_eq!(mask_value(FieldKind::Phone, "not a phone"), "not a phone");
	}

	#[test]
	fn test_mask_aadhar_strips_whitespace_first() {
		assert_eq!(mask_value(FieldKind::Aadhar, "123456789012"), "1234XXXX9012");
		assert_eq!(
			mask_value(FieldKind::Aadhar, "1234 5678 9012"),
			"1234XXXX9012"
		);
		assert_eq!(mask_value(FieldKind::Aadhar, "12345"), "12345");
	}

	#[test]
	fn test_mask_passport() {
		assert_eq!(mask_value(FieldKind::Passport, "P1234567"), "PXXXXXX7");
		assert_eq!(mask_value(FieldKind::Passport, "p1234567"), "p1234567");
	}

	#[test]
	fn test_mask_upi_phone_handle() {
		assert_eq!(
			mask_value(FieldKind::UpiId, "9876543210@okhdfc"),
			"98XXXXXX10@okhdfc"
		);
	}

	#[test]
	fn test_mask_upi_generic_handle_keeps_domain() {
		assert_eq!(mask_value(FieldKind::UpiId, "amitkumar@ybl"), "aXXXXXXXr@ybl");
		assert_eq!(mask_value(FieldKind::UpiId, "no-at-sign"), "no-at-sign");
	}

	#[test]
	fn test_mask_name_per_word() {
		assert_eq!(mask_value(FieldKind::Name, "Amit Kumar"), "AXXt KXXXr");
		assert_eq!(mask_value(FieldKind::Name, "Amit  Kumar"), "AXXt KXXXr");
		assert_eq!(mask_value(FieldKind::Name, "Jo"), "XX");
	}

	#[test]
	fn test_mask_email_segments_and_domain() {
		assert_eq!(mask_value(FieldKind::Email, "a@b.com"), "X@b.com");
		assert_eq!(
			mask_value(FieldKind::Email, "amit.kumar@example.com"),
			"amXXX.kuXXX@example.com"
		);
		// No @ falls through unchanged
		assert_eq!(mask_value(FieldKind::Email, "not-an-email"), "not-an-email");
	}

	#[test]
	fn test_local_part_rule_is_fixed_width() {
		assert_eq!(mask_local_part("abcdefghij"), "abXXX");
		assert_eq!(mask_local_part("abcd"), "abXXX");
		assert_eq!(mask_local_part("abc"), "XXX");
	}

	#[test]
	fn test_mask_address_is_full_redaction() {
		assert_eq!(
			mask_value(FieldKind::Address, "12 MG Road, Bengaluru 560001"),
			REDACTED_ADDRESS
		);
	}

	#[test]
	fn test_mask_ip_keeps_first_three_octets() {
		assert_eq!(mask_value(FieldKind::IpAddress, "192.168.1.10"), "192.168.1.XXX");
		assert_eq!(mask_value(FieldKind::IpAddress, "not.an.ip"), "not.an.ip");
	}

	#[test]
	fn test_generic_rule_short_strings_mask_fully() {
		assert_eq!(mask_string(""), "");
		assert_eq!(mask_string("ab"), "XX");
		assert_eq!(mask_string("abc"), "XXX");
		assert_eq!(mask_string("abcd"), "aXXd");
	}

	#[test]
	fn test_generic_rule_counts_chars_not_bytes() {
		assert_eq!(mask_string("été"), "XXX");
		assert_eq!(mask_string("crème"), "cXXXe");
	}
}
