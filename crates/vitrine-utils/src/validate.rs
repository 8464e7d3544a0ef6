//! Contact-field validation.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[1-9][0-9]{0,15}$").expect("phone pattern compiles"));

/// Loose email shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_PATTERN.is_match(email)
}

/// Phone check on the digits only: 1-16 digits, no leading zero.
///
/// Formatting characters (`+`, spaces, parentheses, dashes) are stripped
/// before matching.
pub fn is_valid_phone(phone: &str) -> bool {
	let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
	PHONE_PATTERN.is_match(&digits)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("ana@alfa.com.br", true)]
	#[case("a@b.c", true)]
	#[case("missing-at.com", false)]
	#[case("two@@signs.com", false)]
	#[case("spaced name@host.com", false)]
	#[case("no-tld@host", false)]
	fn test_is_valid_email(#[case] email: &str, #[case] expected: bool) {
		assert_eq!(is_valid_email(email), expected);
	}

	#[rstest]
	#[case("+55 (41) 99999-0000", true)]
	#[case("5541999990000", true)]
	#[case("041999990000", false)] // leading zero after stripping
	#[case("", false)]
	#[case("12345678901234567", false)] // 17 digits
	fn test_is_valid_phone(#[case] phone: &str, #[case] expected: bool) {
		assert_eq!(is_valid_phone(phone), expected);
	}
}
