//! WhatsApp deep-link generation.

/// Placeholder token substituted into message templates.
pub const PRODUCT_NAME_TOKEN: &str = "{PRODUCT_NAME}";

/// Builds a `wa.me` deep link from a phone number and message template.
///
/// The `{PRODUCT_NAME}` token in `message` is replaced with `product_name`
/// and the result is percent-encoded. The phone number is passed through
/// as-is — validation is a separate concern ([`crate::validate`]) and is not
/// enforced here.
///
/// ```
/// use vitrine_utils::whatsapp_link;
///
/// assert_eq!(
/// 	whatsapp_link("5541999990000", "Hello {PRODUCT_NAME}", "Acme"),
/// 	"https://wa.me/5541999990000?text=Hello%20Acme"
/// );
/// ```
pub fn whatsapp_link(phone: &str, message: &str, product_name: &str) -> String {
	let message = message.replace(PRODUCT_NAME_TOKEN, product_name);
	format!("https://wa.me/{phone}?text={}", urlencoding::encode(&message))
}

/// Opens a WhatsApp conversation in a new tab.
#[cfg(target_arch = "wasm32")]
pub fn open_whatsapp(phone: &str, message: &str, product_name: &str) {
	vitrine_core::dom::open_in_new_tab(&whatsapp_link(phone, message, product_name));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_substitutes_and_encodes() {
		assert_eq!(
			whatsapp_link("5541999990000", "Hello {PRODUCT_NAME}", "Acme"),
			"https://wa.me/5541999990000?text=Hello%20Acme"
		);
	}

	#[test]
	fn test_message_without_token() {
		assert_eq!(
			whatsapp_link("1", "Olá!", "ignored"),
			"https://wa.me/1?text=Ol%C3%A1%21"
		);
	}

	#[test]
	fn test_empty_product_name_removes_token() {
		assert_eq!(
			whatsapp_link("1", "Sobre {PRODUCT_NAME}?", ""),
			"https://wa.me/1?text=Sobre%20%3F"
		);
	}

	#[test]
	fn test_phone_is_not_validated_here() {
		// Deliberate: link generation does not reject malformed numbers.
		let link = whatsapp_link("not-a-phone", "hi", "");
		assert!(link.starts_with("https://wa.me/not-a-phone?text="));
	}
}
