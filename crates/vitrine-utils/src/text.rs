//! Text formatting helpers.
//!
//! Number and currency formatting follow pt-BR conventions: `.` groups
//! thousands, `,` separates decimals.

/// Turns arbitrary text into a URL-safe slug.
///
/// Lowercases, folds the Latin diacritics that occur in Portuguese copy,
/// collapses every other non-alphanumeric run into a single `-`, and trims
/// leading/trailing dashes.
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	let mut pending_dash = false;
	for c in text.chars().flat_map(char::to_lowercase) {
		let folded = fold_diacritic(c);
		if folded.is_ascii_alphanumeric() {
			if pending_dash && !slug.is_empty() {
				slug.push('-');
			}
			pending_dash = false;
			slug.push(folded);
		} else {
			pending_dash = true;
		}
	}
	slug
}

fn fold_diacritic(c: char) -> char {
	match c {
		'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
		'é' | 'è' | 'ê' | 'ë' => 'e',
		'í' | 'ì' | 'î' | 'ï' => 'i',
		'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
		'ú' | 'ù' | 'û' | 'ü' => 'u',
		'ç' => 'c',
		'ñ' => 'n',
		other => other,
	}
}

/// Truncates `text` to at most `length` characters, appending `suffix` when
/// anything was cut. Trailing whitespace before the suffix is trimmed.
pub fn truncate(text: &str, length: usize, suffix: &str) -> String {
	if text.chars().count() <= length {
		return text.to_string();
	}
	let cut: String = text.chars().take(length).collect();
	format!("{}{suffix}", cut.trim_end())
}

/// Formats an integer with pt-BR thousands grouping: `1234567` → `1.234.567`.
pub fn format_number(value: i64) -> String {
	let digits = value.unsigned_abs().to_string();
	let mut reversed = Vec::with_capacity(digits.len() + digits.len() / 3 + 1);
	for (i, c) in digits.chars().rev().enumerate() {
		if i != 0 && i % 3 == 0 {
			reversed.push('.');
		}
		reversed.push(c);
	}
	if value < 0 {
		reversed.push('-');
	}
	reversed.iter().rev().collect()
}

/// Formats a value as pt-BR currency: `1234.5` → `R$ 1.234,50`.
pub fn format_currency(value: f64) -> String {
	let cents = (value.abs() * 100.0).round() as i64;
	let units = cents / 100;
	let fraction = cents % 100;
	let sign = if value < 0.0 { "-" } else { "" };
	format!("{sign}R$ {},{fraction:02}", format_number(units))
}
