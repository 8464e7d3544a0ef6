//! The all-or-nothing gate over the three fetched documents.

use thiserror::Error;
use vitrine_types::{Directory, ProductsFile, SiteConfig};

/// Everything a page controller needs, loaded in one shot.
#[derive(Debug, Clone)]
pub struct SiteData {
	/// Parsed `config.json`.
	pub config: SiteConfig,
	/// Parsed `products.json`.
	pub products: ProductsFile,
	/// Parsed `links.json`.
	pub directory: Directory,
}

/// Fatal data-load failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
	/// At least one of the three documents failed to load or parse.
	/// User-facing message, hence Portuguese.
	#[error("Falha ao carregar dados essenciais")]
	Missing,
}

/// Combines the three fetch results, discarding everything if any is absent.
///
/// A partial page is worse than an error page here: each page renders from
/// all three documents at once, so one missing document fails the load.
pub fn ensure_all(
	config: Option<SiteConfig>,
	products: Option<ProductsFile>,
	directory: Option<Directory>,
) -> Result<SiteData, DataError> {
	match (config, products, directory) {
		(Some(config), Some(products), Some(directory)) => Ok(SiteData {
			config,
			products,
			directory,
		}),
		_ => Err(DataError::Missing),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn config() -> SiteConfig {
		serde_json::from_str(r#"{ "site": { "title": "t" }, "app": {} }"#).unwrap()
	}

	#[test]
	fn test_all_present() {
		let data = ensure_all(
			Some(config()),
			Some(ProductsFile::default()),
			Some(Directory::default()),
		);
		assert!(data.is_ok());
	}

	#[rstest]
	#[case(None, Some(ProductsFile::default()), Some(Directory::default()))]
	#[case(Some(config()), None, Some(Directory::default()))]
	#[case(Some(config()), Some(ProductsFile::default()), None)]
	#[case(None, None, None)]
	fn test_any_absence_is_fatal(
		#[case] config: Option<SiteConfig>,
		#[case] products: Option<ProductsFile>,
		#[case] directory: Option<Directory>,
	) {
		assert_eq!(
			ensure_all(config, products, directory).unwrap_err(),
			DataError::Missing
		);
	}
}
