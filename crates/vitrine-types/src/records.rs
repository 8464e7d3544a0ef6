//! Linear lookup and ordering helpers over record sequences.
//!
//! The catalogs are small (tens of entries), so everything here is a plain
//! scan; no indexing is warranted.

use std::cmp::Ordering;

use crate::model::Product;

/// Sort direction for [`sort_by_key_ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
	/// Smallest first.
	Ascending,
	/// Largest first.
	Descending,
}

/// Finds the first record matching a predicate.
pub fn find_by<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<&T> {
	items.iter().find(|item| pred(item))
}

/// Collects all records matching a predicate.
pub fn filter_by<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<&T> {
	items.iter().filter(|item| pred(item)).collect()
}

/// Finds a product by id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
	find_by(products, |product| product.id == id)
}

/// Returns a sorted copy of `items`, ordered by the extracted key.
///
/// The sort is stable: records with equal keys keep their input order.
pub fn sort_by_key_ordered<T: Clone, K: Ord>(
	items: &[T],
	order: SortOrder,
	key: impl Fn(&T) -> K,
) -> Vec<T> {
	let mut sorted = items.to_vec();
	sorted.sort_by(|a, b| {
		let ordering = key(a).cmp(&key(b));
		match order {
			SortOrder::Ascending => ordering,
			SortOrder::Descending => ordering.reverse(),
		}
	});
	sorted
}

/// Compares two optional keys, placing absent values last in ascending
/// order.
pub fn compare_optional<K: Ord>(a: &Option<K>, b: &Option<K>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => a.cmp(b),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn product(id: &str, active: bool) -> Product {
		serde_json::from_str(&format!(
			r#"{{ "id": "{id}", "active": {active}, "basic": {{ "name": "{id}" }} }}"#
		))
		.unwrap()
	}

	#[test]
	fn test_find_product() {
		let products = vec![product("a", true), product("b", false)];
		assert_eq!(find_product(&products, "b").unwrap().id, "b");
		assert!(find_product(&products, "missing").is_none());
	}

	#[test]
	fn test_filter_by_active() {
		let products = vec![product("a", true), product("b", false), product("c", true)];
		let active = filter_by(&products, |p| p.active);
		let ids: Vec<&str> = active.iter().map(|p| p.id.as_str()).collect();
		assert_eq!(ids, ["a", "c"]);
	}

	#[rstest]
	#[case(SortOrder::Ascending, &["a", "b", "c"])]
	#[case(SortOrder::Descending, &["c", "b", "a"])]
	fn test_sort_by_key_ordered(#[case] order: SortOrder, #[case] expected: &[&str]) {
		let products = vec![product("b", true), product("c", true), product("a", true)];
		let sorted = sort_by_key_ordered(&products, order, |p| p.id.clone());
		let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
		assert_eq!(ids, expected);
	}

	#[test]
	fn test_sort_is_stable_on_ties() {
		let items = vec![("b", 1), ("a", 1), ("c", 0)];
		let sorted = sort_by_key_ordered(&items, SortOrder::Ascending, |(_, k)| *k);
		assert_eq!(sorted, vec![("c", 0), ("b", 1), ("a", 1)]);
	}

	#[test]
	fn test_compare_optional_places_absent_last() {
		assert_eq!(compare_optional(&Some(1), &None), Ordering::Less);
		assert_eq!(compare_optional(&None::<i32>, &None), Ordering::Equal);
	}
}
