use proptest::prelude::*;
use sorted_list::{ElementKind, InsertError, SortedLinkedList, Value};

fn is_sorted(values: &[Value]) -> bool {
	values.windows(2).all(|pair| pair[0] <= pair[1])
}

proptest! {
	#[test]
	fn stays_sorted_after_every_insert(values in prop::collection::vec(-50i64..50, 0..64)) {
		let mut list = SortedLinkedList::new();

		for value in values {
			list.insert(value).unwrap();

			prop_assert!(is_sorted(&list.to_sequence()));
		}
	}

	#[test]
	fn text_stays_sorted(values in prop::collection::vec("[a-c]{0,3}", 0..32)) {
		let mut list = SortedLinkedList::new();

		list.insert_all(values.iter().map(String::as_str)).unwrap();

		let mut expected = values.clone();
		expected.sort();

		let actual: Vec<_> = list.iter().filter_map(Value::as_text).collect();
		prop_assert_eq!(actual, expected);
	}

	#[test]
	fn kind_is_locked_in(values in prop::collection::vec(any::<i32>(), 1..16), other in ".*") {
		let mut list = SortedLinkedList::new();

		list.insert_all(values).unwrap();

		let before = list.count();

		prop_assert_eq!(
			list.insert(other),
			Err(InsertError::TypeMismatch {
				expected: ElementKind::Numeric,
				found: ElementKind::Textual,
			})
		);
		prop_assert_eq!(list.count(), before);
	}

	#[test]
	fn text_kind_is_locked_in(values in prop::collection::vec("[a-z]{0,4}", 1..16), other in any::<i64>()) {
		let mut list = SortedLinkedList::new();

		list.insert_all(values).unwrap();

		let before = list.count();

		prop_assert_eq!(
			list.insert(other),
			Err(InsertError::TypeMismatch {
				expected: ElementKind::Textual,
				found: ElementKind::Numeric,
			})
		);
		prop_assert_eq!(list.count(), before);
	}

	#[test]
	fn count_matches_sequence(
		inserts in prop::collection::vec(0i64..10, 0..32),
		deletes in prop::collection::vec(0i64..10, 0..8),
	) {
		let mut list = SortedLinkedList::new();

		list.insert_all(inserts).unwrap();
		prop_assert_eq!(list.count(), list.to_sequence().len());

		for value in deletes {
			list.delete(value);

			prop_assert_eq!(list.count(), list.to_sequence().len());
			prop_assert_eq!(list.is_empty(), list.kind().is_none());
		}
	}

	#[test]
	fn delete_removes_every_match(values in prop::collection::vec(0i64..5, 0..32), target in 0i64..5) {
		let mut list = SortedLinkedList::new();

		list.insert_all(values.iter().copied()).unwrap();

		let removed = list.delete(target);

		prop_assert_eq!(removed, values.iter().filter(|&&v| v == target).count());
		prop_assert!(!list.search(target));

		let mut expected: Vec<_> = values.into_iter().filter(|&v| v != target).collect();
		expected.sort();

		let actual: Vec<_> = list.iter().filter_map(Value::as_integer).collect();
		prop_assert_eq!(actual, expected);

		let snapshot = list.to_sequence();

		prop_assert_eq!(list.delete(target), 0);
		prop_assert_eq!(list.to_sequence(), snapshot);
	}
}

#[test]
fn clear_releases_kind() {
	let mut list = SortedLinkedList::new();

	list.insert_all([3, 1]).unwrap();
	list.clear();

	assert_eq!(list.kind(), None);

	list.insert("text").unwrap();
	assert_eq!(list.kind(), Some(ElementKind::Textual));
}

#[test]
fn reference_sequence() {
	let mut list = SortedLinkedList::new();

	list.insert_all([1, 2, 3, 2, 5, 8, 4, 0, -5, -2]).unwrap();

	let expected: Vec<Value> = [-5, -2, 0, 1, 2, 2, 3, 4, 5, 8]
		.into_iter()
		.map(Value::from)
		.collect();

	assert_eq!(list.to_sequence(), expected);
	assert_eq!(
		list.print_representation(),
		"-5 -> -2 -> 0 -> 1 -> 2 -> 2 -> 3 -> 4 -> 5 -> 8"
	);
	assert!(list.search(2));
	assert!(!list.search(6));
}
