mod error;
mod value;

pub use error::InsertError;
pub use value::ElementKind;
pub use value::Value;

use std::mem::ManuallyDrop;
use std::ptr;

use log::{debug, trace};

/// One link of a chain. Each node exclusively owns its successor.
pub struct Node<T> {
	value: T,

	next: Option<Box<Self>>,
}

const _: () = {
	use std::fmt::*;

	impl<T: Debug> Debug for Node<T> {
		fn fmt(&self, f: &mut Formatter) -> Result {
			let mut f = f.debug_struct("Node");

			f.field("value", &self.value);

			if let Some(next) = self.next.as_deref() {
				f.field("next", next);
			} else {
				f.field("next", &[] as &[T; 0]);
			}

			f.finish()
		}
	}

	impl Debug for SortedLinkedList {
		fn fmt(&self, f: &mut Formatter) -> Result {
			f.debug_list().entries(self.iter()).finish()
		}
	}

	impl Display for SortedLinkedList {
		fn fmt(&self, f: &mut Formatter) -> Result {
			for (index, value) in self.iter().enumerate() {
				if index != 0 {
					f.write_str(" -> ")?;
				}

				Display::fmt(value, f)?;
			}

			Ok(())
		}
	}
};

impl<T> Node<T> {
	pub const fn new(value: T) -> Self {
		Self { value, next: None }
	}
	pub fn value(&self) -> &T {
		&self.value
	}
	pub fn value_mut(&mut self) -> &mut T {
		&mut self.value
	}
	/// Replaces the stored value and returns the old one
	pub fn set_value(&mut self, value: T) -> T {
		std::mem::replace(&mut self.value, value)
	}
	/// Unlinks the rest of the chain and hands back the stored value
	pub fn into_value(mut self) -> T {
		self.clear_next();

		let this = ManuallyDrop::new(self);

		// `this` is never dropped and `next` is already empty
		unsafe { ptr::read(&this.value) }
	}
	pub fn next(&self) -> Option<&Self> {
		self.next.as_deref()
	}
	pub fn next_mut(&mut self) -> Option<&mut Self> {
		self.next.as_deref_mut()
	}
	/// Links `next` after this node, handing back whatever was linked before
	pub fn set_next(&mut self, next: Box<Self>) -> Option<Box<Self>> {
		self.next.replace(next)
	}
	pub fn take_next(&mut self) -> Option<Box<Self>> {
		self.next.take()
	}
	/// Drops everything after this node
	pub fn clear_next(&mut self) {
		let mut next = self.next.take();

		while let Some(mut node) = next {
			next = node.next.take();
		}
	}
}

impl<T> Drop for Node<T> {
	fn drop(&mut self) {
		self.clear_next();
	}
}

/// A linked list that keeps its values sorted and holds a single
/// [`ElementKind`] at a time.
///
/// The kind is adopted from the first successful insert and released again
/// once the list becomes empty, either through [`clear`](Self::clear) or a
/// [`delete`](Self::delete) that removes the last node.
pub struct SortedLinkedList {
	kind: Option<ElementKind>,

	head: Option<Box<Node<Value>>>,
}

impl Default for SortedLinkedList {
	fn default() -> Self {
		Self::new()
	}
}

impl SortedLinkedList {
	pub const fn new() -> Self {
		Self {
			kind: None,
			head: None,
		}
	}
	/// `None` while the list is empty
	pub const fn kind(&self) -> Option<ElementKind> {
		self.kind
	}
	pub const fn is_empty(&self) -> bool {
		self.head.is_none()
	}
	pub fn head(&self) -> Option<&Node<Value>> {
		self.head.as_deref()
	}
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			next: self.head.as_deref(),
		}
	}
	/// Walks the whole chain. No length is cached.
	pub fn count(&self) -> usize {
		self.iter().count()
	}
	pub fn min(&self) -> Option<&Value> {
		self.head.as_deref().map(Node::value)
	}
	pub fn max(&self) -> Option<&Value> {
		self.iter().last()
	}
	/// Inserts `value` after every value that is less than or equal to it.
	///
	/// Fails without touching the list if `value` is neither an integer nor
	/// text, or if its kind differs from the values already stored.
	pub fn insert(&mut self, value: impl Into<Value>) -> Result<(), InsertError> {
		let value = value.into();
		let found = value.kind()?;

		match self.kind {
			Some(expected) if expected != found => {
				return Err(InsertError::TypeMismatch { expected, found });
			}
			Some(_) => (),
			None => {
				debug!("list adopts {} elements", found);

				self.kind = Some(found);
			}
		}

		let mut cursor = &mut self.head;
		let mut index = 0;

		while cursor.as_ref().is_some_and(|node| node.value <= value) {
			if let Some(node) = cursor {
				cursor = &mut node.next;
			}

			index += 1;
		}

		trace!("inserting {} at position {}", value, index);

		let mut node = Box::new(Node::new(value));

		node.next = cursor.take();
		*cursor = Some(node);

		Ok(())
	}
	/// Inserts values one by one, stopping at the first rejected value.
	/// Values inserted before the failure stay in the list.
	pub fn insert_all<I>(&mut self, values: I) -> Result<(), InsertError>
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		values.into_iter().try_for_each(|value| self.insert(value))
	}
	/// A value of another kind is never found
	pub fn search(&self, value: impl Into<Value>) -> bool {
		let value = value.into();

		self.iter().any(|item| *item == value)
	}
	pub fn position(&self, value: impl Into<Value>) -> Option<usize> {
		let value = value.into();

		self.iter().position(|item| *item == value)
	}
	/// Removes every node equal to `value` and returns how many were removed
	pub fn delete(&mut self, value: impl Into<Value>) -> usize {
		let value = value.into();
		let mut removed = 0;
		let mut cursor = &mut self.head;

		loop {
			if cursor.as_ref().is_some_and(|node| node.value == value) {
				if let Some(mut node) = cursor.take() {
					*cursor = node.take_next();

					removed += 1;
				}

				continue;
			}

			// everything further along is greater
			if cursor.as_ref().is_some_and(|node| node.value > value) {
				break;
			}

			match cursor {
				Some(node) => cursor = &mut node.next,
				None => break,
			}
		}

		if removed != 0 {
			trace!("deleted {} occurrence(s) of {}", removed, value);
		}

		if self.head.is_none() && self.kind.take().is_some() {
			debug!("list drained, element kind reset");
		}

		removed
	}
	/// Copies the values out, head to tail
	pub fn to_sequence(&self) -> Vec<Value> {
		self.iter().cloned().collect()
	}
	/// Values joined by `" -> "`; empty for an empty list
	pub fn print_representation(&self) -> String {
		self.to_string()
	}
	pub fn clear(&mut self) {
		self.unlink_all();

		if self.kind.take().is_some() {
			debug!("list cleared");
		}
	}
	// INTERNAL: nodes unlink their successors iteratively on drop
	fn unlink_all(&mut self) {
		self.head = None;
	}
}

impl Clone for SortedLinkedList {
	fn clone(&self) -> Self {
		let mut head = None;

		for value in self.to_sequence().into_iter().rev() {
			let mut node = Box::new(Node::new(value));

			node.next = head;
			head = Some(node);
		}

		Self {
			kind: self.kind,
			head,
		}
	}
}

impl Drop for SortedLinkedList {
	fn drop(&mut self) {
		self.unlink_all();
	}
}

pub struct Iter<'a> {
	next: Option<&'a Node<Value>>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = &'a Value;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.next?;

		self.next = node.next();

		Some(node.value())
	}
}

impl<'a> IntoIterator for &'a SortedLinkedList {
	type Item = &'a Value;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

const _ASSERT_NULL_OPTIMIZED: () = {
	use std::mem::size_of;

	type Link = Box<Node<Value>>;

	if size_of::<Link>() != size_of::<Option<Link>>() {
		panic!("`Option<Box<Node<T>>>` is not null optimized");
	}
};

#[cfg(test)]
fn integers(list: &SortedLinkedList) -> Vec<i64> {
	list.iter().filter_map(Value::as_integer).collect()
}

#[test]
fn test_node_links() {
	let mut head = Node::new(1);

	assert!(head.next().is_none());
	assert!(head.set_next(Box::new(Node::new(3))).is_none());

	let displaced = head.set_next(Box::new(Node::new(2)));
	assert_eq!(displaced.map(|node| node.into_value()), Some(3));

	if let Some(next) = head.next_mut() {
		next.set_value(5);
	}
	assert_eq!(head.next().map(Node::value), Some(&5));

	assert_eq!(head.set_value(0), 1);
	assert_eq!(*head.value(), 0);

	head.clear_next();
	assert!(head.next().is_none());
}

#[test]
fn test_long_node_chain_drop() {
	let mut head = Node::new(0);

	for i in 1..1_000_000 {
		let mut node = Box::new(Node::new(i));

		if let Some(rest) = head.take_next() {
			node.set_next(rest);
		}

		head.set_next(node);
	}

	assert_eq!(head.next().map(Node::value), Some(&999_999));

	drop(head);
}

#[test]
fn test_into_value_detaches_chain() {
	let mut head = Node::new(String::from("head"));

	head.set_next(Box::new(Node::new(String::from("tail"))));

	assert_eq!(head.into_value(), "head");
}

#[test]
fn test_insert_sorted() {
	let mut list = SortedLinkedList::new();

	list.insert_all([1, 2, 3, 2, 5, 8, 4, 0, -5, -2]).unwrap();

	assert_eq!(integers(&list), &[-5, -2, 0, 1, 2, 2, 3, 4, 5, 8]);
	assert_eq!(
		list.print_representation(),
		"-5 -> -2 -> 0 -> 1 -> 2 -> 2 -> 3 -> 4 -> 5 -> 8"
	);
	assert_eq!(list.count(), 10);
	assert_eq!(list.min(), Some(&Value::Integer(-5)));
	assert_eq!(list.max(), Some(&Value::Integer(8)));
}

#[test]
fn test_insert_text() {
	let mut list = SortedLinkedList::new();

	list.insert_all(["pear", "apple", "fig", "apple"]).unwrap();

	assert_eq!(list.kind(), Some(ElementKind::Textual));
	assert_eq!(list.to_string(), "apple -> apple -> fig -> pear");
}

#[test]
fn test_kind_lock_in() {
	let mut list = SortedLinkedList::new();

	assert_eq!(list.kind(), None);

	list.insert(7).unwrap();

	assert_eq!(list.kind(), Some(ElementKind::Numeric));
	assert_eq!(
		list.insert("7"),
		Err(InsertError::TypeMismatch {
			expected: ElementKind::Numeric,
			found: ElementKind::Textual,
		})
	);
	assert_eq!(list.count(), 1);
}

#[test]
fn test_kind_lock_in_text() {
	let mut list = SortedLinkedList::new();

	list.insert_all(["b", "a"]).unwrap();

	assert_eq!(list.kind(), Some(ElementKind::Textual));
	assert_eq!(
		list.insert(1),
		Err(InsertError::TypeMismatch {
			expected: ElementKind::Textual,
			found: ElementKind::Numeric,
		})
	);
	assert_eq!(list.count(), 2);
	assert_eq!(list.to_string(), "a -> b");
}

#[test]
fn test_unsupported_first_insert() {
	let mut list = SortedLinkedList::new();

	assert_eq!(
		list.insert(2.5),
		Err(InsertError::UnsupportedType { type_name: "float" })
	);
	assert_eq!(list.kind(), None);
	assert!(list.is_empty());

	list.insert("ok").unwrap();
	assert_eq!(list.kind(), Some(ElementKind::Textual));

	assert_eq!(
		list.insert(true),
		Err(InsertError::UnsupportedType {
			type_name: "boolean"
		})
	);
	assert_eq!(list.count(), 1);
}

#[test]
fn test_insert_all_stops_at_failure() {
	let mut list = SortedLinkedList::new();

	let result = list.insert_all([Value::from(3), Value::from("x"), Value::from(1)]);

	assert!(matches!(result, Err(InsertError::TypeMismatch { .. })));
	assert_eq!(integers(&list), &[3]);
}

#[test]
fn test_search() {
	let mut list = SortedLinkedList::new();

	assert!(!list.search(1));

	list.insert_all([1, 2, 3, 2, 5, 8, 4, 0, -5, -2]).unwrap();

	assert!(list.search(2));
	assert!(!list.search(6));
	assert!(!list.search("2"));
	assert_eq!(list.position(0), Some(2));
	assert_eq!(list.position(6), None);
}

#[test]
fn test_delete_all_matches() {
	let mut list = SortedLinkedList::new();

	list.insert_all([2, 1, 2, 3, 2]).unwrap();

	assert_eq!(list.delete(2), 3);
	assert_eq!(list.to_sequence(), vec![Value::from(1), Value::from(3)]);

	assert_eq!(list.delete(2), 0);
	assert_eq!(integers(&list), &[1, 3]);
}

#[test]
fn test_delete_head_and_tail() {
	let mut list = SortedLinkedList::new();

	list.insert_all([1, 1, 4, 9, 9]).unwrap();

	assert_eq!(list.delete(1), 2);
	assert_eq!(list.delete(9), 2);
	assert_eq!(integers(&list), &[4]);
	assert_eq!(list.kind(), Some(ElementKind::Numeric));

	assert_eq!(list.delete("4"), 0);
	assert_eq!(list.count(), 1);
}

#[test]
fn test_delete_drains_kind() {
	let mut list = SortedLinkedList::new();

	assert_eq!(list.delete(1), 0);

	list.insert_all([5, 5, 5]).unwrap();

	assert_eq!(list.delete(5), 3);
	assert!(list.is_empty());
	assert_eq!(list.kind(), None);

	list.insert("now text").unwrap();
	assert_eq!(list.kind(), Some(ElementKind::Textual));
}

#[test]
fn test_clear() {
	let mut list = SortedLinkedList::new();

	list.insert_all([3, 1, 2]).unwrap();
	list.clear();

	assert!(list.is_empty());
	assert_eq!(list.kind(), None);
	assert_eq!(list.count(), 0);
	assert_eq!(list.print_representation(), "");

	list.insert("b").unwrap();
	assert_eq!(list.to_sequence(), vec![Value::from("b")]);
}

#[test]
fn test_clone_is_independent() {
	let mut list = SortedLinkedList::new();

	list.insert_all([4, 2, 6]).unwrap();

	let copy = list.clone();

	list.delete(4);

	assert_eq!(integers(&copy), &[2, 4, 6]);
	assert_eq!(copy.kind(), Some(ElementKind::Numeric));
	assert_eq!(integers(&list), &[2, 6]);
}

#[test]
fn test_debug() {
	let mut list = SortedLinkedList::new();

	list.insert_all([2, 1]).unwrap();

	assert_eq!(format!("{:?}", list), "[Integer(1), Integer(2)]");
}

#[test]
fn test_long_chain_drop() {
	let mut list = SortedLinkedList::new();

	// descending inserts land at the head, so this stays linear
	for i in (0..200_000).rev() {
		list.insert(i).unwrap();
	}

	assert_eq!(list.count(), 200_000);

	drop(list);
}
