use std::cmp::Ordering;
use std::num::TryFromIntError;

use crate::InsertError;

/// The primitive family a list is locked to after its first insert
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ElementKind {
	Numeric,
	Textual,
}

impl ElementKind {
	pub const fn name(self) -> &'static str {
		match self {
			ElementKind::Numeric => "integer",
			ElementKind::Textual => "string",
		}
	}
}

/// A dynamically typed value offered to a list.
///
/// Only `Integer` and `Text` can be stored. The remaining variants exist so
/// that callers holding loosely typed data get `UnsupportedType` back instead
/// of having to filter it themselves.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
	Integer(i64),
	Text(String),
	Float(f64),
	Boolean(bool),
	Null,
}

impl Value {
	pub const fn type_name(&self) -> &'static str {
		match self {
			Value::Integer(_) => "integer",
			Value::Text(_) => "string",
			Value::Float(_) => "float",
			Value::Boolean(_) => "boolean",
			Value::Null => "null",
		}
	}
	pub fn kind(&self) -> Result<ElementKind, InsertError> {
		match self {
			Value::Integer(_) => Ok(ElementKind::Numeric),
			Value::Text(_) => Ok(ElementKind::Textual),
			_ => Err(InsertError::UnsupportedType {
				type_name: self.type_name(),
			}),
		}
	}
	pub fn as_integer(&self) -> Option<i64> {
		match *self {
			Value::Integer(n) => Some(n),
			_ => None,
		}
	}
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(s) => Some(s),
			_ => None,
		}
	}
}

// Values of different kinds are unordered
impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
			(Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
			(Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
			(Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
			(Value::Null, Value::Null) => Some(Ordering::Equal),
			_ => None,
		}
	}
}

const _: () = {
	use std::fmt::*;

	impl Display for ElementKind {
		fn fmt(&self, f: &mut Formatter) -> Result {
			f.write_str(self.name())
		}
	}

	impl Display for Value {
		fn fmt(&self, f: &mut Formatter) -> Result {
			match self {
				Value::Integer(n) => Display::fmt(n, f),
				Value::Text(s) => f.write_str(s),
				Value::Float(x) => Display::fmt(x, f),
				Value::Boolean(b) => Display::fmt(b, f),
				Value::Null => f.write_str("null"),
			}
		}
	}
};

macro_rules! from_integer {
	($($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(n: $t) -> Self {
					Value::Integer(n.into())
				}
			}
		)*
	};
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers may not fit in an `i64`, so callers go through `try_from`
// or `try_into` first: `list.insert(Value::try_from(items.len())?)`
macro_rules! try_from_integer {
	($($t:ty),*) => {
		$(
			impl TryFrom<$t> for Value {
				type Error = TryFromIntError;

				fn try_from(n: $t) -> Result<Self, Self::Error> {
					i64::try_from(n).map(Value::Integer)
				}
			}
		)*
	};
}

try_from_integer!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
	fn from(x: f32) -> Self {
		Value::Float(x.into())
	}
}

impl From<f64> for Value {
	fn from(x: f64) -> Self {
		Value::Float(x)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Boolean(b)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Text(s.to_owned())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Text(s)
	}
}

impl From<()> for Value {
	fn from((): ()) -> Self {
		Value::Null
	}
}

#[test]
fn test_kind() {
	assert_eq!(Value::from(3).kind(), Ok(ElementKind::Numeric));
	assert_eq!(Value::from("a").kind(), Ok(ElementKind::Textual));

	assert_eq!(
		Value::from(1.5).kind(),
		Err(InsertError::UnsupportedType { type_name: "float" })
	);
	assert_eq!(
		Value::from(true).kind(),
		Err(InsertError::UnsupportedType {
			type_name: "boolean"
		})
	);
	assert_eq!(
		Value::Null.kind(),
		Err(InsertError::UnsupportedType { type_name: "null" })
	);
}

#[test]
fn test_wide_integers() {
	assert_eq!(Value::try_from(42usize), Ok(Value::Integer(42)));
	assert_eq!(Value::try_from(-3isize), Ok(Value::Integer(-3)));
	assert_eq!(
		Value::try_from(i64::MAX as u64),
		Ok(Value::Integer(i64::MAX))
	);

	assert!(Value::try_from(u64::MAX).is_err());
	assert!(Value::try_from(i128::MIN).is_err());
}

#[test]
fn test_strict_equality() {
	assert_eq!(Value::from(1), Value::Integer(1));
	assert_ne!(Value::from(1), Value::from("1"));
	assert_ne!(Value::from(1), Value::from(1.0));
}

#[test]
fn test_ordering() {
	assert!(Value::from(-5) < Value::from(0));
	assert!(Value::from("apple") < Value::from("banana"));
	assert!(Value::from("Zebra") < Value::from("apple"));

	assert_eq!(Value::from(1).partial_cmp(&Value::from("1")), None);
	assert!(!(Value::from(1) <= Value::from("1")));
}

#[test]
fn test_display() {
	assert_eq!(Value::from(-2).to_string(), "-2");
	assert_eq!(Value::from("abc").to_string(), "abc");
	assert_eq!(Value::Null.to_string(), "null");
	assert_eq!(ElementKind::Textual.to_string(), "string");
}
