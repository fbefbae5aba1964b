use thiserror::Error;

use crate::ElementKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InsertError {
	#[error("invalid value: only integer and string values can be inserted, got {type_name}")]
	UnsupportedType { type_name: &'static str },
	#[error("invalid value: this list only accepts {expected} values, got {found}")]
	TypeMismatch {
		expected: ElementKind,
		found: ElementKind,
	},
}

#[test]
fn test_messages() {
	let err = InsertError::UnsupportedType { type_name: "float" };
	assert_eq!(
		err.to_string(),
		"invalid value: only integer and string values can be inserted, got float"
	);

	let err = InsertError::TypeMismatch {
		expected: ElementKind::Numeric,
		found: ElementKind::Textual,
	};
	assert_eq!(
		err.to_string(),
		"invalid value: this list only accepts integer values, got string"
	);
}
