//! The output record produced by the [lexer](`crate::lex::BlockLexer`).

use serde::Serialize;

use crate::span::ByteSpan;

/// A named block extracted from template source text.
///
/// A block is bounded by a two word start tag (`{% mytype foo %}`) and the
/// first matching end tag (`{% endmytype %}`) outside a comment. It is
/// immutable once produced and borrows from the source it was lexed from;
/// blocks are returned in the order they appear in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block<'a> {
	/// The word naming the directive kind, taken from the start tag. Never
	/// empty.
	pub block_type_name: &'a str,

	/// The directive's argument/label, taken from the start tag's second
	/// word. Never empty.
	pub block_name: &'a str,

	/// The raw source substring from the start of the unclaimed text run
	/// preceding the start tag through the end of the matching end tag's
	/// close delimiter. Byte exact, delimiters included.
	pub block_data: &'a str,

	/// The block's interior: the substring strictly between the start tag's
	/// close delimiter and the end tag's open delimiter. Trailing whitespace
	/// is stripped when the end tag carries a trim marker glued to its open
	/// token.
	pub data: &'a str,

	/// The span of [`Block::block_data`] within the source.
	pub span: ByteSpan,
}

impl<'a> Block<'a> {
	/// Creates a new block.
	pub const fn new(
		block_type_name: &'a str,
		block_name: &'a str,
		block_data: &'a str,
		data: &'a str,
		span: ByteSpan,
	) -> Self {
		Self {
			block_type_name,
			block_name,
			block_data,
			data,
			span,
		}
	}

	/// Returns the span of [`Block::block_data`] within the source.
	pub const fn span(&self) -> &ByteSpan {
		&self.span
	}
}
