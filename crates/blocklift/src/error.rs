//! Structural lexing failures.
//!
//! All variants are fatal to the [`lex`](`crate::lex::BlockLexer::lex`)
//! call; there is no partial recovery. Retrying with the same input is
//! pointless as the lexer is deterministic, the remedy is to fix the source
//! text. Semantically questionable but well-formed input (duplicate block
//! names, unknown block types) is never an error at this layer.

use thiserror::Error;

use crate::span::BytePos;

/// A structural failure encountered while scanning a source for blocks.
///
/// Every variant carries the byte offset of the offending token. Line and
/// column information can be resolved against a
/// [source](`crate::source::Source`) with the
/// [diagnostic](`crate::diagnostic`) module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
	/// A comment open token was found but no comment close token follows
	/// before the input ends.
	#[error("comment opened at byte {pos} is never closed")]
	UnterminatedComment {
		/// Position of the comment open token.
		pos: BytePos,
	},

	/// A block was opened but no matching end tag was found before the input
	/// ends.
	#[error("block `{block_type} {name}` opened at byte {pos} is never closed")]
	UnterminatedBlock {
		/// The type of the open block.
		block_type: String,

		/// The name of the open block.
		name: String,

		/// Position of the block's start tag.
		pos: BytePos,
	},

	/// A tag open token was found but no tag close token follows before the
	/// input ends.
	#[error("tag opened at byte {pos} is never closed")]
	MalformedTag {
		/// Position of the tag open token.
		pos: BytePos,
	},
}

impl LexError {
	/// Returns the byte offset of the offending token.
	pub const fn pos(&self) -> BytePos {
		match self {
			Self::UnterminatedComment { pos }
			| Self::UnterminatedBlock { pos, .. }
			| Self::MalformedTag { pos } => *pos,
		}
	}
}
