//! The single-pass scanner which extracts named
//! [blocks](`crate::block::Block`) from template source text.
//!
//! The scan is a small state machine: unclaimed text accumulates into a
//! pending prefix buffer, comments are consumed opaquely, and every tag is
//! [classified by shape](`crate::tag::TagKind`). Only a tag whose first word
//! equals `end` plus the currently open block's type closes that block;
//! every other tag is inert while a block is open.

#[cfg(test)]
mod tests;

use crate::block::Block;
use crate::error::LexError;
use crate::span::ByteSpan;
use crate::tag::{self, Tag, TagKind};

/// The two open tokens the scan searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenToken {
	/// A tag open token (`{%`).
	Tag,

	/// A comment open token (`{#`).
	Comment,
}

/// Finds the earliest tag or comment open token in `s`.
///
/// Expression style delimiters (`{{`) are not open tokens and are skipped
/// over as ordinary text.
fn find_open_token(s: &str) -> Option<(usize, OpenToken)> {
	let tag = s.find(tag::TAG_OPEN);
	let comment = s.find(tag::COMMENT_OPEN);

	match (tag, comment) {
		(Some(t), Some(c)) if c < t => Some((c, OpenToken::Comment)),
		(Some(t), _) => Some((t, OpenToken::Tag)),
		(None, Some(c)) => Some((c, OpenToken::Comment)),
		(None, None) => None,
	}
}

/// A single-pass scanner producing an ordered sequence of
/// [blocks](`crate::block::Block`) from raw source text.
///
/// The lexer is a pure function of its input: no I/O, no shared state,
/// linear in input length. It can be driven as an [`Iterator`] or collected
/// in one go with [`BlockLexer::lex`]. After yielding an error the iterator
/// fuses; a truncated block list is never returned.
#[derive(Debug, Clone, Copy)]
pub struct BlockLexer<'a> {
	/// The source to scan.
	source: &'a str,

	/// Current scan position.
	index: usize,

	/// Start of the pending prefix buffer: the run of unclaimed text
	/// accumulated since the last comment closed, the last block ended or
	/// the start of the input.
	buffer_start: usize,

	/// Set once an error has been yielded.
	fused: bool,
}

impl<'a> BlockLexer<'a> {
	/// Creates a new lexer for `source`.
	pub const fn new(source: &'a str) -> Self {
		Self {
			source,
			index: 0,
			buffer_start: 0,
			fused: false,
		}
	}

	/// Scans the whole source and returns all top-level blocks in source
	/// order.
	///
	/// # Errors
	///
	/// Fails with the first [`LexError`] encountered; no partial block list
	/// is returned.
	pub fn lex(self) -> Result<Vec<Block<'a>>, LexError> {
		self.collect()
	}

	/// Scans for the next block while no block is open.
	///
	/// Inert tags are skipped over with their text left in the pending
	/// prefix buffer; a comment closing here discards the buffer.
	fn next_block(&mut self) -> Option<Result<Block<'a>, LexError>> {
		loop {
			let Some((rel, token)) = find_open_token(&self.source[self.index..]) else {
				// input exhausted; leftover unclaimed text belongs to no block
				self.index = self.source.len();
				return None;
			};

			let at = self.index + rel;

			match token {
				OpenToken::Comment => {
					let end = match self.consume_comment(at) {
						Ok(end) => end,
						Err(err) => return Some(Err(err)),
					};

					// text before a comment is not retained once it closes
					self.index = end;
					self.buffer_start = end;
				}
				OpenToken::Tag => {
					let spanned = match Tag::parse_at(self.source, at) {
						Ok(spanned) => spanned,
						Err(err) => return Some(Err(err)),
					};

					self.index = spanned.span().high().as_usize();

					log::trace!(
						"{:?}: {}",
						spanned.value().kind(),
						&self.source[*spanned.span()]
					);

					if let TagKind::Open { block_type, name } = spanned.value().kind() {
						return Some(self.lex_open_block(block_type, name, at));
					}
				}
			}
		}
	}

	/// Scans the interior of the block opened by the tag at `tag_pos` until
	/// the first matching end tag outside a comment.
	///
	/// Comments are opaque for tag recognition but their bytes remain part
	/// of the interior; every non-matching tag is inert.
	fn lex_open_block(
		&mut self,
		block_type: &'a str,
		name: &'a str,
		tag_pos: usize,
	) -> Result<Block<'a>, LexError> {
		let interior_start = self.index;

		loop {
			let Some((rel, token)) = find_open_token(&self.source[self.index..]) else {
				return Err(LexError::UnterminatedBlock {
					block_type: block_type.to_owned(),
					name: name.to_owned(),
					pos: tag_pos.into(),
				});
			};

			let at = self.index + rel;

			match token {
				OpenToken::Comment => {
					self.index = self.consume_comment(at)?;
				}
				OpenToken::Tag => {
					let spanned = Tag::parse_at(self.source, at)?;

					self.index = spanned.span().high().as_usize();

					if !matches!(
						spanned.value().kind(),
						TagKind::Close { block_type: t } if t == block_type
					) {
						continue;
					}

					let mut data = &self.source[interior_start..at];

					if spanned.value().leading_trim {
						data = data
							.trim_end_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
					}

					let span = ByteSpan::new(self.buffer_start, self.index);
					let block_data = &self.source[span];

					self.buffer_start = self.index;

					log::trace!("block `{} {}` at {}", block_type, name, span);

					return Ok(Block::new(block_type, name, block_data, data, span));
				}
			}
		}
	}

	/// Consumes the comment opened at `at` and returns the index directly
	/// after its close token.
	///
	/// The first close token found terminates the comment; comments do not
	/// nest and their contents are never tokenized.
	fn consume_comment(&self, at: usize) -> Result<usize, LexError> {
		let search_start = at + tag::COMMENT_OPEN.len();

		self.source[search_start..]
			.find(tag::COMMENT_CLOSE)
			.map(|rel| search_start + rel + tag::COMMENT_CLOSE.len())
			.ok_or(LexError::UnterminatedComment { pos: at.into() })
	}
}

impl<'a> Iterator for BlockLexer<'a> {
	type Item = Result<Block<'a>, LexError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.fused {
			return None;
		}

		let next = self.next_block();

		if matches!(next, Some(Err(_))) {
			self.fused = true;
		}

		next
	}
}
