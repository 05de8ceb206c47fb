//! The tag delimiter grammar, tag parsing and the shape classification which
//! decides how the [lexer](`crate::lex::BlockLexer`) treats each parsed tag.

use crate::error::LexError;
use crate::span::{ByteSpan, Spanned};

/// Token which opens a tag.
pub const TAG_OPEN: &str = "{%";

/// Token which closes a tag.
pub const TAG_CLOSE: &str = "%}";

/// Token which opens a comment.
pub const COMMENT_OPEN: &str = "{#";

/// Token which closes a comment.
pub const COMMENT_CLOSE: &str = "#}";

/// Marker which may be glued to a tag's open or close token (`{%-`/`-%}`).
pub const TRIM_MARKER: u8 = b'-';

/// Reserved prefix which turns a tag's first word into a block end word.
const END_PREFIX: &str = "end";

/// A single parsed `{% ... %}` occurrence.
///
/// A tag is purely syntactic at this point; what it means to the scan
/// depends on its [shape](`Tag::kind`) and on whether a block is currently
/// open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
	/// Whether a trim marker was glued to the open token (`{%-`).
	pub leading_trim: bool,

	/// Whether a trim marker was glued to the close token (`-%}`).
	pub trailing_trim: bool,

	/// The content between the delimiters, trim markers excluded.
	content: &'a str,
}

/// The role a parsed tag can play, derived solely from its token shape.
///
/// The classification is applied uniformly to every tag; the scan loop only
/// adds context (is a block currently open and of which type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind<'a> {
	/// Exactly two words where the first does not carry the reserved `end`
	/// prefix; opens a block when no block is open.
	Open {
		/// The word naming the directive kind.
		block_type: &'a str,

		/// The directive's argument/label.
		name: &'a str,
	},

	/// First word carries the reserved `end` prefix; closes the current
	/// block when the remainder equals its type.
	Close {
		/// The word after the `end` prefix. May be empty (`{% end %}`),
		/// which matches no block type.
		block_type: &'a str,
	},

	/// Any other shape. Inert tags never affect the scan, their text remains
	/// ordinary scanned content.
	Inert,
}

impl<'a> Tag<'a> {
	/// Parses the tag starting at byte offset `at` within `source`.
	///
	/// `source[at..]` must start with the [tag open token](`TAG_OPEN`). The
	/// returned span covers the whole tag including both delimiters.
	///
	/// # Errors
	///
	/// Returns [`LexError::MalformedTag`] if no [close token](`TAG_CLOSE`)
	/// is found before the input ends.
	pub fn parse_at(source: &'a str, at: usize) -> Result<Spanned<Tag<'a>>, LexError> {
		debug_assert!(source[at..].starts_with(TAG_OPEN));

		let mut content_start = at + TAG_OPEN.len();

		let leading_trim = source.as_bytes().get(content_start) == Some(&TRIM_MARKER);
		if leading_trim {
			content_start += 1;
		}

		let close_idx = source[content_start..]
			.find(TAG_CLOSE)
			.map(|rel| content_start + rel)
			.ok_or(LexError::MalformedTag { pos: at.into() })?;

		let mut content = &source[content_start..close_idx];

		// a `-` is only a marker when glued to the close token
		let trailing_trim = content.as_bytes().last() == Some(&TRIM_MARKER);
		if trailing_trim {
			content = &content[..content.len() - 1];
		}

		let span = ByteSpan::new(at, close_idx + TAG_CLOSE.len());

		Ok(span.span(Self {
			leading_trim,
			trailing_trim,
			content,
		}))
	}

	/// Classifies the tag by its token shape.
	///
	/// Words are delimited by runs of whitespace; the argument list is not
	/// otherwise parsed (no quoting, no parentheses awareness).
	pub fn kind(&self) -> TagKind<'a> {
		let mut words = self.content.split_whitespace();

		let Some(first) = words.next() else {
			return TagKind::Inert;
		};

		if let Some(block_type) = first.strip_prefix(END_PREFIX) {
			return TagKind::Close { block_type };
		}

		match (words.next(), words.next()) {
			(Some(name), None) => TagKind::Open {
				block_type: first,
				name,
			},
			_ => TagKind::Inert,
		}
	}

	/// Returns the content between the delimiters, trim markers excluded.
	pub const fn content(&self) -> &'a str {
		self.content
	}
}
