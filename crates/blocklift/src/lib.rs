#![allow(rustdoc::private_intra_doc_links)]
#![deny(
	deprecated_in_future,
	exported_private_dependencies,
	future_incompatible,
	missing_copy_implementations,
	rustdoc::missing_crate_level_docs,
	rustdoc::broken_intra_doc_links,
	missing_docs,
	clippy::missing_docs_in_private_items,
	missing_debug_implementations,
	rust_2018_compatibility,
	rust_2018_idioms,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications,

	// clippy attributes
	clippy::missing_const_for_fn,
	clippy::redundant_pub_crate
)]

//! Extraction of named block directives from templated source text.
//!
//! Template files mix a generic templating DSL (expression tags, control
//! tags, comments) with custom block directives. Consumers such as macro,
//! snapshot or documentation extractors need the exact raw text of each
//! block, its interior and its type/name metadata, without being confused
//! by templating constructs that are not block boundaries.
//!
//! # Syntax
//!
//! ## Blocks
//!
//! A block is bounded by a two word start tag and a matching `end<type>`
//! tag:
//!
//! ```text
//! {% mytype foo %} some stuff {% endmytype %}
//! ```
//!
//! Only the first end tag matching the open block's exact type closes it;
//! there is no depth counting. Every other tag inside a block, like
//! `{% if ... %}`, `{% else %}` or `{% endif %}`, is inert and stays part
//! of the block's interior. Expression delimiters (`{{ ... }}`) are never
//! interpreted at all.
//!
//! ## Comments
//!
//! Comments are opaque and do not nest; the first `#}` terminates them.
//! They are the sanctioned way to embed illustrative tag text without it
//! being parsed:
//!
//! ```text
//! {% mytype foo %} {# a fake {% endmytype %} changes nothing #} x {% endmytype %}
//! ```
//!
//! ## Trim markers
//!
//! A `-` may be glued to a tag's open or close token (`{%-`/`-%}`). A
//! marker glued to the *end* tag's open token strips trailing whitespace
//! from the block's interior:
//!
//! ```text
//! {% mytype foo %}select 1
//! {%- endmytype %}
//! ```
//!
//! yields the interior `select 1` without the trailing newline.
//!
//! # Example
//!
//! ```
//! use blocklift::lex_blocks;
//!
//! # fn main() -> Result<(), blocklift::LexError> {
//! let blocks = lex_blocks("{% mytype foo %} some stuff {% endmytype %}")?;
//!
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].block_type_name, "mytype");
//! assert_eq!(blocks[0].block_name, "foo");
//! assert_eq!(blocks[0].data, " some stuff ");
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod deprecations;
pub mod diagnostic;
pub mod error;
pub mod lex;
pub mod source;
pub mod span;
pub mod tag;

pub use crate::block::Block;
pub use crate::error::LexError;
pub use crate::lex::BlockLexer;

/// Scans `source` and returns all top-level blocks in source order.
///
/// Convenience wrapper around [`BlockLexer::lex`].
///
/// # Errors
///
/// Fails with the first [`LexError`] encountered; no partial block list is
/// returned.
pub fn lex_blocks(source: &str) -> Result<Vec<Block<'_>>, LexError> {
	BlockLexer::new(source).lex()
}
