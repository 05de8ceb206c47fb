//! Registry for deprecation warnings raised while compiling templates.
//!
//! The registry is an explicitly passed, owned context object instead of
//! process-wide global state, so concurrent or repeated runs (tests in
//! particular) never leak warnings into each other. Callers are expected to
//! call [`Deprecations::reset`] between independent logical runs.
//!
//! The registry is consumed by the surrounding compiler; the
//! [lexer](`crate::lex::BlockLexer`) itself never records warnings.

use std::collections::BTreeSet;

use thiserror::Error;

/// Returned by [`Deprecations::record`] when the registry runs in strict
/// mode: the warning is promoted to a failure of the current operation
/// instead of being accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("deprecation `{0}` is not allowed in strict mode")]
pub struct StrictDeprecationError(pub String);

/// Accumulated deprecation warnings together with the strict mode flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deprecations {
	/// When set, the next [`Deprecations::record`] call fails instead of
	/// accumulating.
	strict: bool,

	/// All warning keys recorded since the last reset.
	active: BTreeSet<String>,
}

impl Deprecations {
	/// Creates an empty, non-strict registry.
	pub const fn new() -> Self {
		Self {
			strict: false,
			active: BTreeSet::new(),
		}
	}

	/// Creates an empty registry in strict mode.
	pub const fn strict() -> Self {
		Self {
			strict: true,
			active: BTreeSet::new(),
		}
	}

	/// Changes the strict mode flag.
	pub fn set_strict(&mut self, strict: bool) {
		self.strict = strict;
	}

	/// Returns whether the registry runs in strict mode.
	pub const fn is_strict(&self) -> bool {
		self.strict
	}

	/// Records a warning key.
	///
	/// Re-recording an already active key is allowed and does nothing. Each
	/// key is logged through [`log::warn!`] the first time it is recorded.
	///
	/// # Errors
	///
	/// Fails with [`StrictDeprecationError`] in strict mode; the key is not
	/// recorded in that case.
	pub fn record<K: Into<String>>(&mut self, key: K) -> Result<(), StrictDeprecationError> {
		let key = key.into();

		if self.strict {
			return Err(StrictDeprecationError(key));
		}

		if self.active.insert(key.clone()) {
			log::warn!("deprecated: {}", key);
		}

		Ok(())
	}

	/// Returns a read-only snapshot of all active warning keys.
	pub const fn active(&self) -> &BTreeSet<String> {
		&self.active
	}

	/// Clears all accumulated state. Must be called between independent
	/// logical runs.
	pub fn reset(&mut self) {
		self.active.clear();
	}
}
