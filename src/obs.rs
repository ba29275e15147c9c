//! Optional observability helpers for endpoint resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `saml_endpoints.resolve` with the
//!   `operation`, `endpoint`, and `role` fields, plus debug events for dropped candidates.
//! - Enable `metrics` to increment the `saml_endpoints_resolution_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`. Optional selections that find
//!   nothing are recorded as `not_found`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, metadata::MetadataRole};

/// Resolution operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveKind {
	/// Raw metadata to canonical endpoint list.
	Normalize,
	/// Default endpoint selection.
	SelectDefault,
	/// Selection driven by the caller's binding priority list.
	SelectByBindingPriority,
}
impl ResolveKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveKind::Normalize => "normalize",
			ResolveKind::SelectDefault => "select_default",
			ResolveKind::SelectByBindingPriority => "select_by_binding_priority",
		}
	}
}
impl Display for ResolveKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// Entry to a resolution helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
	/// Optional lookup completed without a match.
	NotFound,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::Attempt => "attempt",
			ResolveOutcome::Success => "success",
			ResolveOutcome::Failure => "failure",
			ResolveOutcome::NotFound => "not_found",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `op` inside a resolution span and records attempt plus success/failure outcomes.
pub(crate) fn observe<T, E>(
	kind: ResolveKind,
	role: MetadataRole,
	endpoint: &str,
	op: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
	observe_with(kind, role, endpoint, op, |_| ResolveOutcome::Success)
}

/// Like [`observe`], but an `Ok(None)` is recorded as [`ResolveOutcome::NotFound`].
pub(crate) fn observe_lookup<T, E>(
	kind: ResolveKind,
	role: MetadataRole,
	endpoint: &str,
	op: impl FnOnce() -> Result<Option<T>, E>,
) -> Result<Option<T>, E> {
	observe_with(kind, role, endpoint, op, lookup_outcome)
}

fn observe_with<T, E>(
	kind: ResolveKind,
	role: MetadataRole,
	endpoint: &str,
	op: impl FnOnce() -> Result<T, E>,
	completed: impl FnOnce(&T) -> ResolveOutcome,
) -> Result<T, E> {
	let _span = ResolveSpan::new(kind, role, endpoint).entered();

	record_resolve_outcome(kind, ResolveOutcome::Attempt);

	let result = op();

	match &result {
		Ok(value) => record_resolve_outcome(kind, completed(value)),
		Err(_) => record_resolve_outcome(kind, ResolveOutcome::Failure),
	}

	result
}

fn lookup_outcome<T>(found: &Option<T>) -> ResolveOutcome {
	if found.is_some() { ResolveOutcome::Success } else { ResolveOutcome::NotFound }
}
