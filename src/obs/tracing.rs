// self
use crate::{_prelude::*, metadata::MetadataRole, obs::ResolveKind};

/// A span builder used by resolution helpers.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the operation, role, and endpoint type.
	pub fn new(kind: ResolveKind, role: MetadataRole, endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"saml_endpoints.resolve",
				operation = kind.as_str(),
				endpoint,
				role = role.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, role, endpoint);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> ResolveSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ResolveSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ResolveSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ResolveSpan::entered`].
pub struct ResolveSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ResolveSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ResolveSpanGuard(..)")
	}
}

/// Logs an endpoint that a binding filter made invisible to selection.
pub(crate) fn trace_dropped_candidate(location: &str, binding: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(location, binding, "Skipping endpoint with unsupported binding.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (location, binding);
	}
}

/// Logs a lookup miss in the default-binding table.
pub(crate) fn trace_missing_default_binding(role: MetadataRole, endpoint: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(role = role.as_str(), endpoint, "No default binding for endpoint type.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (role, endpoint);
	}
}
