// self
use crate::obs::{ResolveKind, ResolveOutcome};

/// Records a resolution outcome via the global metrics recorder (when enabled).
pub fn record_resolve_outcome(kind: ResolveKind, outcome: ResolveOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"saml_endpoints_resolution_total",
			"operation" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
