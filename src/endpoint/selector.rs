//! Default endpoint selection.
//!
//! Binding filtering always happens before preference: an endpoint whose binding is not
//! accepted is invisible, even when it is marked `isDefault`. Among the remaining candidates the
//! first one explicitly marked default wins, otherwise the first candidate wins. Indexes play no
//! part in either step.

// self
use crate::{
	_prelude::*,
	config::ConfigSource,
	endpoint::{
		Endpoint, EndpointNormalizer,
		normalizer::{key_path, require_default_binding},
	},
	error::EndpointError,
	metadata::MetadataRole,
	obs::{self, ResolveKind},
};

/// Picks the endpoint a flow should use for an endpoint type.
#[derive(Clone, Debug)]
pub struct DefaultEndpointSelector<'a, S>
where
	S: ?Sized,
{
	normalizer: EndpointNormalizer<'a, S>,
}
impl<'a, S> DefaultEndpointSelector<'a, S>
where
	S: ConfigSource + ?Sized,
{
	/// Creates a selector over `source` for the given metadata role.
	pub fn new(source: &'a S, role: MetadataRole) -> Self {
		Self { normalizer: EndpointNormalizer::new(source, role) }
	}

	/// Normalizer the selector reads endpoints through.
	pub fn normalizer(&self) -> &EndpointNormalizer<'a, S> {
		&self.normalizer
	}

	/// Selects the default endpoint of type `endpoint`.
	///
	/// With `valid_bindings`, endpoints using any other binding are ignored. Fails with
	/// [`EndpointError::NoSupportedEndpoint`] when no endpoint is left, or with
	/// [`EndpointError::MissingDefaultBinding`] when nothing is configured and the role has no
	/// default binding for the endpoint type.
	pub fn select_default(
		&self,
		endpoint: &str,
		valid_bindings: Option<&[&str]>,
	) -> Result<Endpoint, EndpointError> {
		obs::observe(ResolveKind::SelectDefault, self.normalizer.role(), endpoint, || {
			self.find_default(endpoint, valid_bindings)?
				.ok_or_else(|| self.no_supported_endpoint(endpoint))
		})
	}

	/// Like [`select_default`](Self::select_default), but returns `Ok(None)` instead of
	/// [`EndpointError::NoSupportedEndpoint`].
	pub fn try_select_default(
		&self,
		endpoint: &str,
		valid_bindings: Option<&[&str]>,
	) -> Result<Option<Endpoint>, EndpointError> {
		obs::observe_lookup(ResolveKind::SelectDefault, self.normalizer.role(), endpoint, || {
			self.find_default(endpoint, valid_bindings)
		})
	}

	/// Selects the first endpoint using the most preferred binding in `bindings`.
	///
	/// Bindings are tried in the given order; within one binding the metadata order decides.
	/// `isDefault` markers are not consulted.
	pub fn select_by_binding_priority(
		&self,
		endpoint: &str,
		bindings: &[&str],
	) -> Result<Endpoint, EndpointError> {
		obs::observe(ResolveKind::SelectByBindingPriority, self.normalizer.role(), endpoint, || {
			let mut endpoints = self.configured_endpoints(endpoint)?;

			for binding in bindings {
				if let Some(position) = endpoints.iter().position(|e| e.binding == *binding) {
					return Ok(endpoints.swap_remove(position));
				}
			}

			Err(self.no_supported_endpoint(endpoint))
		})
	}

	fn find_default(
		&self,
		endpoint: &str,
		valid_bindings: Option<&[&str]>,
	) -> Result<Option<Endpoint>, EndpointError> {
		let endpoints = self.configured_endpoints(endpoint)?;

		Ok(pick_default(&endpoints, valid_bindings).cloned())
	}

	fn configured_endpoints(&self, endpoint: &str) -> Result<Vec<Endpoint>, EndpointError> {
		let endpoints = self.normalizer.normalize(endpoint)?;

		// Only an unconfigured (absent or null) endpoint type consults the table.
		if endpoints.is_empty() && !self.is_configured(endpoint) {
			require_default_binding(self.normalizer.role(), endpoint)?;
		}

		Ok(endpoints)
	}

	fn is_configured(&self, endpoint: &str) -> bool {
		!matches!(self.normalizer.source().get_raw(endpoint), None | Some(Value::Null))
	}

	fn no_supported_endpoint(&self, endpoint: &str) -> EndpointError {
		EndpointError::NoSupportedEndpoint {
			path: key_path(self.normalizer.source().location(), endpoint),
			endpoint: endpoint.to_owned(),
		}
	}
}

/// Picks the default endpoint out of an already normalized list.
///
/// Returns the first candidate explicitly marked default, else the first candidate, where
/// candidates are the endpoints whose binding is in `valid_bindings` (all endpoints when
/// `None`).
pub fn pick_default<'e>(
	endpoints: &'e [Endpoint],
	valid_bindings: Option<&[&str]>,
) -> Option<&'e Endpoint> {
	let mut first = None;

	for endpoint in endpoints {
		if valid_bindings.is_some_and(|bindings| !endpoint.uses_any_binding(bindings)) {
			obs::trace_dropped_candidate(&endpoint.location, &endpoint.binding);

			continue;
		}
		if endpoint.is_marked_default() {
			return Some(endpoint);
		}

		if first.is_none() {
			first = Some(endpoint);
		}
	}

	first
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::{
		config::Configuration,
		endpoint::normalize,
		metadata::{binding, service},
	};

	fn endpoints(raw: Value) -> Vec<Endpoint> {
		normalize(Some(&raw), MetadataRole::Saml20SpRemote, service::ASSERTION_CONSUMER_SERVICE)
			.expect("Selection fixtures should normalize.")
	}

	#[test]
	fn explicit_default_beats_position() {
		let list = endpoints(json!([
			{ "Location": "https://a.example.com", "Binding": binding::HTTP_POST },
			{ "Location": "https://b.example.com", "Binding": binding::HTTP_POST, "isDefault": true },
		]));
		let picked = pick_default(&list, None).expect("A candidate exists.");

		assert_eq!(picked.location, "https://b.example.com");
	}

	#[test]
	fn explicit_non_default_stays_eligible() {
		let list = endpoints(json!([
			{ "Location": "https://a.example.com", "Binding": binding::HTTP_POST, "isDefault": false },
			{ "Location": "https://b.example.com", "Binding": binding::HTTP_POST },
		]));
		let picked = pick_default(&list, None).expect("A candidate exists.");

		assert_eq!(picked.location, "https://a.example.com");
	}

	#[test]
	fn filtering_happens_before_preference() {
		let list = endpoints(json!([
			{ "Location": "https://a.example.com", "Binding": "invalid", "isDefault": true },
			{ "Location": "https://b.example.com", "Binding": binding::HTTP_POST },
		]));
		let post_only: &[&str] = &[binding::HTTP_POST];
		let soap_only: &[&str] = &[binding::SOAP];
		let picked = pick_default(&list, Some(post_only)).expect("One candidate survives.");

		assert_eq!(picked.location, "https://b.example.com");
		assert!(pick_default(&list, Some(soap_only)).is_none());
		assert!(pick_default(&[], None).is_none());
	}

	#[test]
	fn binding_priority_walks_bindings_first() {
		let config = Configuration::from_value(json!({
			"AssertionConsumerService": [
				{ "Location": "https://post.example.com", "Binding": binding::HTTP_POST },
				{ "Location": "https://artifact.example.com", "Binding": binding::HTTP_ARTIFACT },
				{ "Location": "https://artifact2.example.com", "Binding": binding::HTTP_ARTIFACT },
			],
		}))
		.expect("Fixture is a JSON object.");
		let selector = DefaultEndpointSelector::new(&config, MetadataRole::Saml20SpRemote);
		let picked = selector
			.select_by_binding_priority(service::ASSERTION_CONSUMER_SERVICE, &[
				binding::HTTP_ARTIFACT,
				binding::HTTP_POST,
			])
			.expect("An artifact endpoint is configured.");

		assert_eq!(picked.location, "https://artifact.example.com");

		let err = selector
			.select_by_binding_priority(service::ASSERTION_CONSUMER_SERVICE, &[binding::PAOS])
			.expect_err("No PAOS endpoint is configured.");

		assert!(matches!(err, EndpointError::NoSupportedEndpoint { .. }));
	}

	#[test]
	fn unconfigured_endpoint_type() {
		let config = Configuration::from_value(json!({})).expect("Fixture is a JSON object.");
		let known = DefaultEndpointSelector::new(&config, MetadataRole::Saml20SpRemote);
		let unknown = DefaultEndpointSelector::new(&config, MetadataRole::Unknown);

		assert!(matches!(
			known.select_default(service::ASSERTION_CONSUMER_SERVICE, None),
			Err(EndpointError::NoSupportedEndpoint { .. })
		));
		assert_eq!(known.try_select_default(service::ASSERTION_CONSUMER_SERVICE, None), Ok(None));
		assert!(matches!(
			unknown.try_select_default(service::ASSERTION_CONSUMER_SERVICE, None),
			Err(EndpointError::MissingDefaultBinding { .. })
		));
	}

	#[test]
	fn explicit_empty_sequence_is_not_a_missing_default() {
		let config = Configuration::from_value(json!({
			"metadata-set": "foo",
			"SingleSignOnService": [],
			"SingleLogoutService": null,
		}))
		.expect("Fixture is a JSON object.");
		let selector = DefaultEndpointSelector::new(&config, config.metadata_role());

		assert_eq!(
			selector.select_default(service::SINGLE_SIGN_ON_SERVICE, None),
			Err(EndpointError::NoSupportedEndpoint {
				path: "[ARRAY]['SingleSignOnService']".into(),
				endpoint: service::SINGLE_SIGN_ON_SERVICE.into(),
			})
		);
		assert_eq!(selector.try_select_default(service::SINGLE_SIGN_ON_SERVICE, None), Ok(None));
		assert!(matches!(
			selector.select_by_binding_priority(service::SINGLE_SIGN_ON_SERVICE, &[binding::SOAP]),
			Err(EndpointError::NoSupportedEndpoint { .. })
		));
		assert!(matches!(
			selector.select_default(service::SINGLE_LOGOUT_SERVICE, None),
			Err(EndpointError::MissingDefaultBinding { .. })
		));
	}
}
