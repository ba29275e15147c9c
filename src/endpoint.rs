//! Canonical endpoint records, raw endpoint shapes, normalization, and default selection.
//!
//! The module turns whatever a partner's metadata says about an endpoint type into an ordered
//! `Vec<Endpoint>` and picks the endpoint a flow should use. Ordering is always the order of the
//! metadata; the `index` attribute is carried through but never consulted.

/// Normalization of raw endpoint metadata.
pub mod normalizer;
/// Default endpoint selection.
pub mod selector;
/// Raw endpoint shapes accepted by the normalizer.
pub mod spec;

pub use normalizer::*;
pub use selector::*;
pub use spec::*;

// self
use crate::_prelude::*;

/// Metadata key holding the destination address.
pub const LOCATION_KEY: &str = "Location";
/// Metadata key holding the binding identifier.
pub const BINDING_KEY: &str = "Binding";
/// Metadata key holding the optional reply address.
pub const RESPONSE_LOCATION_KEY: &str = "ResponseLocation";
/// Metadata key holding the optional endpoint index.
pub const INDEX_KEY: &str = "index";
/// Metadata key holding the optional default-preference marker.
pub const IS_DEFAULT_KEY: &str = "isDefault";

/// A single service endpoint as published in partner metadata.
///
/// Serializes back into the metadata shape, so a normalized list can be fed through
/// normalization again and yields an equal list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Endpoint {
	/// Destination address.
	#[serde(rename = "Location")]
	pub location: String,
	/// Protocol binding identifier.
	#[serde(rename = "Binding")]
	pub binding: String,
	/// Reply address, when responses go somewhere other than `location`.
	#[serde(rename = "ResponseLocation", skip_serializing_if = "Option::is_none")]
	pub response_location: Option<String>,
	/// Endpoint index; identifies the endpoint but never orders it.
	#[serde(rename = "index", skip_serializing_if = "Option::is_none")]
	pub index: Option<i64>,
	/// Explicit default-preference marker; `None` means no preference was stated.
	#[serde(rename = "isDefault", skip_serializing_if = "Option::is_none")]
	pub is_default: Option<bool>,
	/// Any other keys of the metadata record, kept verbatim.
	#[serde(flatten)]
	pub extensions: Map<String, Value>,
}
impl Endpoint {
	pub(crate) fn bare(location: String, binding: &str) -> Self {
		Self {
			location,
			binding: binding.to_owned(),
			response_location: None,
			index: None,
			is_default: None,
			extensions: Map::new(),
		}
	}

	/// Returns true only when the metadata explicitly marks this endpoint as the default.
	pub fn is_marked_default(&self) -> bool {
		self.is_default == Some(true)
	}

	/// Returns true when the binding is one of `bindings`.
	pub fn uses_any_binding<S>(&self, bindings: &[S]) -> bool
	where
		S: AsRef<str>,
	{
		bindings.iter().any(|binding| binding.as_ref() == self.binding)
	}

	/// Looks up a passthrough key that the record carried beyond the known fields.
	pub fn extension(&self, key: &str) -> Option<&Value> {
		self.extensions.get(key)
	}

	/// Parses the destination address.
	pub fn location_url(&self) -> Result<Url, url::ParseError> {
		Url::parse(&self.location)
	}

	/// Parses the reply address, if one is set.
	pub fn response_location_url(&self) -> Option<Result<Url, url::ParseError>> {
		self.response_location.as_deref().map(Url::parse)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::metadata::binding;

	#[test]
	fn serializes_into_metadata_shape() {
		let mut endpoint = Endpoint::bare("https://sp.example.com/acs".into(), binding::HTTP_POST);

		endpoint.index = Some(3);
		endpoint.is_default = Some(false);
		endpoint.extensions.insert("hoksso:ProtocolBinding".into(), json!(binding::HTTP_POST));

		let value = serde_json::to_value(&endpoint).expect("Endpoint should serialize to JSON.");

		assert_eq!(
			value,
			json!({
				"Location": "https://sp.example.com/acs",
				"Binding": binding::HTTP_POST,
				"index": 3,
				"isDefault": false,
				"hoksso:ProtocolBinding": binding::HTTP_POST,
			})
		);
	}

	#[test]
	fn tri_state_default_marker() {
		let mut endpoint = Endpoint::bare("https://idp.example.com/sso".into(), binding::SOAP);

		assert!(!endpoint.is_marked_default());

		endpoint.is_default = Some(false);

		assert!(!endpoint.is_marked_default());

		endpoint.is_default = Some(true);

		assert!(endpoint.is_marked_default());
	}

	#[test]
	fn urls_parse_on_demand() {
		let mut endpoint = Endpoint::bare("not a url".into(), binding::HTTP_REDIRECT);

		assert!(endpoint.location_url().is_err());
		assert!(endpoint.response_location_url().is_none());

		endpoint.location = "https://idp.example.com/slo".into();
		endpoint.response_location = Some("https://idp.example.com/slo/response".into());

		let location = endpoint.location_url().expect("Location fixture should parse.");

		assert_eq!(location.host_str(), Some("idp.example.com"));
		assert!(matches!(endpoint.response_location_url(), Some(Ok(_))));
		assert!(endpoint.uses_any_binding(&binding::SAML2_FRONT_CHANNEL));
		assert!(!endpoint.uses_any_binding(&[binding::SOAP]));
	}
}
