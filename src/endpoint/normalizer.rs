//! Raw endpoint metadata to canonical [`Endpoint`] lists.
//!
//! Bare addresses receive the binding from the default-binding table of the metadata role.
//! Structured records are validated field by field; the first invalid field aborts
//! normalization with a [`MalformedReason`] whose message is stable.

// self
use crate::{
	_prelude::*,
	config::ConfigSource,
	endpoint::{
		BINDING_KEY, Endpoint, EndpointEntry, EndpointSpec, INDEX_KEY, IS_DEFAULT_KEY,
		LOCATION_KEY, RESPONSE_LOCATION_KEY, spec,
	},
	error::{EndpointError, MalformedReason},
	metadata::{self, MetadataRole},
	obs::{self, ResolveKind},
};

/// Suffix of the legacy key carrying the reply address of a single bare endpoint.
pub const RESPONSE_KEY_SUFFIX: &str = "Response";

/// Reads endpoint metadata from a [`ConfigSource`] and normalizes it.
#[derive(Clone, Debug)]
pub struct EndpointNormalizer<'a, S>
where
	S: ?Sized,
{
	source: &'a S,
	role: MetadataRole,
}
impl<'a, S> EndpointNormalizer<'a, S>
where
	S: ConfigSource + ?Sized,
{
	/// Creates a normalizer over `source` for the given metadata role.
	pub fn new(source: &'a S, role: MetadataRole) -> Self {
		Self { source, role }
	}

	/// Metadata role used for default-binding lookups.
	pub fn role(&self) -> MetadataRole {
		self.role
	}

	/// Underlying configuration source.
	pub fn source(&self) -> &'a S {
		self.source
	}

	/// Normalizes the endpoints configured under `endpoint`.
	///
	/// A bare address also picks up the reply address stored under `<endpoint>Response`.
	pub fn normalize(&self, endpoint: &str) -> Result<Vec<Endpoint>, EndpointError> {
		obs::observe(ResolveKind::Normalize, self.role, endpoint, || {
			let path = key_path(self.source.location(), endpoint);
			let response = self.source.get_raw(&format!("{endpoint}{RESPONSE_KEY_SUFFIX}"));

			normalize_at(self.source.get_raw(endpoint), response, self.role, endpoint, &path)
		})
	}
}

/// Normalizes an explicit raw value for the endpoint type `endpoint`.
///
/// Diagnostics use `['<endpoint>']` as the key path.
pub fn normalize(
	raw: Option<&Value>,
	role: MetadataRole,
	endpoint: &str,
) -> Result<Vec<Endpoint>, EndpointError> {
	normalize_at(raw, None, role, endpoint, &key_path("", endpoint))
}

pub(crate) fn key_path(location: &str, key: &str) -> String {
	format!("{location}['{key}']")
}

pub(crate) fn require_default_binding(
	role: MetadataRole,
	endpoint: &str,
) -> Result<&'static str, EndpointError> {
	metadata::default_binding(role, endpoint).ok_or_else(|| {
		obs::trace_missing_default_binding(role, endpoint);

		EndpointError::MissingDefaultBinding { endpoint: endpoint.to_owned(), role }
	})
}

fn normalize_at(
	raw: Option<&Value>,
	response: Option<&Value>,
	role: MetadataRole,
	endpoint: &str,
	path: &str,
) -> Result<Vec<Endpoint>, EndpointError> {
	let Some(definition) = EndpointSpec::classify(raw, path)? else {
		return Ok(Vec::new());
	};

	match definition {
		EndpointSpec::Bare(location) => {
			let mut bare = bare_endpoint(location, role, endpoint, path)?;

			if let Some(Value::String(response_location)) = response {
				bare.response_location = Some(response_location.clone());
			}

			Ok(vec![bare])
		},
		EndpointSpec::List(locations) => locations
			.into_iter()
			.enumerate()
			.map(|(i, location)| {
				bare_endpoint(location, role, endpoint, &spec::element_path(path, i))
			})
			.collect(),
		EndpointSpec::Structured(entries) => entries
			.into_iter()
			.enumerate()
			.map(|(i, entry)| {
				let element_path = spec::element_path(path, i);

				match entry {
					EndpointEntry::Location(location) =>
						bare_endpoint(location, role, endpoint, &element_path),
					EndpointEntry::Record(record) => record_endpoint(record, &element_path),
				}
			})
			.collect(),
	}
}

fn bare_endpoint(
	location: String,
	role: MetadataRole,
	endpoint: &str,
	path: &str,
) -> Result<Endpoint, EndpointError> {
	let binding = require_default_binding(role, endpoint)?;

	if location.is_empty() {
		return Err(malformed(path, MalformedReason::EmptyLocation));
	}

	Ok(Endpoint::bare(location, binding))
}

fn record_endpoint(mut record: Map<String, Value>, path: &str) -> Result<Endpoint, EndpointError> {
	let location = match record.remove(LOCATION_KEY) {
		None => return Err(malformed(path, MalformedReason::MissingLocation)),
		Some(Value::String(location)) => location,
		Some(_) => return Err(malformed(path, MalformedReason::LocationNotString)),
	};

	if location.is_empty() {
		return Err(malformed(path, MalformedReason::EmptyLocation));
	}

	let binding = match record.remove(BINDING_KEY) {
		None => return Err(malformed(path, MalformedReason::MissingBinding)),
		Some(Value::String(binding)) => binding,
		Some(_) => return Err(malformed(path, MalformedReason::BindingNotString)),
	};
	let response_location = match record.remove(RESPONSE_LOCATION_KEY) {
		None => None,
		Some(Value::String(response_location)) => Some(response_location),
		Some(_) => return Err(malformed(path, MalformedReason::ResponseLocationNotString)),
	};
	let index = match record.remove(INDEX_KEY) {
		None => None,
		Some(value) => Some(index_value(&value, path)?),
	};
	let is_default = match record.remove(IS_DEFAULT_KEY) {
		None => None,
		Some(Value::Bool(flag)) => Some(flag),
		Some(_) => return Err(malformed(path, MalformedReason::IsDefaultNotBoolean)),
	};

	Ok(Endpoint { location, binding, response_location, index, is_default, extensions: record })
}

fn index_value(value: &Value, path: &str) -> Result<i64, EndpointError> {
	match value {
		Value::Number(number) => number.as_i64().ok_or_else(|| {
			// Integers above `i64::MAX` only fit `u64`; everything else left is a float.
			let reason = if number.is_u64() {
				MalformedReason::IndexOutOfRange
			} else {
				MalformedReason::IndexNotInteger
			};

			malformed(path, reason)
		}),
		_ => Err(malformed(path, MalformedReason::IndexNotInteger)),
	}
}

fn malformed(path: &str, reason: MalformedReason) -> EndpointError {
	EndpointError::Malformed { path: path.to_owned(), reason }
}
