//! Raw configuration access consumed by the normalizer and selector.
//!
//! [`ConfigSource`] is the only thing endpoint resolution needs from a configuration: untyped
//! lookup by key plus a location label for diagnostics. [`Configuration`] is an immutable JSON
//! snapshot implementing it, and [`SharedConfiguration`] swaps snapshots on reload.

mod shared;

pub use shared::*;

// self
use crate::{
	_prelude::*,
	endpoint::{DefaultEndpointSelector, Endpoint, EndpointNormalizer},
	error::ConfigError,
	metadata::MetadataRole,
};

/// Location label of configurations built in memory.
pub const DEFAULT_LOCATION: &str = "[ARRAY]";
/// Key naming the metadata set (and thereby the [`MetadataRole`]) of a configuration.
pub const METADATA_SET_KEY: &str = "metadata-set";

/// Untyped key/value lookup.
pub trait ConfigSource {
	/// Returns the raw value stored under `name`, without any coercion.
	fn get_raw(&self, name: &str) -> Option<&Value>;

	/// Label prefixed to key paths in diagnostics.
	fn location(&self) -> &str {
		DEFAULT_LOCATION
	}
}
impl ConfigSource for Map<String, Value> {
	fn get_raw(&self, name: &str) -> Option<&Value> {
		self.get(name)
	}
}

/// Immutable JSON-object snapshot of one partner's metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
	values: Map<String, Value>,
	location: String,
}
impl Configuration {
	/// Wraps an already parsed JSON object.
	pub fn from_map(values: Map<String, Value>) -> Self {
		Self { values, location: DEFAULT_LOCATION.to_owned() }
	}

	/// Wraps a JSON value, which must be an object.
	pub fn from_value(value: Value) -> Result<Self, ConfigError> {
		match value {
			Value::Object(values) => Ok(Self::from_map(values)),
			other => Err(ConfigError::NotAnObject { found: json_type_name(&other) }),
		}
	}

	/// Parses a JSON object document; parse failures carry the JSON path of the offending
	/// value.
	pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
		let mut deserializer = serde_json::Deserializer::from_str(document);
		let value: Value = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| ConfigError::Parse { source })?;

		deserializer.end().map_err(|source| ConfigError::TrailingCharacters { source })?;

		Self::from_value(value)
	}

	/// Replaces the location label used in diagnostics (for example the metadata file name).
	pub fn with_location(mut self, location: impl Into<String>) -> Self {
		self.location = location.into();

		self
	}

	/// Raw key/value pairs.
	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	/// Returns true when `name` is present, even if its value is `null`.
	pub fn has_value(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Role derived from the `metadata-set` key; absent or non-string sets are unknown.
	pub fn metadata_role(&self) -> MetadataRole {
		self.values
			.get(METADATA_SET_KEY)
			.and_then(Value::as_str)
			.map_or(MetadataRole::Unknown, MetadataRole::from_set_name)
	}

	/// Normalized endpoints of type `endpoint`, using the configuration's own role.
	pub fn endpoints(&self, endpoint: &str) -> Result<Vec<Endpoint>> {
		Ok(EndpointNormalizer::new(self, self.metadata_role()).normalize(endpoint)?)
	}

	/// Default endpoint of type `endpoint`, using the configuration's own role.
	pub fn default_endpoint(
		&self,
		endpoint: &str,
		valid_bindings: Option<&[&str]>,
	) -> Result<Endpoint> {
		Ok(self.selector().select_default(endpoint, valid_bindings)?)
	}

	/// Default endpoint of type `endpoint`, or `None` when no endpoint has an accepted binding.
	pub fn try_default_endpoint(
		&self,
		endpoint: &str,
		valid_bindings: Option<&[&str]>,
	) -> Result<Option<Endpoint>> {
		Ok(self.selector().try_select_default(endpoint, valid_bindings)?)
	}

	/// First endpoint of type `endpoint` using the most preferred of `bindings`.
	pub fn endpoint_by_binding_priority(
		&self,
		endpoint: &str,
		bindings: &[&str],
	) -> Result<Endpoint> {
		Ok(self.selector().select_by_binding_priority(endpoint, bindings)?)
	}

	fn selector(&self) -> DefaultEndpointSelector<'_, Self> {
		DefaultEndpointSelector::new(self, self.metadata_role())
	}
}
impl Default for Configuration {
	fn default() -> Self {
		Self::from_map(Map::new())
	}
}
impl ConfigSource for Configuration {
	fn get_raw(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	fn location(&self) -> &str {
		&self.location
	}
}
impl FromStr for Configuration {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_json_str(s)
	}
}
impl TryFrom<Value> for Configuration {
	type Error = ConfigError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		Self::from_value(value)
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
