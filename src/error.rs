//! Crate-level error types shared across normalization, selection, and configuration access.

// self
use crate::{_prelude::*, metadata::MetadataRole};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Endpoint metadata could not be normalized or no endpoint could be selected.
	#[error(transparent)]
	Endpoint(#[from] EndpointError),
	/// The configuration document itself is unusable.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Failures raised while normalizing endpoint metadata or selecting a default endpoint.
///
/// Messages are stable: callers may match on the suffix of a rendered
/// [`EndpointError::Malformed`] to tell the failure modes apart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum EndpointError {
	/// Raw endpoint metadata has an illegal shape or an invalid field.
	#[error("{path}: {reason}")]
	Malformed {
		/// Key path of the offending value, e.g. `[ARRAY]['SingleSignOnService'][0]`.
		path: String,
		/// What was wrong with the value.
		reason: MalformedReason,
	},
	/// Normalization succeeded but no endpoint matched the accepted bindings.
	#[error("{path}:Could not find a supported {endpoint} endpoint.")]
	NoSupportedEndpoint {
		/// Key path of the endpoint type that was searched.
		path: String,
		/// Endpoint type name.
		endpoint: String,
	},
	/// The default-binding table has no entry for the role and endpoint type.
	#[error("Missing default binding for {endpoint} in {role}. Please report this condition.")]
	MissingDefaultBinding {
		/// Endpoint type name.
		endpoint: String,
		/// Metadata role in force.
		role: MetadataRole,
	},
}

/// Fixed diagnostics attached to [`EndpointError::Malformed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ThisError)]
pub enum MalformedReason {
	/// Top-level value is neither absent, a string, nor a sequence.
	#[error("Expected array or string.")]
	ExpectedArrayOrString,
	/// Sequence element is neither a string nor a record.
	#[error("Expected a string or an array.")]
	ExpectedStringOrArray,
	/// Record lacks `Location`.
	#[error("Missing Location.")]
	MissingLocation,
	/// `Location` is not a string.
	#[error("Location must be a string.")]
	LocationNotString,
	/// `Location` is an empty string.
	#[error("Location must not be empty.")]
	EmptyLocation,
	/// Record lacks `Binding`.
	#[error("Missing Binding.")]
	MissingBinding,
	/// `Binding` is not a string.
	#[error("Binding must be a string.")]
	BindingNotString,
	/// `ResponseLocation` is present but not a string.
	#[error("ResponseLocation must be a string.")]
	ResponseLocationNotString,
	/// `index` is present but not an integer.
	#[error("index must be an integer.")]
	IndexNotInteger,
	/// `index` is an integer beyond the signed 64-bit range.
	#[error("index is out of range.")]
	IndexOutOfRange,
	/// `isDefault` is present but not a boolean.
	#[error("isDefault must be a boolean.")]
	IsDefaultNotBoolean,
}

/// Configuration document failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The document is not valid JSON.
	#[error("Configuration document is malformed JSON.")]
	Parse {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Something other than whitespace follows the document.
	#[error("Configuration document has trailing characters.")]
	TrailingCharacters {
		/// Underlying parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// The document parsed but its root is not an object.
	#[error("Configuration document must be a JSON object, found {found}.")]
	NotAnObject {
		/// JSON type name of the root value.
		found: &'static str,
	},
}
