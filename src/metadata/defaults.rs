// self
use crate::metadata::{
	MetadataRole, binding,
	service::{
		ARTIFACT_RESOLUTION_SERVICE, ASSERTION_CONSUMER_SERVICE, SINGLE_LOGOUT_SERVICE,
		SINGLE_SIGN_ON_SERVICE,
	},
};

/// One row of the default-binding table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultBinding {
	/// Metadata role the row applies to.
	pub role: MetadataRole,
	/// Endpoint type name.
	pub endpoint: &'static str,
	/// Binding assigned to bare addresses of that endpoint type.
	pub binding: &'static str,
}

/// Bindings assigned to endpoints given as bare addresses.
///
/// A (role, endpoint type) pair missing from this table is a configuration error.
pub static DEFAULT_BINDINGS: [DefaultBinding; 8] = [
	DefaultBinding {
		role: MetadataRole::Saml20IdpRemote,
		endpoint: SINGLE_SIGN_ON_SERVICE,
		binding: binding::HTTP_REDIRECT,
	},
	DefaultBinding {
		role: MetadataRole::Saml20IdpRemote,
		endpoint: SINGLE_LOGOUT_SERVICE,
		binding: binding::HTTP_REDIRECT,
	},
	DefaultBinding {
		role: MetadataRole::Saml20IdpRemote,
		endpoint: ARTIFACT_RESOLUTION_SERVICE,
		binding: binding::SOAP,
	},
	DefaultBinding {
		role: MetadataRole::Saml20SpRemote,
		endpoint: SINGLE_LOGOUT_SERVICE,
		binding: binding::HTTP_REDIRECT,
	},
	DefaultBinding {
		role: MetadataRole::Saml20SpRemote,
		endpoint: ASSERTION_CONSUMER_SERVICE,
		binding: binding::HTTP_POST,
	},
	DefaultBinding {
		role: MetadataRole::Shib13IdpRemote,
		endpoint: SINGLE_SIGN_ON_SERVICE,
		binding: binding::SHIB13_AUTHN_REQUEST,
	},
	DefaultBinding {
		role: MetadataRole::Shib13IdpRemote,
		endpoint: ARTIFACT_RESOLUTION_SERVICE,
		binding: binding::SAML1_SOAP,
	},
	DefaultBinding {
		role: MetadataRole::Shib13SpRemote,
		endpoint: ASSERTION_CONSUMER_SERVICE,
		binding: binding::SAML1_BROWSER_POST,
	},
];

/// Looks up the default binding for an endpoint type under the given role.
pub fn default_binding(role: MetadataRole, endpoint: &str) -> Option<&'static str> {
	DEFAULT_BINDINGS
		.iter()
		.find(|row| row.role == role && row.endpoint == endpoint)
		.map(|row| row.binding)
}
