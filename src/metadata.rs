//! Metadata vocabulary: roles, binding identifiers, service names, and default bindings.
//!
//! `role` identifies which metadata set (remote SP or IdP, SAML 2.0 or Shibboleth 1.3) a
//! configuration belongs to. `binding` collects the protocol binding URIs. `defaults` holds the
//! static (role, endpoint type) → binding table consulted when an endpoint is given as a bare
//! address.

/// Protocol binding identifiers.
pub mod binding;
/// Static default-binding table.
pub mod defaults;
/// Metadata role (metadata set) identifiers.
pub mod role;

pub use defaults::*;
pub use role::*;

/// Endpoint type names as they appear as keys in metadata.
pub mod service {
	/// Where an SP receives authentication responses.
	pub const ASSERTION_CONSUMER_SERVICE: &str = "AssertionConsumerService";
	/// Back-channel artifact resolution.
	pub const ARTIFACT_RESOLUTION_SERVICE: &str = "ArtifactResolutionService";
	/// Logout requests and responses.
	pub const SINGLE_LOGOUT_SERVICE: &str = "SingleLogoutService";
	/// Where an IdP receives authentication requests.
	pub const SINGLE_SIGN_ON_SERVICE: &str = "SingleSignOnService";
}
