// self
use crate::_prelude::*;

/// Metadata set a partner configuration belongs to.
///
/// Any set name outside the known remote sets parses as [`MetadataRole::Unknown`]; such
/// configurations can still list fully specified endpoints but have no default bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetadataRole {
	/// Remote SAML 2.0 service provider.
	Saml20SpRemote,
	/// Remote SAML 2.0 identity provider.
	Saml20IdpRemote,
	/// Remote Shibboleth 1.3 service provider.
	Shib13SpRemote,
	/// Remote Shibboleth 1.3 identity provider.
	Shib13IdpRemote,
	/// Unrecognized or missing metadata set.
	#[serde(other)]
	Unknown,
}
impl MetadataRole {
	/// Every recognized role, excluding [`MetadataRole::Unknown`].
	pub const KNOWN: [MetadataRole; 4] = [
		MetadataRole::Saml20SpRemote,
		MetadataRole::Saml20IdpRemote,
		MetadataRole::Shib13SpRemote,
		MetadataRole::Shib13IdpRemote,
	];

	/// Returns the metadata-set name for the role.
	pub const fn as_str(self) -> &'static str {
		match self {
			MetadataRole::Saml20SpRemote => "saml20-sp-remote",
			MetadataRole::Saml20IdpRemote => "saml20-idp-remote",
			MetadataRole::Shib13SpRemote => "shib13-sp-remote",
			MetadataRole::Shib13IdpRemote => "shib13-idp-remote",
			MetadataRole::Unknown => "unknown",
		}
	}

	/// Maps a metadata-set name onto a role, falling back to [`MetadataRole::Unknown`].
	pub fn from_set_name(name: &str) -> Self {
		Self::KNOWN.into_iter().find(|role| role.as_str() == name).unwrap_or(Self::Unknown)
	}

	/// Returns true for anything but [`MetadataRole::Unknown`].
	pub fn is_known(self) -> bool {
		self != MetadataRole::Unknown
	}
}
impl Display for MetadataRole {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for MetadataRole {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from_set_name(s))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn set_names_round_trip() {
		for role in MetadataRole::KNOWN {
			assert_eq!(MetadataRole::from_set_name(role.as_str()), role);
		}
	}

	#[test]
	fn unrecognized_sets_are_unknown() {
		assert_eq!(MetadataRole::from_set_name("foo"), MetadataRole::Unknown);
		assert_eq!(MetadataRole::from_set_name("saml20-sp-hosted"), MetadataRole::Unknown);
		assert!(!MetadataRole::Unknown.is_known());
	}

	#[test]
	fn serde_uses_set_names() {
		let payload = serde_json::to_string(&MetadataRole::Shib13IdpRemote)
			.expect("MetadataRole should serialize to JSON.");

		assert_eq!(payload, "\"shib13-idp-remote\"");

		let role: MetadataRole = serde_json::from_str("\"adfs-sp-remote\"")
			.expect("Unrecognized set names should deserialize as Unknown.");

		assert_eq!(role, MetadataRole::Unknown);
	}
}
