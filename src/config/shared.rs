// std
use std::mem;
// self
use crate::{
	_prelude::*,
	config::{ConfigSource, Configuration},
	endpoint::Endpoint,
};

/// Reloadable handle over [`Configuration`] snapshots.
///
/// Every resolution runs against one snapshot taken at the start of the call, so a concurrent
/// [`replace`](Self::replace) never changes the data an in-flight resolution sees.
#[derive(Clone, Debug, Default)]
pub struct SharedConfiguration {
	inner: Arc<RwLock<Arc<Configuration>>>,
}
impl SharedConfiguration {
	/// Creates a handle holding `config` as the current snapshot.
	pub fn new(config: Configuration) -> Self {
		Self { inner: Arc::new(RwLock::new(Arc::new(config))) }
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<Configuration> {
		self.inner.read().clone()
	}

	/// Installs a new snapshot and returns the previous one.
	pub fn replace(&self, config: Configuration) -> Arc<Configuration> {
		mem::replace(&mut *self.inner.write(), Arc::new(config))
	}

	/// Parses `document` and installs it, keeping the current location label.
	///
	/// The current snapshot stays in place when parsing fails.
	pub fn reload_from_json_str(&self, document: &str) -> Result<()> {
		let config = Configuration::from_json_str(document)?;
		let mut current = self.inner.write();
		let location = current.location().to_owned();

		*current = Arc::new(config.with_location(location));

		Ok(())
	}

	/// Normalized endpoints of type `endpoint` from the current snapshot.
	pub fn endpoints(&self, endpoint: &str) -> Result<Vec<Endpoint>> {
		self.snapshot().endpoints(endpoint)
	}

	/// Default endpoint of type `endpoint` from the current snapshot.
	pub fn default_endpoint(
		&self,
		endpoint: &str,
		valid_bindings: Option<&[&str]>,
	) -> Result<Endpoint> {
		self.snapshot().default_endpoint(endpoint, valid_bindings)
	}
}
impl From<Configuration> for SharedConfiguration {
	fn from(config: Configuration) -> Self {
		Self::new(config)
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::thread;
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::{
		error::{ConfigError, Error},
		metadata::{binding, service},
	};

	fn config(location: &str) -> Configuration {
		Configuration::from_value(json!({
			"metadata-set": "saml20-sp-remote",
			"AssertionConsumerService": location,
		}))
		.expect("Fixture is a JSON object.")
		.with_location("sp.json")
	}

	#[test]
	fn replace_swaps_snapshots() {
		let shared = SharedConfiguration::from(config("https://old.example.com/acs"));
		let before = shared.snapshot();
		let previous = shared.replace(config("https://new.example.com/acs"));

		assert!(Arc::ptr_eq(&before, &previous));

		let endpoint = shared
			.default_endpoint(service::ASSERTION_CONSUMER_SERVICE, None)
			.expect("Replacement ACS should resolve.");

		assert_eq!(endpoint.location, "https://new.example.com/acs");
		assert_eq!(endpoint.binding, binding::HTTP_POST);
		assert_eq!(
			before.default_endpoint(service::ASSERTION_CONSUMER_SERVICE, None)
				.expect("Old snapshot stays usable.")
				.location,
			"https://old.example.com/acs"
		);
	}

	#[test]
	fn failed_reload_keeps_current_snapshot() {
		let shared = SharedConfiguration::new(config("https://old.example.com/acs"));
		let err = shared
			.reload_from_json_str("{ not json")
			.expect_err("Malformed documents must not be installed.");

		assert!(matches!(err, Error::Config(ConfigError::Parse { .. })));
		assert_eq!(
			shared.endpoints(service::ASSERTION_CONSUMER_SERVICE)
				.expect("Current snapshot should still resolve.")[0]
				.location,
			"https://old.example.com/acs"
		);

		shared
			.reload_from_json_str(
				r#"{"metadata-set": "saml20-sp-remote", "AssertionConsumerService": 10}"#,
			)
			.expect("Well-formed documents should install.");

		let err = shared
			.endpoints(service::ASSERTION_CONSUMER_SERVICE)
			.expect_err("Numbers are not endpoint definitions.");

		assert_eq!(
			err.to_string(),
			"sp.json['AssertionConsumerService']: Expected array or string."
		);
		assert_eq!(shared.snapshot().location(), "sp.json");
	}

	#[test]
	fn reload_keeps_label_of_latest_replacement() {
		let shared = SharedConfiguration::new(config("https://old.example.com/acs"));
		let document = r#"{
			"metadata-set": "saml20-sp-remote",
			"AssertionConsumerService": "https://new.example.com/acs"
		}"#;

		thread::scope(|scope| {
			scope.spawn(|| {
				for _ in 0..100 {
					shared
						.replace(config("https://old.example.com/acs").with_location("renamed.json"));
				}
			});
			scope.spawn(|| {
				for _ in 0..100 {
					shared.reload_from_json_str(document).expect("Document is well-formed.");
				}
			});
		});

		// Every reload inherits the label current at install time, so the relabel sticks.
		assert_eq!(shared.snapshot().location(), "renamed.json");

		shared.replace(config("https://old.example.com/acs").with_location("final.json"));
		shared.reload_from_json_str(document).expect("Document is well-formed.");

		let snapshot = shared.snapshot();

		assert_eq!(snapshot.location(), "final.json");
		assert_eq!(
			snapshot
				.default_endpoint(service::ASSERTION_CONSUMER_SERVICE, None)
				.expect("Reloaded ACS should resolve.")
				.location,
			"https://new.example.com/acs"
		);
	}
}
