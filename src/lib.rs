//! SAML federation metadata endpoint normalization: turn loose partner endpoint definitions into
//! canonical records and pick the default endpoint per binding.
//!
//! Partner metadata may describe a service endpoint as a bare address, a list of addresses, or a
//! list of structured records. [`endpoint::EndpointNormalizer`] folds all of them into an ordered
//! list of [`endpoint::Endpoint`] values and [`endpoint::DefaultEndpointSelector`] picks the one
//! a flow should use.
//!
//! ```
//! use saml_endpoints::{config::Configuration, metadata::binding};
//! use serde_json::json;
//!
//! let config = Configuration::from_value(json!({
//! 	"metadata-set": "saml20-sp-remote",
//! 	"AssertionConsumerService": "https://sp.example.com/acs",
//! }))
//! .expect("Fixture is a JSON object.");
//! let endpoint = config
//! 	.default_endpoint("AssertionConsumerService", None)
//! 	.expect("A default ACS endpoint should resolve.");
//!
//! assert_eq!(endpoint.binding, binding::HTTP_POST);
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod endpoint;
pub mod error;
pub mod metadata;
pub mod obs;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use endpoint::{
	DefaultEndpointSelector, Endpoint, EndpointNormalizer, normalize, pick_default,
};
pub use metadata::{MetadataRole, default_binding};
pub use url;
#[cfg(test)] use color_eyre as _;
