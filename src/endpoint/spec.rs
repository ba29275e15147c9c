// self
use crate::{
	_prelude::*,
	error::{EndpointError, MalformedReason},
};

/// Raw endpoint definition, classified once before conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum EndpointSpec {
	/// A single address.
	Bare(String),
	/// A sequence of addresses.
	List(Vec<String>),
	/// A sequence holding at least one structured record.
	Structured(Vec<EndpointEntry>),
}
impl EndpointSpec {
	/// Classifies a raw value; `Ok(None)` means no endpoints are configured.
	///
	/// `path` prefixes the diagnostics, element failures append `[<position>]` to it.
	pub fn classify(raw: Option<&Value>, path: &str) -> Result<Option<Self>, EndpointError> {
		let items = match raw {
			None | Some(Value::Null) => return Ok(None),
			Some(Value::String(location)) => return Ok(Some(Self::Bare(location.clone()))),
			Some(Value::Array(items)) => items,
			Some(_) =>
				return Err(EndpointError::Malformed {
					path: path.to_owned(),
					reason: MalformedReason::ExpectedArrayOrString,
				}),
		};
		let entries = items
			.iter()
			.enumerate()
			.map(|(i, item)| match item {
				Value::String(location) => Ok(EndpointEntry::Location(location.clone())),
				Value::Object(record) => Ok(EndpointEntry::Record(record.clone())),
				_ => Err(EndpointError::Malformed {
					path: element_path(path, i),
					reason: MalformedReason::ExpectedStringOrArray,
				}),
			})
			.collect::<Result<Vec<_>, _>>()?;

		if entries.iter().all(|entry| matches!(entry, EndpointEntry::Location(_))) {
			let locations = entries
				.into_iter()
				.filter_map(|entry| match entry {
					EndpointEntry::Location(location) => Some(location),
					EndpointEntry::Record(_) => None,
				})
				.collect();

			Ok(Some(Self::List(locations)))
		} else {
			Ok(Some(Self::Structured(entries)))
		}
	}

	/// Number of endpoints this definition describes.
	pub fn len(&self) -> usize {
		match self {
			Self::Bare(_) => 1,
			Self::List(locations) => locations.len(),
			Self::Structured(entries) => entries.len(),
		}
	}

	/// Returns true for an empty sequence.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// One element of a structured endpoint sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum EndpointEntry {
	/// A bare address inside the sequence.
	Location(String),
	/// A record carrying `Location`, `Binding`, and optional attributes.
	Record(Map<String, Value>),
}

pub(crate) fn element_path(path: &str, position: usize) -> String {
	format!("{path}[{position}]")
}
