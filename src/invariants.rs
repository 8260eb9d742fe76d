/* src/invariants.rs */

use crate::cid::{ConnectionId, MAX_CID_LEN};
use crate::error::Error;
use crate::header::{self, HeaderForm};

/// Invariant header parser bound to the locally configured short header
/// connection ID length.
///
/// Build one at startup and share it; it holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invariants {
	short_dcid_len: usize,
}

/// All invariant fields of one datagram, extracted in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantHeader {
	/// Header form of the first byte.
	pub form: HeaderForm,
	/// Version field. `None` for short headers.
	pub version: Option<u32>,
	/// Destination Connection ID.
	pub dcid: ConnectionId,
	/// Source Connection ID. `None` for short headers.
	pub scid: Option<ConnectionId>,
}

impl InvariantHeader {
	/// Whether this is a version negotiation packet (long header, version 0).
	#[must_use]
	pub fn is_version_negotiation(&self) -> bool {
		self.version == Some(0)
	}
}

impl Invariants {
	/// Create a parser for short header connection IDs of `short_dcid_len`
	/// bytes.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidCidLength`] when `short_dcid_len` exceeds 20.
	pub fn new(short_dcid_len: usize) -> Result<Self, Error> {
		if short_dcid_len > MAX_CID_LEN {
			return Err(Error::InvalidCidLength(short_dcid_len));
		}
		Ok(Self { short_dcid_len })
	}

	/// The configured short header connection ID length.
	#[must_use]
	pub fn short_dcid_len(&self) -> usize {
		self.short_dcid_len
	}

	/// See [`crate::version`].
	///
	/// # Errors
	///
	/// Fails on short headers and buffers under 5 bytes.
	#[allow(clippy::unused_self)]
	pub fn version(&self, packet: &[u8]) -> Result<u32, Error> {
		header::version(packet)
	}

	/// See [`crate::dcid`], using the configured short header length.
	///
	/// # Errors
	///
	/// Fails when the buffer ends before the connection ID does.
	pub fn dcid(&self, packet: &[u8]) -> Result<ConnectionId, Error> {
		header::dcid(packet, self.short_dcid_len)
	}

	/// See [`crate::scid`].
	///
	/// # Errors
	///
	/// Fails on short headers and when the buffer ends before the source
	/// connection ID does.
	#[allow(clippy::unused_self)]
	pub fn scid(&self, packet: &[u8]) -> Result<ConnectionId, Error> {
		header::scid(packet)
	}

	/// Extract every invariant field of `packet`.
	///
	/// Succeeds only if all fields applicable to the header form are present.
	///
	/// # Errors
	///
	/// Returns the first extraction error encountered.
	pub fn parse(&self, packet: &[u8]) -> Result<InvariantHeader, Error> {
		let parsed = self.parse_fields(packet);

		#[cfg(feature = "tracing")]
		if let Err(ref e) = parsed {
			tracing::trace!(error = %e, len = packet.len(), "rejected QUIC invariant header");
		}

		parsed
	}

	fn parse_fields(&self, packet: &[u8]) -> Result<InvariantHeader, Error> {
		let form = header::header_form(packet)?;
		let dcid = self.dcid(packet)?;
		match form {
			HeaderForm::Long => Ok(InvariantHeader {
				form,
				version: Some(self.version(packet)?),
				dcid,
				scid: Some(self.scid(packet)?),
			}),
			HeaderForm::Short => Ok(InvariantHeader {
				form,
				version: None,
				dcid,
				scid: None,
			}),
		}
	}
}
