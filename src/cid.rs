/* src/cid.rs */

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::Error;

/// Maximum connection ID length in bytes.
pub const MAX_CID_LEN: usize = 20;

/// An owned QUIC connection ID of 0 to 20 bytes.
///
/// The bytes are copied out of the datagram and stored inline, so a parsed ID
/// stays valid after the receive buffer is reused. Equality and hashing only
/// look at the first `len()` bytes.
#[derive(Clone, Copy)]
pub struct ConnectionId {
	len: u8,
	bytes: [u8; MAX_CID_LEN],
}

impl ConnectionId {
	/// The zero-length connection ID.
	pub const ZERO: Self = Self {
		len: 0,
		bytes: [0; MAX_CID_LEN],
	};

	/// Copy `bytes` into a new connection ID.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidCidLength`] when `bytes` is longer than
	/// [`MAX_CID_LEN`].
	pub fn new(bytes: &[u8]) -> Result<Self, Error> {
		if bytes.len() > MAX_CID_LEN {
			return Err(Error::InvalidCidLength(bytes.len()));
		}
		let mut cid = Self::ZERO;
		#[allow(clippy::cast_possible_truncation)]
		let len = bytes.len() as u8;
		cid.len = len;
		cid.bytes[..bytes.len()].copy_from_slice(bytes);
		Ok(cid)
	}

	/// The connection ID bytes.
	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..usize::from(self.len)]
	}

	/// Length of the connection ID in bytes.
	#[must_use]
	pub fn len(&self) -> usize {
		usize::from(self.len)
	}

	/// Whether this is the zero-length connection ID.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl Default for ConnectionId {
	fn default() -> Self {
		Self::ZERO
	}
}

impl PartialEq for ConnectionId {
	fn eq(&self, other: &Self) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl Eq for ConnectionId {}

impl PartialEq<[u8]> for ConnectionId {
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

impl Hash for ConnectionId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_bytes().hash(state);
	}
}

impl AsRef<[u8]> for ConnectionId {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl TryFrom<&[u8]> for ConnectionId {
	type Error = Error;

	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		Self::new(bytes)
	}
}

impl fmt::Debug for ConnectionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ConnectionId({self})")
	}
}

impl fmt::Display for ConnectionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for b in self.as_bytes() {
			write!(f, "{b:02x}")?;
		}
		Ok(())
	}
}
