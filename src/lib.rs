/* src/lib.rs */

//! Version-independent parsing of QUIC invariant header fields (RFC 8999).
//!
//! Given the first bytes of a UDP datagram, this crate determines the header
//! form and extracts the version and connection IDs without knowing anything
//! version-specific. It is meant for load balancers, proxies and
//! demultiplexers that route packets before, or without, decrypting them.
//!
//! Every length read from the wire is checked against the buffer. Malformed
//! or truncated input produces an [`Error`], never a panic. Unknown versions
//! are accepted as-is.
//!
//! Short headers do not carry their connection ID length, so it must be
//! supplied: either per call through [`dcid`] or once through [`Invariants`].
//!
//! Enable the `tracing` feature to log rejected headers at trace level.

mod cid;
mod error;
mod header;
mod invariants;

pub use cid::{ConnectionId, MAX_CID_LEN};
pub use error::Error;
pub use header::{
	HEADER_FORM_BIT, HeaderForm, cid_lengths, dcid, decode_cid_len, header_form, is_long_header,
	is_version_negotiation, scid, version,
};
pub use invariants::{InvariantHeader, Invariants};
