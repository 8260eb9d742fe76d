/* src/header.rs */

use crate::cid::ConnectionId;
use crate::error::Error;

/// Header form bit of the first byte. Set for long headers.
pub const HEADER_FORM_BIT: u8 = 0x80;

const VERSION_OFFSET: usize = 1;
const CID_LEN_OFFSET: usize = 5;
const LONG_CID_OFFSET: usize = 6;
const SHORT_DCID_OFFSET: usize = 1;

/// The two QUIC header forms, taken from the most significant bit of the
/// first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderForm {
	/// Carries a version and two length-prefixed connection IDs.
	Long,
	/// Carries only a destination connection ID of configured length.
	Short,
}

/// Determine the header form of a datagram.
///
/// # Errors
///
/// Returns [`Error::BufferTooShort`] when `packet` is empty.
pub fn header_form(packet: &[u8]) -> Result<HeaderForm, Error> {
	let &first = packet
		.first()
		.ok_or(Error::BufferTooShort { need: 1, have: 0 })?;
	if first & HEADER_FORM_BIT == 0 {
		Ok(HeaderForm::Short)
	} else {
		Ok(HeaderForm::Long)
	}
}

/// Whether `packet` starts with a long header. An empty buffer is not.
#[must_use]
pub fn is_long_header(packet: &[u8]) -> bool {
	header_form(packet) == Ok(HeaderForm::Long)
}

/// Decode a 4-bit connection ID length field.
///
/// Zero means an empty connection ID; any other value `n` means `n + 3`
/// bytes. Only the low four bits of `nibble` are used.
#[must_use]
pub fn decode_cid_len(nibble: u8) -> usize {
	match nibble & 0x0f {
		0 => 0,
		n => usize::from(n) + 3,
	}
}

/// Read the version field of a long header packet.
///
/// Any value is accepted, including zero (version negotiation) and versions
/// this crate has never heard of.
///
/// # Errors
///
/// Returns [`Error::NotLongHeader`] for a short header and
/// [`Error::BufferTooShort`] when fewer than 5 bytes are present.
pub fn version(packet: &[u8]) -> Result<u32, Error> {
	let bytes = require_long(packet, VERSION_OFFSET + 4)?;
	Ok(u32::from_be_bytes([
		bytes[VERSION_OFFSET],
		bytes[VERSION_OFFSET + 1],
		bytes[VERSION_OFFSET + 2],
		bytes[VERSION_OFFSET + 3],
	]))
}

/// Whether `packet` is a long header carrying version 0.
#[must_use]
pub fn is_version_negotiation(packet: &[u8]) -> bool {
	version(packet) == Ok(0)
}

/// Decode the destination and source connection ID lengths of a long header.
///
/// The lengths come from byte 5: destination in the upper nibble, source in
/// the lower. They are not checked against the buffer.
///
/// # Errors
///
/// Returns [`Error::NotLongHeader`] for a short header and
/// [`Error::BufferTooShort`] when byte 5 is missing.
pub fn cid_lengths(packet: &[u8]) -> Result<(usize, usize), Error> {
	let bytes = require_long(packet, CID_LEN_OFFSET + 1)?;
	let lens = bytes[CID_LEN_OFFSET];
	Ok((decode_cid_len(lens >> 4), decode_cid_len(lens)))
}

/// Extract the Destination Connection ID.
///
/// Long headers carry the length on the wire. Short headers do not, so the
/// locally configured `short_dcid_len` is used instead; it is ignored for
/// long headers.
///
/// # Errors
///
/// Returns [`Error::BufferTooShort`] when the buffer ends before the
/// connection ID does, and [`Error::InvalidCidLength`] when
/// `short_dcid_len` exceeds 20 on a short header.
pub fn dcid(packet: &[u8], short_dcid_len: usize) -> Result<ConnectionId, Error> {
	match header_form(packet)? {
		HeaderForm::Long => {
			let (dcil, _) = cid_lengths(packet)?;
			ConnectionId::new(span(packet, LONG_CID_OFFSET, dcil)?)
		}
		HeaderForm::Short => ConnectionId::new(span(packet, SHORT_DCID_OFFSET, short_dcid_len)?),
	}
}

/// Extract the Source Connection ID of a long header packet.
///
/// # Errors
///
/// Returns [`Error::NotLongHeader`] for a short header, which has no source
/// connection ID, and [`Error::BufferTooShort`] when the buffer ends before
/// the source connection ID does.
pub fn scid(packet: &[u8]) -> Result<ConnectionId, Error> {
	let (dcil, scil) = cid_lengths(packet)?;
	ConnectionId::new(span(packet, LONG_CID_OFFSET + dcil, scil)?)
}

fn require_long(packet: &[u8], need: usize) -> Result<&[u8], Error> {
	if header_form(packet).map_err(|_| Error::BufferTooShort { need, have: 0 })? == HeaderForm::Short {
		return Err(Error::NotLongHeader);
	}
	if packet.len() < need {
		return Err(Error::BufferTooShort {
			need,
			have: packet.len(),
		});
	}
	Ok(packet)
}

fn span(packet: &[u8], start: usize, len: usize) -> Result<&[u8], Error> {
	let end = start.checked_add(len).ok_or(Error::BufferTooShort {
		need: usize::MAX,
		have: packet.len(),
	})?;
	packet.get(start..end).ok_or(Error::BufferTooShort {
		need: end,
		have: packet.len(),
	})
}
