/// Errors that can occur while extracting invariant header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The input buffer is shorter than the field being extracted requires.
	#[error("buffer too short: need at least {need} bytes, have {have}")]
	BufferTooShort {
		/// Minimum number of bytes required.
		need: usize,
		/// Actual number of bytes available.
		have: usize,
	},

	/// The field only exists in long header packets.
	#[error("not a QUIC long header packet")]
	NotLongHeader,

	/// A connection ID length exceeds the protocol maximum of 20 bytes.
	#[error("connection ID length {0} exceeds maximum of 20")]
	InvalidCidLength(usize),
}
