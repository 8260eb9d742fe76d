/* demos/parse_invariants.rs */

#![allow(missing_docs)]

// Extracts the invariant fields of a long and a short header datagram, then
// shows how truncated input is reported.

use quic_invariants::{HeaderForm, Invariants};

fn main() {
	// Connection IDs this endpoint issues are 8 bytes long.
	let parser = match Invariants::new(8) {
		Ok(p) => p,
		Err(e) => {
			eprintln!("bad configuration: {e}");
			return;
		}
	};

	for (name, packet) in [
		("long", sample_long()),
		("short", sample_short()),
		("truncated", sample_long()[..10].to_vec()),
	] {
		println!("{name} ({} bytes):", packet.len());
		match parser.parse(&packet) {
			Ok(header) => {
				println!("  form:    {:?}", header.form);
				if let Some(version) = header.version {
					println!("  version: {version:#010x}");
				}
				println!("  dcid:    {}", header.dcid);
				if let Some(scid) = header.scid {
					println!("  scid:    {scid}");
				}
				if header.form == HeaderForm::Long && header.is_version_negotiation() {
					println!("  (version negotiation)");
				}
			}
			Err(e) => eprintln!("  parse error: {e}"),
		}
	}
}

fn sample_long() -> Vec<u8> {
	let mut pkt = Vec::new();

	// Long header form bit; the rest of the byte is version-specific.
	pkt.push(0xc0);

	// Version: QUIC v1
	pkt.extend_from_slice(&0x0000_0001u32.to_be_bytes());

	// DCIL = 0x5 (8 bytes), SCIL = 0x1 (4 bytes)
	pkt.push(0x51);
	pkt.extend_from_slice(&[0x83, 0x94, 0xc8, 0xf0, 0x3e, 0x51, 0x57, 0x08]);
	pkt.extend_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd]);

	// Version-specific remainder, opaque here.
	pkt.extend_from_slice(&[0x00; 16]);
	pkt
}

fn sample_short() -> Vec<u8> {
	let mut pkt = vec![0x40];
	pkt.extend_from_slice(&[0x83, 0x94, 0xc8, 0xf0, 0x3e, 0x51, 0x57, 0x08]);
	pkt.extend_from_slice(&[0x00; 24]);
	pkt
}
