/* tests/properties.rs */

#![allow(missing_docs)]

use proptest::prelude::*;
use quic_invariants::{
	ConnectionId, Error, Invariants, dcid, decode_cid_len, header_form, scid, version,
};

fn encode_cid_len(len: usize) -> u8 {
	match len {
		0 => 0,
		n => u8::try_from(n - 3).unwrap(),
	}
}

fn cid_len() -> impl Strategy<Value = usize> {
	prop_oneof![Just(0usize), 4usize..=18]
}

proptest! {
	// Arbitrary bytes never panic and every success stays inside the buffer.
	#[test]
	fn arbitrary_input_is_bounded(pkt in proptest::collection::vec(any::<u8>(), 0..64), k in 0usize..=20) {
		if let Ok(cid) = dcid(&pkt, k) {
			prop_assert!(cid.len() < pkt.len());
		}
		if let Ok(cid) = scid(&pkt) {
			prop_assert!(cid.len() + 6 <= pkt.len());
		}
		if version(&pkt).is_ok() {
			prop_assert!(pkt.len() >= 5);
		}
		let _ = header_form(&pkt);
		let _ = Invariants::new(k).unwrap().parse(&pkt);
	}

	#[test]
	fn long_header_round_trip(
		first in 0x80u8..=0xff,
		v in any::<u32>(),
		d in cid_len().prop_flat_map(|n| proptest::collection::vec(any::<u8>(), n)),
		s in cid_len().prop_flat_map(|n| proptest::collection::vec(any::<u8>(), n)),
	) {
		let mut pkt = vec![first];
		pkt.extend_from_slice(&v.to_be_bytes());
		pkt.push((encode_cid_len(d.len()) << 4) | encode_cid_len(s.len()));
		pkt.extend_from_slice(&d);
		pkt.extend_from_slice(&s);

		prop_assert_eq!(version(&pkt).unwrap(), v);
		prop_assert_eq!(dcid(&pkt, 0).unwrap(), ConnectionId::new(&d).unwrap());
		prop_assert_eq!(scid(&pkt).unwrap(), ConnectionId::new(&s).unwrap());

		// Any truncation of the SCID span is rejected.
		if !s.is_empty() {
			let cut = &pkt[..pkt.len() - 1];
			prop_assert!(
				matches!(scid(cut), Err(Error::BufferTooShort { .. })),
				"truncated scid accepted"
			);
		}
	}

	#[test]
	fn short_header_round_trip(
		first in 0x00u8..0x80,
		d in proptest::collection::vec(any::<u8>(), 0..=20),
	) {
		let mut pkt = vec![first];
		pkt.extend_from_slice(&d);

		let got = dcid(&pkt, d.len()).unwrap();
		prop_assert_eq!(got.as_bytes(), &d[..]);
		prop_assert!(
			matches!(dcid(&pkt, d.len() + 1), Err(Error::BufferTooShort { .. })),
			"short header longer than buffer accepted"
		);
	}

	#[test]
	fn nibble_decoding(n in 0u8..16) {
		let len = decode_cid_len(n);
		if n == 0 {
			prop_assert_eq!(len, 0);
		} else {
			prop_assert_eq!(len, usize::from(n) + 3);
		}
	}
}
