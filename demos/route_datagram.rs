/* demos/route_datagram.rs */

#![allow(missing_docs)]

// A toy demultiplexer: datagrams are steered to a worker by destination
// connection ID, so long and short header packets of one connection land on
// the same worker. Undecodable datagrams are dropped.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quic_invariants::{ConnectionId, Invariants};

const WORKERS: u64 = 4;

fn worker_for(dcid: &ConnectionId) -> u64 {
	let mut hasher = DefaultHasher::new();
	dcid.hash(&mut hasher);
	hasher.finish() % WORKERS
}

fn main() {
	let parser = match Invariants::new(4) {
		Ok(p) => p,
		Err(e) => {
			eprintln!("bad configuration: {e}");
			return;
		}
	};

	let datagrams: Vec<Vec<u8>> = vec![
		// Initial-like long header, DCIL = 0x1 (4 bytes), empty SCID
		vec![0xc0, 0x00, 0x00, 0x00, 0x01, 0x10, 0xde, 0xad, 0xbe, 0xef, 0x00],
		// short header for the same connection
		vec![0x40, 0xde, 0xad, 0xbe, 0xef, 0x12, 0x34],
		// short header for another connection
		vec![0x41, 0x01, 0x02, 0x03, 0x04, 0x56],
		// truncated long header
		vec![0xc0, 0x00, 0x00],
		// unknown version is still routable
		vec![0x80, 0x0a, 0x0a, 0x0a, 0x0a, 0x10, 0x01, 0x02, 0x03, 0x04],
	];

	let mut per_worker: HashMap<u64, Vec<usize>> = HashMap::new();
	for (i, pkt) in datagrams.iter().enumerate() {
		match parser.dcid(pkt) {
			Ok(dcid) => {
				let worker = worker_for(&dcid);
				println!("datagram {i}: dcid {dcid} -> worker {worker}");
				per_worker.entry(worker).or_default().push(i);
			}
			Err(e) => println!("datagram {i}: dropped ({e})"),
		}
	}

	let mut workers: Vec<_> = per_worker.into_iter().collect();
	workers.sort_unstable();
	for (worker, ids) in workers {
		println!("worker {worker}: {ids:?}");
	}
}
