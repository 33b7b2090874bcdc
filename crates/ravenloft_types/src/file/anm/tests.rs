//! Container-level tests for ANM parsing, serialization, and substitution.

use super::constants::{
	IMAGE_SIZE, INTERLACED_BLOCK_SIZE, INTERLACED_DATA_SIZE, PALETTE_SIZE, WIDTH,
};
use super::*;
use crate::file::AnmError;

/// Appends one chunk record (header + payload) to a container under
/// construction.
fn push_chunk(out: &mut Vec<u8>, id: u16, payload: &[u8]) {
	out.extend_from_slice(&id.to_le_bytes());
	out.extend_from_slice(&(payload.len() as i32).to_le_bytes());
	out.extend_from_slice(payload);
}

/// Starts a container with the given frame count and version.
fn container_header(frame_count: u16, version: u16) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(&frame_count.to_le_bytes());
	out.extend_from_slice(&version.to_le_bytes());
	out
}

/// Intra payload painting the whole raster in one color: 1600 maximal
/// repeat runs of 160 bytes.
fn solid_intra_payload(color: u8) -> Vec<u8> {
	let mut payload = Vec::with_capacity(IMAGE_SIZE / 160 * 2);
	for _ in 0..IMAGE_SIZE / 160 {
		payload.push(0xB1);
		payload.push(color);
	}
	payload
}

#[test]
fn test_palette_and_image_container() {
	let mut data = container_header(1, 1);
	data.extend_from_slice(&3u16.to_le_bytes()); // chunk count

	push_chunk(&mut data, 0, &[0x10; PALETTE_SIZE]);
	push_chunk(&mut data, 2, &solid_intra_payload(0x2A));
	push_chunk(&mut data, 3, &[0x00, 0x00]); // empty inter update list

	let anm = File::from_bytes(&data).unwrap();
	assert!(anm.warnings().is_empty());
	assert_eq!(anm.version(), 1);
	assert_eq!(anm.frames().len(), 1);

	let frame = &anm.frames()[0];
	assert_eq!(frame.chunk_count(), 3);

	let palette = &frame.chunks()[0];
	assert_eq!(palette.kind(), ChunkKind::Palette);
	assert_eq!(palette.palette_bytes().unwrap(), &[0x10; PALETTE_SIZE]);
	assert!(!palette.is_image());

	let intra = &frame.chunks()[1];
	assert!(intra.is_image());
	assert!(intra.pixels().unwrap().iter().all(|&p| p == 0x2A));

	// An empty inter update list decodes to an all-zero raster
	let inter = &frame.chunks()[2];
	assert!(inter.is_image());
	assert!(inter.pixels().unwrap().iter().all(|&p| p == 0));
}

#[test]
fn test_truncated_intra_payload_is_fatal() {
	// Canonical truncated-payload case: a 2-byte intra payload cannot
	// fill the 256000-byte raster
	let mut data = container_header(1, 1);
	data.extend_from_slice(&2u16.to_le_bytes());
	push_chunk(&mut data, 0, &[0x10; PALETTE_SIZE]);
	push_chunk(&mut data, 2, &[0x00, 0x05]);

	let err = File::from_bytes(&data).unwrap_err();
	assert!(matches!(err, AnmError::InsufficientData { .. }));
}

#[test]
fn test_frame_count_out_of_range() {
	for count in [0u16, 2000] {
		let data = container_header(count, 7);
		let anm = File::from_bytes(&data).unwrap();

		assert!(anm.frames().is_empty());
		assert_eq!(anm.version(), 7);
		assert_eq!(
			anm.warnings(),
			&[ParseWarning::FrameCountOutOfRange {
				count,
			}]
		);
	}
}

#[test]
fn test_warning_paths_keep_the_stream_aligned() {
	// Three malformed chunks, each followed by a well-formed skip chunk
	// whose payload proves the parse position never drifted
	let mut data = container_header(1, 0);
	data.extend_from_slice(&4u16.to_le_bytes());

	push_chunk(&mut data, 0, &[0xEE; PALETTE_SIZE + 4]); // oversized palette
	push_chunk(&mut data, 1, &[0x01, 0x02]); // clear palette with data
	push_chunk(&mut data, 8, &[0x55; 16]); // interlaced with bad size
	push_chunk(&mut data, 9, b"MARKER");

	let anm = File::from_bytes(&data).unwrap();
	let chunks = anm.frames()[0].chunks();

	assert_eq!(chunks[0].payload(), &Payload::Empty);
	assert_eq!(chunks[1].raw_bytes().unwrap(), &[0x01, 0x02]);
	assert_eq!(chunks[2].raw_bytes().unwrap(), &[0x55; 16]);
	assert!(!chunks[2].is_image());
	assert_eq!(chunks[3].raw_bytes().unwrap(), b"MARKER");

	assert_eq!(anm.warnings().len(), 3);
	assert!(matches!(anm.warnings()[0], ParseWarning::OversizedPalette { size: 772, .. }));
	assert!(matches!(anm.warnings()[1], ParseWarning::ClearPaletteWithData { size: 2, .. }));
	assert!(matches!(anm.warnings()[2], ParseWarning::InterlacedBadSize { size: 16, .. }));
}

#[test]
fn test_interlaced_chunk_decodes() {
	let mut payload = vec![0u8; INTERLACED_DATA_SIZE];
	for (i, value) in [1u8, 2, 3, 4].iter().enumerate() {
		payload[i * INTERLACED_BLOCK_SIZE..i * INTERLACED_BLOCK_SIZE + 80].fill(*value);
	}

	let mut data = container_header(1, 0);
	data.extend_from_slice(&1u16.to_le_bytes());
	push_chunk(&mut data, 8, &payload);

	let anm = File::from_bytes(&data).unwrap();
	let chunk = &anm.frames()[0].chunks()[0];

	assert!(anm.warnings().is_empty());
	assert!(chunk.is_image());
	// The full payload is kept for round-trip
	assert_eq!(chunk.wire_payload(), payload.as_slice());

	// Row 51 pre-reversal carries sub-block 0
	let pixels = reverse_rows(chunk.pixels().unwrap());
	assert_eq!(&pixels[51 * WIDTH..51 * WIDTH + 2], &[1, 1]);
	assert_eq!(&pixels[52 * WIDTH..52 * WIDTH + 2], &[2, 2]);
}

#[test]
fn test_serialize_round_trip_is_byte_identical() {
	let mut data = container_header(2, 3);

	data.extend_from_slice(&3u16.to_le_bytes());
	push_chunk(&mut data, 0, &[0x20; PALETTE_SIZE]);
	push_chunk(&mut data, 2, &solid_intra_payload(0x11));
	push_chunk(&mut data, 5, &[0x0A, 0x00, 0x0B, 0x00]);

	data.extend_from_slice(&3u16.to_le_bytes());
	push_chunk(&mut data, 1, &[]);
	push_chunk(&mut data, 3, &[0x00, 0x00]);
	push_chunk(&mut data, 7, &[0x05, 0x00, 0x01, 0x00]);

	let anm = File::from_bytes(&data).unwrap();
	assert_eq!(anm.to_bytes(), data);

	// And again through a second parse
	let again = File::from_bytes(&anm.to_bytes()).unwrap();
	assert_eq!(again.to_bytes(), data);
}

#[test]
fn test_substitution_round_trip() {
	let mut data = container_header(1, 1);
	data.extend_from_slice(&1u16.to_le_bytes());
	push_chunk(&mut data, 3, &[0x00, 0x00]);

	let mut anm = File::from_bytes(&data).unwrap();

	// Paired 4-pixel stripes satisfy the even-run constraint
	let mut pixels = vec![0u8; IMAGE_SIZE];
	for (i, stripe) in pixels.chunks_exact_mut(4).enumerate() {
		stripe.fill((i % 200) as u8);
	}
	anm.substitute_image(0, 0, pixels.clone()).unwrap();

	let chunk = &anm.frames()[0].chunks()[0];
	assert_eq!(chunk.kind(), ChunkKind::IntraImage);
	assert_eq!(chunk.raw_id(), 2);
	assert_eq!(chunk.declared_size() as usize, chunk.wire_payload().len());

	// The substituted chunk survives a save/load cycle with its pixels
	let reloaded = File::from_bytes(&anm.to_bytes()).unwrap();
	assert_eq!(reloaded.frames()[0].chunks()[0].pixels().unwrap(), pixels.as_slice());
}

#[test]
fn test_substitution_rejects_non_image_targets() {
	let mut data = container_header(1, 1);
	data.extend_from_slice(&1u16.to_le_bytes());
	push_chunk(&mut data, 5, &[0x01, 0x00, 0x02, 0x00]);

	let mut anm = File::from_bytes(&data).unwrap();

	let err = anm.substitute_image(0, 0, vec![0; IMAGE_SIZE]).unwrap_err();
	assert!(matches!(
		err,
		AnmError::NotAnImageChunk {
			frame: 0,
			chunk: 0,
		}
	));

	let err = anm.substitute_image(3, 0, vec![0; IMAGE_SIZE]).unwrap_err();
	assert!(matches!(err, AnmError::ChunkOutOfRange { .. }));

	// A failed substitution leaves the container untouched
	assert_eq!(anm.to_bytes(), data);
}

#[test]
fn test_substitution_failure_keeps_original_chunk() {
	let mut data = container_header(1, 1);
	data.extend_from_slice(&1u16.to_le_bytes());
	push_chunk(&mut data, 2, &solid_intra_payload(0x09));

	let mut anm = File::from_bytes(&data).unwrap();

	// A lone pixel makes the raster unencodable
	let mut pixels = vec![0u8; IMAGE_SIZE];
	pixels[0] = 1;
	let err = anm.substitute_image(0, 0, pixels).unwrap_err();
	assert!(matches!(err, AnmError::OddRun { .. }));

	assert_eq!(anm.to_bytes(), data);
}

#[test]
fn test_tracker_fold_over_frames() {
	let mut data = container_header(2, 1);

	// 100-byte repeat runs: 2560 runs, 5120 payload bytes, above the
	// 0x1000 refresh threshold
	let mut refresh = Vec::new();
	for _ in 0..IMAGE_SIZE / 100 {
		refresh.push(0xCF); // 257 - 0xCF = 50 pairs
		refresh.push(0x33);
	}

	data.extend_from_slice(&2u16.to_le_bytes());
	push_chunk(&mut data, 0, &[0x05; PALETTE_SIZE]);
	push_chunk(&mut data, 2, &refresh);

	// Second frame has no refresh; the tracker must keep frame 1 state
	data.extend_from_slice(&1u16.to_le_bytes());
	push_chunk(&mut data, 6, &[0x01, 0x00]);

	let anm = File::from_bytes(&data).unwrap();
	let mut tracker = ReferenceTracker::new();

	for chunk in anm.frames()[0].chunks() {
		tracker.observe(chunk);
	}
	assert!(tracker.image().iter().all(|&p| p == 0x33));

	for chunk in anm.frames()[1].chunks() {
		tracker.observe(chunk);
	}
	assert!(tracker.palette().iter().all(|&v| v == 0x05));
	assert!(tracker.image().iter().all(|&p| p == 0x33));
}
