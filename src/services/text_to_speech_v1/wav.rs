//! WAV header repair.
//!
//! Synthesized WAV audio is streamed, so the service writes placeholder
//! values into the RIFF and `data` chunk sizes. These helpers patch them to
//! match the bytes actually received.

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// True when `data` starts with a `RIFF....WAVE` header. Chunk sizes are not
/// checked.
pub fn is_wav(data: &[u8]) -> bool {
    data.len() >= RIFF_HEADER_LEN && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE"
}

/// Rewrite the RIFF size and the `data` chunk size in place.
///
/// Subchunks are walked from offset 12. When no `data` chunk header fits in
/// the buffer only the RIFF size is updated.
pub fn repair_wav_header(data: &mut [u8]) {
    if data.len() < RIFF_HEADER_LEN {
        return;
    }
    let riff_size = size_field(data.len() - 8);
    data[4..8].copy_from_slice(&riff_size.to_le_bytes());

    let mut offset = RIFF_HEADER_LEN;
    while offset + CHUNK_HEADER_LEN <= data.len() {
        if &data[offset..offset + 4] == b"data" {
            let size = size_field(data.len() - offset - CHUNK_HEADER_LEN);
            data[offset + 4..offset + 8].copy_from_slice(&size.to_le_bytes());
            return;
        }
        let chunk_size = u32::from_le_bytes([
            data[offset + 4],
            data[offset + 5],
            data[offset + 6],
            data[offset + 7],
        ]) as usize;
        // Chunks are padded to an even length.
        let padded = chunk_size + (chunk_size & 1);
        offset = match offset.checked_add(CHUNK_HEADER_LEN + padded) {
            Some(next) => next,
            None => return,
        };
    }
}

fn size_field(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
