//! PCM data extraction and hashing utilities.

use super::writer::HEADER_LEN;

/// Locates the `data` chunk of a WAV file buffer.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// The PCM payload, or `None` if the buffer is not RIFF/WAVE or has no
/// complete data chunk
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;
        let body_start = pos + 8;

        if chunk_id == b"data" {
            let body_end = body_start.checked_add(chunk_size)?;
            return wav_data.get(body_start..body_end);
        }

        // Chunks are padded to an even length
        pos = body_start
            .checked_add(chunk_size)?
            .checked_add(chunk_size % 2)?;
    }

    None
}

/// Computes the BLAKE3 hash of the PCM data in a WAV buffer.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// Hex-encoded BLAKE3 hash of the PCM data, or `None` if no data chunk exists
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Decodes little-endian 16-bit PCM bytes. A trailing odd byte is ignored.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<i16> {
    pcm.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
