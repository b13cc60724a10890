//! RIFF/WAVE serialization.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::format::WavFormat;
use super::result::WavResult;

/// Size of the canonical header written by [`write_wav`].
pub(crate) const HEADER_LEN: usize = 44;

/// Sizes of the `data` chunk and the RIFF chunk for `pcm_len` bytes of PCM.
///
/// Both are 32-bit header fields; larger payloads are an `InvalidInput` error.
pub(crate) fn chunk_sizes(pcm_len: usize) -> io::Result<(u32, u32)> {
    let data_size = u32::try_from(pcm_len).ok();
    // RIFF chunk size excludes the 8-byte "RIFF" + size preamble
    let riff_size = data_size.and_then(|size| size.checked_add(HEADER_LEN as u32 - 8));
    match (data_size, riff_size) {
        (Some(data_size), Some(riff_size)) => Ok((data_size, riff_size)),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} bytes of PCM data exceed the WAV size limit", pcm_len),
        )),
    }
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error. Payloads or sample rates too large
/// for the 32-bit header fields fail with [`io::ErrorKind::InvalidInput`]
/// before anything is written.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let (data_size, riff_size) = chunk_sizes(pcm_data.len())?;
    let byte_rate = format.byte_rate().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("sample rate {} Hz overflows the WAV byte rate", format.sample_rate),
        )
    })?;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes, or the header error from [`write_wav`]
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Serializes `samples` as a mono 16-bit WAV and writes it to `path`.
///
/// Any existing file at `path` is replaced. The parent directory must exist.
///
/// # Arguments
/// * `path` - Destination file
/// * `sample_rate` - Sample rate in Hz
/// * `samples` - Mono 16-bit samples
///
/// # Returns
/// The serialized file and its PCM hash
pub fn write_wav_file(path: &Path, sample_rate: u32, samples: &[i16]) -> io::Result<WavResult> {
    let result = WavResult::from_mono(samples, sample_rate)?;
    fs::write(path, &result.wav_data)?;
    Ok(result)
}
