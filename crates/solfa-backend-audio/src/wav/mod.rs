//! Deterministic WAV file writer.
//!
//! Writes mono 16-bit PCM WAV files with a fixed 44-byte header and no
//! timestamps or metadata chunks, so identical sample buffers always produce
//! identical files.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_file, write_wav_to_vec};
