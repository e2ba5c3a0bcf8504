//! Chunked asset loading with progress reporting.
//!
//! Bytes arrive in chunks, a percent callback fires as they do, and the
//! decoded clip is handed over once the file is complete.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::audio::AudioClip;
use crate::error::VizError;

const CHUNK_SIZE: usize = 64 * 1024;

/// Read `path` in chunks, reporting percent complete (0-100), then
/// decode it as a WAV clip.
pub fn load_audio<P: AsRef<Path>>(
    path: P,
    mut progress: impl FnMut(u8),
) -> Result<AudioClip, VizError> {
    let path = path.as_ref();
    let io_err = |source| VizError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let total = file.metadata().map_err(io_err)?.len() as usize;

    let mut bytes = Vec::with_capacity(total);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk).map_err(io_err)?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
        if total > 0 {
            let percent = (bytes.len() * 100 / total).min(100) as u8;
            progress(percent);
        }
    }
    progress(100);

    AudioClip::from_wav_bytes(&bytes).map_err(|source| VizError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
