use crate::presets::SoundSpec;
use crate::synth::{synthesize, WaveformBuffer};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the sounds land when no directory is given
pub const DEFAULT_OUTPUT_DIR: &str = "resources/sounds";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    WriteWav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("invalid parameters for '{name}': {reason}")]
    InvalidSpec { name: String, reason: String },
}

/// A file written by the generator
#[derive(Debug, Clone)]
pub struct GeneratedSound {
    pub spec: SoundSpec,
    pub path: PathBuf,
    pub sample_count: usize,
}

/// Mono 16-bit integer PCM
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Writes `buffer` to `path`, replacing any existing file
pub fn write_waveform(path: &Path, buffer: &WaveformBuffer) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, wav_spec(buffer.sample_rate))?;
    for &sample in &buffer.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Creates `dir` and its parents; an existing directory is fine
pub fn prepare_output_dir(dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Synthesizes one sound and writes it into `dir`.
/// The directory must already exist.
pub fn generate_sound(
    dir: &Path,
    spec: &SoundSpec,
    sample_rate: u32,
) -> Result<GeneratedSound, GenerateError> {
    let params = spec.synth_params(sample_rate);
    params.validate().map_err(|reason| GenerateError::InvalidSpec {
        name: spec.name(),
        reason,
    })?;

    let buffer = synthesize(&params);
    let path = dir.join(spec.file_name());
    write_waveform(&path, &buffer).map_err(|source| GenerateError::WriteWav {
        path: path.clone(),
        source,
    })?;

    Ok(GeneratedSound {
        spec: *spec,
        path,
        sample_count: buffer.len(),
    })
}

/// Writes every spec in order, stopping at the first failure.
/// `progress_callback(processed, total)` runs after each file.
pub fn generate_all<F>(
    dir: &Path,
    specs: &[SoundSpec],
    sample_rate: u32,
    mut progress_callback: F,
) -> Result<Vec<GeneratedSound>, GenerateError>
where
    F: FnMut(usize, usize),
{
    prepare_output_dir(dir)?;

    let total = specs.len();
    let mut generated = Vec::with_capacity(total);
    for (i, spec) in specs.iter().enumerate() {
        generated.push(generate_sound(dir, spec, sample_rate)?);
        progress_callback(i + 1, total);
    }
    Ok(generated)
}
