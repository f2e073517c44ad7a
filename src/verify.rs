use crate::audio::{self, AudioMetadata, SampleType};
use crate::presets::SoundSpec;
use crate::spectrum;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Allowed distance between the measured peak and the preset frequency, in FFT bins
pub const PEAK_TOLERANCE_BINS: f32 = 2.0;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("{}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },
    #[error("{}: expected {expected} samples, found {actual}", .path.display())]
    Length {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
    #[error("{}: spectral peak at {measured:.1} Hz, expected {expected:.1} Hz", .path.display())]
    Frequency {
        path: PathBuf,
        expected: f32,
        measured: f32,
    },
}

/// Checks one generated file against the spec it was made from
pub fn verify_sound(
    path: &Path,
    spec: &SoundSpec,
    sample_rate: u32,
) -> Result<AudioMetadata, VerifyError> {
    let (metadata, samples) = audio::read_wav(path).map_err(|source| VerifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let format_error = |reason: String| VerifyError::Format {
        path: path.to_path_buf(),
        reason,
    };
    if metadata.channels != 1 {
        return Err(format_error(format!("expected mono, found {} channels", metadata.channels)));
    }
    if metadata.sample_type != SampleType::I16 {
        return Err(format_error(format!(
            "expected i16 samples, found {}",
            metadata.sample_type.as_str()
        )));
    }
    if metadata.sample_rate != sample_rate {
        return Err(format_error(format!(
            "expected {} Hz, found {} Hz",
            sample_rate, metadata.sample_rate
        )));
    }

    let expected = spec.synth_params(sample_rate).sample_count() as u64;
    if metadata.total_samples != expected {
        return Err(VerifyError::Length {
            path: path.to_path_buf(),
            expected,
            actual: metadata.total_samples,
        });
    }

    let n_fft = spectrum::fft_size_for(samples.len());
    let measured = spectrum::dominant_frequency(&samples, sample_rate, n_fft).unwrap_or(0.0);
    let expected_hz = spec.frequency_hz as f32;
    if (measured - expected_hz).abs() > PEAK_TOLERANCE_BINS * spectrum::bin_width(sample_rate, n_fft) {
        return Err(VerifyError::Frequency {
            path: path.to_path_buf(),
            expected: expected_hz,
            measured,
        });
    }

    Ok(metadata)
}

/// Verifies `{dir}/{name}.wav` for every spec, in order
pub fn verify_all(
    dir: &Path,
    specs: &[SoundSpec],
    sample_rate: u32,
) -> Result<Vec<AudioMetadata>, VerifyError> {
    specs
        .iter()
        .map(|spec| verify_sound(&dir.join(spec.file_name()), spec, sample_rate))
        .collect()
}
