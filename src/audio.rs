use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    U8,
    I16,
    I24,
    I32,
    F32,
}

impl SampleType {
    fn from_spec(spec: &hound::WavSpec) -> Self {
        match spec.sample_format {
            hound::SampleFormat::Int => match spec.bits_per_sample {
                8 => SampleType::U8,
                16 => SampleType::I16,
                24 => SampleType::I24,
                _ => SampleType::I32,
            },
            hound::SampleFormat::Float => SampleType::F32,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SampleType::U8 => "u8",
            SampleType::I16 => "i16",
            SampleType::I24 => "i24",
            SampleType::I32 => "i32",
            SampleType::F32 => "f32",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioMetadata {
    pub codec: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub sample_type: SampleType,
    /// Samples per channel
    pub total_samples: u64,
}

pub fn format_duration(duration: f64) -> String {
    if duration < 0.0 {
        return format!("-{}", format_duration(-duration));
    }

    if duration < 1.0 {
        let ms = (duration * 1000.0).round() as u32;
        return format!("{}ms", ms);
    }

    let zero_ms = ((duration * 1000.0).round() as u64) % 1000 == 0;
    if duration < 60.0 {
        return if zero_ms {
            format!("{:.0}s", duration)
        } else {
            format!("{:.3}s", duration)
        };
    }

    let minutes = (duration / 60.0).trunc() as u32;
    let seconds = duration % 60.0;
    if zero_ms {
        format!("{}:{:02.0}m", minutes, seconds)
    } else {
        format!("{}:{:06.3}m", minutes, seconds)
    }
}

/// 950 -> `950spl`, 4410 -> `4.41kspl`, 1_500_000 -> `1.5Mspl`
pub fn format_samples(count: u64) -> String {
    const UNITS: [&str; 4] = ["k", "M", "G", "T"];

    if count < 1000 {
        return format!("{}spl", count);
    }

    let mut value = count as f64;
    let mut unit = "";
    for u in UNITS {
        if value < 1000.0 {
            break;
        }
        value /= 1000.0;
        unit = u;
    }

    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}spl", text, unit)
}

impl AudioMetadata {
    pub fn duration_secs(&self) -> f64 {
        self.total_samples as f64 / self.sample_rate as f64
    }

    pub fn to_pretty_string(&self) -> String {
        format!(
            "'{}', {} Hz, {}, {}, {} ({})",
            self.codec,
            self.sample_rate,
            match self.channels {
                1 => "mono".to_string(),
                2 => "stereo".to_string(),
                n => format!("{}ch", n),
            },
            self.sample_type.as_str(),
            format_duration(self.duration_secs()),
            format_samples(self.total_samples)
        )
    }
}

fn metadata_from(reader: &hound::WavReader<std::io::BufReader<std::fs::File>>) -> AudioMetadata {
    let spec = reader.spec();
    let sample_type = SampleType::from_spec(&spec);
    let codec = match sample_type {
        SampleType::U8 => "pcm_u8",
        SampleType::I16 => "pcm_s16le",
        SampleType::I24 => "pcm_s24le",
        SampleType::I32 => "pcm_s32le",
        SampleType::F32 => "pcm_f32le",
    };

    AudioMetadata {
        codec: codec.to_string(),
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        sample_type,
        total_samples: reader.duration() as u64,
    }
}

pub fn read_metadata(path: &Path) -> hound::Result<AudioMetadata> {
    let reader = hound::WavReader::open(path)?;
    Ok(metadata_from(&reader))
}

/// Reads a WAV file and returns the first channel scaled to [-1.0, 1.0]
pub fn read_wav(path: &Path) -> hound::Result<(AudioMetadata, Vec<f32>)> {
    let mut reader = hound::WavReader::open(path)?;
    let metadata = metadata_from(&reader);
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<hound::Result<Vec<f32>>>()?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<hound::Result<Vec<f32>>>()?
        }
    };

    Ok((metadata, samples))
}
