use std::f64::consts::PI;

/// Sample rate used for every generated sound
pub const SAMPLE_RATE: u32 = 44100;

/// Scale from the analog range [-1.0, 1.0] to 16-bit PCM
pub const PCM_SCALE: f64 = 32767.0;

/// Parameters of one damped sine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    pub duration_s: f64,
    pub frequency_hz: f64,
    pub decay_rate: f64,
    pub sample_rate: u32,
}

impl SynthParams {
    /// Number of samples covering `duration_s` at `sample_rate`
    pub fn sample_count(&self) -> usize {
        let n = (self.duration_s * self.sample_rate as f64).round();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    /// Rejects parameters that would give a degenerate buffer.
    /// Frequencies above Nyquist are allowed, they simply alias.
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".to_string());
        }
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(format!("duration must be positive, got {}", self.duration_s));
        }
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(format!("frequency must be positive, got {}", self.frequency_hz));
        }
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(format!("decay rate must not be negative, got {}", self.decay_rate));
        }
        Ok(())
    }
}

/// Synthesized 16-bit PCM audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveformBuffer {
    pub sample_rate: u32,
    pub samples: Vec<i16>,
}

impl WaveformBuffer {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Size of the PCM payload in bytes
    pub fn data_bytes(&self) -> usize {
        self.samples.len() * std::mem::size_of::<i16>()
    }
}

/// `n` evenly spaced points from 0 to `duration`, both ends included.
///
/// The step is computed once and the last point is pinned to `duration`,
/// so the result matches the usual linspace construction bit for bit.
pub fn time_points(n: usize, duration: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = duration / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
            points[n - 1] = duration;
            points
        }
    }
}

/// Amplitude envelope `exp(-decay * t)`
pub fn envelope(t: f64, decay_rate: f64) -> f64 {
    (-decay_rate * t).exp()
}

/// Value of the damped oscillator at time `t`, in [-1.0, 1.0]
pub fn damped_sine(t: f64, frequency_hz: f64, decay_rate: f64) -> f64 {
    (2.0 * PI * frequency_hz * t).sin() * envelope(t, decay_rate)
}

/// Scales to 16 bit and truncates toward zero
pub fn quantize(value: f64) -> i16 {
    (value * PCM_SCALE) as i16
}

/// Generates the damped sine described by `params`
pub fn synthesize(params: &SynthParams) -> WaveformBuffer {
    let n = params.sample_count();
    let samples = time_points(n, params.duration_s)
        .into_iter()
        .map(|t| quantize(damped_sine(t, params.frequency_hz, params.decay_rate)))
        .collect();

    WaveformBuffer {
        sample_rate: params.sample_rate,
        samples,
    }
}
