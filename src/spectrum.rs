use rustfft::{num_complex::Complex, FftPlanner};

/// Smallest FFT used for peak detection
pub const MIN_FFT_SIZE: usize = 256;

/// Window function Hann
pub fn hann_window(size: usize) -> Vec<f32> {
    if size < 2 {
        return vec![1.0; size];
    }
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / (size - 1) as f32).cos()))
        .collect()
}

/// FFT size that holds `len` samples without truncation
pub fn fft_size_for(len: usize) -> usize {
    len.next_power_of_two().max(MIN_FFT_SIZE)
}

/// Frequency step between neighbouring bins
pub fn bin_width(sample_rate: u32, n_fft: usize) -> f32 {
    sample_rate as f32 / n_fft as f32
}

/// Magnitudes of the first `n_fft / 2 + 1` bins.
///
/// The first `min(len, n_fft)` samples are Hann-windowed and zero padded up to `n_fft`.
pub fn magnitude_spectrum(samples: &[f32], n_fft: usize) -> Vec<f32> {
    if n_fft == 0 {
        return Vec::new();
    }

    let frame_len = samples.len().min(n_fft);
    let window = hann_window(frame_len);

    let mut buffer = vec![Complex::new(0.0f32, 0.0); n_fft];
    for (j, (s, w)) in samples.iter().zip(&window).enumerate() {
        buffer[j].re = s * w;
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n_fft);
    fft.process(&mut buffer);

    buffer[..n_fft / 2 + 1].iter().map(|c| c.norm()).collect()
}

/// Frequency of the strongest bin, skipping DC.
/// `None` for an empty or silent signal.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32, n_fft: usize) -> Option<f32> {
    if samples.is_empty() {
        return None;
    }

    let magnitudes = magnitude_spectrum(samples, n_fft);
    let (bin, peak) = magnitudes
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, 0.0f32), |best, (k, &m)| if m > best.1 { (k, m) } else { best });

    if peak <= 0.0 {
        return None;
    }
    Some(bin as f32 * bin_width(sample_rate, n_fft))
}
