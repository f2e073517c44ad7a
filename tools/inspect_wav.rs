// collision-sounds/tools/inspect_wav.rs

use clap::Parser;
use collision_sounds::{audio, spectrum};
use std::error::Error;
use std::path::PathBuf;

/// Prints format details and the dominant frequency of WAV files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FFT size for peak detection (default - next power of two above the file length)
    #[arg(short = 'f', long = "fft-size")]
    fft_size: Option<usize>,

    /// WAV files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    for path in &args.files {
        let (metadata, samples) = audio::read_wav(path)?;
        println!("{}: {}", path.display(), metadata.to_pretty_string());

        let n_fft = args.fft_size.unwrap_or_else(|| spectrum::fft_size_for(samples.len()));
        match spectrum::dominant_frequency(&samples, metadata.sample_rate, n_fft) {
            Some(freq) => println!(
                "  peak: {:.1} Hz (FFT {}, bin {:.2} Hz)",
                freq,
                n_fft,
                spectrum::bin_width(metadata.sample_rate, n_fft)
            ),
            None => println!("  peak: none (silent)"),
        }
    }

    Ok(())
}
