use clap::Parser;
use collision_sounds::presets::PRESETS;
use collision_sounds::synth::SAMPLE_RATE;
use collision_sounds::{audio, verify, wavgen};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

/// Generates the ball collision sound effects
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for the generated WAV files
    #[arg(short = 'o', long = "output-dir", default_value = wavgen::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Read every written file back and check format, length and pitch
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Print the sound table and exit without writing anything
    #[arg(short = 'l', long = "list", default_value_t = false)]
    list: bool,
}

fn preset_table() -> Vec<String> {
    PRESETS.iter().map(|spec| spec.describe()).collect()
}

fn main() {
    let args = Args::parse();

    if args.list {
        for row in preset_table() {
            println!("{}", row);
        }
        return;
    }

    println!("Run parameters:");
    println!("  Output directory: {}", args.output_dir.display());
    println!("  Sounds: {}, sample rate: {} Hz", PRESETS.len(), SAMPLE_RATE);
    println!("--------------------------------------------------");

    // --- Этап 1: синтез и запись ---
    println!("Stage 1: generating sounds...");
    let start_gen = Instant::now();

    let pb = ProgressBar::new(PRESETS.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let result = wavgen::generate_all(&args.output_dir, &PRESETS, SAMPLE_RATE, |processed, total| {
        pb.set_length(total as u64);
        pb.set_position(processed as u64);
    });
    pb.finish_and_clear();

    let sounds = match result {
        Ok(sounds) => sounds,
        Err(e) => {
            eprintln!("Error while generating sounds: {}", e);
            std::process::exit(1);
        }
    };
    for sound in &sounds {
        println!(
            "  -> {} ({}, {})",
            sound.path.display(),
            audio::format_samples(sound.sample_count as u64),
            audio::format_duration(sound.sample_count as f64 / SAMPLE_RATE as f64)
        );
    }
    println!("  Finished in: {:.2?}", start_gen.elapsed());

    // --- Этап 2: проверка ---
    if args.verify {
        println!("\nStage 2: verifying output...");
        let start_verify = Instant::now();
        match verify::verify_all(&args.output_dir, &PRESETS, SAMPLE_RATE) {
            Ok(checked) => println!("  {} files OK", checked.len()),
            Err(e) => {
                eprintln!("Verification failed: {}", e);
                std::process::exit(1);
            }
        }
        println!("  Finished in: {:.2?}", start_verify.elapsed());
    }

    println!("\nDone.");
}
