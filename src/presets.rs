use crate::synth::SynthParams;
use std::fmt;

/// Ball material
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Category {
    Tennis,
    Billiard,
    Bowling,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Tennis, Category::Billiard, Category::Bowling];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tennis => "tennis",
            Category::Billiard => "billiard",
            Category::Bowling => "bowling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of collision event
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variant {
    Soft,
    Hard,
    Start,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Soft, Variant::Hard, Variant::Start];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Soft => "soft",
            Variant::Hard => "hard",
            Variant::Start => "start",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the sound table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundSpec {
    pub category: Category,
    pub variant: Variant,
    pub duration_s: f64,
    pub frequency_hz: f64,
    pub decay_rate: f64,
}

impl SoundSpec {
    pub const fn new(
        category: Category,
        variant: Variant,
        duration_s: f64,
        frequency_hz: f64,
        decay_rate: f64,
    ) -> Self {
        Self { category, variant, duration_s, frequency_hz, decay_rate }
    }

    /// `tennis_soft`, `bowling_start`, ...
    pub fn name(&self) -> String {
        format!("{}_{}", self.category, self.variant)
    }

    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name())
    }

    pub fn synth_params(&self, sample_rate: u32) -> SynthParams {
        SynthParams {
            duration_s: self.duration_s,
            frequency_hz: self.frequency_hz,
            decay_rate: self.decay_rate,
            sample_rate,
        }
    }

    /// One row of the `--list` table
    pub fn describe(&self) -> String {
        format!(
            "{:<16} {:>5.2}s {:>6.0} Hz  decay {:>3.0}",
            self.name(),
            self.duration_s,
            self.frequency_hz,
            self.decay_rate
        )
    }
}

/// All sounds the generator writes, in generation order
pub static PRESETS: [SoundSpec; 9] = [
    SoundSpec::new(Category::Tennis, Variant::Soft, 0.10, 1000.0, 40.0),
    SoundSpec::new(Category::Tennis, Variant::Hard, 0.15, 1200.0, 30.0),
    SoundSpec::new(Category::Tennis, Variant::Start, 0.05, 800.0, 50.0),
    SoundSpec::new(Category::Billiard, Variant::Soft, 0.10, 2000.0, 60.0),
    SoundSpec::new(Category::Billiard, Variant::Hard, 0.15, 2500.0, 50.0),
    SoundSpec::new(Category::Billiard, Variant::Start, 0.05, 1800.0, 70.0),
    SoundSpec::new(Category::Bowling, Variant::Soft, 0.20, 300.0, 20.0),
    SoundSpec::new(Category::Bowling, Variant::Hard, 0.30, 400.0, 15.0),
    SoundSpec::new(Category::Bowling, Variant::Start, 0.10, 200.0, 25.0),
];

pub fn find_preset(category: Category, variant: Variant) -> Option<&'static SoundSpec> {
    PRESETS
        .iter()
        .find(|s| s.category == category && s.variant == variant)
}
