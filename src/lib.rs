//! Procedural collision sounds for tennis, billiard and bowling balls.
//!
//! Every sound is a damped sine `sin(2πft) · exp(-dt)` written as a
//! 16-bit mono PCM WAV file at 44100 Hz.

pub mod audio;
pub mod presets;
pub mod spectrum;
pub mod synth;
pub mod verify;
pub mod wavgen;
