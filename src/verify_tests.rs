#[allow(unused_imports)]
use super::*;
use crate::presets::{find_preset, Category, Variant, PRESETS};
use crate::synth::{SynthParams, SAMPLE_RATE, synthesize};
use crate::wavgen::{generate_all, write_waveform};

#[test]
fn test_verify_all_generated() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path(), &PRESETS, SAMPLE_RATE, |_, _| {}).unwrap();

    let checked = verify_all(dir.path(), &PRESETS, SAMPLE_RATE).unwrap();
    assert_eq!(checked.len(), 9);
    assert!(checked.iter().all(|m| m.sample_rate == 44100 && m.channels == 1));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = verify_all(dir.path(), &PRESETS, SAMPLE_RATE).unwrap_err();
    match err {
        VerifyError::Read { path, .. } => assert!(path.ends_with("tennis_soft.wav")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_wrong_length() {
    let dir = tempfile::tempdir().unwrap();
    let spec = find_preset(Category::Tennis, Variant::Hard).unwrap();
    // Synthesized with the duration of tennis_soft
    let buffer = synthesize(&SynthParams {
        duration_s: 0.1,
        ..spec.synth_params(SAMPLE_RATE)
    });
    let path = dir.path().join(spec.file_name());
    write_waveform(&path, &buffer).unwrap();

    let err = verify_sound(&path, spec, SAMPLE_RATE).unwrap_err();
    match err {
        VerifyError::Length { expected, actual, .. } => {
            assert_eq!(expected, 6615);
            assert_eq!(actual, 4410);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_wrong_sample_rate() {
    let dir = tempfile::tempdir().unwrap();
    let spec = find_preset(Category::Bowling, Variant::Soft).unwrap();
    let buffer = synthesize(&spec.synth_params(22050));
    let path = dir.path().join(spec.file_name());
    write_waveform(&path, &buffer).unwrap();

    let err = verify_sound(&path, spec, SAMPLE_RATE).unwrap_err();
    assert!(matches!(err, VerifyError::Format { .. }), "unexpected {err:?}");
    assert!(err.to_string().contains("22050"));
}

#[test]
fn test_wrong_frequency() {
    let dir = tempfile::tempdir().unwrap();
    let spec = find_preset(Category::Billiard, Variant::Soft).unwrap();
    let buffer = synthesize(&SynthParams {
        frequency_hz: 1000.0,
        ..spec.synth_params(SAMPLE_RATE)
    });
    let path = dir.path().join(spec.file_name());
    write_waveform(&path, &buffer).unwrap();

    let err = verify_sound(&path, spec, SAMPLE_RATE).unwrap_err();
    match err {
        VerifyError::Frequency { expected, measured, .. } => {
            assert_eq!(expected, 2000.0);
            assert!((measured - 1000.0).abs() < 20.0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_stereo_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let spec = find_preset(Category::Tennis, Variant::Start).unwrap();
    let path = dir.path().join(spec.file_name());
    let wav = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, wav).unwrap();
    for _ in 0..10 {
        writer.write_sample(0i16).unwrap();
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();

    let err = verify_sound(&path, spec, SAMPLE_RATE).unwrap_err();
    assert!(err.to_string().contains("mono"));
}
