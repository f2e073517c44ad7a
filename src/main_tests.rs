#[allow(unused_imports)]
use super::*;

#[test]
fn test_no_arguments_uses_defaults() {
    let args = Args::try_parse_from(["collision-sounds"]).unwrap();
    assert_eq!(args.output_dir, PathBuf::from("resources/sounds"));
    assert!(!args.verify);
    assert!(!args.list);
}

#[test]
fn test_output_dir_short_and_long() {
    let args = Args::try_parse_from(["collision-sounds", "-o", "out"]).unwrap();
    assert_eq!(args.output_dir, PathBuf::from("out"));

    let args = Args::try_parse_from(["collision-sounds", "--output-dir", "a/b"]).unwrap();
    assert_eq!(args.output_dir, PathBuf::from("a/b"));
}

#[test]
fn test_flags() {
    let args = Args::try_parse_from(["collision-sounds", "--verify", "-l"]).unwrap();
    assert!(args.verify);
    assert!(args.list);
}

#[test]
fn test_unknown_argument_rejected() {
    assert!(Args::try_parse_from(["collision-sounds", "--sample-rate", "48000"]).is_err());
    assert!(Args::try_parse_from(["collision-sounds", "extra"]).is_err());
}

#[test]
fn test_preset_table_rows() {
    let rows = preset_table();
    assert_eq!(rows.len(), 9);
    assert!(rows[0].starts_with("tennis_soft"));
    assert!(rows[8].starts_with("bowling_start"));
}

#[test]
fn test_args_command_is_valid() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
