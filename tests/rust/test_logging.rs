use super::*;

#[test]
fn test_verbosity_levels() {
    assert_eq!(Verbosity::Quiet.to_level(), Level::ERROR);
    assert_eq!(Verbosity::Normal.to_level(), Level::INFO);
    assert_eq!(Verbosity::Verbose.to_level(), Level::DEBUG);
    assert_eq!(Verbosity::Trace.to_level(), Level::TRACE);
}

#[test]
fn test_verbosity_from_flags() {
    assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
    assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
    assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Trace);
}

#[test]
fn test_default_filter_targets_crate() {
    assert_eq!(Verbosity::Verbose.default_filter(), "launchdeck=DEBUG");
}

#[test]
fn test_init_logging_twice_is_harmless() {
    init_test_logging();
    assert!(init_logging(Verbosity::Normal, None).is_ok());
    assert!(init_logging(Verbosity::Trace, None).is_ok());
}

#[test]
fn test_init_logging_unwritable_file_errors() {
    let result = init_logging(
        Verbosity::Normal,
        Some(Path::new("/nonexistent-dir/launchdeck.log")),
    );
    assert!(result.is_err());
}
