use std::io;

use stamp::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError {
        name: "project".to_string(),
        message: "project is required".to_string(),
    };
    assert_eq!(err.to_string(), "Validation error: project is required.");

    let err = Error::CollectionAborted("interrupted".to_string());
    assert_eq!(err.to_string(), "Parameter collection aborted: interrupted.");

    let err = Error::filesystem("out/README.md", io::Error::other("disk full"));
    assert_eq!(err.to_string(), "Filesystem error at 'out/README.md': disk full.");
}
