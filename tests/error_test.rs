use std::io;

use msgforge::error::ForgeError;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forge_err: ForgeError = io_err.into();

    match forge_err {
        ForgeError::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = ForgeError::TemplateError("template file does not exist: x.xml".to_string());
    assert_eq!(err.to_string(), "Template error: template file does not exist: x.xml.");
}
