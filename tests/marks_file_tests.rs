//! End-to-end flow: load a TOML batch from disk, capture it into a
//! registry, switch modes, and query averages.

use std::io::Write;

use marks_registry::utils::validation::Validate;
use marks_registry::{MarksFile, MarksRegistry};
use tempfile::NamedTempFile;

#[test]
fn batch_file_feeds_the_registry() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let toml_content = r#"
[batch]
name = "midterm"

[[marks]]
student_id = "225041308"
subject_id = "IENT301"
score = 52.0

[[marks]]
student_id = "224295592"
subject_id = "IRUD301"
score = 75.0

[[marks]]
student_id = "225041308"
subject_id = "IRUD301"
score = 68.0
"#;

    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let file = MarksFile::from_file(temp_file.path()).unwrap();
    file.validate().unwrap();

    let registry = MarksRegistry::new();
    for mark in file.into_marks() {
        registry.capture(mark);
    }
    registry.set_mode(true);

    assert_eq!(registry.average_for("224295592"), 75.0);
    assert_eq!(registry.average_for("225041308"), 60.0);
}

#[test]
fn missing_batch_file_is_an_io_error() {
    let result = MarksFile::from_file("./does-not-exist/marks.toml");

    assert!(matches!(
        result,
        Err(marks_registry::MarksError::IoError(_))
    ));
}

#[test]
fn invalid_batch_never_reaches_the_registry() {
    let toml_content = r#"
[[marks]]
student_id = "   "
subject_id = "IENT301"
score = 52.0
"#;

    let file = MarksFile::from_toml_str(toml_content).unwrap();
    assert!(file.validate().is_err());
}
