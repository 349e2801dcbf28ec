use std::fs;
use std::path::PathBuf;

use crate::util::*;

#[test]
fn load_inline_text() {
    let input = load_input(&InputSpec::Text("1 + 2".to_owned())).unwrap();

    assert_eq!(input.text, "1 + 2");
    assert_eq!(input.path, None);
}

#[test]
fn load_file() {
    let path = std::env::temp_dir().join(format!("llparse-util-{}.txt", std::process::id()));
    fs::write(&path, "(1 + 2) * 3").unwrap();

    let input = load_input(&InputSpec::File(path.clone())).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(input.text, "(1 + 2) * 3");
    assert_eq!(input.path, Some(path.display().to_string()));
}

#[test]
fn missing_input_message() {
    let err = load_input(&InputSpec::Missing).err().unwrap();

    insta::assert_snapshot!(err, @"no expression given (pass EXPR or --file)");
}

#[test]
fn unreadable_file() {
    let path = PathBuf::from("/nonexistent/llparse/expr.txt");
    let err = load_input(&InputSpec::File(path)).err().unwrap();

    assert!(matches!(err, InputError::Read { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read /nonexistent/llparse/expr.txt: ")
    );
}
