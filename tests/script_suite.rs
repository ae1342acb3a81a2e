use std::{fs, path::Path};

use lox::Session;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// What a script says it should do, read from its trailing comments.
#[derive(Debug, Default, PartialEq)]
struct Expectations {
    output:        Vec<String>,
    syntax_errors: Vec<String>,
    runtime_error: Option<String>,
}

const EXPECT_OUTPUT: &str = "// expect: ";
const EXPECT_SYNTAX_ERROR: &str = "// expect error: ";
const EXPECT_RUNTIME_ERROR: &str = "// expect runtime error: ";

#[test]
fn scripts_behave_as_annotated() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut count = 0;

    for entry in WalkDir::new(&root).sort_by_file_name()
                                    .into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        assert_eq!(run(&source), expectations(&source), "script {path:?} misbehaved");
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

fn expectations(source: &str) -> Expectations {
    let mut expected = Expectations::default();

    for line in source.lines() {
        if let Some(index) = line.find(EXPECT_RUNTIME_ERROR) {
            expected.runtime_error = Some(line[index + EXPECT_RUNTIME_ERROR.len()..].to_string());
        } else if let Some(index) = line.find(EXPECT_SYNTAX_ERROR) {
            expected.syntax_errors
                    .push(line[index + EXPECT_SYNTAX_ERROR.len()..].to_string());
        } else if let Some(index) = line.find(EXPECT_OUTPUT) {
            expected.output.push(line[index + EXPECT_OUTPUT.len()..].to_string());
        }
    }

    expected
}

fn run(source: &str) -> Expectations {
    let mut session = Session::new(Vec::new());
    let diagnostics = session.run(source);

    let syntax_errors = diagnostics.syntax_errors().iter().map(ToString::to_string).collect();
    let runtime_error = diagnostics.runtime_error().map(ToString::to_string);
    let output = String::from_utf8(session.into_output()).unwrap();

    Expectations { output: output.lines().map(str::to_string).collect(),
                   syntax_errors,
                   runtime_error }
}
