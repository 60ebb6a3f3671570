use brine::{run_with_output, Error};

/// Run a program and return everything it printed.
pub fn run_source(source: &str) -> String {
    let mut out = Vec::new();
    run_with_output(source, &mut out).expect("program should run without error");
    String::from_utf8(out).expect("program output should be valid UTF-8")
}

/// Run a program that is expected to fail and return the error.
pub fn run_failure(source: &str) -> Error {
    let mut out = Vec::new();
    run_with_output(source, &mut out).expect_err("program should fail")
}
