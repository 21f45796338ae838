use super::*;
use crate::template_args;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Inner;

impl fmt::Display for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("socket closed")
    }
}

impl Error for Inner {}

#[derive(Debug)]
struct Outer(Inner);

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("write failed")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[derive(Debug)]
#[expect(dead_code, reason = "Fields are read through the Debug impl")]
struct RaisedObject {
    reason: &'static str,
    attempt: u32,
}

#[test]
fn test_new_renders_template_and_keeps_data() {
    let err = GeneralError::new(ErrorCode::E1003, template_args!["tests/**/*.js"]);

    assert_eq!(err.kind(), GeneralKind::General);
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.data(), template_args!["tests/**/*.js"].as_slice());
    assert_eq!(
        err.message(),
        "Could not find test files at the following location: \"tests/**/*.js\"."
    );
    assert_eq!(err.stack(), err.message());
    assert_eq!(err.to_string(), err.message());
}

#[test]
fn test_construction_is_deterministic() {
    let first = GeneralError::new(ErrorCode::E1001, template_args!["chrome"]);
    let second = GeneralError::new(ErrorCode::E1001, template_args!["chrome"]);
    assert_eq!(first, second);
}

#[test]
fn test_timeout() {
    let err = GeneralError::timeout();

    assert_eq!(err.kind(), GeneralKind::Timeout);
    assert_eq!(err.code(), ErrorCode::TIMEOUT_EXPIRED);
    assert!(err.data().is_empty());
    assert_eq!(err.message(), "Timeout expired for a time limited promise");
}

#[test]
fn test_browser_connection_forwards_args() {
    let err = GeneralError::browser_connection(template_args!["host", 1234]);

    assert_eq!(err.kind(), GeneralKind::BrowserConnection);
    assert_eq!(err.code(), ErrorCode::BROWSER_CONNECTION);
    assert_eq!(err.data().len(), 2);
    assert_eq!(
        err.message(),
        "Cannot establish a connection to the browser at host:1234."
    );
}

#[test]
fn test_compilation_uses_original_stack() {
    let original = Failure::new(
        "SyntaxError: Unexpected token",
        Some("SyntaxError: Unexpected token\n    at tests/a.js:3:1".to_string()),
    );
    let err = GeneralError::test_compilation(&original);

    assert_eq!(err.kind(), GeneralKind::TestCompilation);
    assert_eq!(err.code(), ErrorCode::CANNOT_PREPARE_TESTS);
    assert_eq!(err.data(), [TemplateArg::from("SyntaxError: Unexpected token")].as_slice());
    assert_eq!(
        err.message(),
        "Cannot prepare tests due to the following error:\n\nSyntaxError: Unexpected token"
    );
    assert_eq!(
        err.stack(),
        "Cannot prepare tests due to the following error:\n\n\
         SyntaxError: Unexpected token\n    at tests/a.js:3:1"
    );
}

#[test]
fn test_compilation_without_stack_falls_back_to_display() {
    let err = GeneralError::test_compilation(&Failure::new("boom", None));
    assert_eq!(err.stack(), err.message());
}

#[test]
fn test_reporter_plugin_with_stack_uses_it_verbatim() {
    let failure = Failure::from_error(&Outer(Inner));
    let err = GeneralError::reporter_plugin(PluginFailure {
        name: "json",
        method: "reportTaskDone",
        failure: &failure,
    });

    assert_eq!(err.kind(), GeneralKind::ReporterPlugin);
    assert_eq!(err.code(), ErrorCode::UNCAUGHT_ERROR_IN_REPORTER);
    assert_eq!(err.data()[0].value(), "reportTaskDone");
    assert_eq!(err.data()[1].value(), "json");
    assert_eq!(err.data()[2].value(), "write failed\n    caused by: socket closed");
    assert_eq!(
        err.message(),
        "The \"reportTaskDone\" method of the \"json\" reporter produced an uncaught error. \
         Error details:\nwrite failed\n    caused by: socket closed"
    );
}

#[test]
fn test_reporter_plugin_without_stack_inspects_value() {
    let failure = Failure::from_value(&RaisedObject {
        reason: "bad state",
        attempt: 2,
    });
    let err = GeneralError::reporter_plugin(PluginFailure {
        name: "list",
        method: "reportTestDone",
        failure: &failure,
    });

    assert!(err.message().contains(NO_STACK_TRACE_MESSAGE));
    assert!(err.message().contains("Raised error object inspection:"));
    assert!(err.message().contains("reason: \"bad state\""));
    assert!(err.message().contains("attempt: 2"));
}

#[test]
fn test_reporter_plugin_empty_stack_counts_as_missing() {
    let failure = Failure::new("oops", Some(String::new())).with_inspection("Object { code: 7 }");
    let err = GeneralError::reporter_plugin(PluginFailure {
        name: "list",
        method: "init",
        failure: &failure,
    });

    assert_eq!(
        err.data()[2].value(),
        "No stack trace is available for a raised error.\n\
         Raised error object inspection:\nObject { code: 7 }"
    );
}

#[test]
fn test_failure_accessors() {
    let failure = Failure::new("boom", None);
    assert_eq!(failure.display(), "boom");
    assert_eq!(failure.stack(), None);
    assert_eq!(failure.inspection(), "\"boom\"");
    assert_eq!(failure.to_string(), "boom");

    let from_value = Failure::from_value(&42);
    assert_eq!(from_value.display(), "42");
    assert_eq!(from_value.stack(), None);
}
