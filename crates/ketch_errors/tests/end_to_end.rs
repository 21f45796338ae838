//! End-to-end scenarios: errors built the way the runner builds them, then
//! reported together.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ketch_callsite::{Callsite, CallsiteRegistry, RawCallsite, SourceCallsite, StackFrame};
use ketch_errors::{
    is_general_error, template_args, ApiContext, ApiError, ColorMode, CompositeError, ErrorCode,
    ErrorsConfig, Failure, GeneralError, PluginFailure, ReportedError,
};
use pretty_assertions::assert_eq;

const LOGIN_TEST: &str = concat!(
    "import { ClientFunction } from 'ketch';\n",
    "\n",
    "fixture `Login`;\n",
    "\n",
    "test('submit', async t => {\n",
    "    const read = ClientFunction(42);\n",
    "    await t.click('#submit');\n",
    "});\n",
);

fn recorded_calls() -> CallsiteRegistry {
    let mut registry = CallsiteRegistry::new();
    registry.record(
        SourceCallsite::new("ClientFunction", "tests/login.js", 6, 18)
            .with_source(LOGIN_TEST)
            .with_frame(StackFrame::new(Some("ClientFunction"), "ketch:api/client-function.js", 12, 5))
            .with_frame(StackFrame::new(None, "tests/login.js", 6, 18))
            .into(),
    );
    registry
}

#[test]
fn timeout_has_fixed_code_and_no_placeholders() {
    let err = GeneralError::timeout();

    assert_eq!(err.code(), ErrorCode::E1006);
    assert!(!err.message().contains('{'));
    assert!(!err.message().contains('}'));
}

#[test]
fn browser_connection_renders_both_arguments() {
    let err = GeneralError::browser_connection(template_args!["host", 1234]);

    assert!(err.message().contains("host"));
    assert!(err.message().contains("1234"));
    assert_eq!(err.data(), template_args!["host", "1234"].as_slice());
}

#[test]
fn composite_of_timeout_and_connection_errors() {
    let timeout = GeneralError::timeout();
    let connection = GeneralError::browser_connection(template_args!["host", 1234]);

    let composite = CompositeError::new(&[timeout.clone(), connection.clone()]).unwrap();

    assert_eq!(
        composite.message(),
        format!("{}\n\n{}", timeout.message(), connection.message())
    );
    assert_eq!(
        composite.stack(),
        format!("{}\n\n{}", timeout.stack(), connection.stack())
    );
    assert_eq!(composite.code(), ErrorCode::COMPOSITE);
}

#[test]
fn client_function_error_points_at_the_call() {
    let registry = recorded_calls();
    let config = ErrorsConfig::default();

    let err = ApiError::client_function(
        ApiContext::new(&registry, &config),
        "ClientFunction",
        "ClientFunction",
        ErrorCode::E2001,
        template_args!["number"],
    );

    let expected = "Cannot prepare tests due to the following error:\n\n\
                    ClientFunction code is expected to be specified as a function, but number was passed.\n\n\
                    \x20  4 |\n\
                    \x20  5 | test('submit', async t => {\n\
                    \x20> 6 |     const read = ClientFunction(42);\n\
                    \x20  7 |     await t.click('#submit');\n\
                    \x20  8 | });\n\
                    \n\
                    \x20  at tests/login.js:6:18";
    assert_eq!(err.stack(), expected);
    assert!(!is_general_error(&err));
}

#[test]
fn raw_test_compiler_rewrites_callsite() {
    let registry = recorded_calls();
    let config = ErrorsConfig::default().with_color(ColorMode::Always);

    let mut err = ApiError::client_function(
        ApiContext::new(&registry, &config),
        "ClientFunction",
        "ClientFunction",
        ErrorCode::E2001,
        template_args!["number"],
    );
    assert!(err.stack_for_terminal(false).contains('\x1b'));

    // The raw-format compiler maps the failure back to its recorded command.
    let raw: Callsite = RawCallsite::new(
        "ClientFunction",
        vec![
            "navigateTo http://localhost/login".to_string(),
            "ClientFunction 42".to_string(),
        ],
        1,
    )
    .into();
    err.set_callsite(Some(raw));

    assert!(err.stack().ends_with(" > 2 | ClientFunction 42"));
    assert!(!err.stack_for_terminal(false).contains('\x1b'));
}

#[test]
fn request_hook_failure_in_respond() {
    let registry = CallsiteRegistry::new();
    let config = ErrorsConfig::default();

    let err = ApiError::request_runtime(
        ApiContext::new(&registry, &config),
        "respond",
        ErrorCode::REQUEST_HOOK_FAILED,
        template_args!["respond", "Error in the \"respond\" method"],
    );

    assert_eq!(err.callsite(), None);
    assert_eq!(err.stack(), err.message());
    assert!(err.message().ends_with("Error in the \"respond\" method"));
}

#[test]
fn reporter_failure_wraps_a_prior_report() {
    let prior = ReportedError::from(GeneralError::timeout());
    let failure = Failure::from(&prior);

    let err = GeneralError::reporter_plugin(PluginFailure {
        name: "json",
        method: "reportTestDone",
        failure: &failure,
    });

    assert!(is_general_error(&err));
    assert!(err
        .message()
        .ends_with("Error details:\nTimeout expired for a time limited promise"));
}

#[test]
fn mixed_report_keeps_input_order() {
    let registry = recorded_calls();
    let config = ErrorsConfig::default();

    let api = ApiError::client_function(
        ApiContext::new(&registry, &config),
        "ClientFunction",
        "ClientFunction",
        ErrorCode::E2001,
        template_args!["number"],
    );
    let compilation = GeneralError::test_compilation(&Failure::new("SyntaxError: oops", None));

    let errors: Vec<ReportedError> = vec![api.clone().into(), compilation.clone().into()];
    let composite = ReportedError::from(CompositeError::new(&errors).unwrap());

    assert_eq!(
        composite.stack(),
        format!("{}\n\n{}", api.stack(), compilation.stack())
    );
    assert!(!composite.is_general_error());
}

#[test]
fn error_codes_parse_at_the_boundary() {
    assert_eq!("E1008".parse::<ErrorCode>(), Ok(ErrorCode::BROWSER_CONNECTION));
    assert!("E0000".parse::<ErrorCode>().is_err());
}
