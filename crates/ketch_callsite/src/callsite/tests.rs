use super::*;

#[test]
fn test_frame_is_internal() {
    assert!(StackFrame::new(None, "ketch:runtime/driver.js", 1, 1).is_internal());
    assert!(StackFrame::new(None, "node:internal/process/task_queues", 95, 5).is_internal());
    assert!(StackFrame::new(Some("wrap"), "/app/node_modules/lib/index.js", 3, 7).is_internal());
    assert!(!StackFrame::new(Some("login"), "tests/login.js", 13, 10).is_internal());
}

#[test]
fn test_frame_display() {
    let named = StackFrame::new(Some("login"), "tests/login.js", 13, 10);
    let anonymous = StackFrame::new(None, "tests/login.js", 2, 1);

    assert_eq!(named.to_string(), "login (tests/login.js:13:10)");
    assert_eq!(anonymous.to_string(), "tests/login.js:2:1");
}

#[test]
fn test_callsite_method_and_location() {
    let source: Callsite = SourceCallsite::new("click", "tests/login.js", 13, 10).into();
    let raw: Callsite = RawCallsite::new("typeText", vec!["click #a".into()], 0).into();

    assert_eq!(source.method(), "click");
    assert_eq!(source.location().as_deref(), Some("tests/login.js:13:10"));
    assert!(!source.is_raw());

    assert_eq!(raw.method(), "typeText");
    assert_eq!(raw.location(), None);
    assert!(raw.is_raw());
}

#[test]
fn test_callsite_ref_conversions() {
    assert_eq!(
        CallsiteRef::from("click"),
        CallsiteRef::ByMethod("click".to_string())
    );

    let site = SourceCallsite::new("click", "a.js", 1, 1);
    assert_eq!(
        CallsiteRef::from(site.clone()),
        CallsiteRef::Resolved(Callsite::Source(site))
    );
}

#[test]
fn test_source_callsite_builder() {
    let site = SourceCallsite::new("click", "a.js", 2, 3)
        .with_source("line one\nline two")
        .with_frame(StackFrame::new(Some("run"), "a.js", 2, 3));

    assert_eq!(site.source.as_deref(), Some("line one\nline two"));
    assert_eq!(site.frames.len(), 1);
}
