use std::error::Error;
use std::io;

use error_stamp::{Annotation, Cause, Container, Severity};

#[test]
fn new_container_is_bare() {
    let err = Container::new(Severity::WARN, "slow response");

    assert_eq!(err.severity(), Severity::WARN);
    assert_eq!(err.message(), "slow response");
    assert_eq!(err.description(), "");
    assert!(err.annotations().is_empty());
    assert!(err.cause().is_none());
    assert!(!err.is_stamped());
    assert!(err.timestamp().is_none());
    assert!(err.frames().is_none());
}

#[test]
fn bare_container_displays_its_message() {
    assert_eq!(Container::new(Severity::ERROR, "plain").to_string(), "plain");
}

#[test]
fn annotations_keep_declaration_order() {
    let err = Container::new(Severity::INFO, "cache warmed")
        .annotate(Annotation::uint("entries", 12u32))
        .with_annotations([Annotation::boolean("cold", false), Annotation::quoted("region", "eu")]);

    let keys: Vec<_> = err.annotations().iter().map(Annotation::key).collect();
    assert_eq!(keys, ["entries", "cold", "region"]);
}

#[test]
fn display_concatenates_message_annotations_and_cause() {
    let err = Container::new(Severity::ERROR, "write failed")
        .annotate(Annotation::quoted("file", "a.txt"))
        .annotate(Annotation::int("fd", 3i32))
        .caused_by(io::Error::other("quota exceeded"));

    assert_eq!(err.to_string(), "write failed(file: 'a.txt', fd: 3)quota exceeded");
}

#[test]
fn display_includes_nested_container_text() {
    let inner = Container::new(Severity::ERROR, "parse").caused_by(io::Error::other("eof"));
    let outer = Container::new(Severity::WARN, "load config: ").caused_by(inner);

    assert_eq!(outer.to_string(), "load config: parseeof");
}

#[test]
fn caused_by_container_becomes_a_link() {
    let inner = Container::new(Severity::ERROR, "inner");
    let outer = Container::new(Severity::WARN, "outer").caused_by(inner);

    assert!(matches!(outer.cause(), Some(Cause::Container(link)) if link.message() == "inner"));
}

#[test]
fn source_skips_container_links() {
    let inner = Container::new(Severity::ERROR, "inner").caused_by(io::Error::other("root"));
    let outer = Container::new(Severity::WARN, "outer").caused_by(inner);

    let source = outer.source().expect("native cause");
    assert_eq!(source.to_string(), "root");
    assert!(source.downcast_ref::<Container>().is_none());
}

#[test]
fn container_without_native_cause_has_no_source() {
    let outer = Container::new(Severity::WARN, "outer")
        .caused_by(Container::new(Severity::ERROR, "inner"));
    assert!(outer.source().is_none());
}

#[test]
fn description_is_kept_verbatim() {
    let err = Container::new(Severity::FIXED, "retried")
        .with_description("second attempt succeeded\n");
    assert_eq!(err.description(), "second attempt succeeded\n");
}

#[test]
fn container_can_be_boxed_as_dyn_error() {
    fn fails() -> Result<(), Box<dyn Error + Send + Sync>> {
        Err(Box::new(Container::new(Severity::ERROR, "boxed")))
    }

    let err = fails().unwrap_err();
    assert_eq!(err.to_string(), "boxed");
    assert!(err.downcast_ref::<Container>().is_some());
}
