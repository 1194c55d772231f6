use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

use error_stamp::types::NativeError;
use error_stamp::{Annotation, Cause, Container, Severity};

#[derive(Debug, PartialEq)]
struct NotFound(&'static str);

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found", self.0)
    }
}

impl Error for NotFound {}

/// Native error that wraps a container further down.
#[derive(Debug)]
struct Transport(Container);

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("transport failed")
    }
}

impl Error for Transport {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

fn three_links() -> Container {
    let c = Container::new(Severity::ERROR, "C").caused_by(io::Error::other("root"));
    let b = Container::new(Severity::WARN, "B").caused_by(c);
    Container::new(Severity::INFO, "A").caused_by(b)
}

#[test]
fn walk_visits_innermost_first() {
    let mut seen = Vec::new();
    three_links().walk(|link, wrapped| {
        seen.push((link.message().to_string(), wrapped.map(|err| err.to_string())));
    });

    assert_eq!(
        seen,
        [
            ("C".to_string(), Some("root".to_string())),
            ("B".to_string(), None),
            ("A".to_string(), None),
        ]
    );
}

#[test]
fn walk_on_single_link_visits_once() {
    let mut count = 0;
    Container::new(Severity::DEBUG, "alone").walk(|_, wrapped| {
        assert!(wrapped.is_none());
        count += 1;
    });
    assert_eq!(count, 1);
}

#[test]
fn links_are_outermost_first() {
    let chain = three_links();
    let messages: Vec<_> = chain.links().map(Container::message).collect();
    assert_eq!(messages, ["A", "B", "C"]);
    assert_eq!(chain.depth(), 3);
}

#[test]
fn unwrap_cause_returns_innermost_native() {
    let chain = three_links();
    assert_eq!(chain.unwrap_cause().map(ToString::to_string).as_deref(), Some("root"));

    let no_native =
        Container::new(Severity::WARN, "B").caused_by(Container::new(Severity::ERROR, "C"));
    assert!(no_native.unwrap_cause().is_none());
    assert!(Container::new(Severity::ERROR, "bare").unwrap_cause().is_none());
}

#[test]
fn is_matches_container_links_by_message() {
    let chain = three_links();
    assert!(chain.is(&Container::new(Severity::FATAL, "B")));
    assert!(chain.is(&Container::new(Severity::DEBUG, "A")));
    assert!(!chain.is(&Container::new(Severity::ERROR, "root")));

    let annotated =
        Container::new(Severity::ERROR, "C").annotate(Annotation::boolean("extra", true));
    assert!(chain.is(&annotated));
}

#[test]
fn is_matches_native_errors_by_identity() {
    let root: NativeError = Arc::new(NotFound("user"));
    let chain = Container::new(Severity::WARN, "outer")
        .caused_by(Container::new(Severity::ERROR, "lookup").caused_by_shared(Arc::clone(&root)));

    assert!(chain.is(&*root));
    assert!(!chain.is(&NotFound("user")));
    assert!(chain.is_value(&NotFound("user")));
    assert!(!chain.is_value(&NotFound("group")));
}

#[test]
fn is_without_native_cause_is_false() {
    let chain = Container::new(Severity::ERROR, "alone");
    assert!(!chain.is(&io::Error::other("anything")));
}

#[test]
fn find_cause_downcasts_through_the_chain() {
    let chain = Container::new(Severity::WARN, "outer")
        .caused_by(Container::new(Severity::ERROR, "inner").caused_by(NotFound("key")));

    assert_eq!(chain.find_cause::<NotFound>(), Some(&NotFound("key")));
    assert!(chain.find_cause::<io::Error>().is_none());
}

#[test]
fn containers_behind_native_errors_are_followed() {
    let buried = Container::new(Severity::ERROR, "handshake").caused_by(NotFound("certificate"));
    let chain = Container::new(Severity::WARN, "request").caused_by(Transport(buried));

    let messages: Vec<_> = chain.links().map(Container::message).collect();
    assert_eq!(messages, ["request", "handshake"]);
    assert!(chain.is(&Container::new(Severity::ERROR, "handshake")));

    let mut order = Vec::new();
    chain.walk(|link, wrapped| order.push((link.message().to_string(), wrapped.is_some())));
    assert_eq!(order, [("handshake".to_string(), true), ("request".to_string(), true)]);
}

#[test]
fn boxed_and_shared_containers_become_links() {
    let boxed = Container::new(Severity::WARN, "outer")
        .caused_by(Box::new(Container::new(Severity::ERROR, "boxed").caused_by(NotFound("row"))));
    assert_eq!(boxed.depth(), 2);
    assert!(matches!(boxed.cause(), Some(Cause::Container(_))));
    assert!(boxed.is(&Container::new(Severity::ERROR, "boxed")));
    assert_eq!(boxed.find_cause::<NotFound>(), Some(&NotFound("row")));

    let shared = Container::new(Severity::WARN, "outer")
        .caused_by(Arc::new(Container::new(Severity::ERROR, "shared")));
    assert_eq!(shared.depth(), 2);
    assert!(shared.is(&Container::new(Severity::ERROR, "shared")));

    let mut order = Vec::new();
    shared.walk(|link, _| order.push(link.message().to_string()));
    assert_eq!(order, ["shared", "outer"]);
}
