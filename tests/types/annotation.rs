use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use error_stamp::types::Fragments;
use error_stamp::{Annotation, Render};

#[test]
fn quoted_values_are_wrapped_in_single_quotes() {
    let annotation = Annotation::quoted("path", "/var/log");
    assert_eq!(annotation.key(), "path");
    assert_eq!(annotation.value(), "'/var/log'");
    assert_eq!(annotation.to_string(), "path: '/var/log'");
}

#[test]
fn integers_render_in_decimal() {
    assert_eq!(Annotation::int("delta", -5i32).value(), "-5");
    assert_eq!(Annotation::int("offset", isize::MIN).value(), isize::MIN.to_string());
    assert_eq!(Annotation::uint("mask", 255u8).value(), "255 (0xff)");
    assert_eq!(Annotation::uint("zero", 0usize).value(), "0 (0x0)");
}

#[test]
fn booleans_and_type_names() {
    assert_eq!(Annotation::boolean("retried", false).value(), "false");
    assert_eq!(Annotation::type_of("kind", &7u32).value(), "u32");
}

#[test]
fn lazy_value_is_produced_only_when_rendered() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let annotation = Annotation::lazy("expensive", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        "computed".to_string()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(annotation.value(), "computed");
    assert_eq!(annotation.value(), "computed");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

struct Range(u32, u32);

impl Render for Range {
    fn render(&self, dest: &mut Fragments) {
        dest.push(Cow::Owned(self.0.to_string()));
        dest.push(Cow::Borrowed(".."));
        dest.push(Cow::Owned(self.1.to_string()));
    }
}

#[test]
fn custom_renderers_may_emit_several_fragments() {
    let annotation = Annotation::new("span", Range(3, 9));
    assert_eq!(annotation.fragments().len(), 3);
    assert_eq!(annotation.to_string(), "span: 3..9");
}

#[test]
fn clones_share_the_renderer() {
    let annotation = Annotation::quoted("user", "alice");
    let cloned = annotation.clone();
    assert_eq!(cloned.to_string(), annotation.to_string());
}
