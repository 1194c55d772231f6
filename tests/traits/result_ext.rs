use std::io;

use error_stamp::{Annotation, BoxedContainerResult, Container, ResultExt, Severity};

fn read_missing() -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn ctx_wraps_and_stamps_the_error() {
    let err = read_missing().ctx(Severity::ERROR, "reading settings").unwrap_err();

    assert_eq!(err.message(), "reading settings");
    assert_eq!(err.severity(), Severity::ERROR);
    assert!(err.is_stamped());
    assert!(err.frames().is_some());
    assert_eq!(err.find_cause::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

#[test]
fn ctx_passes_ok_values_through() {
    let ok: Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.ctx(Severity::ERROR, "unused").expect("ok"), 7);
}

#[test]
fn ctx_with_is_lazy() {
    let ok: Result<(), io::Error> = Ok(());
    let result = ok.ctx_with(|| panic!("closure must not run on Ok"));
    assert!(result.is_ok());

    let err = read_missing()
        .ctx_with(|| {
            Container::new(Severity::WARN, "settings")
                .annotate(Annotation::quoted("file", "app.toml"))
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "settings(file: 'app.toml')no such file");
}

#[test]
fn wrapping_a_container_keeps_its_stamp() {
    fn inner() -> Result<(), Container> {
        Err(Container::new(Severity::ERROR, "inner").stamp())
    }

    let original = inner().unwrap_err();
    let frames = original.frames().cloned();

    let outer = Err::<(), _>(original).ctx(Severity::FATAL, "outer").unwrap_err();
    assert_eq!(outer.depth(), 2);
    let link = outer.next_container().expect("inner link");
    assert_eq!(link.frames().cloned(), frames);
    assert!(outer.is(&Container::new(Severity::ERROR, "inner")));
}

#[test]
fn boxed_container_results_keep_the_chain() {
    fn lookup() -> BoxedContainerResult<()> {
        Err(Box::new(Container::new(Severity::ERROR, "boxed root").stamp()))
    }

    let top = lookup().ctx(Severity::FATAL, "top").unwrap_err();
    assert_eq!(top.depth(), 2);
    assert!(top.is(&Container::new(Severity::ERROR, "boxed root")));

    let mut seen = Vec::new();
    top.walk(|link, wrapped| seen.push((link.message().to_string(), wrapped.is_some())));
    assert_eq!(seen, [("boxed root".to_string(), false), ("top".to_string(), false)]);
}
