//! Turning captured program counters into readable frames.
use core::ffi::c_void;

/// Resolves raw program counters into display strings.
///
/// `dest` is cleared and refilled; the return value is the number of strings
/// produced. One program counter may expand to several strings when the
/// symbolizer reports inlined frames.
pub trait Symbolize: Send + Sync {
    /// Resolves `frames` into `dest`, returning the number of strings written.
    fn symbolize(&self, frames: &[usize], dest: &mut Vec<String>) -> usize;
}

impl<F> Symbolize for F
where
    F: Fn(&[usize], &mut Vec<String>) -> usize + Send + Sync,
{
    fn symbolize(&self, frames: &[usize], dest: &mut Vec<String>) -> usize {
        self(frames, dest)
    }
}

/// Symbolizer backed by the `backtrace` crate, producing `file:line function`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSymbolizer;

impl Symbolize for DefaultSymbolizer {
    fn symbolize(&self, frames: &[usize], dest: &mut Vec<String>) -> usize {
        dest.clear();

        for &ip in frames {
            let before = dest.len();
            backtrace::resolve(ip as *mut c_void, |symbol| {
                let file = symbol
                    .filename()
                    .map_or_else(|| "<unknown>".into(), |path| path.display().to_string());
                let line = symbol.lineno().unwrap_or(0);
                let name = symbol
                    .name()
                    .map_or_else(|| "<unknown>".to_string(), |name| format!("{name:#}"));

                dest.push(format!("{file}:{line} {}", function_name(&name)));
            });

            if dest.len() == before {
                dest.push(format!("<unknown>:0 {ip:#x}"));
            }
        }

        dest.len()
    }
}

/// Strips the module path from a demangled symbol, keeping the defining type
/// (when there is one) and the function name.
///
/// `my_crate::io::Reader::read` becomes `Reader::read`, `my_crate::main`
/// becomes `main`, and `my_crate::run::{{closure}}` becomes `run::{{closure}}`.
pub fn function_name(symbol: &str) -> &str {
    let mut boundaries: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let bytes = symbol.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {},
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                boundaries.push(i + 2);
                i += 1;
            },
            _ => {},
        }
        i += 1;
    }

    let segment_starts: Vec<usize> = core::iter::once(0).chain(boundaries).collect();
    let segment = |idx: usize| &symbol[segment_starts[idx]..];
    let last = segment_starts.len() - 1;

    let type_like = (0..last).find(|&idx| {
        segment(idx)
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase() || c == '<')
    });

    let start = type_like.unwrap_or_else(|| {
        (0..=last)
            .rev()
            .find(|&idx| !segment(idx).starts_with('{'))
            .unwrap_or(last)
    });

    segment(start)
}
