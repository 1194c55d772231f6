use core::error::Error;
use core::fmt;

use super::Container;
use crate::types::annotation::write_annotation_list;

/// Plain rendering: message, then `(k: v, ...)`, then the cause's own text.
///
/// This is the uncolored fallback used wherever only a message string is
/// expected; the full report comes from a [`Logger`](crate::Logger).
impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        write_annotation_list(f, &self.annotations)?;
        if let Some(cause) = &self.cause {
            fmt::Display::fmt(cause, f)?;
        }
        Ok(())
    }
}

impl Error for Container {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.unwrap_cause().map(|err| err as _)
    }
}
