use super::DecoratedError;
use core::fmt::{self, Debug, Display};

/// `{}` prints the message, `{:#}` the detailed text.
impl Display for DecoratedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(self.message());
        }
        f.write_str(&self.detailed())
    }
}

impl Debug for DecoratedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratedError")
            .field("message", &self.message())
            .field("details", &self.details().count())
            .finish_non_exhaustive()
    }
}

impl PartialEq for DecoratedError {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for DecoratedError {}

impl std::error::Error for DecoratedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
