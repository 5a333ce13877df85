use core::fmt::{self, Display};

/// Misuse reported while building details or factories.
///
/// Both variants describe programmer errors. The panicking entry points
/// ([`ErrorFactory::new_error`](crate::ErrorFactory::new_error),
/// [`DetailChain::from_pairs`](crate::DetailChain::from_pairs),
/// [`ErrorFactoryBuilder::build`](crate::ErrorFactoryBuilder::build)) abort
/// with this error's text; the `try_*` variants hand it back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// A detail key was built from a type without equality.
    InvalidKeyKind { type_name: &'static str },
    /// An error factory was built without a detail store builder.
    MisconfiguredFactory,
}

impl DetailError {
    #[inline]
    pub(crate) fn invalid_key(type_name: &'static str) -> Self {
        Self::InvalidKeyKind { type_name }
    }
}

impl Display for DetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyKind { type_name } => {
                write!(f, "detail key of type `{}` does not support equality comparison", type_name)
            },
            Self::MisconfiguredFactory => {
                f.write_str("error factory cannot be built without a detail store builder")
            },
        }
    }
}

impl std::error::Error for DetailError {}
