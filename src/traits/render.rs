//! Text capability used when details are rendered for operators.
//!
//! A key or value contributes to
//! [`DecoratedError::detailed`](crate::DecoratedError::detailed) only when it
//! renders to non-empty text. Anything else stays available through
//! [`DecoratedError::get`](crate::DecoratedError::get) but is left out of the
//! text.
//!
//! # Implementations
//!
//! - `str` / `String` - render as themselves
//! - [`DetailValue`](crate::DetailValue) - renders when built from a
//!   displayable payload
//! - `Option<T>` - renders the inner value, `None` renders nothing
//!
//! # Examples
//!
//! ```
//! use error_detail::traits::Render;
//!
//! assert_eq!("disk".render().as_deref(), Some("disk"));
//! assert_eq!(None::<String>.render(), None);
//! ```

/// Produces the operator-facing text of a detail key or value.
///
/// # Implementing for Custom Types
///
/// Types with a cheap `Display` are better wrapped with
/// [`DetailValue::shown`](crate::DetailValue::shown). Implement `Render`
/// directly when the text is costly and should be built lazily, then store the
/// value with [`DetailValue::rendered`](crate::DetailValue::rendered):
///
/// ```
/// use error_detail::{traits::Render, DetailValue};
///
/// #[derive(Debug)]
/// struct Payload(Vec<u8>);
///
/// impl Render for Payload {
///     fn render(&self) -> Option<String> {
///         (!self.0.is_empty()).then(|| format!("{} bytes", self.0.len()))
///     }
/// }
///
/// let value = DetailValue::rendered(Payload(vec![1, 2, 3]));
/// assert_eq!(value.render().as_deref(), Some("3 bytes"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered as detail text",
    label = "this type does not implement `Render`",
    note = "wrap displayable values with `DetailValue::shown` or implement `Render` manually"
)]
pub trait Render {
    /// Returns the text, or `None` when there is nothing to show.
    fn render(&self) -> Option<String>;
}

impl Render for str {
    #[inline]
    fn render(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl Render for String {
    #[inline]
    fn render(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render(&self) -> Option<String> {
        (**self).render()
    }
}

impl<T: Render> Render for Option<T> {
    #[inline]
    fn render(&self) -> Option<String> {
        self.as_ref().and_then(Render::render)
    }
}
