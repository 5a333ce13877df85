//! Type-erased keys and values carried by error details.
//!
//! A [`DetailValue`] owns an arbitrary payload together with two optional
//! capabilities that are fixed when the value is built:
//!
//! - **equality**, required for anything used as a lookup key;
//! - **rendering**, which decides whether the value shows up in
//!   [`DecoratedError::detailed`](crate::DecoratedError::detailed) output.
//!
//! | constructor | equality | renders |
//! |---|---|---|
//! | [`DetailValue::nil`] | yes | never |
//! | [`DetailValue::new`] | yes | no |
//! | [`DetailValue::shown`] | yes | `Display` |
//! | [`DetailValue::opaque`] | no | no |
//! | [`DetailValue::opaque_shown`] | no | `Display` |
//! | [`DetailValue::rendered`] | no | [`Render`] |
//!
//! Strings convert into shown values holding a `Cow<'static, str>`, so a
//! literal and an owned `String` with the same text are the same key. Other
//! primitives convert into comparable values that stay out of the rendered
//! text.
//!
//! # Examples
//!
//! ```
//! use error_detail::DetailValue;
//! use error_detail::traits::Render;
//!
//! let key = DetailValue::from("retries");
//! let value = DetailValue::from(3_u32);
//!
//! assert_eq!(key.render().as_deref(), Some("retries"));
//! assert_eq!(value.render(), None);
//! assert_eq!(value.downcast_ref::<u32>(), Some(&3));
//! assert_eq!(key, DetailValue::from(String::from("retries")));
//! ```
use crate::traits::Render;
use crate::types::DecoratedError;
use core::any::Any;
use core::fmt::{self, Debug, Display};
use std::borrow::Cow;
use std::sync::Arc;

/// A key or value stored in a detail chain.
///
/// Cloning is cheap: the payload sits behind an [`Arc`].
#[derive(Clone)]
pub struct DetailValue(Repr);

#[derive(Clone)]
enum Repr {
    Nil,
    Erased(Arc<dyn Erased>),
}

trait Erased: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
    fn is_comparable(&self) -> bool;
    fn eq_any(&self, other: &dyn Any) -> bool;
    fn render(&self) -> Option<String>;
    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

struct Slot<T> {
    value: T,
    eq: Option<fn(&T, &T) -> bool>,
    render: Option<fn(&T) -> Option<String>>,
}

impl<T> Erased for Slot<T>
where
    T: Debug + Send + Sync + 'static,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    #[inline]
    fn is_comparable(&self) -> bool {
        self.eq.is_some()
    }

    fn eq_any(&self, other: &dyn Any) -> bool {
        match (self.eq, other.downcast_ref::<T>()) {
            (Some(eq), Some(other)) => eq(&self.value, other),
            _ => false,
        }
    }

    fn render(&self) -> Option<String> {
        self.render.and_then(|render| render(&self.value))
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.value, f)
    }
}

fn eq_by_value<T: PartialEq>(left: &T, right: &T) -> bool {
    left == right
}

fn render_display<T: Display>(value: &T) -> Option<String> {
    Some(value.to_string())
}

fn render_custom<T: Render>(value: &T) -> Option<String> {
    value.render()
}

impl DetailValue {
    /// The nil value: a valid key that equals only itself and never renders.
    #[inline]
    pub const fn nil() -> Self {
        Self(Repr::Nil)
    }

    fn erased<T>(
        value: T,
        eq: Option<fn(&T, &T) -> bool>,
        render: Option<fn(&T) -> Option<String>>,
    ) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        Self(Repr::Erased(Arc::new(Slot { value, eq, render })))
    }

    /// Comparable value that does not appear in rendered text.
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: PartialEq + Debug + Send + Sync + 'static,
    {
        Self::erased(value, Some(eq_by_value::<T>), None)
    }

    /// Comparable value rendered through its `Display` implementation.
    #[inline]
    pub fn shown<T>(value: T) -> Self
    where
        T: PartialEq + Display + Debug + Send + Sync + 'static,
    {
        Self::erased(value, Some(eq_by_value::<T>), Some(render_display::<T>))
    }

    /// Value without equality or text. Usable only as a detail value.
    #[inline]
    pub fn opaque<T>(value: T) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        Self::erased(value, None, None)
    }

    /// Value without equality, rendered through `Display`.
    #[inline]
    pub fn opaque_shown<T>(value: T) -> Self
    where
        T: Display + Debug + Send + Sync + 'static,
    {
        Self::erased(value, None, Some(render_display::<T>))
    }

    /// Value without equality, rendered through a custom [`Render`] impl.
    ///
    /// Use this for payloads whose text is expensive and computed lazily.
    #[inline]
    pub fn rendered<T>(value: T) -> Self
    where
        T: Render + Debug + Send + Sync + 'static,
    {
        Self::erased(value, None, Some(render_custom::<T>))
    }

    /// Shown text value borrowing a static string without allocating.
    #[inline]
    pub fn from_static(text: &'static str) -> Self {
        Self::shown(Cow::Borrowed(text))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self.0, Repr::Nil)
    }

    /// Whether this value may be used as a detail key.
    #[inline]
    pub fn is_comparable(&self) -> bool {
        match &self.0 {
            Repr::Nil => true,
            Repr::Erased(inner) => inner.is_comparable(),
        }
    }

    /// Name of the payload type, `"nil"` for [`DetailValue::nil`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match &self.0 {
            Repr::Nil => "nil",
            Repr::Erased(inner) => inner.type_name(),
        }
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrows the payload as `T` when it holds exactly that type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match &self.0 {
            Repr::Nil => None,
            Repr::Erased(inner) => inner.as_any().downcast_ref::<T>(),
        }
    }

    /// Borrows the text of a value built from a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.downcast_ref::<Cow<'static, str>>().map(|text| &**text)
    }

    /// Borrows the payload as a [`DecoratedError`], e.g. the value stored
    /// under [`CAUSED_BY_DETAIL_KEY`](crate::CAUSED_BY_DETAIL_KEY).
    #[inline]
    pub fn as_error(&self) -> Option<&DecoratedError> {
        self.downcast_ref::<DecoratedError>()
    }

    /// Key matching as used by detail lookups.
    ///
    /// Both sides must be comparable for a match to succeed. Values of
    /// different payload types never match.
    pub fn matches(&self, query: &DetailValue) -> bool {
        match (&self.0, &query.0) {
            (Repr::Nil, Repr::Nil) => true,
            (Repr::Erased(stored), Repr::Erased(query)) => {
                query.is_comparable() && stored.eq_any(query.as_any())
            },
            _ => false,
        }
    }
}

impl Default for DetailValue {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl Render for DetailValue {
    fn render(&self) -> Option<String> {
        match &self.0 {
            Repr::Nil => None,
            Repr::Erased(inner) => inner.render(),
        }
    }
}

/// Comparable payloads compare by value; all others only equal themselves.
impl PartialEq for DetailValue {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Erased(left), Repr::Erased(right))
                if !left.is_comparable() || !right.is_comparable() =>
            {
                Arc::ptr_eq(left, right)
            },
            _ => self.matches(other),
        }
    }
}

impl Debug for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Nil => f.write_str("nil"),
            Repr::Erased(inner) => inner.fmt_debug(f),
        }
    }
}

impl From<()> for DetailValue {
    #[inline]
    fn from(_: ()) -> Self {
        Self::nil()
    }
}

impl From<&str> for DetailValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::shown(Cow::<'static, str>::Owned(value.to_owned()))
    }
}

impl From<String> for DetailValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::shown(Cow::<'static, str>::Owned(value))
    }
}

impl From<Cow<'static, str>> for DetailValue {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::shown(value)
    }
}

impl From<&DetailValue> for DetailValue {
    #[inline]
    fn from(value: &DetailValue) -> Self {
        value.clone()
    }
}

impl From<DecoratedError> for DetailValue {
    #[inline]
    fn from(error: DecoratedError) -> Self {
        Self::new(error)
    }
}

impl<T> From<Option<T>> for DetailValue
where
    T: Into<DetailValue>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::nil, Into::into)
    }
}

macro_rules! comparable_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DetailValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

comparable_from!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
