use crate::types::renderer::render_pair;
use crate::types::DetailValue;

/// One key/value annotation attached to an error.
///
/// Either side may be [`DetailValue::nil`]: a nil value turns the key into a
/// presence flag, a nil key turns the value into a free-standing note.
///
/// # Examples
///
/// ```
/// use error_detail::Detail;
///
/// let flag = Detail::flag("Is Retriable");
/// let note = Detail::note("just in case");
/// let pair = Detail::new("attempt", "3");
///
/// assert_eq!(flag.render().as_deref(), Some("Is Retriable"));
/// assert_eq!(note.render().as_deref(), Some("just in case"));
/// assert_eq!(pair.render().as_deref(), Some("attempt : 3"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Detail {
    pub key: DetailValue,
    pub value: DetailValue,
}

impl Detail {
    #[inline]
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<DetailValue>,
        V: Into<DetailValue>,
    {
        Self { key: key.into(), value: value.into() }
    }

    /// A key with a nil value.
    #[inline]
    pub fn flag<K: Into<DetailValue>>(key: K) -> Self {
        Self { key: key.into(), value: DetailValue::nil() }
    }

    /// A value stored under the nil key.
    #[inline]
    pub fn note<V: Into<DetailValue>>(value: V) -> Self {
        Self { key: DetailValue::nil(), value: value.into() }
    }

    /// The rendered line for this detail, without the trailing newline.
    #[inline]
    pub fn render(&self) -> Option<String> {
        render_pair(&self.key, &self.value)
    }
}

impl<K, V> From<(K, V)> for Detail
where
    K: Into<DetailValue>,
    V: Into<DetailValue>,
{
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
