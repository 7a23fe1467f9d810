use std::fmt::{self, Formatter};
use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

/// Per-element rendering used by the bracketed `[e1, e2, ..., en]` output of containers and views.
///
/// Textual elements are quoted so that `["1", "2"]` can't be confused with `[1, 2]`. Custom element
/// types opt in by implementing this trait, usually by forwarding to their `Display`.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait DisplayElement {
    fn fmt_element(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_plain {
    ($($t:ty),* $(,)?) => {
        $(
            impl DisplayElement for $t {
                #[inline]
                fn fmt_element(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_plain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl DisplayElement for str {
    fn fmt_element(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl DisplayElement for String {
    fn fmt_element(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_str().fmt_element(f)
    }
}

impl DisplayElement for char {
    fn fmt_element(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{self}'")
    }
}

/// Writes `items` as `[e1, e2, ..., en]`, or `[]` when there are none.
pub(crate) fn fmt_sequence<'a, T, I>(items: I, f: &mut Formatter<'_>) -> fmt::Result
where
    T: DisplayElement + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (ind, item) in items.into_iter().enumerate() {
        if ind > 0 {
            f.write_str(", ")?;
        }
        item.fmt_element(f)?;
    }
    f.write_str("]")
}
