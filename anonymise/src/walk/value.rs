//! Traversal of values by shape.
//!
//! - [`Anonymise`]: one `walk` per value shape, derived for records
//! - [`Anonymisable`]: user-facing `.anonymised()` / `.anonymise_in_place()`
//!
//! ## Shapes
//!
//! | Shape | Types | Behavior |
//! |-------|-------|----------|
//! | Record | `#[derive(Anonymise)]` | Each field walked with its own tag |
//! | Sequence | `Vec`, `VecDeque`, `[T; N]`, `[T]` | Each element walked with the inherited tag |
//! | Tuple | `(A,)` up to 12 elements | Each element walked with the inherited tag |
//! | Reference | `Option`, `Box` | `None` is a no-op, otherwise walk the inner value |
//! | String | `String`, `Cow<str>` | Tag resolved and applied |
//! | Other | numbers, `bool`, `char`, `()`, `PhantomData` | Unchanged, tag ignored |
//!
//! Maps and sets are not walked: their keys are dynamic, so there is no field
//! to carry a tag. Shared pointers (`Rc`, `Arc`) are not walked either, since
//! the walk needs exclusive access. Mark such fields (and foreign types) with
//! `#[anon(opaque)]`:
//!
//! ```rust,compile_fail
//! use std::collections::HashMap;
//!
//! use anonymise::Anonymise;
//!
//! #[derive(Clone, Anonymise)]
//! struct Headers {
//!     values: HashMap<String, String>,
//! }
//! ```

use std::{borrow::Cow, collections::VecDeque, marker::PhantomData};

use super::tag::{resolve_tag, Action};
use crate::error::AnonError;

// =============================================================================
// Anonymise - walk a value under the tag of its enclosing field
// =============================================================================

/// A value that can be walked for tagged string leaves.
///
/// `tag` is the tag of the nearest enclosing record field (`""` at the root).
/// Records ignore it and walk each field with that field's own tag. Sequences,
/// tuples and references pass it down unchanged. String leaves resolve it. Every
/// other shape ignores it, even when the tag is unknown.
///
/// Implementations rewrite `self` in place and stop at the first error.
///
/// ## Hand-written impls
///
/// Foreign wrappers can implement this trait by delegating to their contents.
/// Failures to inspect the wrapped value go through [`AnonError::walk`]:
///
/// ```rust
/// use std::sync::Mutex;
///
/// use anonymise::{AnonError, Anonymise};
///
/// struct Shared(Mutex<String>);
///
/// impl Anonymise for Shared {
///     fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
///         let inner = self
///             .0
///             .get_mut()
///             .map_err(|err| AnonError::walk("shared value is poisoned", err.to_string()))?;
///         inner.walk(tag)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Anonymise`",
    label = "this type cannot be walked for tagged fields",
    note = "use `#[derive(Anonymise)]` on the type definition",
    note = "or mark the field `#[anon(opaque)]` to leave it out of the walk"
)]
pub trait Anonymise {
    /// Walks `self` under `tag`, anonymising string leaves in place.
    fn walk(&mut self, tag: &str) -> Result<(), AnonError>;
}

// =============================================================================
// Anonymisable - User-facing methods
// =============================================================================

/// Method-call entrypoints, blanket-implemented for every [`Anonymise`] type.
pub trait Anonymisable: Anonymise {
    /// Returns an anonymised copy; `self` is left untouched.
    ///
    /// See [`anonymise`](crate::anonymise).
    fn anonymised(&self) -> Result<Self, AnonError>
    where
        Self: Clone + Sized,
    {
        super::entry::anonymise(self)
    }

    /// Anonymises `self` in place.
    ///
    /// See [`anonymise_by_ref`](crate::anonymise_by_ref) for what happens to
    /// `self` when this fails.
    fn anonymise_in_place(&mut self) -> Result<(), AnonError> {
        super::entry::anonymise_by_ref(self)
    }
}

impl<T> Anonymisable for T where T: Anonymise + ?Sized {}

// =============================================================================
// Anonymise implementations for standard library types
// =============================================================================

fn anonymised_str(tag: &str, value: &str) -> Result<Option<String>, AnonError> {
    match resolve_tag(tag)? {
        Action::Skip => Ok(None),
        Action::Apply(anonymiser) => Ok(Some(anonymiser.apply(value))),
    }
}

impl Anonymise for String {
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        if let Some(anonymised) = anonymised_str(tag, self)? {
            *self = anonymised;
        }
        Ok(())
    }
}

impl Anonymise for Cow<'_, str> {
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        if let Some(anonymised) = anonymised_str(tag, &**self)? {
            *self = Cow::Owned(anonymised);
        }
        Ok(())
    }
}

macro_rules! impl_anonymise_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Anonymise for $ty {
                fn walk(&mut self, _tag: &str) -> Result<(), AnonError> {
                    Ok(())
                }
            }
        )*
    };
}

impl_anonymise_passthrough!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: ?Sized> Anonymise for PhantomData<T> {
    fn walk(&mut self, _tag: &str) -> Result<(), AnonError> {
        Ok(())
    }
}

impl<T> Anonymise for Option<T>
where
    T: Anonymise,
{
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        match self {
            Some(value) => value.walk(tag),
            None => Ok(()),
        }
    }
}

impl<T> Anonymise for Box<T>
where
    T: Anonymise + ?Sized,
{
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        (**self).walk(tag)
    }
}

impl<T> Anonymise for [T]
where
    T: Anonymise,
{
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        self.iter_mut().try_for_each(|value| value.walk(tag))
    }
}

impl<T, const N: usize> Anonymise for [T; N]
where
    T: Anonymise,
{
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        self.as_mut_slice().walk(tag)
    }
}

impl<T> Anonymise for Vec<T>
where
    T: Anonymise,
{
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        self.as_mut_slice().walk(tag)
    }
}

impl<T> Anonymise for VecDeque<T>
where
    T: Anonymise,
{
    fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
        self.iter_mut().try_for_each(|value| value.walk(tag))
    }
}

macro_rules! impl_anonymise_tuple {
    ($(($($name:ident $index:tt),+))+) => {
        $(
            impl<$($name),+> Anonymise for ($($name,)+)
            where
                $($name: Anonymise,)+
            {
                fn walk(&mut self, tag: &str) -> Result<(), AnonError> {
                    $(self.$index.walk(tag)?;)+
                    Ok(())
                }
            }
        )+
    };
}

impl_anonymise_tuple! {
    (T0 0)
    (T0 0, T1 1)
    (T0 0, T1 1, T2 2)
    (T0 0, T1 1, T2 2, T3 3)
    (T0 0, T1 1, T2 2, T3 3, T4 4)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10)
    (T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11)
}
