//! The [`Specification`] capability and its leaf implementations.

use std::fmt;
use std::sync::Arc;

use crate::composite::{And, Not, Or};

/// A predicate over candidates of type `T`.
///
/// Implementations must be pure: the answer for a given candidate depends only
/// on the candidate and on the parameters captured when the specification was
/// built.
///
/// # Implementing a criterion
///
/// ```
/// use solid_filter::Specification;
///
/// struct Even;
///
/// impl Specification<i64> for Even {
///     fn is_satisfied_by(&self, candidate: &i64) -> bool {
///         candidate % 2 == 0
///     }
/// }
///
/// let spec = Even.and(solid_filter::from_fn(|n: &i64| *n > 10));
/// assert!(spec.is_satisfied_by(&12i64));
/// assert!(!spec.is_satisfied_by(&8i64));
/// ```
pub trait Specification<T: ?Sized> {
    /// Returns `true` if `candidate` satisfies this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Combines this specification with `other`; both must be satisfied.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And::new(self, other)
    }

    /// Combines this specification with `other`; either may be satisfied.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or::new(self, other)
    }

    /// Inverts this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }
}

impl<T, S> Specification<T> for &S
where
    T: ?Sized,
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<T, S> Specification<T> for Box<S>
where
    T: ?Sized,
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<T, S> Specification<T> for Arc<S>
where
    T: ?Sized,
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// Satisfied by every candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTrue;

impl<T: ?Sized> Specification<T> for AlwaysTrue {
    fn is_satisfied_by(&self, _candidate: &T) -> bool {
        true
    }
}

/// Satisfied by no candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl<T: ?Sized> Specification<T> for AlwaysFalse {
    fn is_satisfied_by(&self, _candidate: &T) -> bool {
        false
    }
}

/// A specification backed by a closure.
///
/// Built with [`from_fn`]. The closure must not depend on mutable state.
#[derive(Clone, Copy)]
pub struct FnSpecification<F> {
    predicate: F,
}

impl<F> fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpecification").finish_non_exhaustive()
    }
}

impl<T, F> Specification<T> for FnSpecification<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }
}

/// Wraps a closure as a [`Specification`].
///
/// ```
/// use solid_filter::{from_fn, Specification};
///
/// let short = from_fn(|s: &str| s.len() < 4);
/// assert!(short.is_satisfied_by("abc"));
/// assert!(!short.is_satisfied_by("abcd"));
/// ```
pub fn from_fn<T, F>(predicate: F) -> FnSpecification<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    FnSpecification { predicate }
}
