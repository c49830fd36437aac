//! Composite specifications.
//!
//! Composites implement [`Specification`] themselves, so a composite can be
//! used anywhere a leaf can, including inside another composite.
//!
//! [`And`], [`Or`] and [`Not`] are statically typed and cost nothing beyond
//! their children. [`AllOf`] and [`AnyOf`] hold any number of boxed children
//! when the set of criteria is only known at runtime.

use std::fmt;

use crate::spec::Specification;

/// Satisfied when both children are satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    /// Creates a conjunction of two specifications.
    pub fn new(left: A, right: B) -> Self {
        And { left, right }
    }

    /// Returns the left child.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns the right child.
    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<T, A, B> Specification<T> for And<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// Satisfied when at least one child is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    /// Creates a disjunction of two specifications.
    pub fn new(left: A, right: B) -> Self {
        Or { left, right }
    }

    /// Returns the left child.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns the right child.
    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<T, A, B> Specification<T> for Or<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// Satisfied when the child is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    /// Creates the negation of a specification.
    pub fn new(inner: A) -> Self {
        Not { inner }
    }

    /// Returns the negated child.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<T, A> Specification<T> for Not<A>
where
    T: ?Sized,
    A: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// An owned, thread-safe child of [`AllOf`] or [`AnyOf`].
pub type BoxedSpecification<T> = Box<dyn Specification<T> + Send + Sync>;

/// Satisfied when every child is satisfied.
///
/// An empty `AllOf` is satisfied by every candidate.
///
/// ```
/// use solid_filter::{from_fn, AllOf, Specification};
///
/// let spec = AllOf::<i32>::new()
///     .with(from_fn(|n: &i32| *n > 0))
///     .with(from_fn(|n: &i32| *n < 100));
///
/// assert!(spec.is_satisfied_by(&50));
/// assert!(!spec.is_satisfied_by(&150));
/// ```
pub struct AllOf<T: ?Sized> {
    children: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> AllOf<T> {
    /// Creates an empty conjunction.
    pub fn new() -> Self {
        AllOf {
            children: Vec::new(),
        }
    }

    /// Adds a child specification.
    pub fn with<S>(mut self, spec: S) -> Self
    where
        S: Specification<T> + Send + Sync + 'static,
    {
        self.children.push(Box::new(spec));
        self
    }

    /// Adds an already boxed child specification.
    pub fn push(&mut self, spec: BoxedSpecification<T>) {
        self.children.push(spec);
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> Default for AllOf<T> {
    fn default() -> Self {
        AllOf::new()
    }
}

impl<T: ?Sized> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("children", &self.children.len())
            .finish()
    }
}

impl<T: ?Sized> FromIterator<BoxedSpecification<T>> for AllOf<T> {
    fn from_iter<I: IntoIterator<Item = BoxedSpecification<T>>>(iter: I) -> Self {
        AllOf {
            children: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Specification<T> for AllOf<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.children
            .iter()
            .all(|child| child.is_satisfied_by(candidate))
    }
}

/// Satisfied when at least one child is satisfied.
///
/// An empty `AnyOf` is satisfied by no candidate.
pub struct AnyOf<T: ?Sized> {
    children: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    /// Creates an empty disjunction.
    pub fn new() -> Self {
        AnyOf {
            children: Vec::new(),
        }
    }

    /// Adds a child specification.
    pub fn with<S>(mut self, spec: S) -> Self
    where
        S: Specification<T> + Send + Sync + 'static,
    {
        self.children.push(Box::new(spec));
        self
    }

    /// Adds an already boxed child specification.
    pub fn push(&mut self, spec: BoxedSpecification<T>) {
        self.children.push(spec);
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> Default for AnyOf<T> {
    fn default() -> Self {
        AnyOf::new()
    }
}

impl<T: ?Sized> fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("children", &self.children.len())
            .finish()
    }
}

impl<T: ?Sized> FromIterator<BoxedSpecification<T>> for AnyOf<T> {
    fn from_iter<I: IntoIterator<Item = BoxedSpecification<T>>>(iter: I) -> Self {
        AnyOf {
            children: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Specification<T> for AnyOf<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.children
            .iter()
            .any(|child| child.is_satisfied_by(candidate))
    }
}
