//! Filter executor.
//!
//! [`Filter`] applies a [`Specification`] to a slice. It holds no state, so a
//! single value can be shared freely; `Filter` itself is a unit struct and the
//! usual call site is `Filter.apply(&items, &spec)`.

use std::iter::FusedIterator;
use std::slice;

use crate::error::{FilterError, Result};
use crate::spec::Specification;

/// Selects the items of a collection that satisfy a specification.
///
/// Every operation preserves the original relative order of the items and,
/// apart from [`Filter::retain`], leaves the collection untouched.
///
/// # Example
///
/// ```
/// use solid_filter::{from_fn, Filter};
///
/// let numbers = [5, 12, 7, 20, 3];
/// let large = from_fn(|n: &i32| *n > 6);
///
/// let selected: Vec<_> = Filter.apply(&numbers, &large).copied().collect();
/// assert_eq!(selected, vec![12, 7, 20]);
/// assert_eq!(Filter.count(&numbers, &large), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter;

impl Filter {
    /// Returns a lazy iterator over the items satisfying `spec`.
    pub fn apply<'a, T, S>(&self, items: &'a [T], spec: &'a S) -> Matches<'a, T, S>
    where
        S: Specification<T> + ?Sized,
    {
        Matches {
            items: items.iter(),
            spec,
        }
    }

    /// Like [`Filter::apply`], for callers holding optional inputs.
    ///
    /// Fails with [`FilterError::InvalidArgument`] naming the first absent
    /// argument.
    pub fn try_apply<'a, T, S>(
        &self,
        items: Option<&'a [T]>,
        spec: Option<&'a S>,
    ) -> Result<Matches<'a, T, S>>
    where
        S: Specification<T> + ?Sized,
    {
        let items = items.ok_or_else(|| FilterError::missing("items"))?;
        let spec = spec.ok_or_else(|| FilterError::missing("spec"))?;
        Ok(self.apply(items, spec))
    }

    /// Collects references to the items satisfying `spec`.
    pub fn collect<'a, T, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        items
            .iter()
            .filter(|item| spec.is_satisfied_by(item))
            .collect()
    }

    /// Collects clones of the items satisfying `spec`.
    pub fn apply_cloned<T, S>(&self, items: &[T], spec: &S) -> Vec<T>
    where
        T: Clone,
        S: Specification<T> + ?Sized,
    {
        self.apply(items, spec).cloned().collect()
    }

    /// Keeps only the items satisfying `spec`, in place.
    pub fn retain<T, S>(&self, items: &mut Vec<T>, spec: &S)
    where
        S: Specification<T> + ?Sized,
    {
        items.retain(|item| spec.is_satisfied_by(item));
    }

    /// Counts the items satisfying `spec`.
    pub fn count<T, S>(&self, items: &[T], spec: &S) -> usize
    where
        S: Specification<T> + ?Sized,
    {
        self.apply(items, spec).count()
    }

    /// Returns `true` if any item satisfies `spec`.
    pub fn any<T, S>(&self, items: &[T], spec: &S) -> bool
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().any(|item| spec.is_satisfied_by(item))
    }

    /// Returns `true` if every item satisfies `spec`.
    pub fn all<T, S>(&self, items: &[T], spec: &S) -> bool
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().all(|item| spec.is_satisfied_by(item))
    }

    /// Finds the first item satisfying `spec`.
    pub fn find<'a, T, S>(&self, items: &'a [T], spec: &S) -> Option<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().find(|item| spec.is_satisfied_by(item))
    }

    /// Finds the index of the first item satisfying `spec`.
    pub fn position<T, S>(&self, items: &[T], spec: &S) -> Option<usize>
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().position(|item| spec.is_satisfied_by(item))
    }
}

/// Lazy iterator returned by [`Filter::apply`].
pub struct Matches<'a, T, S: ?Sized> {
    items: slice::Iter<'a, T>,
    spec: &'a S,
}

impl<T, S: ?Sized> Clone for Matches<'_, T, S> {
    fn clone(&self) -> Self {
        Matches {
            items: self.items.clone(),
            spec: self.spec,
        }
    }
}

impl<'a, T, S> Iterator for Matches<'a, T, S>
where
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let spec = self.spec;
        self.items.find(|item| spec.is_satisfied_by(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.items.len()))
    }
}

impl<T, S> DoubleEndedIterator for Matches<'_, T, S>
where
    S: Specification<T> + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.items.rfind(|item| spec.is_satisfied_by(item))
    }
}

impl<T, S> FusedIterator for Matches<'_, T, S> where S: Specification<T> + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{from_fn, AlwaysFalse, AlwaysTrue};
    use crate::vehicle::{ColorSpecification, Vehicle};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn filter_and_matches_are_send_and_sync() {
        assert_send_sync::<Filter>();
        assert_send_sync::<Matches<'static, Vehicle, ColorSpecification>>();
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: &'static str,
        priority: u8,
        done: bool,
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task { name: "write docs", priority: 3, done: false },
            Task { name: "fix bug", priority: 5, done: true },
            Task { name: "review", priority: 4, done: false },
            Task { name: "release", priority: 5, done: false },
        ]
    }

    fn open() -> impl Specification<Task> {
        from_fn(|t: &Task| !t.done)
    }

    #[test]
    fn apply_preserves_order() {
        let tasks = tasks();
        let spec = open();
        let names: Vec<_> = Filter.apply(&tasks, &spec).map(|t| t.name).collect();
        assert_eq!(names, vec!["write docs", "review", "release"]);
    }

    #[test]
    fn apply_does_not_mutate() {
        let tasks = tasks();
        let before = tasks.clone();
        let _ = Filter.collect(&tasks, &AlwaysFalse);
        assert_eq!(tasks, before);
    }

    #[test]
    fn apply_is_lazy_from_both_ends() {
        let tasks = tasks();
        let spec = open();
        let mut matches = Filter.apply(&tasks, &spec);
        assert_eq!(matches.size_hint(), (0, Some(4)));
        assert_eq!(matches.next().map(|t| t.name), Some("write docs"));
        assert_eq!(matches.next_back().map(|t| t.name), Some("release"));
        assert_eq!(matches.clone().count(), 1);
        assert_eq!(matches.next().map(|t| t.name), Some("review"));
        assert_eq!(matches.next(), None);
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn always_true_and_always_false() {
        let tasks = tasks();
        assert_eq!(Filter.apply_cloned(&tasks, &AlwaysTrue), tasks);
        assert!(Filter.collect(&tasks, &AlwaysFalse).is_empty());
    }

    #[test]
    fn try_apply_reports_absent_arguments() {
        let tasks = tasks();
        let spec = open();

        let err = Filter.try_apply::<Task, _>(None, Some(&spec)).err();
        assert_eq!(err, Some(FilterError::missing("items")));

        let err = Filter
            .try_apply::<Task, dyn Specification<Task>>(Some(tasks.as_slice()), None)
            .err();
        assert_eq!(err, Some(FilterError::missing("spec")));

        let found = Filter
            .try_apply(Some(tasks.as_slice()), Some(&spec))
            .map(Iterator::count);
        assert_eq!(found, Ok(3));
    }

    #[test]
    fn retain_keeps_matches_in_place() {
        let mut tasks = tasks();
        Filter.retain(&mut tasks, &from_fn(|t: &Task| t.priority == 5));
        let names: Vec<_> = tasks.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["fix bug", "release"]);
    }

    #[test]
    fn aggregate_queries() {
        let tasks = tasks();
        let urgent = from_fn(|t: &Task| t.priority >= 5);

        assert_eq!(Filter.count(&tasks, &urgent), 2);
        assert!(Filter.any(&tasks, &urgent));
        assert!(!Filter.all(&tasks, &urgent));
        assert!(Filter.all(&tasks, &from_fn(|t: &Task| t.priority > 0)));
        assert_eq!(Filter.find(&tasks, &urgent).map(|t| t.name), Some("fix bug"));
        assert_eq!(Filter.position(&tasks, &urgent), Some(1));
        assert_eq!(Filter.position(&tasks, &AlwaysFalse), None);
    }

    #[test]
    fn empty_input() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(Filter.apply(&tasks, &AlwaysTrue).count(), 0);
        assert!(!Filter.any(&tasks, &AlwaysTrue));
        assert!(Filter.all(&tasks, &AlwaysFalse));
    }
}
