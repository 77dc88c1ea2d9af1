//! Component Lookup
//!
//! Fetches the first component of a type from a host container without
//! allocating a fresh list per call. Matches are collected into a reusable
//! [`ComponentScratch`] buffer, the first one is taken, and the buffer is
//! cleared before returning on every path (including panics in the host's
//! collection callback).
//!
//! Lookups take `&mut ComponentScratch`, so one buffer has one writer at a
//! time. The free functions [`first_component`] and [`first_component_by_id`]
//! use a per-thread scratch; a nested lookup made while that scratch is busy
//! falls back to a temporary buffer instead of sharing it.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a host component.
pub type ComponentRef = Rc<dyn Any>;

/// Host capability: an object that can list its components by type.
pub trait ComponentContainer {
    /// Append every component whose concrete type is `type_id` to `out`.
    fn components_of(&self, type_id: TypeId, out: &mut Vec<ComponentRef>);
}

/// Reusable buffer for component lookups. Empty between calls.
#[derive(Default)]
pub struct ComponentScratch {
    buffer: Vec<ComponentRef>,
}

impl ComponentScratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// First component of the type identified by `type_id`.
    pub fn first_by_id<C>(&mut self, container: &C, type_id: TypeId) -> Option<ComponentRef>
    where
        C: ComponentContainer + ?Sized,
    {
        let guard = ClearOnDrop(&mut self.buffer);
        container.components_of(type_id, &mut *guard.0);
        let first = guard.0.first().cloned();
        drop(guard);
        first
    }

    /// First component of type `T`.
    pub fn first<T, C>(&mut self, container: &C) -> Option<Rc<T>>
    where
        T: Any,
        C: ComponentContainer + ?Sized,
    {
        self.first_by_id(container, TypeId::of::<T>())
            .and_then(|component| component.downcast::<T>().ok())
    }
}

impl std::fmt::Debug for ComponentScratch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentScratch")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

struct ClearOnDrop<'a>(&'a mut Vec<ComponentRef>);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

thread_local! {
    static THREAD_SCRATCH: RefCell<ComponentScratch> = RefCell::new(ComponentScratch::new());
}

/// [`ComponentScratch::first_by_id`] using the per-thread scratch.
pub fn first_component_by_id<C>(container: &C, type_id: TypeId) -> Option<ComponentRef>
where
    C: ComponentContainer + ?Sized,
{
    THREAD_SCRATCH.with(|cell| match cell.try_borrow_mut() {
        Ok(mut scratch) => scratch.first_by_id(container, type_id),
        // Re-entrant lookup from inside a container callback
        Err(_) => ComponentScratch::new().first_by_id(container, type_id),
    })
}

/// [`ComponentScratch::first`] using the per-thread scratch.
pub fn first_component<T, C>(container: &C) -> Option<Rc<T>>
where
    T: Any,
    C: ComponentContainer + ?Sized,
{
    first_component_by_id(container, TypeId::of::<T>())
        .and_then(|component| component.downcast::<T>().ok())
}

/// Plain ordered component list, usable wherever a [`ComponentContainer`] is expected.
#[derive(Default, Clone)]
pub struct ComponentBag {
    components: Vec<ComponentRef>,
}

impl ComponentBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component and return a handle to it.
    pub fn add<T: Any>(&mut self, component: T) -> Rc<T> {
        let component = Rc::new(component);
        self.components.push(component.clone());
        component
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentContainer for ComponentBag {
    fn components_of(&self, type_id: TypeId, out: &mut Vec<ComponentRef>) {
        out.extend(
            self.components
                .iter()
                .filter(|component| (***component).type_id() == type_id)
                .cloned(),
        );
    }
}

impl std::fmt::Debug for ComponentBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentBag")
            .field("len", &self.components.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[derive(Debug, PartialEq)]
    struct Speed(f32);

    fn bag() -> ComponentBag {
        let mut bag = ComponentBag::new();
        bag.add(Speed(4.5));
        bag.add(Health(100));
        bag.add(Health(50));
        bag
    }

    fn thread_scratch_is_empty() -> bool {
        THREAD_SCRATCH.with(|cell| cell.borrow().is_empty())
    }

    #[test]
    fn test_first_returns_first_match() {
        let mut scratch = ComponentScratch::new();
        let health = scratch.first::<Health, _>(&bag()).unwrap();
        assert_eq!(*health, Health(100));
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_first_by_id() {
        let mut scratch = ComponentScratch::new();
        let speed = scratch.first_by_id(&bag(), TypeId::of::<Speed>()).unwrap();
        assert_eq!(speed.downcast_ref::<Speed>(), Some(&Speed(4.5)));
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_no_match_returns_none_and_clears() {
        let mut scratch = ComponentScratch::new();
        assert!(scratch.first::<String, _>(&bag()).is_none());
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_returned_handle_is_shared() {
        let mut bag = ComponentBag::new();
        let added = bag.add(Health(7));
        let found = first_component::<Health, _>(&bag).unwrap();
        assert!(Rc::ptr_eq(&added, &found));
    }

    #[test]
    fn test_thread_scratch_empty_after_lookups() {
        let bag = bag();
        assert!(first_component::<Speed, _>(&bag).is_some());
        assert!(thread_scratch_is_empty());
        assert!(first_component::<u8, _>(&bag).is_none());
        assert!(thread_scratch_is_empty());
        // A later unrelated lookup sees no stale entries
        assert!(first_component::<Speed, _>(&ComponentBag::new()).is_none());
    }

    #[test]
    fn test_scratch_capacity_is_reused() {
        let mut scratch = ComponentScratch::with_capacity(8);
        let before = scratch.capacity();
        for _ in 0..10 {
            let _ = scratch.first::<Health, _>(&bag());
        }
        assert_eq!(scratch.capacity(), before);
    }

    /// Container that performs a nested lookup while being queried.
    struct Nested {
        inner: ComponentBag,
    }

    impl ComponentContainer for Nested {
        fn components_of(&self, type_id: TypeId, out: &mut Vec<ComponentRef>) {
            let inner = first_component::<Speed, _>(&self.inner);
            assert!(inner.is_some());
            self.inner.components_of(type_id, out);
        }
    }

    #[test]
    fn test_nested_lookup_does_not_corrupt() {
        let nested = Nested { inner: bag() };
        let health = first_component::<Health, _>(&nested).unwrap();
        assert_eq!(*health, Health(100));
        assert!(thread_scratch_is_empty());
    }
}
