//! Shared-state handles.
//!
//! The session store and the case detail orchestrator never own their state
//! directly. They go through a [`StateHandle`] so that the same logic can drive
//! a reactive UI signal or a plain `Rc<RefCell<_>>` in tests and headless use.
//! Handles are only borrowed inside the closures passed to them, never across
//! an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateHandle<T>: Clone {
    /// Run `f` with shared access to the state.
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Run `f` with exclusive access to the state.
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Clone of the current state.
    fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.read_with(T::clone)
    }
}

/// Single-threaded handle backed by `Rc<RefCell<T>>`.
#[derive(Debug, Default)]
pub struct LocalState<T>(Rc<RefCell<T>>);

impl<T> LocalState<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalState<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> StateHandle<T> for LocalState<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}
