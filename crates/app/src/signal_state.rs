use client::StateHandle;
use dioxus::prelude::*;

/// [`StateHandle`] over a Dioxus signal.
///
/// Reads made while rendering subscribe the component, so views re-render
/// whenever the session store or a case orchestrator writes.
pub struct SignalState<T: 'static>(Signal<T>);

impl<T: 'static> SignalState<T> {
    pub fn new(signal: Signal<T>) -> Self {
        Self(signal)
    }
}

impl<T: 'static> Clone for SignalState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalState<T> {}

impl<T: 'static> StateHandle<T> for SignalState<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.0;
        let mut guard = signal.write();
        f(&mut guard)
    }
}
