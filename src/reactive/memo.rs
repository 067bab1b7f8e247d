use std::rc::Rc;

use super::effect::{Effect, create_effect};
use super::signal::{Signal, create_signal};

/// Eagerly recomputed derived value.
///
/// A `Memo<T>` re-evaluates as soon as a dependency changes but only notifies
/// its own readers when the result differs (`PartialEq`).
pub struct Memo<T> {
    signal: Signal<T>,
    _effect: Rc<Effect>,
}

impl<T> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
            _effect: self._effect.clone(),
        }
    }
}

pub fn create_memo<T, F>(f: F) -> Memo<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> T + 'static,
{
    let signal = create_signal(f());
    let target = signal.clone();
    // Runs once immediately to establish dependencies.
    let effect = create_effect(move || target.set(f()));
    Memo {
        signal,
        _effect: Rc::new(effect),
    }
}

impl<T: Clone + PartialEq + 'static> Memo<T> {
    pub fn get(&self) -> T {
        self.signal.get()
    }

    pub fn get_untracked(&self) -> T {
        self.signal.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.signal.with(f)
    }
}
