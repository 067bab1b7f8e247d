use std::cell::Cell;
use std::rc::Rc;

use super::owner::{OwnerId, current_owner, dispose_owner, on_cleanup, with_root_owner};
use super::runtime::{EffectId, run_effect, try_with_runtime, with_runtime};

/// A side effect that re-runs whenever a signal it read changes.
///
/// Each run gets its own owner scope. Before the next run, and when the
/// effect is dropped, that scope is disposed so anything registered with
/// [`on_cleanup`] during the previous run is released first.
pub struct Effect {
    id: EffectId,
    scope: Rc<Cell<Option<OwnerId>>>,
}

impl Effect {
    pub fn new<F>(mut f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let scope: Rc<Cell<Option<OwnerId>>> = Rc::new(Cell::new(None));
        let run_scope = scope.clone();
        let id = with_runtime(|rt| {
            rt.allocate_effect(Box::new(move || {
                if let Some(previous) = run_scope.take() {
                    dispose_owner(previous);
                }
                let ((), owner) = with_root_owner(&mut f);
                run_scope.set(Some(owner));
            }))
        });

        // Effects created inside another scope go away with it.
        if current_owner().is_some() {
            let owned_scope = scope.clone();
            on_cleanup(move || dispose(id, &owned_scope));
        }

        run_effect(id);
        Self { id, scope }
    }
}

fn dispose(id: EffectId, scope: &Cell<Option<OwnerId>>) {
    if let Some(owner) = scope.take() {
        dispose_owner(owner);
    }
    // Dropped after the runtime borrow ends: the callback may own memos and
    // signals whose own drops go back to the runtime.
    let callback = try_with_runtime(|rt| rt.dispose_effect(id)).flatten();
    drop(callback);
}

impl Drop for Effect {
    fn drop(&mut self) {
        dispose(self.id, &self.scope);
    }
}

pub fn create_effect<F>(f: F) -> Effect
where
    F: FnMut() + 'static,
{
    Effect::new(f)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::reactive::{create_memo, create_signal, live_effect_count, live_signal_count};

    #[test]
    fn test_cleanup_runs_before_next_run() {
        let trigger = create_signal(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let log_clone = log.clone();
        let trigger_read = trigger.clone();
        let _effect = create_effect(move || {
            let value = trigger_read.get();
            log_clone.borrow_mut().push(format!("run {value}"));
            let log_cleanup = log_clone.clone();
            on_cleanup(move || log_cleanup.borrow_mut().push(format!("cleanup {value}")));
        });

        trigger.set(1);
        assert_eq!(*log.borrow(), vec!["run 0", "cleanup 0", "run 1"]);
    }

    #[test]
    fn test_drop_runs_cleanup_and_stops_tracking() {
        let trigger = create_signal(0);
        let runs = Rc::new(Cell::new(0));
        let cleaned = Rc::new(Cell::new(false));

        let (runs_clone, cleaned_clone) = (runs.clone(), cleaned.clone());
        let trigger_read = trigger.clone();
        let effect = create_effect(move || {
            trigger_read.get();
            runs_clone.set(runs_clone.get() + 1);
            let cleaned = cleaned_clone.clone();
            on_cleanup(move || cleaned.set(true));
        });

        drop(effect);
        assert!(cleaned.get());

        trigger.set(5);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_dropping_effect_releases_what_its_callback_owns() {
        let (effects, signals) = (live_effect_count(), live_signal_count());
        let source = create_signal(2);

        let source_read = source.clone();
        let doubled = create_memo(move || source_read.get() * 2);
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        let effect = create_effect(move || seen_clone.set(doubled.get()));
        assert_eq!(seen.get(), 4);

        // The memo lives only inside the callback, so this drops it too.
        drop(effect);
        drop(source);
        assert_eq!(live_effect_count(), effects);
        assert_eq!(live_signal_count(), signals);
    }
}
