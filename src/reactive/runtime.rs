use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::new());
}

/// Signal and effect ids are never reused.
pub type SignalId = u64;
pub type EffectId = u64;

pub(crate) type EffectCallback = Box<dyn FnMut()>;

enum EffectSlot {
    Idle(EffectCallback),
    /// The callback has been taken out while it runs. `dirty` records a
    /// dependency write that happened during the run.
    Running { dirty: bool },
}

/// Dependency graph between signals and effects.
///
/// Effects are flushed in allocation order so derived values created before
/// their consumers settle first. Entries are removed when their signal or
/// effect goes away, so the graph only holds live nodes.
#[derive(Default)]
pub struct Runtime {
    current_effect: Option<EffectId>,
    pending_effects: BTreeSet<EffectId>,
    effects: HashMap<EffectId, EffectSlot>,
    effect_dependencies: HashMap<EffectId, HashSet<SignalId>>,
    signal_subscribers: HashMap<SignalId, HashSet<EffectId>>,
    next_signal: SignalId,
    next_effect: EffectId,
    batch_depth: usize,
    flushing: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_signal(&mut self) -> SignalId {
        let id = self.next_signal;
        self.next_signal += 1;
        self.signal_subscribers.insert(id, HashSet::new());
        id
    }

    pub fn allocate_effect(&mut self, callback: EffectCallback) -> EffectId {
        let id = self.next_effect;
        self.next_effect += 1;
        self.effects.insert(id, EffectSlot::Idle(callback));
        self.effect_dependencies.insert(id, HashSet::new());
        id
    }

    pub fn track_read(&mut self, signal_id: SignalId) {
        let Some(effect_id) = self.current_effect else {
            return;
        };
        let Some(dependencies) = self.effect_dependencies.get_mut(&effect_id) else {
            return;
        };
        if let Some(subscribers) = self.signal_subscribers.get_mut(&signal_id) {
            subscribers.insert(effect_id);
            dependencies.insert(signal_id);
        }
    }

    fn queue_subscribers(&mut self, signal_id: SignalId) {
        let Some(subscribers) = self.signal_subscribers.get(&signal_id) else {
            return;
        };
        for effect_id in subscribers {
            match self.effects.get_mut(effect_id) {
                Some(EffectSlot::Running { dirty }) => *dirty = true,
                Some(EffectSlot::Idle(_)) => {
                    self.pending_effects.insert(*effect_id);
                }
                None => {}
            }
        }
    }

    fn should_flush(&self) -> bool {
        self.batch_depth == 0 && !self.flushing && !self.pending_effects.is_empty()
    }

    fn clear_dependencies(&mut self, effect_id: EffectId) {
        let Some(old_deps) = self.effect_dependencies.get_mut(&effect_id) else {
            return;
        };
        for signal_id in std::mem::take(old_deps) {
            if let Some(subscribers) = self.signal_subscribers.get_mut(&signal_id) {
                subscribers.remove(&effect_id);
            }
        }
    }

    fn begin_run(&mut self, effect_id: EffectId) -> Option<(EffectCallback, Option<EffectId>)> {
        let slot = self.effects.get_mut(&effect_id)?;
        let callback = match std::mem::replace(slot, EffectSlot::Running { dirty: false }) {
            EffectSlot::Idle(callback) => callback,
            // Running effects are not re-entered; they run once more afterwards.
            EffectSlot::Running { .. } => {
                *slot = EffectSlot::Running { dirty: true };
                return None;
            }
        };
        self.pending_effects.remove(&effect_id);
        self.clear_dependencies(effect_id);
        let prev_effect = self.current_effect.replace(effect_id);
        Some((callback, prev_effect))
    }

    /// Hands the callback back when the effect was disposed during its own
    /// run, so the caller can drop it outside the runtime borrow.
    fn end_run(
        &mut self,
        effect_id: EffectId,
        callback: EffectCallback,
        prev: Option<EffectId>,
    ) -> Option<EffectCallback> {
        self.current_effect = prev;
        let Some(slot) = self.effects.get_mut(&effect_id) else {
            self.pending_effects.remove(&effect_id);
            return Some(callback);
        };
        let dirty = matches!(slot, EffectSlot::Running { dirty: true });
        *slot = EffectSlot::Idle(callback);
        if dirty {
            self.pending_effects.insert(effect_id);
        }
        None
    }

    /// Remove an effect from the graph. The callback is returned rather than
    /// dropped because dropping it may release signals and effects, which
    /// need the runtime again.
    #[must_use]
    pub fn dispose_effect(&mut self, effect_id: EffectId) -> Option<EffectCallback> {
        self.clear_dependencies(effect_id);
        self.effect_dependencies.remove(&effect_id);
        self.pending_effects.remove(&effect_id);
        match self.effects.remove(&effect_id)? {
            EffectSlot::Idle(callback) => Some(callback),
            EffectSlot::Running { .. } => None,
        }
    }

    pub fn dispose_signal(&mut self, signal_id: SignalId) {
        let Some(subscribers) = self.signal_subscribers.remove(&signal_id) else {
            return;
        };
        for effect_id in subscribers {
            if let Some(dependencies) = self.effect_dependencies.get_mut(&effect_id) {
                dependencies.remove(&signal_id);
            }
        }
    }

    pub fn signal_count(&self) -> usize {
        self.signal_subscribers.len()
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }
}

pub fn with_runtime<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

/// Like [`with_runtime`], but does nothing once the thread-local runtime has
/// been torn down. Used from `Drop` impls.
pub(crate) fn try_with_runtime<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.try_with(|rt| f(&mut rt.borrow_mut())).ok()
}

/// Run an effect with dependency tracking.
///
/// The runtime borrow is released while the callback executes, so the
/// callback is free to read and write signals or create and drop effects.
pub fn run_effect(effect_id: EffectId) {
    let Some((mut callback, prev)) = with_runtime(|rt| rt.begin_run(effect_id)) else {
        return;
    };
    callback();
    let (disposed, should_flush) = with_runtime(|rt| {
        let disposed = rt.end_run(effect_id, callback, prev);
        (disposed, rt.should_flush())
    });
    drop(disposed);
    if should_flush {
        flush_effects();
    }
}

pub(crate) fn notify_write(signal_id: SignalId) {
    if with_runtime(|rt| {
        rt.queue_subscribers(signal_id);
        rt.should_flush()
    }) {
        flush_effects();
    }
}

fn flush_effects() {
    with_runtime(|rt| rt.flushing = true);
    while let Some(effect_id) = with_runtime(|rt| rt.pending_effects.pop_first()) {
        run_effect(effect_id);
    }
    with_runtime(|rt| rt.flushing = false);
}

/// Apply several signal writes and re-run dependent effects once afterwards.
pub fn batch<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    with_runtime(|rt| rt.batch_depth += 1);
    let result = f();
    let should_flush = with_runtime(|rt| {
        rt.batch_depth -= 1;
        rt.should_flush()
    });
    if should_flush {
        flush_effects();
    }
    result
}

/// Signals that have not been dropped yet on this thread.
pub fn live_signal_count() -> usize {
    with_runtime(|rt| rt.signal_count())
}

/// Effects that have not been disposed yet on this thread.
pub fn live_effect_count() -> usize {
    with_runtime(|rt| rt.effect_count())
}
