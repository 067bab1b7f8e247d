//! Owner scopes for automatic resource cleanup.
//!
//! Every effect run executes inside a fresh root owner. Effects created
//! during the run and callbacks registered with [`on_cleanup`] belong to that
//! owner and are released when it is disposed, which happens right before the
//! effect runs again and when the effect itself is dropped.

use std::cell::RefCell;
use std::collections::HashMap;

/// Unique identifier for an owner. Ids are never reused.
pub type OwnerId = u64;

#[derive(Default)]
struct Owner {
    cleanups: Vec<Box<dyn FnOnce()>>,
    children: Vec<OwnerId>,
}

/// Live owners only; an entry is removed when its owner is disposed, so
/// effects that re-run for the lifetime of the app do not grow the arena.
#[derive(Default)]
struct OwnerArena {
    owners: HashMap<OwnerId, Owner>,
    next_id: OwnerId,
}

impl OwnerArena {
    fn allocate(&mut self, parent: Option<OwnerId>) -> OwnerId {
        let id = self.next_id;
        self.next_id += 1;
        self.owners.insert(id, Owner::default());
        if let Some(parent) = parent.and_then(|p| self.owners.get_mut(&p)) {
            parent.children.push(id);
        }
        id
    }

    fn get_mut(&mut self, id: OwnerId) -> Option<&mut Owner> {
        self.owners.get_mut(&id)
    }

    fn take(&mut self, id: OwnerId) -> Option<Owner> {
        self.owners.remove(&id)
    }

    fn len(&self) -> usize {
        self.owners.len()
    }
}

thread_local! {
    static CURRENT_OWNER: RefCell<Option<OwnerId>> = const { RefCell::new(None) };
    static OWNERS: RefCell<OwnerArena> = RefCell::new(OwnerArena::default());
}

/// Execute a closure within a new owner scope nested under the current one.
pub fn with_owner<T>(f: impl FnOnce() -> T) -> (T, OwnerId) {
    enter_owner(current_owner(), f)
}

/// Execute a closure within a new owner that has no parent, so disposing
/// whatever scope happens to be current never reaches it.
pub fn with_root_owner<T>(f: impl FnOnce() -> T) -> (T, OwnerId) {
    enter_owner(None, f)
}

fn enter_owner<T>(parent: Option<OwnerId>, f: impl FnOnce() -> T) -> (T, OwnerId) {
    let owner_id = OWNERS.with(|owners| owners.borrow_mut().allocate(parent));

    let prev_owner = CURRENT_OWNER.with(|current| current.replace(Some(owner_id)));
    let result = f();
    CURRENT_OWNER.with(|current| *current.borrow_mut() = prev_owner);

    (result, owner_id)
}

pub fn current_owner() -> Option<OwnerId> {
    CURRENT_OWNER.with(|current| *current.borrow())
}

/// Dispose an owner: children first, then cleanups in reverse order.
/// Disposing twice is a no-op.
pub fn dispose_owner(id: OwnerId) {
    let Some(owner) = OWNERS
        .try_with(|owners| owners.borrow_mut().take(id))
        .ok()
        .flatten()
    else {
        return;
    };

    for child_id in owner.children {
        dispose_owner(child_id);
    }

    for cleanup in owner.cleanups.into_iter().rev() {
        cleanup();
    }
}

/// Register a cleanup callback to run when the current owner is disposed.
///
/// Inside an effect this runs before the effect's next run, which is how
/// timers and other external resources are released. Outside any owner the
/// callback is dropped without running.
pub fn on_cleanup(f: impl FnOnce() + 'static) {
    let Some(owner_id) = current_owner() else {
        log::warn!("on_cleanup called outside an owner scope; callback dropped");
        return;
    };
    let mut cleanup: Option<Box<dyn FnOnce()>> = Some(Box::new(f));
    OWNERS.with(|owners| {
        if let Some(owner) = owners.borrow_mut().get_mut(owner_id) {
            owner.cleanups.extend(cleanup.take());
        }
    });
    drop(cleanup);
}

/// Number of owners that have not been disposed yet.
pub fn live_owner_count() -> usize {
    OWNERS.with(|owners| owners.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_owner_outside_scope() {
        assert!(current_owner().is_none());
    }

    #[test]
    fn test_nested_owners() {
        let cleanup_order = std::rc::Rc::new(RefCell::new(Vec::new()));

        let order = cleanup_order.clone();
        let (_, outer_id) = with_owner(|| {
            let order_inner = order.clone();
            on_cleanup(move || order_inner.borrow_mut().push("outer"));

            let order_nested = order.clone();
            with_owner(|| {
                on_cleanup(move || order_nested.borrow_mut().push("inner"));
            });
        });

        dispose_owner(outer_id);

        assert_eq!(*cleanup_order.borrow(), vec!["inner", "outer"]);
    }

    #[test]
    fn test_on_cleanup_reverse_order() {
        let cleanup_order = std::rc::Rc::new(RefCell::new(Vec::new()));

        let order = cleanup_order.clone();
        let (_, owner_id) = with_owner(|| {
            for name in ["first", "second", "third"] {
                let order = order.clone();
                on_cleanup(move || order.borrow_mut().push(name));
            }
        });

        dispose_owner(owner_id);

        assert_eq!(*cleanup_order.borrow(), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_root_owner_is_not_disposed_with_outer_scope() {
        let ran = std::rc::Rc::new(std::cell::Cell::new(false));
        let ran_clone = ran.clone();
        let ((_, root_id), outer_id) = with_owner(|| {
            with_root_owner(|| on_cleanup(move || ran_clone.set(true)))
        });

        dispose_owner(outer_id);
        assert!(!ran.get());

        dispose_owner(root_id);
        assert!(ran.get());
    }

    #[test]
    fn test_dispose_owner_twice_is_safe() {
        let (_, owner_id) = with_owner(|| {});
        dispose_owner(owner_id);
        dispose_owner(owner_id);
    }
}
