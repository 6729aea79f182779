//! Scoped ownership of an external notification source.
//!
//! # Design
//! - A listener exists only while its owner asks for it and is released on drop.
//! - Callers re-evaluate the guard on every visibility change, so at most one
//!   source is attached at any time.

/// Holds an attached listener while the owning surface is open.
#[derive(Debug)]
pub struct ListenerGuard<L> {
    active: Option<L>,
}

impl<L> ListenerGuard<L> {
    /// Attach via `attach` only when `open` is set; otherwise hold nothing.
    #[must_use]
    pub fn attach_while(open: bool, attach: impl FnOnce() -> L) -> Self {
        Self {
            active: open.then(attach),
        }
    }

    /// Whether a listener is currently held.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Detach the listener now.
    pub fn release(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe {
        attached: Rc<Cell<usize>>,
    }

    impl Probe {
        fn attach(attached: &Rc<Cell<usize>>) -> Self {
            attached.set(attached.get() + 1);
            Self {
                attached: Rc::clone(attached),
            }
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.attached.set(self.attached.get() - 1);
        }
    }

    #[test]
    fn closed_surface_never_attaches() {
        let attached = Rc::new(Cell::new(0));
        let guard = ListenerGuard::attach_while(false, || Probe::attach(&attached));
        assert!(!guard.is_active());
        assert_eq!(attached.get(), 0);
    }

    #[test]
    fn release_detaches_once() {
        let attached = Rc::new(Cell::new(0));
        let mut guard = ListenerGuard::attach_while(true, || Probe::attach(&attached));
        assert!(guard.is_active());
        assert_eq!(attached.get(), 1);
        guard.release();
        guard.release();
        assert!(!guard.is_active());
        assert_eq!(attached.get(), 0);
    }

    #[test]
    fn cleanup_before_reattach_keeps_a_single_listener() {
        let attached = Rc::new(Cell::new(0));
        let mut guard = ListenerGuard::attach_while(true, || Probe::attach(&attached));
        for open in [false, true, true, false, true] {
            guard.release();
            guard = ListenerGuard::attach_while(open, || Probe::attach(&attached));
            assert!(attached.get() <= 1);
            assert_eq!(attached.get(), usize::from(open));
        }
        drop(guard);
        assert_eq!(attached.get(), 0);
    }
}
