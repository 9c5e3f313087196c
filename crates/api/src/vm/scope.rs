// Path: crates/api/src/vm/scope.rs

//! An RAII region in which executed work is not charged to the ambient budget.

use super::ChargeControl;

/// A guard that suspends gas charging on creation and resumes it on drop.
///
/// Dropping is the only way to release the guard, so charging resumes exactly
/// once on every exit path of the enclosing scope: normal return, early `?`
/// return, or a panic unwinding through it.
#[must_use = "charging resumes as soon as the scope is dropped"]
pub struct UnchargedScope<'a, M: ChargeControl + ?Sized> {
    control: &'a M,
}

impl<'a, M: ChargeControl + ?Sized> UnchargedScope<'a, M> {
    /// Creates a new guard, immediately suspending charging on `control`.
    pub fn enter(control: &'a M) -> Self {
        control.suspend_charging();
        Self { control }
    }
}

impl<M: ChargeControl + ?Sized> Drop for UnchargedScope<'_, M> {
    fn drop(&mut self) {
        self.control.resume_charging();
    }
}

impl<M: ChargeControl + ?Sized> std::fmt::Debug for UnchargedScope<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnchargedScope").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Default)]
    struct Recorder {
        depth: Cell<u32>,
        events: RefCell<Vec<&'static str>>,
    }

    impl ChargeControl for Recorder {
        fn suspend_charging(&self) {
            self.depth.set(self.depth.get() + 1);
            self.events.borrow_mut().push("suspend");
        }
        fn resume_charging(&self) {
            self.depth.set(self.depth.get() - 1);
            self.events.borrow_mut().push("resume");
        }
    }

    #[test]
    fn guard_resumes_on_drop() {
        let recorder = Recorder::default();
        {
            let _scope = UnchargedScope::enter(&recorder);
            assert_eq!(recorder.depth.get(), 1);
        }
        assert_eq!(recorder.depth.get(), 0);
        assert_eq!(*recorder.events.borrow(), vec!["suspend", "resume"]);
    }

    #[test]
    fn guard_resumes_on_early_error_return() {
        fn failing(recorder: &Recorder) -> Result<(), &'static str> {
            let _scope = UnchargedScope::enter(recorder);
            Err::<(), _>("boom")?;
            Ok(())
        }
        let recorder = Recorder::default();
        assert!(failing(&recorder).is_err());
        assert_eq!(recorder.depth.get(), 0);
    }

    #[test]
    fn guard_resumes_when_unwinding() {
        let recorder = Recorder::default();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _scope = UnchargedScope::enter(&recorder);
            panic!("callee blew up");
        }));
        assert!(result.is_err());
        assert_eq!(recorder.depth.get(), 0);
        assert_eq!(recorder.events.borrow().len(), 2);
    }

    #[test]
    fn nested_guards_release_in_reverse_order() {
        let recorder = Recorder::default();
        {
            let _outer = UnchargedScope::enter(&recorder);
            {
                let _inner = UnchargedScope::enter(&recorder);
                assert_eq!(recorder.depth.get(), 2);
            }
            assert_eq!(recorder.depth.get(), 1);
        }
        assert_eq!(recorder.depth.get(), 0);
    }

    #[test]
    fn works_through_trait_objects() {
        let recorder = Recorder::default();
        let control: &dyn ChargeControl = &recorder;
        drop(UnchargedScope::enter(control));
        assert_eq!(recorder.depth.get(), 0);
    }
}
