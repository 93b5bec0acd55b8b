//! Owner callbacks

use std::fmt;
use std::rc::Rc;

use fos_dom::EventHandler;

/// Zero-argument notification supplied by the component's owner.
///
/// Equality is identity: clones of one callback compare equal, two
/// separately built closures never do.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Callback that does nothing
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn emit(&self) {
        (self.0)()
    }

    /// Wrap as a DOM handler; the event itself is not forwarded
    pub(crate) fn to_handler(&self) -> EventHandler {
        let callback = self.clone();
        EventHandler::new(move |_| callback.emit())
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Callback {}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identity_equality() {
        let a = Callback::new(|| {});
        let b = Callback::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_emit() {
        let hits = Rc::new(Cell::new(0));
        let sink = hits.clone();
        let cb = Callback::from(move || sink.set(sink.get() + 1));
        cb.emit();
        cb.clone().emit();
        assert_eq!(hits.get(), 2);
    }
}
