//! Navigation state, i.e. the URL fragment.
//!
//! The fragment is the single source of truth for which page is shown, but
//! nothing in this crate touches a global location object directly. Instead
//! the view controller is handed a [`NavigationState`], which the launchers
//! pick per platform: the browser's `location.hash` on wasm, an in-process
//! value everywhere else (and in tests).

use std::cell::RefCell;
use std::rc::Rc;

/// A provider of the current route token and change notifications.
///
/// Fragments are stored without the leading `#`; the empty string means
/// "no fragment".
pub trait NavigationState {
    fn fragment(&self) -> String;

    /// Stores a new fragment. Observers are notified only if the value
    /// actually changed, matching browser `hashchange` semantics.
    fn set_fragment(&self, fragment: &str);

    /// Registers a change listener. The listener stays attached until the
    /// returned [`Subscription`] is dropped.
    fn subscribe(&self, callback: Box<dyn FnMut()>) -> Subscription;
}

/// Guard for a registered navigation listener; dropping it detaches the
/// listener. Keeps repeated mount/unmount cycles from leaking callbacks.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct MemoryNavigationInner {
    fragment: String,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// In-process navigation state. Clones share the same underlying fragment,
/// so a test can hold one handle while the controller holds another.
#[derive(Clone, Default)]
pub struct MemoryNavigation {
    inner: Rc<RefCell<MemoryNavigationInner>>,
}

impl MemoryNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigation state whose fragment is already set, as when the app is
    /// opened from a deep link.
    pub fn with_fragment(fragment: &str) -> Self {
        let nav = Self::default();
        nav.inner.borrow_mut().fragment = fragment.to_owned();
        nav
    }
}

impl NavigationState for MemoryNavigation {
    fn fragment(&self) -> String {
        self.inner.borrow().fragment.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.fragment == fragment {
                return;
            }
            inner.fragment = fragment.to_owned();
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        // Invoked outside the borrow so a listener may read the fragment.
        for listener in listeners {
            (listener.borrow_mut())();
        }
    }

    fn subscribe(&self, callback: Box<dyn FnMut()>) -> Subscription {
        let listener: Listener = Rc::new(RefCell::new(callback));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm32::BrowserNavigation;

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::NavigationState;
    use super::Subscription;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// Navigation state backed by `window.location.hash` and the browser's
    /// `hashchange` event.
    pub struct BrowserNavigation {
        window: web_sys::Window,
    }

    impl BrowserNavigation {
        pub fn new() -> Self {
            let window = web_sys::window().expect("no window in this environment");
            Self { window }
        }
    }

    impl Default for BrowserNavigation {
        fn default() -> Self {
            Self::new()
        }
    }

    impl NavigationState for BrowserNavigation {
        fn fragment(&self) -> String {
            let hash = self.window.location().hash().unwrap_or_default();
            hash.strip_prefix('#').unwrap_or(&hash).to_owned()
        }

        fn set_fragment(&self, fragment: &str) {
            // An error here means the document is gone; nothing to do.
            let _ = self.window.location().set_hash(fragment);
        }

        fn subscribe(&self, callback: Box<dyn FnMut()>) -> Subscription {
            let closure = Closure::wrap(callback);
            let _ = self
                .window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
            let window = self.window.clone();
            Subscription::new(move || {
                let _ = window.remove_event_listener_with_callback(
                    "hashchange",
                    closure.as_ref().unchecked_ref(),
                );
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_fragment_notifies_listeners() {
        let nav = MemoryNavigation::new();
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        let _sub = nav.subscribe(Box::new(move || *counter.borrow_mut() += 1));

        nav.set_fragment("/main-menu");
        assert_eq!(*fired.borrow(), 1);
        assert_eq!(nav.fragment(), "/main-menu");
    }

    #[test]
    fn unchanged_fragment_does_not_notify() {
        let nav = MemoryNavigation::with_fragment("/main-menu");
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        let _sub = nav.subscribe(Box::new(move || *counter.borrow_mut() += 1));

        nav.set_fragment("/main-menu");
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn dropped_subscription_detaches_listener() {
        let nav = MemoryNavigation::new();
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        let sub = nav.subscribe(Box::new(move || *counter.borrow_mut() += 1));

        drop(sub);
        nav.set_fragment("/main-menu");
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn listener_can_read_the_new_fragment() {
        let nav = MemoryNavigation::new();
        let seen = Rc::new(RefCell::new(String::new()));
        let handle = nav.clone();
        let sink = Rc::clone(&seen);
        let _sub = nav.subscribe(Box::new(move || {
            *sink.borrow_mut() = handle.fragment();
        }));

        nav.set_fragment("/main-menu");
        assert_eq!(*seen.borrow(), "/main-menu");
    }
}
