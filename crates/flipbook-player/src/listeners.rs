//! Frame-change and completion listener registry.
//!
//! Listeners are plain closures invoked synchronously, in registration order,
//! from inside the controller operation that caused the event. Registration
//! hands back a [`ListenerId`] the owner uses to unregister; anything still
//! registered is released when the registry (and its controller) is dropped.

use std::fmt;

/// Handle returned by listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type FrameCallback = Box<dyn FnMut(usize)>;
type CompleteCallback = Box<dyn FnMut()>;

/// Subscribers for `on_new_frame` / `on_animation_complete`.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    frame: Vec<(ListenerId, FrameCallback)>,
    complete: Vec<(ListenerId, CompleteCallback)>,
}

impl Listeners {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Subscribe to frame changes. The callback receives the new frame index.
    pub fn add_frame_listener(&mut self, callback: impl FnMut(usize) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.frame.push((id, Box::new(callback)));
        id
    }

    /// Subscribe to natural session completion.
    pub fn add_complete_listener(&mut self, callback: impl FnMut() + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.complete.push((id, Box::new(callback)));
        id
    }

    /// Unregister a listener. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.len();
        self.frame.retain(|(listener, _)| *listener != id);
        self.complete.retain(|(listener, _)| *listener != id);
        self.len() != before
    }

    /// Unregister everything.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.complete.clear();
    }

    /// Total number of registered listeners.
    pub fn len(&self) -> usize {
        self.frame.len() + self.complete.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn emit_new_frame(&mut self, index: usize) {
        for (_, callback) in &mut self.frame {
            callback(index);
        }
    }

    pub(crate) fn emit_complete(&mut self) {
        for (_, callback) in &mut self.complete {
            callback();
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("frame", &self.frame.len())
            .field("complete", &self.complete.len())
            .finish()
    }
}
