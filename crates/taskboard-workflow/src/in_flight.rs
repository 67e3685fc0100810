use parking_lot::Mutex;
use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which actions of a page are waiting on the backend, so a second
/// click on the same button is dropped instead of sending a duplicate.
#[derive(Debug)]
pub struct InFlight<A> {
    active: Mutex<HashSet<A>>,
}

impl<A> Default for InFlight<A> {
    fn default() -> Self {
        Self {
            active: Mutex::new(HashSet::new()),
        }
    }
}

impl<A: Copy + Eq + Hash> InFlight<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `action`. Returns `None` while an earlier claim is alive.
    pub fn begin(&self, action: A) -> Option<InFlightToken<'_, A>> {
        if self.active.lock().insert(action) {
            Some(InFlightToken {
                owner: self,
                action,
            })
        } else {
            None
        }
    }
}

/// Releases its action when dropped.
pub struct InFlightToken<'a, A: Copy + Eq + Hash> {
    owner: &'a InFlight<A>,
    action: A,
}

impl<A: Copy + Eq + Hash> Drop for InFlightToken<'_, A> {
    fn drop(&mut self) {
        self.owner.active.lock().remove(&self.action);
    }
}
