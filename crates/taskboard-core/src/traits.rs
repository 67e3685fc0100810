use crate::Location;

/// Surface a page host offers to the workflows: blocking dialogs,
/// navigation, and the busy overlay.
///
/// A browser host maps these onto `alert`, `confirm`, `location.replace`
/// and the overlay element; the terminal host maps them onto stderr/stdin.
pub trait PageHost: Send + Sync {
    /// Show the busy overlay. Called right before a remote call is dispatched.
    fn show_overlay(&self);

    /// Hide the busy overlay. Called right after the remote call settles.
    fn hide_overlay(&self);

    /// Blocking message to the user.
    fn alert(&self, message: &str);

    /// Blocking yes/no question. Returns `true` when the user accepts.
    fn confirm(&self, question: &str) -> bool;

    /// Leave the current page.
    fn navigate(&self, location: Location);
}

/// Editable projection of an entity: the fields a form exposes.
pub trait Editable<T>: Sized {
    fn from_entity(entity: &T) -> Self;

    fn apply_to(self, entity: &mut T);
}
