use taskboard_core::PageHost;

/// Busy overlay for the lifetime of one remote call. Shown on creation,
/// hidden on drop, so every exit path of the call hides it.
pub struct OverlayGuard<'a> {
    host: &'a dyn PageHost,
}

impl<'a> OverlayGuard<'a> {
    pub fn show(host: &'a dyn PageHost) -> Self {
        tracing::debug!("overlay shown");
        host.show_overlay();
        Self { host }
    }
}

impl Drop for OverlayGuard<'_> {
    fn drop(&mut self) {
        self.host.hide_overlay();
        tracing::debug!("overlay hidden");
    }
}
