use super::surface::UploadSurface;

/// Holds the surface in its busy state for as long as it lives.
///
/// Dropping the guard re-enables the submit control and hides the busy
/// indicator, whichever way the attempt ended, including the pending future
/// being dropped.
pub struct BusyGuard<'a, S: UploadSurface> {
    surface: &'a S,
}

impl<'a, S: UploadSurface> BusyGuard<'a, S> {
    pub fn acquire(surface: &'a S) -> Self {
        surface.set_busy(true);
        Self { surface }
    }
}

impl<S: UploadSurface> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_busy(false);
    }
}
