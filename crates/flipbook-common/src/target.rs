//! Display surface seam.

/// Surface that shows the frame a player selected.
///
/// Players only ever write to the target; they never read back what it shows.
/// `F` is the frame identifier type (sprite handle, texture key, text block...).
pub trait FrameTarget<F: ?Sized> {
    /// Show `frame`, or show nothing when `None`.
    fn set_frame(&mut self, frame: Option<&F>);

    /// Toggle whether the current frame is rendered at all.
    fn set_visible(&mut self, visible: bool);
}

impl<F: ?Sized, T: FrameTarget<F> + ?Sized> FrameTarget<F> for &mut T {
    fn set_frame(&mut self, frame: Option<&F>) {
        (**self).set_frame(frame);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }
}

impl<F: ?Sized, T: FrameTarget<F> + ?Sized> FrameTarget<F> for Box<T> {
    fn set_frame(&mut self, frame: Option<&F>) {
        (**self).set_frame(frame);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }
}
