//! Boundary with the native paged-scroll view that does the actual gesture
//! handling and drawing.

/// Paging axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Imperative side of the pager primitive.
///
/// The swiper calls this for autoplay steps and button presses. Swipes
/// travel the other way, as [`SurfaceEvent::PageSelected`].
pub trait PageSurface {
    fn jump_to_page(&mut self, index: usize);
}

impl<F: FnMut(usize)> PageSurface for F {
    fn jump_to_page(&mut self, index: usize) {
        self(index)
    }
}

/// Props forwarded to the pager primitive on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceProps {
    pub initial_page: usize,
    pub orientation: Orientation,
    /// `false` blocks user swipes only; programmatic jumps still work.
    pub scroll_enabled: bool,
}

/// Notifications coming back from the pager primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// A page settled, either after a swipe or after `jump_to_page`.
    PageSelected { position: usize },
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
}
