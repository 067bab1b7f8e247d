//! A paged carousel ("swiper") component.
//!
//! The swiper keeps the active slide index, derives pagination dots, nav
//! buttons and a lazy-render window from it, and runs an optional autoplay
//! timer. Drawing and gesture handling belong to an external pager
//! primitive reached through [`PageSurface`].

pub mod autoplay;
pub mod config;
pub mod error;
pub mod index;
pub mod lazy;
pub mod pagination;
pub mod reactive;
pub mod scheduler;
pub mod style;
pub mod surface;
pub mod swiper;
pub mod testing;
pub mod view;

pub use config::SwiperConfig;
pub use error::SwiperError;
pub use index::{Direction, Paging};
pub use lazy::LoadedSet;
pub use scheduler::{CalloopScheduler, Scheduler, TimerHandle};
pub use surface::{Orientation, PageSurface, SurfaceEvent, SurfaceProps};
pub use swiper::{ScrollState, Swiper, SwiperContext};
pub use view::{PagerView, SlideView, SwiperView};

pub mod prelude {
    pub use crate::pagination::{ButtonContent, Placeholder};
    pub use crate::style::{ButtonStyle, Color, ContainerStyle, DotStyle, PaginationStyle};
    pub use crate::{
        CalloopScheduler, Direction, Orientation, PageSurface, Scheduler, ScrollState,
        SurfaceEvent, Swiper, SwiperConfig, SwiperContext, SwiperView,
    };
}
