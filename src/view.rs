use crate::config::SwiperConfig;
use crate::index::Paging;
use crate::lazy::LoadedSet;
use crate::pagination::{
    NavButtons, Pagination, Placeholder, SwiperContent, nav_buttons, pagination,
};
use crate::style::ContainerStyle;
use crate::surface::SurfaceProps;

/// What one pager page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideView<'a, S> {
    Loaded(&'a S),
    Placeholder(&'a Placeholder<S>),
}

impl<'a, S> SlideView<'a, S> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SlideView::Loaded(_))
    }

    pub fn slide(&self) -> Option<&'a S> {
        match self {
            SlideView::Loaded(slide) => Some(slide),
            SlideView::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagerView<'a, S> {
    pub surface: SurfaceProps,
    pub style: ContainerStyle,
    pub container_style: ContainerStyle,
    pub slides: Vec<SlideView<'a, S>>,
    pub pagination: Option<Pagination<'a, S>>,
    pub buttons: Option<NavButtons<'a, S>>,
}

/// A rendered snapshot of the swiper.
#[derive(Debug, Clone, PartialEq)]
pub enum SwiperView<'a, S> {
    /// Disabled or no slides: a bare container, nothing wired to the pager.
    Empty { style: ContainerStyle },
    Pager(PagerView<'a, S>),
}

impl<'a, S> SwiperView<'a, S> {
    pub fn is_empty(&self) -> bool {
        matches!(self, SwiperView::Empty { .. })
    }

    pub fn as_pager(&self) -> Option<&PagerView<'a, S>> {
        match self {
            SwiperView::Pager(pager) => Some(pager),
            SwiperView::Empty { .. } => None,
        }
    }
}

pub(crate) fn build_view<'a, S>(
    config: &SwiperConfig,
    slides: &'a [S],
    content: &'a SwiperContent<S>,
    current: usize,
    loaded: &LoadedSet,
) -> SwiperView<'a, S> {
    if config.disable || slides.is_empty() {
        return SwiperView::Empty {
            style: config.style,
        };
    }

    let paging = Paging::new(slides.len(), config.loop_enabled);
    let rendered = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            if loaded.contains(index) {
                SlideView::Loaded(slide)
            } else {
                SlideView::Placeholder(&content.loader)
            }
        })
        .collect();

    SwiperView::Pager(PagerView {
        surface: SurfaceProps {
            initial_page: paging.normalize(config.index),
            orientation: config.orientation(),
            scroll_enabled: config.scroll_enabled,
        },
        style: config.style,
        container_style: config.container_style,
        slides: rendered,
        pagination: pagination(slides.len(), paging.effective(current), config, content),
        buttons: nav_buttons(slides.len(), config, content),
    })
}
