use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::autoplay::{AutoplayPlan, autoplay_effect};
use crate::config::SwiperConfig;
use crate::index::{Direction, Paging};
use crate::lazy::LoadedSet;
use crate::pagination::{ButtonContent, Placeholder, SwiperContent};
use crate::reactive::{Effect, Memo, Signal, batch, create_memo, create_signal};
use crate::scheduler::Scheduler;
use crate::surface::{PageSurface, SurfaceEvent};
use crate::view::{SwiperView, build_view};

/// Index reported alongside surface callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub index: usize,
}

/// Extra information for surface callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwiperContext {
    pub slide_count: usize,
    pub loop_enabled: bool,
}

pub type IndexChangedCallback = Rc<dyn Fn(usize)>;
pub type SurfaceCallback = Rc<dyn Fn(&SurfaceEvent, ScrollState, &SwiperContext)>;

#[derive(Default)]
struct Callbacks {
    on_index_changed: Option<IndexChangedCallback>,
    on_momentum_scroll_end: Option<SurfaceCallback>,
    on_touch_start: Option<SurfaceCallback>,
    on_touch_end: Option<SurfaceCallback>,
}

/// State reachable from timer callbacks.
struct Shared {
    config: Signal<SwiperConfig>,
    slide_count: Signal<usize>,
    current: Signal<usize>,
    surface: RefCell<Option<Box<dyn PageSurface>>>,
    callbacks: RefCell<Callbacks>,
}

impl Shared {
    fn paging(&self) -> Paging {
        let looping = self.config.with_untracked(|config| config.loop_enabled);
        Paging::new(self.slide_count.get_untracked(), looping)
    }

    fn context(&self) -> SwiperContext {
        let paging = self.paging();
        SwiperContext {
            slide_count: paging.count,
            loop_enabled: paging.looping,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.config.with_untracked(|config| config.disable) && self.slide_count.get_untracked() > 0
    }

    fn jump(&self, index: usize) {
        match self.surface.borrow_mut().as_mut() {
            Some(surface) => surface.jump_to_page(index),
            None => log::trace!("no surface attached; jump to {index} skipped"),
        }
    }

    /// Make `index` current and notify the host. Derived state is already up
    /// to date when the callbacks run. Returns `false` if nothing changed.
    fn select(&self, index: usize, event: &SurfaceEvent) -> bool {
        let index = self.paging().normalize(index);
        if self.current.get_untracked() == index {
            return false;
        }
        log::debug!("slide {} -> {index}", self.current.get_untracked());
        self.current.set(index);

        let (on_index_changed, on_scroll_end) = {
            let callbacks = self.callbacks.borrow();
            (
                callbacks.on_index_changed.clone(),
                callbacks.on_momentum_scroll_end.clone(),
            )
        };
        if let Some(callback) = on_index_changed {
            callback(index);
        }
        if let Some(callback) = on_scroll_end {
            callback(event, ScrollState { index }, &self.context());
        }
        true
    }

    /// Imperative move used by autoplay and the nav buttons.
    fn go_to(&self, index: usize) -> bool {
        let index = self.paging().normalize(index);
        if self.current.get_untracked() == index {
            return false;
        }
        self.jump(index);
        self.select(index, &SurfaceEvent::PageSelected { position: index })
    }

    fn touch_callback(&self, event: &SurfaceEvent) -> Option<SurfaceCallback> {
        let callbacks = self.callbacks.borrow();
        match event {
            SurfaceEvent::TouchStart { .. } => callbacks.on_touch_start.clone(),
            SurfaceEvent::TouchEnd { .. } => callbacks.on_touch_end.clone(),
            SurfaceEvent::PageSelected { .. } => None,
        }
    }
}

/// A paged carousel over host-provided slides of type `S`.
///
/// The swiper owns the current index and everything derived from it. The
/// host feeds it surface events, reads [`render`](Self::render) to draw, and
/// attaches a [`PageSurface`] that receives programmatic jumps.
///
/// # Example
///
/// ```ignore
/// let config = SwiperConfig::new().autoplay(true);
/// let swiper = Swiper::new(vec!["red", "green", "blue"], config, scheduler)
///     .on_index_changed(|index| log::info!("now showing {index}"));
/// swiper.attach_surface(Box::new(pager));
/// ```
pub struct Swiper<S> {
    shared: Rc<Shared>,
    slides: Vec<S>,
    content: SwiperContent<S>,
    loaded: Memo<LoadedSet>,
    _autoplay: Effect,
}

impl<S> Swiper<S> {
    pub fn new(slides: Vec<S>, config: SwiperConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        let paging = Paging::new(slides.len(), config.loop_enabled);
        let shared = Rc::new(Shared {
            current: create_signal(paging.normalize(config.index)),
            slide_count: create_signal(slides.len()),
            config: create_signal(config),
            surface: RefCell::new(None),
            callbacks: RefCell::new(Callbacks::default()),
        });

        let loaded = {
            let (config, current, count) = (
                shared.config.clone(),
                shared.current.clone(),
                shared.slide_count.clone(),
            );
            create_memo(move || {
                let (lazy, radius) =
                    config.with(|config| (config.load_minimal, config.load_minimal_size));
                LoadedSet::compute(current.get(), lazy, radius, count.get())
            })
        };

        let plan = {
            let (config, count) = (shared.config.clone(), shared.slide_count.clone());
            create_memo(move || {
                let count = count.get();
                config.with(|config| AutoplayPlan::from_config(config, count))
            })
        };

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let autoplay = autoplay_effect(
            plan,
            shared.current.clone(),
            scheduler,
            Rc::new(move |target| {
                if let Some(shared) = weak.upgrade() {
                    log::trace!("autoplay tick -> {target}");
                    shared.go_to(target);
                }
            }),
        );

        Self {
            shared,
            slides,
            content: SwiperContent::default(),
            loaded,
            _autoplay: autoplay,
        }
    }

    pub fn on_index_changed<F: Fn(usize) + 'static>(self, callback: F) -> Self {
        self.shared.callbacks.borrow_mut().on_index_changed = Some(Rc::new(callback));
        self
    }

    pub fn on_momentum_scroll_end<F>(self, callback: F) -> Self
    where
        F: Fn(&SurfaceEvent, ScrollState, &SwiperContext) + 'static,
    {
        self.shared.callbacks.borrow_mut().on_momentum_scroll_end = Some(Rc::new(callback));
        self
    }

    pub fn on_touch_start<F>(self, callback: F) -> Self
    where
        F: Fn(&SurfaceEvent, ScrollState, &SwiperContext) + 'static,
    {
        self.shared.callbacks.borrow_mut().on_touch_start = Some(Rc::new(callback));
        self
    }

    pub fn on_touch_end<F>(self, callback: F) -> Self
    where
        F: Fn(&SurfaceEvent, ScrollState, &SwiperContext) + 'static,
    {
        self.shared.callbacks.borrow_mut().on_touch_end = Some(Rc::new(callback));
        self
    }

    pub fn prev_button(mut self, content: S) -> Self {
        self.content.prev_button = ButtonContent::Custom(content);
        self
    }

    pub fn next_button(mut self, content: S) -> Self {
        self.content.next_button = ButtonContent::Custom(content);
        self
    }

    /// Shown in place of slides outside the lazy window.
    pub fn loader(mut self, content: S) -> Self {
        self.content.loader = Placeholder::Custom(content);
        self
    }

    pub fn loader_text(mut self, text: impl Into<String>) -> Self {
        self.content.loader = Placeholder::Text(text.into());
        self
    }

    pub fn dot(mut self, content: S) -> Self {
        self.content.dot = Some(content);
        self
    }

    pub fn active_dot(mut self, content: S) -> Self {
        self.content.active_dot = Some(content);
        self
    }

    /// Hand the pager primitive to the swiper. Replaces any previous one.
    pub fn attach_surface(&self, surface: Box<dyn PageSurface>) {
        *self.shared.surface.borrow_mut() = Some(surface);
    }

    pub fn detach_surface(&self) -> Option<Box<dyn PageSurface>> {
        self.shared.surface.borrow_mut().take()
    }

    /// Host re-render with new options. A different `index` moves the
    /// current slide there; otherwise the current slide is kept.
    pub fn set_config(&self, config: SwiperConfig) {
        let shared = &self.shared;
        let previous_index = shared.config.with_untracked(|config| config.index);
        batch(|| {
            let requested = (config.index != previous_index).then_some(config.index);
            shared.config.set(config);
            let paging = shared.paging();
            let index = requested.unwrap_or_else(|| shared.current.get_untracked());
            shared.current.set(paging.normalize(index));
        });
    }

    pub fn update_config(&self, f: impl FnOnce(&mut SwiperConfig)) {
        let mut config = self.config();
        f(&mut config);
        self.set_config(config);
    }

    /// Replace the slide list wholesale.
    pub fn set_slides(&mut self, slides: Vec<S>) {
        self.slides = slides;
        let shared = &self.shared;
        let count = self.slides.len();
        batch(|| {
            shared.slide_count.set(count);
            let paging = shared.paging();
            shared
                .current
                .set(paging.normalize(shared.current.get_untracked()));
        });
    }

    /// Feed a notification from the pager primitive.
    ///
    /// A `PageSelected` for the slide that is already current is dropped
    /// without notifying the host, so a surface echoing a programmatic jump
    /// does not report the change twice. Everything is ignored while the
    /// swiper is disabled or has no slides.
    pub fn handle_surface_event(&self, event: SurfaceEvent) {
        if !self.shared.is_interactive() {
            log::trace!("ignoring {event:?} while inactive");
            return;
        }
        match event {
            SurfaceEvent::PageSelected { position } => {
                self.shared.select(position, &event);
            }
            SurfaceEvent::TouchStart { .. } | SurfaceEvent::TouchEnd { .. } => {
                if let Some(callback) = self.shared.touch_callback(&event) {
                    let state = ScrollState {
                        index: self.current_index(),
                    };
                    callback(&event, state, &self.shared.context());
                }
            }
        }
    }

    pub fn press_next(&self) -> bool {
        self.press(Direction::Forward)
    }

    pub fn press_prev(&self) -> bool {
        self.press(Direction::Backward)
    }

    fn press(&self, direction: Direction) -> bool {
        if !self.shared.is_interactive() || self.slide_count() <= 1 {
            return false;
        }
        let target = self.shared.paging().step(self.current_index(), direction);
        self.shared.go_to(target)
    }

    pub fn render(&self) -> SwiperView<'_, S> {
        let loaded = self.loaded.get_untracked();
        let current = self.current_index();
        self.shared.config.with_untracked(|config| {
            build_view(config, &self.slides, &self.content, current, &loaded)
        })
    }

    pub fn current_index(&self) -> usize {
        self.shared.current.get_untracked()
    }

    pub fn effective_index(&self) -> usize {
        self.shared.paging().effective(self.current_index())
    }

    pub fn loaded_indices(&self) -> LoadedSet {
        self.loaded.get_untracked()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn config(&self) -> SwiperConfig {
        self.shared.config.get_untracked()
    }

    pub fn paging(&self) -> Paging {
        self.shared.paging()
    }
}
