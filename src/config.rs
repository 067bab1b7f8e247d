use std::time::Duration;

use crate::error::{Result, SwiperError};
use crate::index::Direction;
use crate::style::{ButtonStyle, Color, ContainerStyle, DotStyle, PaginationStyle};
use crate::surface::Orientation;

pub const DEFAULT_AUTOPLAY_TIMEOUT: f64 = 2.5;

/// Composition-time options of a swiper.
///
/// Every field has a default; builder methods mirror the field names.
/// Changing any field through [`Swiper::set_config`](crate::Swiper::set_config)
/// re-derives the view, and changing `index` also moves the current slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SwiperConfig {
    pub horizontal: bool,
    pub loop_enabled: bool,
    pub index: usize,
    pub shows_buttons: bool,
    pub shows_pagination: bool,
    pub autoplay: bool,
    /// Seconds between autoplay steps. Fractions are allowed.
    pub autoplay_timeout: f64,
    pub autoplay_direction: Direction,
    pub scroll_enabled: bool,
    pub disable: bool,
    pub load_minimal: bool,
    pub load_minimal_size: usize,
    pub dot_color: Color,
    pub active_dot_color: Color,
    pub dot_style: DotStyle,
    pub active_dot_style: DotStyle,
    pub pagination_style: PaginationStyle,
    pub button_style: ButtonStyle,
    pub style: ContainerStyle,
    pub container_style: ContainerStyle,
}

impl Default for SwiperConfig {
    fn default() -> Self {
        Self {
            horizontal: true,
            loop_enabled: true,
            index: 0,
            shows_buttons: false,
            shows_pagination: true,
            autoplay: false,
            autoplay_timeout: DEFAULT_AUTOPLAY_TIMEOUT,
            autoplay_direction: Direction::Forward,
            scroll_enabled: true,
            disable: false,
            load_minimal: false,
            load_minimal_size: 1,
            dot_color: Color::from_hex(0xCCCCCC),
            active_dot_color: Color::BLACK,
            dot_style: DotStyle::default(),
            active_dot_style: DotStyle::default(),
            pagination_style: PaginationStyle::default(),
            button_style: ButtonStyle::default(),
            style: ContainerStyle::default(),
            container_style: ContainerStyle::default(),
        }
    }
}

impl SwiperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn loop_enabled(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn shows_buttons(mut self, shows_buttons: bool) -> Self {
        self.shows_buttons = shows_buttons;
        self
    }

    pub fn shows_pagination(mut self, shows_pagination: bool) -> Self {
        self.shows_pagination = shows_pagination;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn autoplay_timeout(mut self, seconds: f64) -> Self {
        self.autoplay_timeout = seconds;
        self
    }

    pub fn autoplay_direction(mut self, direction: Direction) -> Self {
        self.autoplay_direction = direction;
        self
    }

    pub fn scroll_enabled(mut self, scroll_enabled: bool) -> Self {
        self.scroll_enabled = scroll_enabled;
        self
    }

    pub fn disable(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }

    pub fn load_minimal(mut self, load_minimal: bool) -> Self {
        self.load_minimal = load_minimal;
        self
    }

    pub fn load_minimal_size(mut self, radius: usize) -> Self {
        self.load_minimal_size = radius;
        self
    }

    pub fn dot_color(mut self, color: Color) -> Self {
        self.dot_color = color;
        self
    }

    pub fn active_dot_color(mut self, color: Color) -> Self {
        self.active_dot_color = color;
        self
    }

    pub fn dot_style(mut self, style: DotStyle) -> Self {
        self.dot_style = style;
        self
    }

    pub fn active_dot_style(mut self, style: DotStyle) -> Self {
        self.active_dot_style = style;
        self
    }

    pub fn pagination_style(mut self, style: PaginationStyle) -> Self {
        self.pagination_style = style;
        self
    }

    pub fn button_style(mut self, style: ButtonStyle) -> Self {
        self.button_style = style;
        self
    }

    pub fn style(mut self, style: ContainerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = style;
        self
    }

    pub fn orientation(&self) -> Orientation {
        if self.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// The autoplay step interval.
    pub fn autoplay_interval(&self) -> Result<Duration> {
        if !self.autoplay_timeout.is_finite() || self.autoplay_timeout <= 0.0 {
            return Err(SwiperError::InvalidTimeout(self.autoplay_timeout));
        }
        Duration::try_from_secs_f64(self.autoplay_timeout)
            .map_err(|_| SwiperError::InvalidTimeout(self.autoplay_timeout))
    }
}
