//! Dots and prev/next buttons. Pure functions of the slide count, the
//! effective index and the configuration.

use crate::config::SwiperConfig;
use crate::style::{ButtonStyle, Color, DotStyle, PaginationStyle};

/// Host-replaceable label of a navigation button.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonContent<S> {
    Text(String),
    Custom(S),
}

impl<S> ButtonContent<S> {
    pub fn prev() -> Self {
        Self::Text("<".to_string())
    }

    pub fn next() -> Self {
        Self::Text(">".to_string())
    }
}

/// What an unloaded slide shows instead of its content.
#[derive(Debug, Clone, PartialEq)]
pub enum Placeholder<S> {
    Text(String),
    Custom(S),
}

impl<S> Default for Placeholder<S> {
    fn default() -> Self {
        Self::Text("Loading...".to_string())
    }
}

/// Everything the host can substitute besides the slides themselves.
#[derive(Debug, Clone)]
pub struct SwiperContent<S> {
    pub prev_button: ButtonContent<S>,
    pub next_button: ButtonContent<S>,
    pub loader: Placeholder<S>,
    /// Replaces the styled inactive dot when set.
    pub dot: Option<S>,
    /// Replaces the styled active dot when set.
    pub active_dot: Option<S>,
}

impl<S> Default for SwiperContent<S> {
    fn default() -> Self {
        Self {
            prev_button: ButtonContent::prev(),
            next_button: ButtonContent::next(),
            loader: Placeholder::default(),
            dot: None,
            active_dot: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot<'a, S> {
    pub index: usize,
    pub active: bool,
    pub color: Color,
    pub style: DotStyle,
    pub content: Option<&'a S>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination<'a, S> {
    pub dots: Vec<Dot<'a, S>>,
    pub style: PaginationStyle,
}

impl<S> Pagination<'_, S> {
    pub fn active_index(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.index)
    }
}

/// One dot per slide, highlighted at `effective`. Hidden for fewer than two
/// slides or when the host turned pagination off.
pub fn pagination<'a, S>(
    count: usize,
    effective: usize,
    config: &SwiperConfig,
    content: &'a SwiperContent<S>,
) -> Option<Pagination<'a, S>> {
    if !config.shows_pagination || count <= 1 {
        return None;
    }
    let dots = (0..count)
        .map(|index| {
            let active = index == effective;
            if active {
                Dot {
                    index,
                    active,
                    color: config.active_dot_color,
                    style: config.active_dot_style,
                    content: content.active_dot.as_ref(),
                }
            } else {
                Dot {
                    index,
                    active,
                    color: config.dot_color,
                    style: config.dot_style,
                    content: content.dot.as_ref(),
                }
            }
        })
        .collect();
    Some(Pagination {
        dots,
        style: config.pagination_style,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavButton<'a, S> {
    pub content: &'a ButtonContent<S>,
    /// Disabled buttons are drawn but ignore presses.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavButtons<'a, S> {
    pub prev: NavButton<'a, S>,
    pub next: NavButton<'a, S>,
    pub style: ButtonStyle,
}

pub fn nav_buttons<'a, S>(
    count: usize,
    config: &SwiperConfig,
    content: &'a SwiperContent<S>,
) -> Option<NavButtons<'a, S>> {
    if !config.shows_buttons || count <= 1 {
        return None;
    }
    let enabled = !config.disable;
    Some(NavButtons {
        prev: NavButton {
            content: &content.prev_button,
            enabled,
        },
        next: NavButton {
            content: &content.next_button,
            enabled,
        },
        style: config.button_style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_dot_per_slide_with_single_active() {
        let content = SwiperContent::<()>::default();
        let config = SwiperConfig::default();
        for count in 2..7 {
            for effective in 0..count {
                let pagination = pagination(count, effective, &config, &content).unwrap();
                assert_eq!(pagination.dots.len(), count);
                assert_eq!(pagination.dots.iter().filter(|d| d.active).count(), 1);
                assert_eq!(pagination.active_index(), Some(effective));
            }
        }
    }

    #[test]
    fn test_no_dots_for_short_lists_or_when_hidden() {
        let content = SwiperContent::<()>::default();
        assert!(pagination(0, 0, &SwiperConfig::default(), &content).is_none());
        assert!(pagination(1, 0, &SwiperConfig::default(), &content).is_none());
        let hidden = SwiperConfig::new().shows_pagination(false);
        assert!(pagination(4, 0, &hidden, &content).is_none());
    }

    #[test]
    fn test_dot_colors_and_custom_content() {
        let content = SwiperContent {
            active_dot: Some("*"),
            dot: Some("."),
            ..SwiperContent::default()
        };
        let config = SwiperConfig::new()
            .dot_color(Color::WHITE)
            .active_dot_color(Color::from_hex(0xFF0000));
        let pagination = pagination(3, 1, &config, &content).unwrap();
        assert_eq!(pagination.dots[0].color, Color::WHITE);
        assert_eq!(pagination.dots[1].color, Color::from_hex(0xFF0000));
        assert_eq!(pagination.dots[1].content, Some(&"*"));
        assert_eq!(pagination.dots[2].content, Some(&"."));
    }

    #[test]
    fn test_buttons_follow_disable() {
        let content = SwiperContent::<()>::default();
        let config = SwiperConfig::new().shows_buttons(true);
        let buttons = nav_buttons(3, &config, &content).unwrap();
        assert!(buttons.prev.enabled && buttons.next.enabled);
        assert_eq!(buttons.prev.content, &ButtonContent::Text("<".into()));

        let disabled = config.clone().disable(true);
        let buttons = nav_buttons(3, &disabled, &content).unwrap();
        assert!(!buttons.prev.enabled && !buttons.next.enabled);

        assert!(nav_buttons(1, &config, &content).is_none());
        assert!(nav_buttons(3, &SwiperConfig::default(), &content).is_none());
    }
}
