use thiserror::Error;

/// Failures at the infrastructure edges of a swiper.
///
/// None of these reach the host through the component callbacks; the swiper
/// logs them and falls back to a safe behavior.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwiperError {
    /// The event loop refused to register the autoplay timer source.
    #[error("failed to register autoplay timer: {0}")]
    TimerRegistration(String),

    /// `autoplay_timeout` was not a finite number of seconds greater than zero.
    #[error("autoplay timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),
}

pub type Result<T, E = SwiperError> = std::result::Result<T, E>;
