pub mod effect;
pub mod memo;
pub mod owner;
pub mod runtime;
pub mod signal;

pub use effect::{Effect, create_effect};
pub use memo::{Memo, create_memo};
pub use owner::{live_owner_count, on_cleanup};
pub use runtime::{batch, live_effect_count, live_signal_count};
pub use signal::{Signal, create_signal};
