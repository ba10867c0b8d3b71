pub mod player;

pub use player::{AudioPlayer, ERROR_GRACE, PlaybackEvent};
