//! Single-clip audio playback.
//!
//! At most one clip is in flight at a time; `play` while busy is a silent
//! no-op, and every play affordance in the UI is disabled while busy. A
//! clip that fails to open, decode, or start is logged and written off
//! after a fixed grace delay, so a caller waiting on its completion (the
//! teaching-mode sequencer) is never stuck on one bad file.

use crate::error::PlaybackError;
use log::{error, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long a failed clip still counts as pending before it is reported
/// finished.
pub const ERROR_GRACE: Duration = Duration::from_millis(2000);

/// Completion signal handed out by [`AudioPlayer::poll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackEvent {
    /// The clip ran to its end, or a failed clip's grace delay elapsed.
    Finished,
}

pub struct AudioPlayer {
    // The stream must outlive the sink for sound to keep coming out.
    output: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
    current_clip: Option<PathBuf>,
    error_grace_until: Option<Instant>,
}

impl AudioPlayer {
    /// Opens the default output device. A machine without one still gets a
    /// usable player; every clip then takes the error path and resolves
    /// after the grace delay.
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(e) => {
                warn!("no audio output device, playback disabled: {e}");
                None
            }
        };
        Self {
            output,
            sink: None,
            current_clip: None,
            error_grace_until: None,
        }
    }

    /// True from the moment a clip starts until its completion is observed
    /// by [`Self::poll`]. A failed clip never becomes busy.
    pub fn is_busy(&self) -> bool {
        self.sink.is_some()
    }

    /// True when nothing is pending at all, not even a grace deadline.
    pub fn is_idle(&self) -> bool {
        self.sink.is_none() && self.error_grace_until.is_none()
    }

    /// Starts `clip`, a path relative to `audio_root`. Ignored while busy.
    pub fn play(&mut self, audio_root: &Path, clip: &str, now: Instant) {
        if self.is_busy() {
            return;
        }

        let path = audio_root.join(clip);
        match self.start_clip(&path) {
            Ok(sink) => {
                self.sink = Some(sink);
                self.current_clip = Some(path);
            }
            Err(e) => {
                error!("audio playback failed: {e}");
                self.error_grace_until = Some(now + ERROR_GRACE);
            }
        }
    }

    fn start_clip(&self, path: &Path) -> Result<Sink, PlaybackError> {
        let (_, handle) = self
            .output
            .as_ref()
            .ok_or(PlaybackError::NoOutputDevice)?;

        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let sink = Sink::try_new(handle).map_err(|source| PlaybackError::Output {
            path: path.to_path_buf(),
            source,
        })?;

        sink.append(source);
        Ok(sink)
    }

    /// Reports at most one completion per call; call once per frame. A
    /// drained sink and an elapsed grace deadline each count as one
    /// completion.
    pub fn poll(&mut self, now: Instant) -> Option<PlaybackEvent> {
        if self.sink.as_ref().is_some_and(|sink| sink.empty()) {
            self.sink = None;
            self.current_clip = None;
            return Some(PlaybackEvent::Finished);
        }

        if self.error_grace_until.is_some_and(|until| now >= until) {
            self.error_grace_until = None;
            return Some(PlaybackEvent::Finished);
        }

        None
    }

    pub fn current_clip(&self) -> Option<&Path> {
        self.current_clip.as_deref()
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}
