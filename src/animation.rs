//! Playback pacing for rendered frames.

use std::time::Duration;

/// What happens after the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// Stop on the last frame
    #[default]
    Once,
    /// Wrap around to the first frame
    Loop,
}

/// Current state of playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    /// Reached the end in `LoopMode::Once`
    Finished,
}

/// Frame cursor for paced playback.
///
/// The controller does no timing itself. The caller shows
/// `current_frame()`, waits `interval()`, then calls `tick()`.
///
/// ## Example
///
/// ```rust
/// use quanta_cerebra::{PlaybackController, PlaybackState};
///
/// let mut playback = PlaybackController::new(10);
/// playback.set_frame_count(3);
/// playback.play();
///
/// let mut shown = vec![playback.current_frame()];
/// while playback.tick() {
///     shown.push(playback.current_frame());
/// }
/// assert_eq!(shown, vec![0, 1, 2]);
/// assert_eq!(playback.state(), PlaybackState::Finished);
/// ```
#[derive(Clone, Debug)]
pub struct PlaybackController {
    current_frame: usize,
    frame_count: usize,
    fps: u32,
    state: PlaybackState,
    loop_mode: LoopMode,
}

impl PlaybackController {
    /// Create a stopped controller at the given frame rate (at least 1).
    pub fn new(fps: u32) -> Self {
        Self {
            current_frame: 0,
            frame_count: 0,
            fps: fps.max(1),
            state: PlaybackState::Stopped,
            loop_mode: LoopMode::Once,
        }
    }

    /// Set the total number of frames, clamping the cursor.
    pub fn set_frame_count(&mut self, count: usize) {
        self.frame_count = count;
        if self.current_frame >= count {
            self.current_frame = count.saturating_sub(1);
        }
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Milliseconds between frames.
    #[inline]
    pub fn interval_ms(&self) -> u64 {
        (1000 / u64::from(self.fps)).max(1)
    }

    /// Delay between frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
        if mode == LoopMode::Loop && self.state == PlaybackState::Finished {
            self.state = PlaybackState::Stopped;
        }
    }

    #[inline]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Start or resume playback. Does nothing with no frames or once finished.
    pub fn play(&mut self) {
        if self.frame_count > 0 && self.state != PlaybackState::Finished {
            self.state = PlaybackState::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Stopped;
        }
    }

    /// Stop and rewind to the first frame.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.current_frame = 0;
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[inline]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Advance one frame. Returns false once there is nothing more to show.
    pub fn tick(&mut self) -> bool {
        if self.state != PlaybackState::Playing || self.frame_count == 0 {
            return false;
        }

        if self.current_frame + 1 < self.frame_count {
            self.current_frame += 1;
            return true;
        }

        match self.loop_mode {
            LoopMode::Loop => {
                self.current_frame = 0;
                true
            }
            LoopMode::Once => {
                self.state = PlaybackState::Finished;
                false
            }
        }
    }

    /// Pause and move forward one frame, wrapping at the end.
    pub fn step_forward(&mut self) {
        if self.frame_count == 0 {
            return;
        }
        self.pause();
        self.current_frame = (self.current_frame + 1) % self.frame_count;
    }

    /// Pause and move back one frame, wrapping at the start.
    pub fn step_backward(&mut self) {
        if self.frame_count == 0 {
            return;
        }
        self.pause();
        self.current_frame = self
            .current_frame
            .checked_sub(1)
            .unwrap_or(self.frame_count - 1);
    }
}
