use std::collections::VecDeque;
use std::time::{Duration, Instant};

// Average over the last 30 frames
const MAX_FRAME_SAMPLES: usize = 30;

// Keeps the loop at the target frame rate and tracks when a heartbeat is due.
pub struct FramePacer {
    cycle: Duration,
    heartbeat_frames: u64,
    frames_since_heartbeat: u64,
    started: Instant,
    last_update: Instant,
    frame_times: VecDeque<Duration>,
}

impl FramePacer {
    pub fn new(frame_rate: u32, heartbeat_interval_secs: u64) -> Self {
        let now = Instant::now();
        Self {
            cycle: Duration::from_nanos(1_000_000_000 / frame_rate.max(1) as u64),
            heartbeat_frames: (frame_rate as u64 * heartbeat_interval_secs).max(1),
            frames_since_heartbeat: 0,
            started: now,
            last_update: now,
            frame_times: VecDeque::with_capacity(MAX_FRAME_SAMPLES + 1),
        }
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    // Counts a frame; true once every heartbeat interval.
    pub fn tick(&mut self) -> bool {
        self.frames_since_heartbeat += 1;
        if self.frames_since_heartbeat >= self.heartbeat_frames {
            self.frames_since_heartbeat = 0;
            true
        } else {
            false
        }
    }

    /// How long the rest of the current cycle lasts, zero if the frame overran it.
    pub fn remaining(&self) -> Duration {
        self.cycle.saturating_sub(self.last_update.elapsed())
    }

    pub fn sleep_rest_of_cycle(&mut self) {
        let sleep_time = self.remaining();
        std::thread::sleep(sleep_time);
        self.record(self.last_update.elapsed());
        self.last_update = Instant::now();
    }

    pub fn record(&mut self, frame_duration: Duration) {
        self.frame_times.push_back(frame_duration);
        if self.frame_times.len() > MAX_FRAME_SAMPLES {
            self.frame_times.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let avg_frame_time: Duration = self.frame_times.iter().sum::<Duration>() / self.frame_times.len() as u32;
        if avg_frame_time.is_zero() {
            return 0.0;
        }
        1.0 / avg_frame_time.as_secs_f64()
    }
}
