use std::time::Instant;

/// Seconds between FPS readings shown in the overlay
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - frame number and timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Infinite iterator that stamps each rendered frame
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start_time).as_secs_f32(),
            delta: now.duration_since(self.last_frame_time).as_secs_f32(),
        };
        self.frame_number += 1;
        self.last_frame_time = now;
        Some(info)
    }
}

/// Averages frame deltas over a fixed window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    elapsed: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Record one frame, returns true when a new reading is available
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        self.frames += 1;
        if self.elapsed < self.interval {
            return false;
        }
        self.fps = self.frames as f32 / self.elapsed;
        self.elapsed = 0.0;
        self.frames = 0;
        true
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_UPDATE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_numbers_increase() {
        let mut clock = FrameClock::new();
        let first = clock.next().unwrap();
        let second = clock.next().unwrap();
        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!(second.time >= first.time);
        assert_eq!(clock.frame_number(), 2);
    }

    #[test]
    fn test_fps_reading() {
        let mut counter = FpsCounter::new(1.0);
        for _ in 0..3 {
            assert!(!counter.tick(0.25));
        }
        assert!(counter.tick(0.25));
        assert_eq!(counter.fps(), 4.0);
    }
}
