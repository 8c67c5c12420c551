use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed number of frames per second by sleeping off
/// whatever is left of each frame.
#[derive(Debug)]
pub struct FrameLimiter {
    period: Duration,
    frame_start: Instant,
    slow_frames: u64,
}

impl FrameLimiter {
    pub fn new(frames_per_second: u32) -> FrameLimiter {
        FrameLimiter {
            period: Duration::from_secs(1) / frames_per_second.max(1),
            frame_start: Instant::now(),
            slow_frames: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn slow_frames(&self) -> u64 {
        self.slow_frames
    }

    /// Time left in the frame, or `None` when the frame overran.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        if elapsed < self.period {
            Some(self.period - elapsed)
        } else {
            None
        }
    }

    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        match self.remaining(elapsed) {
            Some(rest) => thread::sleep(rest),
            None => {
                self.slow_frames += 1;
                debug!("SLOW: frame took {:.2}ms", elapsed.as_secs_f64() * 1000.0);
            }
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_from_rate() {
        assert_eq!(FrameLimiter::new(60).period(), Duration::from_nanos(16_666_666));
        assert_eq!(FrameLimiter::new(4).period(), Duration::from_millis(250));
    }

    #[test]
    fn remaining_time() {
        let limiter = FrameLimiter::new(4);
        assert_eq!(limiter.remaining(Duration::from_millis(100)), Some(Duration::from_millis(150)));
        assert_eq!(limiter.remaining(Duration::from_millis(250)), None);
        assert_eq!(limiter.remaining(Duration::from_secs(1)), None);
    }

    #[test]
    fn wait_sleeps_out_the_frame() {
        let mut limiter = FrameLimiter::new(50);
        let start = Instant::now();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert_eq!(limiter.slow_frames(), 0);
    }
}
