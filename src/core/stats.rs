//! Frame rate and mesh size counters

/// Rolling FPS over the last 60 frame timestamps, plus the latest mesh size.
#[derive(Debug)]
pub struct FrameStats {
    frames: Vec<f64>,
    pub particles: usize,
    pub segments: usize,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(61),
            particles: 0,
            segments: 0,
        }
    }

    /// Record a frame at `now_ms` together with what it drew.
    pub fn tick(&mut self, now_ms: f64, particles: usize, segments: usize) {
        self.frames.push(now_ms);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
        self.particles = particles;
        self.segments = segments;
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed == 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
