//! Seamless looping marquee
//!
//! The rendered list is two copies of the transfers back to back. The offset
//! advances with wall-clock time and wraps at the length of one copy, so the
//! second copy slides into exactly the place the first one started.

/// Duplicate `items` end to end for the looping scroll
pub fn loop_items<T: Clone>(items: &[T]) -> Vec<T> {
    let mut doubled = Vec::with_capacity(items.len() * 2);
    doubled.extend_from_slice(items);
    doubled.extend_from_slice(items);
    doubled
}

#[derive(Debug, Clone)]
pub struct Marquee {
    /// Distance scrolled into the first copy, always in `[0, content_len)`
    offset: f64,
    /// Length of a single copy of the content
    content_len: f64,
    /// Units per second
    speed: f64,
    /// Timestamp (ms) of the previous frame
    last_frame_ms: Option<f64>,
    stopped: bool,
}

impl Marquee {
    pub fn new(content_len: f64, speed: f64) -> Self {
        Self {
            offset: 0.0,
            content_len: sanitize(content_len),
            speed: sanitize(speed),
            last_frame_ms: None,
            stopped: false,
        }
    }

    /// One full loop takes `rows` seconds, one row per second
    pub fn for_rows(rows: usize, row_height: f64) -> Self {
        Self::new(rows as f64 * row_height, row_height)
    }

    /// Resize after the list changes, keeping the offset inside one copy
    pub fn set_content_len(&mut self, content_len: f64) {
        self.content_len = sanitize(content_len);
        self.offset = self.wrap(self.offset);
    }

    /// Advance by `elapsed_secs` of real time and return the new offset
    pub fn advance(&mut self, elapsed_secs: f64) -> f64 {
        if self.stopped || !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return self.offset;
        }
        self.offset = self.wrap(self.offset + self.speed * elapsed_secs);
        self.offset
    }

    /// Advance to an animation-frame timestamp in milliseconds.
    /// The first frame only records the baseline.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if self.stopped {
            return self.offset;
        }
        let elapsed = self.last_frame_ms.map(|last| (now_ms - last) / 1000.0).unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);
        self.advance(elapsed)
    }

    /// Freeze the marquee; further ticks are no-ops
    pub fn stop(&mut self) {
        self.stopped = true;
        self.last_frame_ms = None;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn wrap(&self, value: f64) -> f64 {
        if self.content_len <= 0.0 {
            return 0.0;
        }
        value.rem_euclid(self.content_len)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
