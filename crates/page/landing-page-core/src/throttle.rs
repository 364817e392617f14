//! Leading-edge call throttle driven by host timestamps.

#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    open_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms: limit_ms.max(0.0),
            open_at: None,
        }
    }

    /// True if a call at `now_ms` may run. A passing call blocks further calls
    /// until `now_ms + limit_ms`.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if let Some(open_at) = self.open_at {
            if now_ms < open_at {
                return false;
            }
        }
        self.open_at = Some(now_ms + self.limit_ms);
        true
    }
}
