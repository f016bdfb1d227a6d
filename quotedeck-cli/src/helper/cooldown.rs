use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Swallows rapid repeats of the same quote toggle, mirroring the admin
/// UI's per-tweet debounce. De-duplication is caller policy; the gateway
/// itself fires every call it is given.
pub struct CooldownGate {
    window: Duration,
    seen: HashMap<String, Instant>,
}

impl CooldownGate {
    pub fn new(window: Duration) -> Self {
        CooldownGate {
            window,
            seen: HashMap::new(),
        }
    }

    /// Returns false while `id` is still inside the cooldown window.
    pub fn try_begin(&mut self, id: &str) -> bool {
        let now = Instant::now();
        match self.seen.get(id) {
            Some(last) if now.duration_since(*last) < self.window => false,
            _ => {
                self.seen.insert(id.to_owned(), now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_within_window_is_blocked() {
        let mut gate = CooldownGate::new(Duration::from_secs(60));
        assert!(gate.try_begin("t1"));
        assert!(!gate.try_begin("t1"));
        assert!(gate.try_begin("t2"));
    }

    #[test]
    fn zero_window_never_blocks() {
        let mut gate = CooldownGate::new(Duration::ZERO);
        assert!(gate.try_begin("t1"));
        assert!(gate.try_begin("t1"));
    }
}
