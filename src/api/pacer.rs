use std::thread;
use std::time::{Duration, Instant};

/// Keeps consecutive requests at least `min_gap` apart
#[derive(Debug)]
pub(crate) struct Pacer {
    min_gap: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub(crate) fn new(min_gap: Duration) -> Self {
        Self {
            min_gap,
            last: None,
        }
    }

    /// Block until the next request may go out, then mark it as sent
    pub(crate) fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.min_gap {
                thread::sleep(self.min_gap - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
