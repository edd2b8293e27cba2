use std::time::{Duration, Instant};

pub struct Sleeper {
    pub delay: Duration,
}

impl Sleeper {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Blocks for the full delay. A sleep that returns early just goes back to
    /// sleep for whatever is left.
    pub fn pause(&self) {
        let deadline = Instant::now() + self.delay;

        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }

            spin_sleep::sleep(deadline - now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_waits_full_delay() {
        let sleeper = Sleeper::new(Duration::from_millis(15));

        let start = Instant::now();
        sleeper.pause();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn zero_delay_returns() {
        Sleeper::new(Duration::ZERO).pause();
    }
}
