//! A stopwatch for timing sections of code.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time.
///
/// Reading a running stopwatch gives the time since start; after
/// [`stop`](Stopwatch::stop), readings are frozen at the stopped value.
///
/// ```
/// use densejson::timer::Stopwatch;
///
/// let mut watch = Stopwatch::start();
/// // do stuff
/// watch.stop();
/// assert!(watch.read().starts_with('['));
/// ```
#[derive(Debug, Clone)]
pub struct Stopwatch {
    started: Instant,
    stopped: Option<Duration>,
}

impl Stopwatch {
    /// Start a new stopwatch.
    pub fn start() -> Self {
        Self { started: Instant::now(), stopped: None }
    }

    /// Freeze the elapsed time.
    pub fn stop(&mut self) {
        self.stopped = Some(self.started.elapsed());
    }

    /// Restart from zero.
    pub fn reset(&mut self) {
        self.started = Instant::now();
        self.stopped = None;
    }

    /// Elapsed time: frozen if stopped, running otherwise.
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }

    /// Elapsed time formatted like `[0.003 s]`.
    pub fn read(&self) -> String {
        format!("[{:.3} s]", self.elapsed().as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn stopped_reading_is_frozen() {
        let mut watch = Stopwatch::start();
        watch.stop();
        let first = watch.elapsed();
        sleep(Duration::from_millis(5));
        assert_eq!(watch.elapsed(), first);
    }

    #[test]
    fn running_reading_advances() {
        let watch = Stopwatch::start();
        let first = watch.elapsed();
        sleep(Duration::from_millis(5));
        assert!(watch.elapsed() > first);
    }

    #[test]
    fn read_format() {
        let mut watch = Stopwatch::start();
        watch.stop();
        let text = watch.read();
        assert!(text.starts_with('[') && text.ends_with(" s]"), "got {}", text);
    }
}
