use std::time::Duration;

/// Cronómetro de la sesión.
///
/// No lee el reloj por sí mismo: quien lo usa le pasa el instante `now`
/// (en egui, `ctx.input(|i| i.time)`), que es monótono. Una vez parado no se
/// vuelve a mover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionClock {
    started_at: Duration,
    elapsed: Duration,
    stopped: bool,
}

impl SessionClock {
    pub fn start(now: Duration) -> Self {
        Self {
            started_at: now,
            elapsed: Duration::ZERO,
            stopped: false,
        }
    }

    /// Muestreo periódico.
    pub fn tick(&mut self, now: Duration) {
        if !self.stopped {
            self.elapsed = now.saturating_sub(self.started_at);
        }
    }

    pub fn stop(&mut self, now: Duration) {
        self.tick(now);
        self.stopped = true;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// `MM:SS`; los minutos no se truncan a dos cifras.
pub fn format_mm_ss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(Duration::ZERO), "00:00");
        assert_eq!(format_mm_ss(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_mm_ss(Duration::from_secs(61)), "01:01");
        assert_eq!(format_mm_ss(Duration::from_secs(100 * 60 + 5)), "100:05");
    }

    #[test]
    fn ticks_measure_from_start() {
        let mut clock = SessionClock::start(Duration::from_secs(10));
        clock.tick(Duration::from_secs(25));
        assert_eq!(clock.elapsed(), Duration::from_secs(15));
    }

    #[test]
    fn stopped_clock_is_frozen() {
        let mut clock = SessionClock::start(Duration::from_secs(0));
        clock.stop(Duration::from_secs(42));
        clock.tick(Duration::from_secs(500));
        clock.stop(Duration::from_secs(900));
        assert!(clock.is_stopped());
        assert_eq!(clock.elapsed(), Duration::from_secs(42));
    }

    #[test]
    fn time_going_backwards_saturates() {
        let mut clock = SessionClock::start(Duration::from_secs(30));
        clock.tick(Duration::from_secs(5));
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
