use std::time::{Duration, Instant};

/// 記錄每個 ETL 階段的耗時
#[derive(Debug)]
pub struct RunMonitor {
    start_time: Instant,
    phase_start: Instant,
    phases: Vec<(String, Duration)>,
    enabled: bool,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            phase_start: now,
            phases: Vec::new(),
            enabled,
        }
    }

    /// 重新開始計時，清掉上一次執行的階段紀錄
    pub fn start(&mut self) {
        let now = Instant::now();
        self.start_time = now;
        self.phase_start = now;
        self.phases.clear();
    }

    pub fn total_elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn start_phase(&mut self) {
        self.phase_start = Instant::now();
    }

    pub fn finish_phase(&mut self, phase: &str) {
        if !self.enabled {
            return;
        }
        let elapsed = self.phase_start.elapsed();
        tracing::info!("📊 {} - Time: {:?}", phase, elapsed);
        self.phases.push((phase.to_string(), elapsed));
    }

    pub fn log_final_stats(&self) {
        if !self.enabled {
            return;
        }
        let slowest = self
            .phases
            .iter()
            .max_by_key(|(_, elapsed)| *elapsed)
            .map(|(name, _)| name.as_str())
            .unwrap_or("-");
        tracing::info!(
            "📊 Final Stats - Total Time: {:?}, Slowest Phase: {}",
            self.total_elapsed(),
            slowest
        );
    }

    pub fn phases(&self) -> &[(String, Duration)] {
        &self.phases
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_records_nothing() {
        let mut monitor = RunMonitor::default();
        monitor.start_phase();
        monitor.finish_phase("Extract");
        assert!(!monitor.is_enabled());
        assert!(monitor.phases().is_empty());
    }

    #[test]
    fn test_enabled_monitor_keeps_phase_order() {
        let mut monitor = RunMonitor::new(true);
        for phase in ["Extract", "Transform", "Load"] {
            monitor.start_phase();
            monitor.finish_phase(phase);
        }
        let names: Vec<&str> = monitor.phases().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Extract", "Transform", "Load"]);
    }

    #[test]
    fn test_start_excludes_idle_time_before_run() {
        let mut monitor = RunMonitor::new(true);
        std::thread::sleep(Duration::from_millis(200));
        monitor.start();
        assert!(monitor.total_elapsed() < Duration::from_millis(200));
    }

    #[test]
    fn test_start_clears_previous_phases() {
        let mut monitor = RunMonitor::new(true);
        monitor.start_phase();
        monitor.finish_phase("Extract");
        monitor.start();
        assert!(monitor.phases().is_empty());
    }
}
