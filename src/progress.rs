use std::io::{self, Write};
use std::time::Instant;

/// Tracker de progreso para lecturas de filas y pasadas de renumeración
pub struct ProgressTracker {
    label: &'static str,
    start_time: Instant,
    processed: u64,
    report_interval: u64,
}

impl ProgressTracker {
    pub fn new(label: &'static str, report_interval: u64) -> Self {
        Self {
            label,
            start_time: Instant::now(),
            processed: 0,
            report_interval: report_interval.max(1),
        }
    }

    /// Suma una fila; reporta cada `report_interval`
    pub fn tick(&mut self) {
        self.processed += 1;
        if self.processed % self.report_interval == 0 {
            self.report();
        }
    }

    fn rate(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.processed as f64 / elapsed
        } else {
            0.0
        }
    }

    fn report(&self) {
        print!(
            "\r📊 {}: {} | Rate: {:.0} rec/s | Time: {:.1}s",
            self.label,
            self.processed,
            self.rate(),
            self.start_time.elapsed().as_secs_f64()
        );
        io::stdout().flush().ok();
    }

    pub fn finish(&self) {
        let reported = self.processed >= self.report_interval;
        println!(
            "{}✅ {} complete: {} records in {:.1}s ({:.0} rec/s)",
            if reported { "\n" } else { "" },
            self.label,
            self.processed,
            self.start_time.elapsed().as_secs_f64(),
            self.rate()
        );
    }

    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.processed
    }
}
