use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    polls: AtomicU64,
    poll_errors: AtomicU64,
    readings_written: AtomicU64,
    devices_skipped: AtomicU64,
    write_errors: AtomicU64,
}

impl Metrics {
    pub fn record_poll(&self, reading_count: usize, skipped_count: usize) {
        self.polls.fetch_add(1, Ordering::Relaxed);
        self.readings_written
            .fetch_add(reading_count as u64, Ordering::Relaxed);
        self.devices_skipped
            .fetch_add(skipped_count as u64, Ordering::Relaxed);
    }

    pub fn record_poll_error(&self) {
        self.poll_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let polls = self.polls.load(Ordering::Relaxed);
        let poll_errors = self.poll_errors.load(Ordering::Relaxed);
        let readings = self.readings_written.load(Ordering::Relaxed);
        let skipped = self.devices_skipped.load(Ordering::Relaxed);
        let write_errors = self.write_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE stratus_polls_total counter\n\
stratus_polls_total {}\n\
# TYPE stratus_poll_errors_total counter\n\
stratus_poll_errors_total {}\n\
# TYPE stratus_readings_written_total counter\n\
stratus_readings_written_total {}\n\
# TYPE stratus_devices_skipped_total counter\n\
stratus_devices_skipped_total {}\n\
# TYPE stratus_write_errors_total counter\n\
stratus_write_errors_total {}\n",
            polls, poll_errors, readings, skipped, write_errors
        )
    }
}
