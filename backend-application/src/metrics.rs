use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    local_writes: AtomicU64,
    local_write_errors: AtomicU64,
    remote_writes: AtomicU64,
    remote_write_errors: AtomicU64,
    remote_read_errors: AtomicU64,
}

impl Metrics {
    pub fn record_local_write(&self) {
        self.local_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_local_write_error(&self) {
        self.local_write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_write(&self) {
        self.remote_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_write_error(&self) {
        self.remote_write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_read_error(&self) {
        self.remote_read_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn remote_write_errors(&self) -> u64 {
        self.remote_write_errors.load(Ordering::Relaxed)
    }

    pub fn remote_read_errors(&self) -> u64 {
        self.remote_read_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let local_writes = self.local_writes.load(Ordering::Relaxed);
        let local_errors = self.local_write_errors.load(Ordering::Relaxed);
        let remote_writes = self.remote_writes.load(Ordering::Relaxed);
        let remote_write_errors = self.remote_write_errors.load(Ordering::Relaxed);
        let remote_read_errors = self.remote_read_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE mintpass_local_writes_total counter\n\
mintpass_local_writes_total {}\n\
# TYPE mintpass_local_write_errors_total counter\n\
mintpass_local_write_errors_total {}\n\
# TYPE mintpass_remote_writes_total counter\n\
mintpass_remote_writes_total {}\n\
# TYPE mintpass_remote_write_errors_total counter\n\
mintpass_remote_write_errors_total {}\n\
# TYPE mintpass_remote_read_errors_total counter\n\
mintpass_remote_read_errors_total {}\n",
            local_writes, local_errors, remote_writes, remote_write_errors, remote_read_errors
        )
    }
}
