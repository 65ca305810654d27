use std::sync::atomic::{AtomicU64, Ordering};

/// Sink for recoverable anomalies found while normalizing a feed.
pub trait Diagnostics: Send + Sync {
    /// A target referenced a spacecraft id missing from the reference table.
    fn unknown_spacecraft(&self, id: &str, name: &str);
}

/// Logs each event and keeps a running count.
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    unknown_spacecraft: AtomicU64,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_spacecraft_count(&self) -> u64 {
        self.unknown_spacecraft.load(Ordering::Relaxed)
    }
}

impl Diagnostics for LogDiagnostics {
    fn unknown_spacecraft(&self, id: &str, name: &str) {
        self.unknown_spacecraft.fetch_add(1, Ordering::Relaxed);
        log::warn!("new spacecraft encountered: id={} name={}", id, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_unknown_spacecraft() {
        let diagnostics = LogDiagnostics::new();
        diagnostics.unknown_spacecraft("9999", "NEW");
        diagnostics.unknown_spacecraft("9998", "NEWER");
        assert_eq!(diagnostics.unknown_spacecraft_count(), 2);
    }
}
