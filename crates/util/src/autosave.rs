/// Fixed-interval tick source for the auto-save feature.
///
/// The timer thread only ever sends instants over a channel; the event loop
/// that owns the document receives them in its own context, so an auto-save
/// can never run concurrently with an interactive save. There is no
/// cancellation beyond dropping the ticker (or process exit).
#[derive(Debug, Clone)]
pub struct AutosaveTicker {
    ticks: crossbeam_channel::Receiver<std::time::Instant>,
}

impl AutosaveTicker {
    #[must_use]
    pub fn new(interval: std::time::Duration) -> Self {
        Self {
            ticks: crossbeam_channel::tick(interval),
        }
    }

    /// The receiving end, for use in a `select!` alongside other event
    /// sources.
    #[must_use]
    pub fn receiver(&self) -> &crossbeam_channel::Receiver<std::time::Instant> {
        &self.ticks
    }

    /// Non-blocking check; true if at least one interval has elapsed since
    /// the last tick was consumed. Intermediate ticks are drained so a
    /// stalled consumer saves once, not once per missed interval.
    pub fn tick_due(&self) -> bool {
        let mut due = false;
        while self.ticks.try_recv().is_ok() {
            due = true;
        }
        due
    }
}
