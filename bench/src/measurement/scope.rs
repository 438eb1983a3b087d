use crate::utils::clock::{Clock, Timestamp, TrialDuration};

/// Times exactly one bracketed region of code.
///
/// The start instant is captured on construction. When the scope is dropped,
/// whether by falling out of the block, an early return, `?` or a panic
/// unwinding through it, the elapsed time is written into the slot it was
/// created with. The slot stays mutably borrowed until then, so it cannot be
/// read while the measurement is still running.
///
/// ```
/// use reptest::measurement::scope::MeasurementScope;
/// use reptest::utils::clock::TrialDuration;
///
/// let mut elapsed = TrialDuration::ZERO;
/// {
///     let _scope = MeasurementScope::new(&mut elapsed);
///     std::hint::black_box((0..1_000u64).sum::<u64>());
/// }
/// assert!(elapsed >= TrialDuration::ZERO);
/// ```
#[must_use = "the measurement ends as soon as the scope is dropped"]
pub struct MeasurementScope<'a> {
    start: Timestamp,
    slot: &'a mut TrialDuration,
}

impl<'a> MeasurementScope<'a> {
    pub fn new(slot: &'a mut TrialDuration) -> Self {
        Self {
            start: Clock::now(),
            slot,
        }
    }

    /// Ends the measurement now. Equivalent to dropping the scope.
    pub fn close(self) {}
}

impl Drop for MeasurementScope<'_> {
    fn drop(&mut self) {
        *self.slot = Clock::now() - self.start;
    }
}

/// Runs `f` inside a measurement scope writing into `slot`.
pub fn measure<F, R>(slot: &mut TrialDuration, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _scope = MeasurementScope::new(slot);
    f()
}
