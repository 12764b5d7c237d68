//! Progress notification port
//!
//! Defines the interface for reporting progress during an analysis run.

use gapscout_domain::{GenerationTask, Phase, Slot, SlotOutcome};

/// Callback for progress updates during an analysis run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);

    /// Called before a slot's URL is fetched
    fn on_slot_start(&self, _slot: &Slot, _url: &str) {}

    /// Called once per fetched slot with its outcome
    ///
    /// `low_confidence` is set when the text is shorter than the configured
    /// threshold; the text is still used.
    fn on_slot_complete(&self, outcome: &SlotOutcome, low_confidence: bool);

    /// Called when an assembled prompt is larger than the configured warning size
    fn on_prompt_oversized(&self, _task: &GenerationTask, _chars: usize, _limit: usize) {}

    /// Called when a generation call finishes
    fn on_generation_complete(&self, task: &GenerationTask, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
    fn on_slot_complete(&self, _outcome: &SlotOutcome, _low_confidence: bool) {}
    fn on_generation_complete(&self, _task: &GenerationTask, _success: bool) {}
}
