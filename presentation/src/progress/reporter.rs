//! Progress reporting for analysis runs

use colored::Colorize;
use gapscout_application::ports::progress::ProgressNotifier;
use gapscout_domain::{GenerationTask, Phase, Slot, SlotOutcome, SlotStatus};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a run with indicatif progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Extract => "Phase 1: Extract",
            Phase::Generate => "Phase 2: Generate",
        }
    }

    fn phase_short_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Extract => "Phase 1",
            Phase::Generate => "Phase 2",
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.phase_bar.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }

    /// Print above the bars without tearing them
    fn println(&self, line: String) {
        if self.multi.println(&line).is_err() {
            eprintln!("{}", line);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Warning shown when a fetched page is suspiciously short
fn low_confidence_warning(outcome: &SlotOutcome) -> String {
    let len = outcome.page().map(|p| p.len()).unwrap_or(0);
    format!(
        "{} content is very short ({} chars). It might be blocked or require login. Check --debug output.",
        outcome.slot, len
    )
}

/// Warning shown when a slot could not be used
fn skipped_warning(outcome: &SlotOutcome) -> String {
    format!("Could not scrape {} ({}). Skipping.", outcome.slot, outcome.url)
}

fn oversized_warning(task: &GenerationTask, chars: usize, limit: usize) -> String {
    format!(
        "{} prompt is {} chars (over {}); the provider may truncate or reject it.",
        task, chars, limit
    )
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let phase_name = Self::phase_display_name(phase);

        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase_name.to_string());
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.phase_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_slot_start(&self, slot: &Slot, url: &str) {
        self.with_bar(|pb| pb.set_message(format!("{} {}", slot, url.dimmed())));
    }

    fn on_slot_complete(&self, outcome: &SlotOutcome, low_confidence: bool) {
        match &outcome.status {
            SlotStatus::Extracted { .. } if low_confidence => {
                self.println(format!("{} {}", "!".yellow(), low_confidence_warning(outcome)));
            }
            SlotStatus::Extracted { .. } => {}
            SlotStatus::Failed { .. } => {
                self.println(format!("{} {}", "!".yellow(), skipped_warning(outcome)));
            }
        }

        self.with_bar(|pb| {
            let status = if outcome.is_success() {
                format!("{} {}", "v".green(), outcome.slot)
            } else {
                format!("{} {}", "x".red(), outcome.slot)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_prompt_oversized(&self, task: &GenerationTask, chars: usize, limit: usize) {
        self.println(format!("{} {}", "!".yellow(), oversized_warning(task, chars, limit)));
    }

    fn on_generation_complete(&self, task: &GenerationTask, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), task)
            } else {
                format!("{} {}", "x".red(), task)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_phase_complete(&self, phase: &Phase) {
        let bar = self.phase_bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = bar {
            let phase_name = Self::phase_short_name(phase);
            pb.finish_with_message(format!("{} complete!", phase_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let phase_name = ProgressReporter::phase_display_name(phase);
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase_name.bold(),
            total_tasks
        );
    }

    fn on_slot_complete(&self, outcome: &SlotOutcome, low_confidence: bool) {
        if outcome.is_success() {
            eprintln!("  {} {} {}", "v".green(), outcome.slot, outcome.url);
            if low_confidence {
                eprintln!("    {}", low_confidence_warning(outcome).yellow());
            }
        } else {
            eprintln!("  {} {}", "x".red(), skipped_warning(outcome));
        }
    }

    fn on_prompt_oversized(&self, task: &GenerationTask, chars: usize, limit: usize) {
        eprintln!("  {} {}", "!".yellow(), oversized_warning(task, chars, limit));
    }

    fn on_generation_complete(&self, task: &GenerationTask, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), task);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), task);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapscout_domain::PageText;

    #[test]
    fn test_warnings_use_original_slot_numbers() {
        let failed = SlotOutcome::failed(Slot::Competitor(2), "https://b.com", "HTTP 404");
        assert_eq!(
            skipped_warning(&failed),
            "Could not scrape Competitor 2 (https://b.com). Skipping."
        );

        let short = SlotOutcome::extracted(
            Slot::Competitor(3),
            PageText::from_cleaned("https://c.com", "Please log in"),
        );
        assert!(low_confidence_warning(&short).starts_with("Competitor 3 content is very short (13 chars)"));
    }

    #[test]
    fn test_reporter_tracks_phase_bar() {
        let reporter = ProgressReporter::new();
        reporter.on_phase_start(&Phase::Generate, 2);
        reporter.on_generation_complete(&GenerationTask::GapReport, true);
        reporter.on_generation_complete(&GenerationTask::Outline, false);
        reporter.on_phase_complete(&Phase::Generate);
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }
}
