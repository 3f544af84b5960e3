#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

use crate::net::types::Step;

/// Fixed logical key for the persisted step index (zero-based).
pub const PROGRESS_KEY: &str = "tutorialStep";

/// URL query parameter carrying the current step (one-based, shareable).
pub const STEP_PARAM: &str = "step";

/// Navigator over the ordered tutorial step list.
///
/// Owns the step list and a zero-based index clamped to `[0, len - 1]`.
/// All transitions are pure; callers are responsible for mirroring the
/// index into localStorage and the URL after each mutation.
#[derive(Clone, Debug, Default)]
pub struct StepNavigator {
    steps: Vec<Step>,
    current: usize,
}

impl StepNavigator {
    /// Build a navigator, resolving the initial index in priority order:
    /// URL parameter (one-based, in range) → persisted value (zero-based,
    /// in range) → `0`. Unparseable or out-of-range candidates are dropped
    /// silently and fall through to the next source.
    pub fn new(steps: Vec<Step>, url_param: Option<&str>, persisted: Option<usize>) -> Self {
        let len = steps.len();

        let from_url = url_param
            .and_then(|raw| raw.parse::<usize>().ok())
            .and_then(|one_based| one_based.checked_sub(1))
            .filter(|idx| *idx < len);

        let current = from_url
            .or_else(|| persisted.filter(|idx| *idx < len))
            .unwrap_or(0);

        Self { steps, current }
    }

    /// The zero-based index of the current step.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The current step, if any steps are loaded.
    pub fn step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.steps.len() <= self.current + 1
    }

    /// Move forward one step. No-op at the last step.
    pub fn advance(&mut self) -> usize {
        if !self.at_last() {
            self.current += 1;
        }
        self.current
    }

    /// Move back one step. No-op at the first step.
    pub fn retreat(&mut self) -> usize {
        if !self.at_first() {
            self.current -= 1;
        }
        self.current
    }

    /// Return to the first step. The caller clears the persisted entry;
    /// reset itself never re-persists.
    pub fn reset(&mut self) -> usize {
        self.current = 0;
        self.current
    }

    /// Completion percentage for the progress bar.
    ///
    /// The gating warning panel is presentation-only and does not count
    /// toward the denominator.
    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        // (current + 1) * 100 first so e.g. 3 of 10 is exactly 30.0.
        ((self.current + 1) * 100) as f64 / self.steps.len() as f64
    }

    /// Index of the first step that carries the gating flag while its
    /// predecessor does not — the boundary where the prerequisite warning
    /// is shown. `None` if no step is gated.
    pub fn warning_index(&self) -> Option<usize> {
        self.steps.iter().enumerate().position(|(i, step)| {
            step.requires_ball_and_chain && i > 0 && !self.steps[i - 1].requires_ball_and_chain
        })
    }

    /// Whether the prerequisite warning panel is visible right now.
    pub fn warning_visible(&self) -> bool {
        self.warning_index() == Some(self.current)
    }
}
