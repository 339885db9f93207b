//! Linear wizard navigation over a fixed 3-step sequence.

/// Number of steps in the wizard, zero-indexed 0..3.
pub const TOTAL_STEPS: usize = 3;

/// Cursor over the wizard sequence with forward/backward guards.
///
/// Step 2 is permanently disabled in this configuration, so the cursor can
/// only ever sit on 0 or 1. That is a deliberate restriction, not a bug.
#[derive(Debug, Clone, Default)]
pub struct Stepper {
    current: usize,
}

impl Stepper {
    /// Start at the first step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, step: usize) -> bool {
        self.current == step
    }

    pub fn is_completed(&self, step: usize) -> bool {
        self.current > step
    }

    /// The final step is disabled in this configuration.
    pub fn is_disabled(&self, step: usize) -> bool {
        step >= TOTAL_STEPS - 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current < 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    /// Advance one step; a no-op when the next step is out of reach.
    pub fn next_step(&mut self) {
        if self.can_go_next() {
            self.current += 1;
        }
    }

    /// Go back one step; a no-op on the first step.
    pub fn previous_step(&mut self) {
        if self.can_go_previous() {
            self.current -= 1;
        }
    }

    /// Jump directly to `step` if it is enabled and at most one ahead of
    /// the cursor (skipping ahead is never allowed).
    pub fn go_to_step(&mut self, step: usize) {
        if !self.is_disabled(step) && step <= self.current + 1 {
            self.current = step;
        }
    }
}
