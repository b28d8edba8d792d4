use serde::{Deserialize, Serialize};

pub const SPIN_COOLDOWN_MS: u32 = 250;
pub const AD_BREAK_EVERY: u32 = 5;
pub const AD_BREAK_BEFORE_MS: u32 = 1000;
pub const AD_BREAK_AFTER_MS: u32 = 500;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSpinState {
    #[default]
    Idle,
    Running,
    StoppingRequested,
}

/// What the driver should do next. The driver performs the step, awaits it,
/// then asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSpinStep {
    Spin,
    Cooldown { ms: u32 },
    AdBreak { before_ms: u32, after_ms: u32 },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ReadyToSpin,
    AfterSpin,
    AdCheck,
}

/// Repeats spins until the user stops or spins run out, with an ad break
/// every few spins. Stop requests take effect before the next spin is issued;
/// a spin already in flight always finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSpinController {
    state: AutoSpinState,
    phase: Phase,
    completed: u32,
}

impl Default for AutoSpinController {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoSpinController {
    pub fn new() -> Self {
        Self {
            state: AutoSpinState::Idle,
            phase: Phase::ReadyToSpin,
            completed: 0,
        }
    }

    pub fn state(&self) -> AutoSpinState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == AutoSpinState::Running
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Returns false if a loop is already running or winding down.
    pub fn start(&mut self) -> bool {
        if self.state != AutoSpinState::Idle {
            return false;
        }
        self.state = AutoSpinState::Running;
        self.phase = Phase::ReadyToSpin;
        self.completed = 0;
        log::info!("auto-spin started");
        true
    }

    pub fn request_stop(&mut self) {
        if self.state == AutoSpinState::Running {
            log::info!("auto-spin stop requested after {} spins", self.completed);
            self.state = AutoSpinState::StoppingRequested;
        }
    }

    pub fn next_step(&mut self, spins_left: u32) -> AutoSpinStep {
        if self.state != AutoSpinState::Running {
            return self.finish();
        }

        match self.phase {
            Phase::AfterSpin => {
                self.phase = Phase::AdCheck;
                AutoSpinStep::Cooldown { ms: SPIN_COOLDOWN_MS }
            }
            Phase::AdCheck if self.completed % AD_BREAK_EVERY == 0 && spins_left > 0 => {
                self.phase = Phase::ReadyToSpin;
                AutoSpinStep::AdBreak {
                    before_ms: AD_BREAK_BEFORE_MS,
                    after_ms: AD_BREAK_AFTER_MS,
                }
            }
            Phase::AdCheck | Phase::ReadyToSpin => {
                if spins_left == 0 {
                    return self.finish();
                }
                self.phase = Phase::AfterSpin;
                self.completed += 1;
                AutoSpinStep::Spin
            }
        }
    }

    fn finish(&mut self) -> AutoSpinStep {
        if self.state != AutoSpinState::Idle {
            log::info!("auto-spin finished after {} spins", self.completed);
        }
        self.state = AutoSpinState::Idle;
        self.phase = Phase::ReadyToSpin;
        AutoSpinStep::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the controller against a fake balance, calling `stop_after` (if
    /// set) once that many spins have completed.
    fn drive(spins: u32, stop_after: Option<u32>) -> (u32, u32, Vec<AutoSpinStep>) {
        let mut controller = AutoSpinController::new();
        let mut spins_left = spins;
        let mut spun = 0;
        let mut ad_breaks = 0;
        let mut trace = Vec::new();
        assert!(controller.start());

        loop {
            let step = controller.next_step(spins_left);
            trace.push(step);
            match step {
                AutoSpinStep::Spin => {
                    spins_left -= 1;
                    spun += 1;
                    if stop_after == Some(spun) {
                        controller.request_stop();
                    }
                }
                AutoSpinStep::AdBreak { .. } => ad_breaks += 1,
                AutoSpinStep::Cooldown { .. } => {}
                AutoSpinStep::Finished => break,
            }
            assert!(trace.len() < 1000, "auto-spin never finished");
        }
        (spun, ad_breaks, trace)
    }

    #[test]
    fn test_runs_until_spins_exhausted() {
        let (spun, ad_breaks, trace) = drive(12, None);
        assert_eq!(spun, 12);
        assert_eq!(ad_breaks, 2);
        assert_eq!(trace.last(), Some(&AutoSpinStep::Finished));
    }

    #[test]
    fn test_stop_during_third_spin() {
        let (spun, ad_breaks, _) = drive(12, Some(3));
        assert_eq!(spun, 3);
        assert_eq!(ad_breaks, 0);
    }

    #[test]
    fn test_no_ad_break_after_last_spin() {
        let (spun, ad_breaks, trace) = drive(5, None);
        assert_eq!(spun, 5);
        assert_eq!(ad_breaks, 0);
        assert_eq!(
            &trace[trace.len() - 2..],
            &[AutoSpinStep::Cooldown { ms: SPIN_COOLDOWN_MS }, AutoSpinStep::Finished]
        );
    }

    #[test]
    fn test_ad_break_follows_cooldown_of_fifth_spin() {
        let (_, _, trace) = drive(6, None);
        let fifth_cooldown = trace
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == AutoSpinStep::Spin)
            .nth(4)
            .map(|(i, _)| i + 1)
            .unwrap();
        assert_eq!(trace[fifth_cooldown], AutoSpinStep::Cooldown { ms: SPIN_COOLDOWN_MS });
        assert_eq!(
            trace[fifth_cooldown + 1],
            AutoSpinStep::AdBreak { before_ms: AD_BREAK_BEFORE_MS, after_ms: AD_BREAK_AFTER_MS }
        );
        assert_eq!(trace[fifth_cooldown + 2], AutoSpinStep::Spin);
    }

    #[test]
    fn test_stop_flag_blocks_further_spins() {
        let mut controller = AutoSpinController::new();
        controller.start();
        assert_eq!(controller.next_step(10), AutoSpinStep::Spin);
        controller.request_stop();
        assert_eq!(controller.state(), AutoSpinState::StoppingRequested);
        assert_eq!(controller.next_step(9), AutoSpinStep::Finished);
        assert_eq!(controller.next_step(9), AutoSpinStep::Finished);
        assert_eq!(controller.state(), AutoSpinState::Idle);
    }

    #[test]
    fn test_start_with_no_spins_finishes_at_once() {
        let mut controller = AutoSpinController::new();
        assert!(controller.start());
        assert!(!controller.start());
        assert_eq!(controller.next_step(0), AutoSpinStep::Finished);
        assert_eq!(controller.completed(), 0);
        assert!(controller.start());
    }
}
