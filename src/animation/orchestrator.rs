use crate::animation::ease::Easing;
use crate::animation::timeline::{Step, Timeline};

/// Minimum duration of one choreography before the next may start.
pub const RAMP_MS: f64 = 5000.0;
/// Time a revealed slot stays at full length.
pub const HOLD_MS: f64 = 2000.0;

/// The three reveal patterns, cycled in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choreography {
    /// Every slot, staggered 50 ms by slot index.
    Cascade,
    /// One slot per even row, stepping one column right every two rows.
    Diagonal,
    /// Every slot of the even rows, bottom row first.
    ReverseRows,
}

impl Choreography {
    pub fn for_mode(mode: u64) -> Self {
        match mode % 3 {
            0 => Self::Cascade,
            1 => Self::Diagonal,
            _ => Self::ReverseRows,
        }
    }
}

/// Drives one [`Timeline`] per slot of a `rows x per_row` grid and starts the
/// next choreography once every slot is idle and the ramp has run out.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    rows: usize,
    per_row: usize,
    base_length: f64,
    mode: u64,
    slots: Vec<Timeline>,
    ramp: Timeline,
}

impl Orchestrator {
    pub fn new(rows: usize, per_row: usize, base_length: f64) -> Self {
        Self {
            rows,
            per_row,
            base_length,
            mode: 0,
            slots: vec![Timeline::new(base_length); rows * per_row],
            ramp: Timeline::new(0.0),
        }
    }

    /// Number of choreographies started so far.
    pub fn mode(&self) -> u64 {
        self.mode
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Timeline] {
        &self.slots
    }

    /// Current reveal length of `slot`; out-of-range slots report the base
    /// length.
    pub fn length(&self, slot: usize) -> f64 {
        self.slots
            .get(slot)
            .map_or(self.base_length, Timeline::value)
    }

    pub fn ramp_progress(&self) -> f64 {
        self.ramp.value()
    }

    pub fn is_settled(&self) -> bool {
        self.ramp.is_idle() && self.slots.iter().all(Timeline::is_idle)
    }

    /// Advances every timeline to `now_ms` and, if everything has settled,
    /// installs the next choreography. Returns the pattern installed on this
    /// call, if any.
    pub fn update(&mut self, now_ms: f64) -> Option<Choreography> {
        self.ramp.update(now_ms);
        for slot in &mut self.slots {
            slot.update(now_ms);
        }
        if !self.is_settled() {
            return None;
        }

        let choreography = Choreography::for_mode(self.mode);
        self.install(choreography, now_ms);
        self.mode += 1;
        self.ramp.restart(
            now_ms,
            [Step::AnimateTo {
                target: 1.0,
                over_ms: RAMP_MS,
                easing: Easing::Linear,
            }],
        );
        tracing::info!(
            mode = self.mode - 1,
            ?choreography,
            now_ms,
            "installed choreography"
        );
        Some(choreography)
    }

    fn install(&mut self, choreography: Choreography, now_ms: f64) {
        for slot in &mut self.slots {
            slot.cancel(now_ms);
        }
        let last_row = self.rows.saturating_sub(1);
        match choreography {
            Choreography::Cascade => {
                for idx in 0..self.slots.len() {
                    self.reveal(idx, now_ms, idx as f64 * 50.0, 1000.0, 1000.0);
                }
            }
            Choreography::Diagonal => {
                for row in (0..self.rows).step_by(2) {
                    let column = row / 2;
                    if column < self.per_row {
                        let idx = row * self.per_row + column;
                        self.reveal(idx, now_ms, row as f64 * 250.0, 1500.0, 1500.0);
                    }
                }
            }
            Choreography::ReverseRows => {
                for row in (0..self.rows).step_by(2) {
                    let delay = (last_row - row) as f64 * 250.0;
                    for column in 0..self.per_row {
                        let idx = row * self.per_row + column;
                        self.reveal(idx, now_ms, delay, 1000.0, 1000.0);
                    }
                }
            }
        }
    }

    fn reveal(&mut self, idx: usize, now_ms: f64, delay_ms: f64, grow_ms: f64, shrink_ms: f64) {
        let base = self.base_length;
        if let Some(slot) = self.slots.get_mut(idx) {
            slot.restart(
                now_ms,
                [
                    Step::Wait { ms: delay_ms },
                    Step::AnimateTo {
                        target: 1.0,
                        over_ms: grow_ms,
                        easing: Easing::CubicInOut,
                    },
                    Step::Complete,
                    Step::Wait { ms: HOLD_MS },
                    Step::AnimateTo {
                        target: base,
                        over_ms: shrink_ms,
                        easing: Easing::CubicInOut,
                    },
                ],
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/orchestrator.rs"]
mod tests;
