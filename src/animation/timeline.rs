use std::collections::VecDeque;

use crate::animation::ease::Easing;

/// One queued instruction on a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Hold the current value for `ms`.
    Wait { ms: f64 },
    /// Interpolate from the value held when the step starts to `target`.
    AnimateTo {
        target: f64,
        over_ms: f64,
        easing: Easing,
    },
    /// Zero-duration step that snaps to the most recent animation target.
    Complete,
}

/// Single animatable scalar driven by a sequential queue of steps.
///
/// Steps are laid out on absolute time: each one starts where the previous
/// one ended, regardless of how often [`Timeline::update`] is called. A step
/// queued onto an idle timeline starts at the end of the last finished step,
/// or at the time passed to the last [`Timeline::cancel`].
#[derive(Clone, Debug)]
pub struct Timeline {
    value: f64,
    steps: VecDeque<Step>,
    head_start_ms: f64,
    from: Option<f64>,
    last_target: Option<f64>,
}

impl Timeline {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            steps: VecDeque::new(),
            head_start_ms: 0.0,
            from: None,
            last_target: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.steps.len()
    }

    /// Drops every queued step. The current value is kept and the next queued
    /// step starts at `now_ms`.
    pub fn cancel(&mut self, now_ms: f64) {
        self.steps.clear();
        self.head_start_ms = now_ms;
        self.from = None;
        self.last_target = None;
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        self.steps.push_back(step);
        self
    }

    pub fn wait(&mut self, ms: f64) -> &mut Self {
        self.push(Step::Wait { ms: ms.max(0.0) })
    }

    pub fn animate_to(&mut self, target: f64, over_ms: f64, easing: Easing) -> &mut Self {
        self.push(Step::AnimateTo {
            target,
            over_ms: over_ms.max(0.0),
            easing,
        })
    }

    pub fn complete(&mut self) -> &mut Self {
        self.push(Step::Complete)
    }

    /// Cancels and queues `steps` starting at `now_ms`.
    pub fn restart(&mut self, now_ms: f64, steps: impl IntoIterator<Item = Step>) {
        self.cancel(now_ms);
        self.steps.extend(steps);
    }

    /// Advances the queue to `now_ms`, retiring every step that ended at or
    /// before it.
    pub fn update(&mut self, now_ms: f64) {
        while let Some(&step) = self.steps.front() {
            match step {
                Step::Wait { ms } => {
                    let end = self.head_start_ms + ms;
                    if now_ms < end {
                        break;
                    }
                    self.retire(end);
                }
                Step::AnimateTo {
                    target,
                    over_ms,
                    easing,
                } => {
                    if now_ms < self.head_start_ms {
                        break;
                    }
                    let from = *self.from.get_or_insert(self.value);
                    let end = self.head_start_ms + over_ms;
                    if now_ms >= end {
                        self.value = target;
                        self.last_target = Some(target);
                        self.retire(end);
                    } else {
                        let t = (now_ms - self.head_start_ms) / over_ms;
                        self.value = from + (target - from) * easing.apply(t);
                        break;
                    }
                }
                Step::Complete => {
                    if let Some(target) = self.last_target {
                        self.value = target;
                    }
                    self.retire(self.head_start_ms);
                }
            }
        }
    }

    fn retire(&mut self, end_ms: f64) {
        self.steps.pop_front();
        self.head_start_ms = end_ms;
        self.from = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
