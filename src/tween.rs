//! Timed additive rotation pulses.
//!
//! A pulse owns a start time, a duration, an easing curve and a delta. Each
//! tick it adds only the portion of the delta gained since the previous tick,
//! so overlapping pulses on one object, and the idle spin applied by the frame
//! loop, all compose on the same rotation value.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Cubic ease-in-out (GSAP's `power2.inOut`).
    #[default]
    Power2InOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationPulse {
    pub target: usize,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
    pub delta: Vec3,
    // eased progress already written into the target rotation
    applied: f32,
}

impl RotationPulse {
    pub fn new(target: usize, start: f32, duration: f32, ease: Ease, delta: Vec3) -> Self {
        Self {
            target,
            start,
            duration,
            ease,
            delta,
            applied: 0.0,
        }
    }

    fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Rotation increment since the last step.
    fn step(&mut self, now: f32) -> Vec3 {
        let eased = self.ease.apply(self.progress(now));
        let inc = self.delta * (eased - self.applied);
        self.applied = eased;
        inc
    }

    pub fn is_finished(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct PulseAnimator {
    active: Vec<RotationPulse>,
}

impl PulseAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, pulse: RotationPulse) {
        self.active.push(pulse);
    }

    pub fn active(&self) -> &[RotationPulse] {
        &self.active
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance all pulses to `now`, adding their increments to `rotations`,
    /// then drop the finished ones.
    ///
    /// Pulses whose target has no rotation slot advance without effect.
    pub fn tick(&mut self, now: f32, rotations: &mut [Vec3]) {
        for p in &mut self.active {
            let inc = p.step(now);
            if let Some(r) = rotations.get_mut(p.target) {
                *r += inc;
            }
        }
        self.active.retain(|p| !p.is_finished(now));
    }
}
