use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::spin_wheel::PrizeCatalog;

// Constants for frontend animation
pub const SPIN_ANIMATION_MS: u32 = 4000; // Must match the CSS transition on the wheel
pub const MIN_FULL_TURNS: u32 = 5;
/// The pointer sits at 12 o'clock; the wheel's 0° is 3 o'clock, clockwise.
pub const POINTER_ANGLE_DEG: f64 = 270.0;

const FULL_TURN: f64 = 360.0;

pub fn segment_angle(segment_count: usize) -> Result<f64, WheelError> {
    if segment_count == 0 {
        return Err(WheelError::NoSegments);
    }
    Ok(FULL_TURN / segment_count as f64)
}

/// Orientation in `[0, 360)` that puts the middle of `prize_index` under the pointer.
pub fn final_orientation(prize_index: usize, segment_count: usize) -> Result<f64, WheelError> {
    let segment = segment_angle(segment_count)?;
    if prize_index >= segment_count {
        return Err(WheelError::SegmentOutOfRange {
            index: prize_index,
            count: segment_count,
        });
    }
    let target_mid = prize_index as f64 * segment + segment / 2.0;
    Ok((POINTER_ANGLE_DEG - target_mid).rem_euclid(FULL_TURN))
}

/// Rotation to animate to so the wheel lands on `prize_index`.
///
/// The result is always `MIN_FULL_TURNS` turns plus less than one more turn
/// beyond `prior_rotation_degrees`, and is congruent to the final orientation
/// modulo 360. Rotation accumulates across spins; it never winds back.
pub fn compute_stop_rotation(
    prior_rotation_degrees: f64,
    prize_index: usize,
    segment_count: usize,
) -> Result<f64, WheelError> {
    let orientation = final_orientation(prize_index, segment_count)?;
    Ok(advance_to(prior_rotation_degrees, orientation))
}

/// Stop rotation for a prize the wheel cannot show: a uniformly random
/// orientation taken from `random_unit` in `[0, 1)`.
pub fn fallback_stop_rotation(prior_rotation_degrees: f64, random_unit: f64) -> f64 {
    let orientation = (random_unit * FULL_TURN).rem_euclid(FULL_TURN);
    advance_to(prior_rotation_degrees, orientation)
}

fn advance_to(prior: f64, orientation: f64) -> f64 {
    let delta = (orientation - prior).rem_euclid(FULL_TURN);
    prior + FULL_TURN * f64::from(MIN_FULL_TURNS) + delta
}

/// Where the wheel should stop for a prize label the backend returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelTarget {
    Segment(usize),
    /// The label is not in the local catalog copy.
    Unmapped,
}

impl WheelTarget {
    pub fn resolve(catalog: &PrizeCatalog, prize_label: &str) -> Self {
        match catalog.index_of(prize_label) {
            Some(index) => Self::Segment(index),
            None => {
                log::warn!(
                    "prize `{}` is not in the local wheel catalog, using a random stop",
                    prize_label
                );
                Self::Unmapped
            }
        }
    }

    /// `random_unit` is only consumed for `Unmapped`.
    pub fn stop_rotation(
        &self,
        prior_rotation_degrees: f64,
        segment_count: usize,
        random_unit: f64,
    ) -> Result<f64, WheelError> {
        match self {
            Self::Segment(index) => compute_stop_rotation(prior_rotation_degrees, *index, segment_count),
            Self::Unmapped => Ok(fallback_stop_rotation(prior_rotation_degrees, random_unit)),
        }
    }
}

/// The wheel's on-screen state. It persists across spins.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct WheelVisualState {
    pub cumulative_rotation_degrees: f64,
    pub is_animating: bool,
}

impl WheelVisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_spin(&mut self, target_rotation: f64) -> Result<(), WheelError> {
        if self.is_animating {
            return Err(WheelError::AlreadyAnimating);
        }
        if !(target_rotation > self.cumulative_rotation_degrees) {
            return Err(WheelError::NonMonotonic {
                current: self.cumulative_rotation_degrees,
                target: target_rotation,
            });
        }
        self.cumulative_rotation_degrees = target_rotation;
        self.is_animating = true;
        Ok(())
    }

    /// Resolves the target for `prize_label` and starts the animation towards it.
    pub fn spin_to_prize(
        &mut self,
        catalog: &PrizeCatalog,
        prize_label: &str,
        random_unit: f64,
    ) -> Result<WheelTarget, WheelError> {
        let target = WheelTarget::resolve(catalog, prize_label);
        let rotation = target.stop_rotation(self.cumulative_rotation_degrees, catalog.len(), random_unit)?;
        self.begin_spin(rotation)?;
        Ok(target)
    }

    pub fn finish(&mut self) {
        self.is_animating = false;
    }

    /// Orientation currently under the pointer reference, in `[0, 360)`.
    pub fn orientation(&self) -> f64 {
        self.cumulative_rotation_degrees.rem_euclid(FULL_TURN)
    }
}
