//! Evenly spaced worldline snapshots between birth and a target instant.

use chrono::{DateTime, Local, TimeDelta};
use worldline_frames::{
    CmbReference, CmbVelocity, FrameModel, GalaxyVelocity, OrbitVelocity, SpinVelocity,
};

use crate::dates::{DateInput, parse_date_input};
use crate::worldline::{WorldlineCalculator, WorldlineError, WorldlineState};

impl<S, O, G, C> WorldlineCalculator<S, O, G, C>
where
    S: FrameModel<Output = SpinVelocity>,
    O: FrameModel<Output = OrbitVelocity>,
    G: FrameModel<Output = GalaxyVelocity>,
    C: FrameModel<Output = CmbVelocity>,
{
    /// `steps + 1` snapshots from birth to target inclusive.
    ///
    /// The first sample has zero duration and the last one equals
    /// [`WorldlineCalculator::compute`] at the target.
    pub fn timeline<'a>(
        &self,
        birth: impl Into<DateInput<'a>>,
        latitude_deg: f64,
        target: Option<DateInput<'_>>,
        steps: usize,
    ) -> Result<Vec<WorldlineState>, WorldlineError> {
        if steps == 0 {
            return Err(WorldlineError::InvalidSteps);
        }
        let birth_date = parse_date_input(birth)?;
        let target = match target {
            Some(input) => parse_date_input(input)?,
            None => Local::now(),
        };

        sample_instants(birth_date, target, steps)
            .into_iter()
            .map(|instant| self.compute_at(birth_date, latitude_deg, instant))
            .collect()
    }
}

fn sample_instants(
    birth: DateTime<Local>,
    target: DateTime<Local>,
    steps: usize,
) -> Vec<DateTime<Local>> {
    let span_ms = i128::from((target - birth).num_milliseconds());
    let steps_i = steps as i128;
    let mut instants: Vec<DateTime<Local>> = (0..steps_i)
        .map(|i| birth + TimeDelta::milliseconds((span_ms * i / steps_i) as i64))
        .collect();
    // target may carry sub-millisecond precision
    instants.push(target);
    instants
}

/// Timeline with the Tier A models for the given CMB basis.
pub fn sample_timeline<'a>(
    birth: impl Into<DateInput<'a>>,
    latitude_deg: f64,
    target: Option<DateInput<'_>>,
    steps: usize,
    reference: CmbReference,
) -> Result<Vec<WorldlineState>, WorldlineError> {
    WorldlineCalculator::new()
        .cmb_reference(reference)
        .timeline(birth, latitude_deg, target, steps)
}
