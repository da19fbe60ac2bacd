//! Aggregation of the four frame models into one worldline snapshot.

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use worldline_frames::{
    CmbReference, CmbVelocity, Frame, FrameError, FrameModel, FrameReading, FrameVelocity,
    GalaxyVelocity, Observer, OrbitVelocity, SpinVelocity, TierACmb, TierAGalaxy, TierAOrbit,
    TierASpin,
};

use crate::dates::{
    AgeDuration, DateError, DateInput, breakdown_duration, duration_between, parse_date_input,
};

/// Errors surfaced while computing a worldline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldlineError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("timeline sampling needs at least one step")]
    InvalidSteps,
}

/// Velocity readings for all four frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameVelocities {
    pub spin: SpinVelocity,
    pub orbit: OrbitVelocity,
    pub galaxy: GalaxyVelocity,
    pub cmb: CmbVelocity,
}

impl FrameVelocities {
    pub fn get(&self, frame: Frame) -> FrameVelocity {
        match frame {
            Frame::Spin => self.spin.into(),
            Frame::Orbit => self.orbit.into(),
            Frame::Galaxy => self.galaxy.into(),
            Frame::Cmb => self.cmb.into(),
        }
    }

    /// Readings innermost frame first.
    pub fn iter(&self) -> impl Iterator<Item = FrameVelocity> + '_ {
        Frame::ALL.into_iter().map(|frame| self.get(frame))
    }
}

/// Path length travelled in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameDistance {
    pub frame: Frame,
    pub path_length_km: f64,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameDistances {
    pub spin: FrameDistance,
    pub orbit: FrameDistance,
    pub galaxy: FrameDistance,
    pub cmb: FrameDistance,
}

impl FrameDistances {
    pub fn get(&self, frame: Frame) -> FrameDistance {
        match frame {
            Frame::Spin => self.spin,
            Frame::Orbit => self.orbit,
            Frame::Galaxy => self.galaxy,
            Frame::Cmb => self.cmb,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = FrameDistance> + '_ {
        Frame::ALL.into_iter().map(|frame| self.get(frame))
    }

    /// Sum of the four path lengths (km). All share the same duration.
    pub fn total_km(&self) -> f64 {
        self.iter().map(|d| d.path_length_km).sum()
    }
}

/// Immutable snapshot of an observer's motion between birth and a target instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldlineState {
    /// Target instant the snapshot describes.
    pub timestamp: DateTime<Local>,
    pub birth_date: DateTime<Local>,
    pub latitude_deg: f64,
    pub cmb_reference: CmbReference,
    /// Signed; negative before birth.
    pub duration_seconds: f64,
    pub frames: FrameVelocities,
    pub distances: FrameDistances,
}

impl WorldlineState {
    /// Age breakdown, clamped at zero before birth.
    pub fn age(&self) -> AgeDuration {
        breakdown_duration(self.duration_seconds)
    }

    pub fn is_pre_birth(&self) -> bool {
        self.duration_seconds < 0.0
    }

    pub fn frame(&self, frame: Frame) -> FrameVelocity {
        self.frames.get(frame)
    }

    pub fn distance(&self, frame: Frame) -> FrameDistance {
        self.distances.get(frame)
    }

    pub fn total_distance_km(&self) -> f64 {
        self.distances.total_km()
    }
}

/// Worldline calculator parameterised over one model per frame.
///
/// The defaults are the Tier A closed-form models.
#[derive(Debug, Clone, Default)]
pub struct WorldlineCalculator<S = TierASpin, O = TierAOrbit, G = TierAGalaxy, C = TierACmb> {
    spin: S,
    orbit: O,
    galaxy: G,
    cmb: C,
    cmb_reference: CmbReference,
}

impl WorldlineCalculator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, O, G, C> WorldlineCalculator<S, O, G, C> {
    pub fn cmb_reference(mut self, reference: CmbReference) -> Self {
        self.cmb_reference = reference;
        self
    }

    pub fn with_spin_model<M>(self, model: M) -> WorldlineCalculator<M, O, G, C> {
        WorldlineCalculator {
            spin: model,
            orbit: self.orbit,
            galaxy: self.galaxy,
            cmb: self.cmb,
            cmb_reference: self.cmb_reference,
        }
    }

    pub fn with_orbit_model<M>(self, model: M) -> WorldlineCalculator<S, M, G, C> {
        WorldlineCalculator {
            spin: self.spin,
            orbit: model,
            galaxy: self.galaxy,
            cmb: self.cmb,
            cmb_reference: self.cmb_reference,
        }
    }

    pub fn with_galaxy_model<M>(self, model: M) -> WorldlineCalculator<S, O, M, C> {
        WorldlineCalculator {
            spin: self.spin,
            orbit: self.orbit,
            galaxy: model,
            cmb: self.cmb,
            cmb_reference: self.cmb_reference,
        }
    }

    pub fn with_cmb_model<M>(self, model: M) -> WorldlineCalculator<S, O, G, M> {
        WorldlineCalculator {
            spin: self.spin,
            orbit: self.orbit,
            galaxy: self.galaxy,
            cmb: model,
            cmb_reference: self.cmb_reference,
        }
    }
}

impl<S, O, G, C> WorldlineCalculator<S, O, G, C>
where
    S: FrameModel<Output = SpinVelocity>,
    O: FrameModel<Output = OrbitVelocity>,
    G: FrameModel<Output = GalaxyVelocity>,
    C: FrameModel<Output = CmbVelocity>,
{
    /// Parse both dates and compute the snapshot. `None` targets now.
    pub fn compute<'a>(
        &self,
        birth: impl Into<DateInput<'a>>,
        latitude_deg: f64,
        target: Option<DateInput<'_>>,
    ) -> Result<WorldlineState, WorldlineError> {
        let birth_date = parse_date_input(birth)?;
        let timestamp = match target {
            Some(input) => parse_date_input(input)?,
            None => Local::now(),
        };
        self.compute_at(birth_date, latitude_deg, timestamp)
    }

    /// Compute the snapshot for already-resolved instants.
    pub fn compute_at(
        &self,
        birth_date: DateTime<Local>,
        latitude_deg: f64,
        timestamp: DateTime<Local>,
    ) -> Result<WorldlineState, WorldlineError> {
        let duration_seconds = duration_between(&birth_date, &timestamp);
        let observer = Observer {
            latitude_deg,
            cmb_reference: self.cmb_reference,
        };

        let spin = self.spin.velocity(&observer)?;
        let orbit = self.orbit.velocity(&observer)?;
        let galaxy = self.galaxy.velocity(&observer)?;
        let cmb = self.cmb.velocity(&observer)?;

        let distances = FrameDistances {
            spin: measure(&self.spin, &spin, duration_seconds),
            orbit: measure(&self.orbit, &orbit, duration_seconds),
            galaxy: measure(&self.galaxy, &galaxy, duration_seconds),
            cmb: measure(&self.cmb, &cmb, duration_seconds),
        };

        debug!(
            latitude_deg,
            duration_seconds,
            cmb_reference = %self.cmb_reference,
            total_km = distances.total_km(),
            "computed worldline state"
        );

        Ok(WorldlineState {
            timestamp,
            birth_date,
            latitude_deg,
            cmb_reference: self.cmb_reference,
            duration_seconds,
            frames: FrameVelocities {
                spin,
                orbit,
                galaxy,
                cmb,
            },
            distances,
        })
    }
}

fn measure<M: FrameModel>(model: &M, reading: &M::Output, duration_seconds: f64) -> FrameDistance {
    FrameDistance {
        frame: reading.frame(),
        path_length_km: model.distance_km(reading, duration_seconds),
        duration_seconds,
    }
}

/// Worldline snapshot with the Tier A models and the SSB CMB basis.
pub fn compute_worldline_state<'a>(
    birth: impl Into<DateInput<'a>>,
    latitude_deg: f64,
    target: Option<DateInput<'_>>,
) -> Result<WorldlineState, WorldlineError> {
    WorldlineCalculator::new().compute(birth, latitude_deg, target)
}
