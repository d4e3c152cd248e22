//! # Hardfork Gate
//!
//! A hardfork is a named protocol activation point keyed to chain time.
//! Once the head block time reaches the activation instant the fork is
//! active, permanently, for all subsequent and replayed states.
//!
//! Activation is purely a function of the schedule and the chain state
//! passed in. No wall-clock reads, ever: the same (schedule, head time)
//! pair answers identically during live application and historical replay.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Timestamp;

/// Named protocol activation points.
///
/// `Hf21DelegatedInterest` and `Hf21CurationBounds` are sub-gates of the
/// HF21 release: on the canonical schedule they activate together with
/// `Hf21`, but they are independently gateable so each relaxed bound can be
/// reasoned about (and tested) in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hardfork {
    /// Witness URL length becomes a hard consensus bound.
    Hf1,
    /// Inline witness props channel retired in favour of versioned payloads.
    Hf18,
    /// Version-21 properties payload shape allowed.
    Hf21,
    /// Delegated vesting interest-rate ceiling relaxed.
    Hf21DelegatedInterest,
    /// Curation percent floor relaxed.
    Hf21CurationBounds,
}

/// The activation schedule mapping each hardfork to its activation time.
///
/// A fork absent from the schedule is never active. The schedule is fixed
/// at node start (from genesis parameters) and must be identical on every
/// replica; it is the only input to activation besides chain time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardforkSchedule {
    activations: BTreeMap<Hardfork, Timestamp>,
}

impl HardforkSchedule {
    /// An empty schedule: nothing ever activates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `hardfork` to activate at `at`.
    pub fn schedule(mut self, hardfork: Hardfork, at: Timestamp) -> Self {
        self.activations.insert(hardfork, at);
        self
    }

    /// Schedule the HF21 release: the payload-shape gate and both bound
    /// sub-gates activate at the same instant.
    pub fn schedule_hf21(self, at: Timestamp) -> Self {
        self.schedule(Hardfork::Hf21, at)
            .schedule(Hardfork::Hf21DelegatedInterest, at)
            .schedule(Hardfork::Hf21CurationBounds, at)
    }

    /// Whether `hardfork` is active at `head_block_time`.
    pub fn is_active(&self, hardfork: Hardfork, head_block_time: Timestamp) -> bool {
        match self.activations.get(&hardfork) {
            Some(at) => head_block_time >= *at,
            None => false,
        }
    }
}
