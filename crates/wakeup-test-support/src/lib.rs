//! Shared test doubles for the Ali, Wake Up narrative engine.

mod clock;
mod media;
mod repository;
mod rng;

pub use clock::{FixedClock, SteppingClock};
pub use media::{Mixer, ScriptedChannel};
pub use repository::{
    CorruptSnapshotRepository, EmptySnapshotRepository, FailingSnapshotRepository,
    RecordingSnapshotRepository,
};
pub use rng::{MockRng, SequenceRng, UnluckyRng};
