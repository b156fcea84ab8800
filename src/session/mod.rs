//! Session driver: cadence state and the generation loop

pub mod cadence;
pub mod driver;

pub use cadence::Cadence;
pub use driver::{Session, SessionOutcome, SessionSummary};
