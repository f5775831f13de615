// leadscore-core/src/ports/competitor.rs

// The only place nondeterminism may enter a run. Implementations that draw
// random values must be seeded by the caller; the pipeline consults the
// signal sequentially, in input order, so a fixed seed gives a fixed batch.

use crate::domain::merchant::RawMerchantRecord;

pub trait CompetitorSignal {
    /// Whether the merchant is already on a competitor delivery platform.
    fn detect(&mut self, record: &RawMerchantRecord) -> bool;
}

/// Signal for callers without any competitor data: never present.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompetitorSignal;

impl CompetitorSignal for NoCompetitorSignal {
    fn detect(&mut self, _record: &RawMerchantRecord) -> bool {
        false
    }
}
