// leadscore-core/src/infrastructure/adapters/simulated_competitor.rs

// Placeholder for real competitor detection. Each configured platform is an
// independent Bernoulli draw; presence on any platform counts. Every record
// consumes exactly one draw per platform so the stream stays aligned with
// the input order for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::merchant::RawMerchantRecord;
use crate::domain::project::{CompetitorConfig, PlatformOdds};
use crate::ports::CompetitorSignal;

#[derive(Debug, Clone)]
pub struct SimulatedCompetitorSignal {
    rng: StdRng,
    platforms: Vec<PlatformOdds>,
}

impl SimulatedCompetitorSignal {
    pub fn new(config: &CompetitorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            platforms: config.platforms.clone(),
        }
    }
}

impl CompetitorSignal for SimulatedCompetitorSignal {
    fn detect(&mut self, _record: &RawMerchantRecord) -> bool {
        let mut present = false;
        for platform in &self.platforms {
            present |= self.rng.random_bool(bounded(platform.probability));
        }
        present
    }
}

fn bounded(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64, odds: &[f64]) -> CompetitorConfig {
        CompetitorConfig {
            seed,
            platforms: odds
                .iter()
                .enumerate()
                .map(|(i, p)| PlatformOdds {
                    name: format!("platform_{i}"),
                    probability: *p,
                })
                .collect(),
        }
    }

    fn draws(signal: &mut SimulatedCompetitorSignal, n: usize) -> Vec<bool> {
        let record = RawMerchantRecord::default();
        (0..n).map(|_| signal.detect(&record)).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SimulatedCompetitorSignal::new(&CompetitorConfig::default());
        let mut b = SimulatedCompetitorSignal::new(&CompetitorConfig::default());
        assert_eq!(draws(&mut a, 200), draws(&mut b, 200));
    }

    #[test]
    fn test_certain_and_impossible_odds() {
        let mut always = SimulatedCompetitorSignal::new(&config(1, &[0.0, 1.0]));
        assert!(draws(&mut always, 50).into_iter().all(|p| p));

        let mut never = SimulatedCompetitorSignal::new(&config(1, &[0.0, 0.0]));
        assert!(draws(&mut never, 50).into_iter().all(|p| !p));
    }

    #[test]
    fn test_no_platforms_means_no_presence() {
        let mut signal = SimulatedCompetitorSignal::new(&config(9, &[]));
        assert!(draws(&mut signal, 10).into_iter().all(|p| !p));
    }

    #[test]
    fn test_default_odds_are_roughly_respected() {
        // P(any) = 1 - 0.4 * 0.5 = 0.8
        let mut signal = SimulatedCompetitorSignal::new(&CompetitorConfig::default());
        let hits = draws(&mut signal, 2000).into_iter().filter(|p| *p).count();
        assert!((1450..=1750).contains(&hits), "hits = {hits}");
    }
}
