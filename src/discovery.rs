use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{no_candidates_error, Error};

/// Uniform pick over the current candidates.
pub fn random_pick<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Result<&'a T, Error>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng).ok_or_else(no_candidates_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_candidates_signal_no_candidates() {
        let candidates: Vec<&str> = vec![];
        let err = random_pick(&candidates, &mut rand::thread_rng()).unwrap_err();

        assert_eq!(err.code, crate::error::NO_CANDIDATES);
    }

    #[test]
    fn pick_is_one_of_the_candidates() {
        let candidates = vec!["Aghir", "Midoun", "Guellala"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let pick = random_pick(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(pick));
            seen.insert(*pick);
        }

        assert_eq!(seen.len(), candidates.len());
    }
}
