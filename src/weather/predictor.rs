use std::path::Path;

use rand::Rng;

use crate::atmosphere::profile::WindProfile;
use crate::errors::SimulationError;
use crate::weather::sounding::load_soundings;

/// Pool of historical wind soundings to draw scenarios from.
///
/// Selection is uniform without replacement, so a batch of runs never reuses
/// a sounding. The RNG is injected; seed it for reproducible batches.
#[derive(Debug, Clone)]
pub struct WeatherPredictor {
    profiles: Vec<WindProfile>,
}

impl WeatherPredictor {
    pub fn new(profiles: Vec<WindProfile>) -> Self {
        WeatherPredictor { profiles }
    }

    pub fn from_file(path: &Path) -> Result<Self, SimulationError> {
        Ok(WeatherPredictor::new(load_soundings(path)?))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn choose_random<R: Rng>(&mut self, rng: &mut R) -> Option<WindProfile> {
        if self.profiles.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.profiles.len());
        Some(self.profiles.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::profile::WindBin;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_profiles(count: usize) -> Vec<WindProfile> {
        (0..count)
            .map(|i| {
                WindProfile::new(vec![WindBin {
                    altitude: i as i32 * 10,
                    wind_speed: i as f64,
                    wind_angle: 0.0,
                }])
                .expect("single-level profile should be valid")
            })
            .collect()
    }

    #[test]
    fn test_selection_is_without_replacement() {
        let mut predictor = WeatherPredictor::new(test_profiles(4));
        let mut rng = StdRng::seed_from_u64(7);

        let mut drawn = Vec::new();
        while let Some(profile) = predictor.choose_random(&mut rng) {
            drawn.push(profile);
        }

        assert_eq!(drawn.len(), 4);
        assert!(predictor.is_empty());
        for pair in drawn.iter().enumerate() {
            let duplicates = drawn.iter().filter(|other| *other == pair.1).count();
            assert_eq!(duplicates, 1, "profile drawn more than once");
        }
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let mut first = WeatherPredictor::new(test_profiles(8));
        let mut second = WeatherPredictor::new(test_profiles(8));

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..8 {
            assert_eq!(
                first.choose_random(&mut rng_a),
                second.choose_random(&mut rng_b)
            );
        }
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let mut predictor = WeatherPredictor::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(predictor.choose_random(&mut rng), None);
    }
}
