use rand::Rng;

// Logistic approximation to the probit function; close enough to Gaussian
// for scattering scenario parameters.
const LOGISTIC_SCALE: f64 = -0.626_657_068_7;

/// Normal-ish sampler for perturbing scenario parameters between runs. The
/// RNG is injected so batches can be seeded and reproduced.
#[derive(Debug, Clone, Copy)]
pub struct NormalSampler {
    mean: f64,
    standard_deviation: f64,
}

impl NormalSampler {
    pub fn new(mean: f64, standard_deviation: f64) -> Self {
        NormalSampler {
            mean,
            standard_deviation,
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let uniform: f64 = rng.gen();
        let z = LOGISTIC_SCALE * (1.0 / uniform - 1.0).ln();
        self.standard_deviation * z + self.mean
    }

    pub fn sample_clamped<R: Rng>(&self, rng: &mut R, min: f64, max: f64) -> f64 {
        self.sample(rng).clamp(min, max)
    }
}
