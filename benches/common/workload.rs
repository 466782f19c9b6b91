//! Seeded key streams for hit-rate benchmarks.

use freqcache::traits::CoreCache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Uniform keys in `[0, universe)`.
    Uniform,
    /// `hot_prob` of requests go to the first `hot_fraction` of the universe.
    Hotset { hot_fraction: f64, hot_prob: f64 },
    /// Repeating sequential pass over the universe.
    Scan,
    /// Skewed popularity; `theta` 0.0 is uniform, 0.99 is the YCSB default.
    Zipfian { theta: f64 },
}

pub struct KeyStream {
    universe: u64,
    workload: Workload,
    rng: StdRng,
    scan_pos: u64,
    zipf: Option<Zipf>,
}

impl KeyStream {
    pub fn new(universe: u64, workload: Workload, seed: u64) -> Self {
        let universe = universe.max(1);
        let zipf = match workload {
            Workload::Zipfian { theta } => Some(Zipf::new(universe, theta)),
            _ => None,
        };
        Self {
            universe,
            workload,
            rng: StdRng::seed_from_u64(seed),
            scan_pos: 0,
            zipf,
        }
    }

    pub fn next_key(&mut self) -> u64 {
        match self.workload {
            Workload::Uniform => self.rng.gen_range(0..self.universe),
            Workload::Hotset {
                hot_fraction,
                hot_prob,
            } => {
                let hot = ((self.universe as f64) * hot_fraction.clamp(0.0, 1.0)).round() as u64;
                let hot = hot.clamp(1, self.universe);
                if hot == self.universe || self.rng.gen_bool(hot_prob.clamp(0.0, 1.0)) {
                    self.rng.gen_range(0..hot)
                } else {
                    self.rng.gen_range(hot..self.universe)
                }
            },
            Workload::Scan => {
                let key = self.scan_pos;
                self.scan_pos = (self.scan_pos + 1) % self.universe;
                key
            },
            Workload::Zipfian { .. } => {
                let u: f64 = self.rng.r#gen();
                self.zipf.as_ref().map_or(0, |zipf| zipf.sample(u))
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HitRate {
    pub hits: u64,
    pub misses: u64,
}

impl HitRate {
    pub fn hit_rate(self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Look up each key and insert it on a miss.
pub fn run_hit_rate<C>(cache: &mut C, keys: &mut KeyStream, operations: usize) -> HitRate
where
    C: CoreCache<u64, u64>,
{
    let mut stats = HitRate::default();
    for _ in 0..operations {
        let key = keys.next_key();
        if cache.get(&key).is_some() {
            stats.hits += 1;
        } else {
            stats.misses += 1;
            let _ = cache.insert(key, key);
        }
    }
    stats
}

/// Inverse-CDF Zipf sampler (Gray et al., as used by YCSB).
#[derive(Debug, Clone)]
struct Zipf {
    n: u64,
    theta: f64,
    zeta_n: f64,
    alpha: f64,
    eta: f64,
}

impl Zipf {
    fn new(n: u64, theta: f64) -> Self {
        // theta == 1 divides by zero in alpha
        let theta = theta.clamp(0.0, 0.9999);
        let zeta = |n: u64| (1..=n).map(|i| 1.0 / (i as f64).powf(theta)).sum::<f64>();
        let zeta_2 = zeta(2);
        let zeta_n = zeta(n);
        Self {
            n,
            theta,
            zeta_n,
            alpha: 1.0 / (1.0 - theta),
            eta: (1.0 - (2.0 / n as f64).powf(1.0 - theta)) / (1.0 - zeta_2 / zeta_n),
        }
    }

    fn sample(&self, u: f64) -> u64 {
        let uz = u * self.zeta_n;
        if uz < 1.0 {
            return 0;
        }
        if uz < 1.0 + 0.5_f64.powf(self.theta) {
            return 1;
        }
        let rank = (self.n as f64) * (self.eta * u - self.eta + 1.0).powf(self.alpha);
        (rank as u64).min(self.n - 1)
    }
}
