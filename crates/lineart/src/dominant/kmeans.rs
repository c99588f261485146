//! k-means++ clustering in sRGB.

use rand::Rng;

use crate::color::Rgb;

/// Fixed number of Lloyd iterations. There is no convergence check.
pub const LLOYD_ITERATIONS: usize = 8;

/// Samples per cluster used to scale the cluster count down for sparse input.
const SAMPLES_PER_CLUSTER: usize = 200;

/// Smallest cluster count, whatever the sample count.
const MIN_CLUSTERS: usize = 3;

/// One k-means cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    /// Mean sRGB of the assigned samples.
    pub center: [f64; 3],
    /// Number of samples assigned in the final iteration.
    pub weight: usize,
}

impl Cluster {
    fn at(rgb: Rgb) -> Self {
        Self {
            center: [rgb.r as f64, rgb.g as f64, rgb.b as f64],
            weight: 0,
        }
    }

    /// Center rounded to 8-bit sRGB.
    pub fn rgb(&self) -> Rgb {
        let c = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Rgb::new(c(self.center[0]), c(self.center[1]), c(self.center[2]))
    }

    #[inline]
    fn distance_squared(&self, rgb: Rgb) -> f64 {
        let dr = self.center[0] - rgb.r as f64;
        let dg = self.center[1] - rgb.g as f64;
        let db = self.center[2] - rgb.b as f64;
        dr * dr + dg * dg + db * db
    }
}

/// Number of clusters for `samples` filtered samples when `k` are requested.
///
/// `min(k, max(3, samples / 200))`
#[inline]
pub fn cluster_count(k: usize, samples: usize) -> usize {
    k.min(MIN_CLUSTERS.max(samples / SAMPLES_PER_CLUSTER))
}

/// Cluster `samples` into `clusters` groups.
///
/// Centers are seeded with k-means++ from `rng`, then refined by
/// [`LLOYD_ITERATIONS`] Lloyd steps. A cluster that loses all its samples
/// keeps its previous center. Returns an empty vector when `samples` is
/// empty or `clusters` is zero.
pub fn kmeans<R: Rng + ?Sized>(samples: &[Rgb], clusters: usize, rng: &mut R) -> Vec<Cluster> {
    if samples.is_empty() || clusters == 0 {
        return Vec::new();
    }

    let mut centers = seed_plus_plus(samples, clusters, rng);
    let mut sums = vec![[0.0f64; 3]; centers.len()];
    let mut counts = vec![0usize; centers.len()];

    for _ in 0..LLOYD_ITERATIONS {
        sums.iter_mut().for_each(|s| *s = [0.0; 3]);
        counts.iter_mut().for_each(|c| *c = 0);

        for &rgb in samples {
            let nearest = nearest_center(&centers, rgb);
            sums[nearest][0] += rgb.r as f64;
            sums[nearest][1] += rgb.g as f64;
            sums[nearest][2] += rgb.b as f64;
            counts[nearest] += 1;
        }

        for ((center, sum), &count) in centers.iter_mut().zip(&sums).zip(&counts) {
            center.weight = count;
            if count > 0 {
                let n = count as f64;
                center.center = [sum[0] / n, sum[1] / n, sum[2] / n];
            }
        }
    }

    centers
}

/// Index of the closest center; ties go to the lower index.
#[inline]
fn nearest_center(centers: &[Cluster], rgb: Rgb) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let d = center.distance_squared(rgb);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// k-means++ seeding.
///
/// The first center is a uniformly random sample. Each further center is a
/// sample drawn with probability proportional to its squared distance from
/// the nearest chosen center. When every distance is zero the draw falls
/// back to uniform.
fn seed_plus_plus<R: Rng + ?Sized>(samples: &[Rgb], clusters: usize, rng: &mut R) -> Vec<Cluster> {
    let mut centers = Vec::with_capacity(clusters);
    centers.push(Cluster::at(samples[rng.gen_range(0..samples.len())]));

    let mut nearest: Vec<f64> = samples
        .iter()
        .map(|&rgb| centers[0].distance_squared(rgb))
        .collect();

    while centers.len() < clusters {
        let total: f64 = nearest.iter().sum();
        let index = if total > 0.0 {
            weighted_index(&nearest, rng.gen::<f64>() * total)
        } else {
            rng.gen_range(0..samples.len())
        };

        let center = Cluster::at(samples[index]);
        for (d, &rgb) in nearest.iter_mut().zip(samples) {
            *d = d.min(center.distance_squared(rgb));
        }
        centers.push(center);
    }

    centers
}

/// First index whose cumulative weight exceeds `target`.
fn weighted_index(weights: &[f64], mut target: f64) -> usize {
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        if target < w {
            return i;
        }
        target -= w;
        last_positive = i;
    }
    // Rounding can leave a sliver of target past the last weight
    last_positive
}
