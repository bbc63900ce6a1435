use std::f64::consts::PI;

use serde::Serialize;

use super::distribution::DistributionSummary;

const MIN_BINS: f64 = 5.0;
const MAX_BINS: f64 = 20.0;
const FLAT_BINS: usize = 10;
const CURVE_POINTS: usize = 101;
/// Exponent floor for the normal density.
const MIN_EXPONENT: f64 = -50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub center: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Binned counts plus a fitted normal curve on the same scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub column_name: String,
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
    pub curve: Vec<CurvePoint>,
}

impl Histogram {
    pub fn from_distribution(dist: &DistributionSummary) -> Self {
        let n = dist.values.len();
        let range = dist.max - dist.min;

        let (bin_count, bin_width) = if range > 0.0 {
            let count = (n as f64).sqrt().clamp(MIN_BINS, MAX_BINS).floor() as usize;
            (count, range / count as f64)
        } else {
            (FLAT_BINS, 1.0)
        };

        let mut counts = vec![0usize; bin_count];
        for &v in &dist.values {
            let idx = ((v - dist.min) / bin_width).floor();
            let idx = if idx < 0.0 { 0 } else { (idx as usize).min(bin_count - 1) };
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                center: dist.min + (i as f64 + 0.5) * bin_width,
                count,
            })
            .collect();

        Histogram {
            column_name: dist.column_name.clone(),
            bin_width,
            bins,
            curve: normal_curve(dist, n as f64 * bin_width),
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Normal density over `[min, max]`, scaled to histogram counts.
fn normal_curve(dist: &DistributionSummary, scale: f64) -> Vec<CurvePoint> {
    let std = if dist.std > 0.0 { dist.std } else { 1.0 };
    let step = (dist.max - dist.min) / (CURVE_POINTS - 1) as f64;
    let norm = 1.0 / (std * (2.0 * PI).sqrt());

    (0..CURVE_POINTS)
        .map(|i| {
            let x = dist.min + i as f64 * step;
            let z = (x - dist.mean) / std;
            let exponent = (-0.5 * z * z).max(MIN_EXPONENT);
            CurvePoint {
                x,
                y: norm * exponent.exp() * scale,
            }
        })
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(values: Vec<f64>) -> DistributionSummary {
        DistributionSummary::from_values("x", values).unwrap()
    }

    #[test]
    fn test_small_sample_uses_five_bins() {
        let h = Histogram::from_distribution(&dist(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]));
        assert_eq!(h.bins.len(), 5);
        assert!((h.bin_width - 2.0).abs() < 1e-12);
        assert_eq!(h.bins[0].center, 1.0);
        // the maximum lands in the last bin
        assert_eq!(h.bins[4].count, 2);
        assert_eq!(h.total(), 10);
    }

    #[test]
    fn test_bin_count_tracks_sqrt_n() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        assert_eq!(Histogram::from_distribution(&dist(values)).bins.len(), 10);
        let values: Vec<f64> = (0..1000).map(f64::from).collect();
        assert_eq!(Histogram::from_distribution(&dist(values)).bins.len(), 20);
    }

    #[test]
    fn test_flat_range() {
        let h = Histogram::from_distribution(&dist(vec![3.0, 3.0, 3.0]));
        assert_eq!(h.bins.len(), 10);
        assert_eq!(h.bin_width, 1.0);
        assert_eq!(h.bins[0].count, 3);
        assert_eq!(h.curve.len(), 101);
        assert!(h.curve.iter().all(|p| p.x == 3.0));
    }

    #[test]
    fn test_curve_peaks_near_mean() {
        let h = Histogram::from_distribution(&dist(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0]));
        assert_eq!(h.curve.len(), 101);
        assert_eq!(h.curve[0].x, 1.0);
        assert!((h.curve[100].x - 5.0).abs() < 1e-9);
        let peak = h
            .curve
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        assert!((peak.x - 3.0).abs() < 1e-9);
    }
}
