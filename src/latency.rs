use serde::Serialize;

/// 成功请求的延迟分布,单位毫秒
#[derive(Debug, Clone, Default, Serialize)]
pub struct DurationStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub p99: f64,
}

impl DurationStats {
    /// nearest-rank percentiles over the ascending-sorted samples;
    /// 样本为空时所有指标为0
    pub fn compute(durations: &[f64]) -> DurationStats {
        if durations.is_empty() {
            return DurationStats::default();
        }

        let mut sorted = durations.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        DurationStats {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
            p95: sorted[(n as f64 * 0.95) as usize],
            p99: sorted[(n as f64 * 0.99) as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_samples_yield_zeros() {
        let stats = DurationStats::compute(&[]);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.p95, 0.0);
        assert_eq!(stats.p99, 0.0);
    }

    #[test]
    fn percentiles_use_nearest_rank() {
        let stats = DurationStats::compute(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        // floor(5 * 0.95) = 4, floor(5 * 0.99) = 4
        assert_eq!(stats.p95, 50.0);
        assert_eq!(stats.p99, 50.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.mean, 30.0);
        assert_eq!(stats.median, 30.0);
    }

    #[test]
    fn median_averages_middle_pair_for_even_counts() {
        let stats = DurationStats::compute(&[40.0, 10.0, 30.0, 20.0]);
        assert_eq!(stats.median, 25.0);
    }

    #[test]
    fn single_sample() {
        let stats = DurationStats::compute(&[7.5]);
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.p95, 7.5);
        assert_eq!(stats.p99, 7.5);
    }
}
