//! Optimal one-dimensional k-means clustering.
//!
//! Clusters are contiguous runs of the sorted sample chosen to minimize the
//! total within-cluster sum of squared deviations, found by dynamic
//! programming. Each row of the cost matrix is filled by divide and conquer,
//! relying on the optimal split index being monotone in the cluster end, for
//! O(k·n·log n) overall.

use itertools::Itertools;

/// Partition ascending `sorted` values into at most `k` optimal clusters.
///
/// When `k` reaches the number of distinct values, every distinct value forms
/// its own cluster and fewer than `k` clusters are returned. Among splits of
/// equal cost, the one starting the last cluster latest is preferred.
pub fn ckmeans(sorted: &[f64], k: usize) -> Vec<&[f64]> {
    let n = sorted.len();
    if n == 0 || k == 0 {
        return vec![];
    }

    if k >= sorted.iter().dedup().count() {
        let mut start = 0;
        return sorted
            .iter()
            .dedup_with_count()
            .map(|(count, _)| {
                let cluster = &sorted[start..start + count];
                start += count;
                cluster
            })
            .collect();
    }

    let costs = SegmentCost::new(sorted);

    // cost[m][i]: smallest total cost of sorted[..=i] split into m + 1 clusters
    // split[m][i]: start index of the last of those clusters
    let mut cost = vec![vec![0.0; n]; k];
    let mut split = vec![vec![0usize; n]; k];
    for i in 0..n {
        cost[0][i] = costs.ssq(0, i);
    }
    for m in 1..k {
        let (done, rest) = cost.split_at_mut(m);
        let row = RowFill {
            m,
            costs: &costs,
            prev: &done[m - 1],
        };
        row.fill(m, n - 1, m, n - 1, &mut rest[0], &mut split[m]);
    }

    let mut clusters = vec![&sorted[..0]; k];
    let mut end = n;
    for m in (0..k).rev() {
        let start = split[m][end - 1];
        clusters[m] = &sorted[start..end];
        end = start;
    }
    clusters
}

/// Drop every single-value cluster whose maximum repeats the previous
/// cluster's maximum.
///
/// These appear when there are more clusters than the data can meaningfully
/// separate. Comparison is always against the immediately preceding input
/// cluster, dropped or not.
pub fn collapse_degenerate_clusters(clusters: Vec<&[f64]>) -> Vec<&[f64]> {
    let mut previous_max = None;
    let mut kept = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let max = cluster.last().copied();
        let degenerate = cluster.len() == 1 && max == previous_max;
        previous_max = max;
        if !degenerate {
            kept.push(cluster);
        }
    }
    kept
}

/// Upper boundaries of natural-break bins over ascending `sorted` values
pub fn natural_boundaries(sorted: &[f64], bin_count: usize) -> Vec<f64> {
    collapse_degenerate_clusters(ckmeans(sorted, bin_count))
        .into_iter()
        .filter_map(|cluster| cluster.last().copied())
        .collect()
}

/// Within-cluster sum of squares for any contiguous segment, from prefix sums
/// of the values shifted by the median
struct SegmentCost {
    sums: Vec<f64>,
    squares: Vec<f64>,
}

impl SegmentCost {
    fn new(sorted: &[f64]) -> Self {
        let shift = sorted[sorted.len() / 2];
        let mut sums = Vec::with_capacity(sorted.len() + 1);
        let mut squares = Vec::with_capacity(sorted.len() + 1);
        sums.push(0.0);
        squares.push(0.0);
        for (i, v) in sorted.iter().enumerate() {
            let d = v - shift;
            sums.push(sums[i] + d);
            squares.push(squares[i] + d * d);
        }
        Self { sums, squares }
    }

    /// Cost of the segment `j..=i`
    fn ssq(&self, j: usize, i: usize) -> f64 {
        if j >= i {
            return 0.0;
        }
        let count = (i - j + 1) as f64;
        let sum = self.sums[i + 1] - self.sums[j];
        let sq = self.squares[i + 1] - self.squares[j];
        (sq - sum * sum / count).max(0.0)
    }
}

struct RowFill<'a> {
    m: usize,
    costs: &'a SegmentCost,
    prev: &'a [f64],
}

impl RowFill<'_> {
    /// Fill `row[imin..=imax]`, searching last-cluster starts in `jmin..=jmax`
    fn fill(
        &self,
        imin: usize,
        imax: usize,
        jmin: usize,
        jmax: usize,
        row: &mut [f64],
        split: &mut [usize],
    ) {
        if imin > imax {
            return;
        }
        let i = imin + (imax - imin) / 2;
        let lo = jmin.max(self.m);
        let hi = jmax.min(i);

        let mut best = f64::INFINITY;
        let mut best_j = hi;
        for j in (lo..=hi).rev() {
            let c = self.prev[j - 1] + self.costs.ssq(j, i);
            if c < best {
                best = c;
                best_j = j;
            }
        }
        row[i] = best;
        split[i] = best_j;

        if i > imin {
            self.fill(imin, i - 1, jmin, best_j, row, split);
        }
        self.fill(i + 1, imax, best_j, jmax, row, split);
    }
}
