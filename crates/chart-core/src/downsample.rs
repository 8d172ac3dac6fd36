// File: crates/chart-core/src/downsample.rs
// Summary: LTTB downsampling for XY series.

/// Largest-Triangle-Three-Buckets downsampling for XY series.
/// Returns up to `threshold` points preserving overall shape.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 {
        return Vec::new();
    }
    if threshold >= n || n <= 2 {
        return points.to_vec();
    }
    if threshold == 1 {
        return vec![points[0]];
    }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    // Always include first
    sampled.push(points[0]);

    let mut a = 0usize; // index of the selected point from the previous bucket

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = (1.0 + ((i + 1) as f64) * bucket_size).floor().min((n - 1) as f64) as usize;

        // Average of the next bucket
        let next_start = end;
        let next_end = (1.0 + ((i + 2) as f64) * bucket_size).floor().min(n as f64 - 1.0) as usize;
        let mut avg_x = 0.0f64;
        let mut avg_y = 0.0f64;
        let mut avg_count = 0usize;
        let rs = next_start.max(1);
        let re = next_end.max(rs + 1);
        for k in rs..re.min(n) {
            avg_x += points[k].0;
            avg_y += points[k].1;
            avg_count += 1;
        }
        if avg_count == 0 {
            avg_x = points[end].0;
            avg_y = points[end].1;
            avg_count = 1;
        }
        avg_x /= avg_count as f64;
        avg_y /= avg_count as f64;

        // Select the point in the current bucket that maximizes the triangle
        // area with the previous selected point and the next bucket average.
        let a_x = points[a].0;
        let a_y = points[a].1;
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        let se = end.max(start + 1);
        for k in start..se.min(n) {
            let area = ((a_x - points[k].0) * (avg_y - a_y) - (a_x - avg_x) * (points[k].1 - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    // Always include last
    sampled.push(points[n - 1]);
    sampled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_endpoints_and_count() {
        let pts: Vec<(f64, f64)> = (0..1000).map(|i| (i as f64, (i as f64 * 0.1).sin())).collect();
        let out = lttb(&pts, 100);
        assert_eq!(out.len(), 100);
        assert_eq!(out[0], pts[0]);
        assert_eq!(*out.last().unwrap(), *pts.last().unwrap());
    }

    #[test]
    fn small_inputs_pass_through() {
        let pts = vec![(0.0, 1.0), (1.0, 2.0)];
        assert_eq!(lttb(&pts, 10), pts);
        assert!(lttb(&[], 10).is_empty());
    }
}
