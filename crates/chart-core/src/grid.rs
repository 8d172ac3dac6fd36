// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" step selection and tick placement).

/// Pick a 1/2/5 x 10^k step so that `span` holds roughly `target` ticks.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0) || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let snapped = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    snapped * mag
}

/// Tick values at multiples of `step` inside [min, max].
pub fn ticks_at(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() || min > max {
        return Vec::new();
    }
    let eps = step * 1e-6;
    let mut v = (min / step).ceil() * step;
    let mut out = Vec::new();
    while v <= max + eps {
        // Snap float drift at the origin so "0" formats cleanly.
        out.push(if v.abs() < eps { 0.0 } else { v });
        v += step;
    }
    out
}

/// Nice ticks for [min, max]: returns the chosen step and the tick values.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (f64, Vec<f64>) {
    let step = nice_step(max - min, target);
    let ticks = ticks_at(min, max, step);
    (step, ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_snaps_to_1_2_5() {
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(10.0, 6), 2.0);
        assert_eq!(nice_step(100.0, 4), 50.0); // raw 25 snaps up to 5 x 10^1
    }

    #[test]
    fn ticks_cover_range() {
        let (step, ticks) = nice_ticks(0.0, 10.0, 6);
        assert_eq!(step, 2.0);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn ticks_handle_negative_span() {
        let (_, ticks) = nice_ticks(-5.0, 5.0, 5);
        assert!(ticks.contains(&0.0));
        assert!(ticks.first().unwrap() >= &-5.0);
        assert!(ticks.last().unwrap() <= &5.0);
    }
}
