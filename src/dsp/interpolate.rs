/*
Exponential Interpolation
=========================

Pitch glides sound "even" when they move by equal ratios in equal time, not by
equal amounts of Hz. Going from 220 Hz to 440 Hz is one octave; an exponential
ramp spends exactly half its time in the lower half-octave and half in the
upper one. A linear ramp would rush through the low notes and crawl through
the high ones.

The curve
---------

Between two points (t0, f0) and (tn, fn):

    progress = (t - t0) / (tn - t0)          0.0 at t0, 1.0 at tn
    f(t)     = f0 * (fn / f0) ^ progress

Example: 220 Hz → 440 Hz over one second, sampled at 0.5 s:
    f = 220 * 2^0.5 ≈ 311.13 Hz             (the geometric mean)


Degenerate cases
----------------

  t == t0        Returns f0 exactly. Zero-length segments show up whenever a
                 jump collapses onto the previous key time, so this path is
                 hot and must not touch the division below.

  t == tn        Returns fn exactly (f0 * (fn/f0) can be off by an ulp).

  tn == t0       A ramp with no length is already finished: returns fn for
                 any t other than t0.

  f0, fn zero    The ratio is undefined or flips sign. Like a Web Audio
  or opposite    exponential ramp, the value holds at f0 until the segment
  signs          ends.

Times outside [t0, tn] are clamped onto the segment.
*/

/// Value of an exponential ramp from `f0` at `t0` to `fn` at `tn`, sampled at `t`.
#[inline]
pub fn interpolate(t0: f64, tn: f64, f0: f64, fn_: f64, t: f64) -> f64 {
    if t == t0 {
        return f0;
    }
    if t == tn || tn == t0 {
        return fn_;
    }

    let progress = ((t - t0) / (tn - t0)).clamp(0.0, 1.0);
    exponential(f0, fn_, progress)
}

/// Exponential blend between `from` and `to` at `progress` in 0.0..=1.0.
#[inline]
pub fn exponential(from: f64, to: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return from;
    }
    if progress >= 1.0 {
        return to;
    }
    // Zero or sign change has no exponential path between the two values.
    if from == 0.0 || to == 0.0 || (from < 0.0) != (to < 0.0) {
        return from;
    }
    from * (to / from).powf(progress)
}

/// Straight-line blend between `from` and `to` at `progress` in 0.0..=1.0.
#[inline]
pub fn linear(from: f64, to: f64, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    from + (to - from) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn endpoints_are_exact() {
        let cases = [
            (0.0, 1.0, 220.0, 440.0),
            (0.25, 0.75, 1000.0, 30.0),
            (1.5, 4.0, 0.1, 12_345.678),
            (0.0, 2.0, 440.0, 440.0),
        ];

        for (t0, tn, f0, fn_) in cases {
            assert_eq!(interpolate(t0, tn, f0, fn_, t0), f0);
            assert_eq!(interpolate(t0, tn, f0, fn_, tn), fn_);
        }
    }

    #[test]
    fn midpoint_is_geometric_mean() {
        let mid = interpolate(0.0, 1.0, 220.0, 440.0, 0.5);
        assert!(approx_eq(mid, (220.0_f64 * 440.0).sqrt()), "got {mid}");
    }

    #[test]
    fn equal_endpoints_hold_constant() {
        for i in 0..=20 {
            let t = 0.5 + i as f64 * 0.1;
            assert_eq!(interpolate(0.5, 2.5, 330.0, 330.0, t), 330.0);
        }
    }

    #[test]
    fn rising_ramp_never_decreases() {
        let mut prev = f64::MIN;
        for i in 0..=200 {
            let t = i as f64 / 200.0;
            let f = interpolate(0.0, 1.0, 110.0, 1760.0, t);
            assert!(f >= prev, "ramp went down at t={t}: {prev} -> {f}");
            prev = f;
        }
    }

    #[test]
    fn falling_ramp_never_increases() {
        let mut prev = f64::MAX;
        for i in 0..=200 {
            let t = 2.0 + i as f64 / 100.0;
            let f = interpolate(2.0, 4.0, 2000.0, 50.0, t);
            assert!(f <= prev, "ramp went up at t={t}: {prev} -> {f}");
            prev = f;
        }
    }

    #[test]
    fn zero_length_segment_is_finished() {
        assert_eq!(interpolate(0.3, 0.3, 100.0, 200.0, 0.3), 100.0);
        assert_eq!(interpolate(0.3, 0.3, 100.0, 200.0, 0.4), 200.0);
        assert!(interpolate(0.3, 0.3, 100.0, 200.0, 0.2).is_finite());
    }

    #[test]
    fn zero_start_holds() {
        assert_eq!(interpolate(0.0, 1.0, 0.0, 440.0, 0.5), 0.0);
        assert_eq!(interpolate(0.0, 1.0, -10.0, 440.0, 0.5), -10.0);
    }

    #[test]
    fn out_of_range_times_clamp() {
        assert_eq!(interpolate(1.0, 2.0, 100.0, 400.0, 5.0), 400.0);
        assert_eq!(interpolate(1.0, 2.0, 100.0, 400.0, 0.0), 100.0);
    }

    #[test]
    fn linear_blend() {
        assert_eq!(linear(0.0, 10.0, 0.25), 2.5);
        assert_eq!(linear(-6.0, 0.0, 1.0), 0.0);
    }
}
