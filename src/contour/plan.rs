use crate::dsp::interpolate::interpolate;

/*
Contour Planning
================

A pitch contour is a baseline sweep with up to two instantaneous jumps laid
on top of it. Planning happens on a unit period: time 0.0 is the start of the
contour, 1.0 is its end. The scheduler stretches it to real seconds later.

    freq
     fn ┤                          ╭──●        ● key points
        │                 ●╭───────╯           ╭╯ baseline sweep
    f2b ┤                 ┃                    ┃  jump
     f2 ┤           ╭─────●
    f1b ┤     ●─────╯
        │     ┃
     f1 ┤   ╭─●
     f0 ●───╯
        └─────┬───────────┬────────────────┬──→ time
        0     t1          t2               1


Jumps shift the baseline
------------------------

A jump is not a blip: the sweep continues from the new value. To keep the
remaining sweep consistent, each jump's delta is folded into the end target:

    f1b = f1 * (1 + j1)          fn += f1b - f1
    f2b = f2 * (1 + j2)          fn += f2b - f2

Jump 1 is folded in before jump 2 is evaluated; reversing that order gives a
different end frequency.


Normalizing the inputs
----------------------

  - Jump positions outside the period are pulled onto its nearest edge.
  - Callers may list the jumps in either time order. If jump 2 comes first,
    the (time, magnitude) pairs are swapped as a whole.
  - A jump of magnitude zero has no moment of its own. Jump 1 collapses to
    t = 0 and jump 2 collapses onto jump 1, so their segments become
    zero-length and the scheduler elides them.
*/

/// One (time, frequency) point of a contour. Time is relative to the period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyPoint {
    pub time: f64,
    pub frequency: f64,
}

impl KeyPoint {
    pub const fn new(time: f64, frequency: f64) -> Self {
        Self { time, frequency }
    }
}

/// The six key points of one contour period, in schedule order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    /// Start of the period: `(0, f0)`.
    pub start: KeyPoint,
    /// Baseline value reached just before jump 1: `(t1, f1)`.
    pub before_jump1: KeyPoint,
    /// Value right after jump 1: `(t1, f1b)`.
    pub after_jump1: KeyPoint,
    /// Baseline value reached just before jump 2: `(t2, f2)`.
    pub before_jump2: KeyPoint,
    /// Value right after jump 2: `(t2, f2b)`.
    pub after_jump2: KeyPoint,
    /// End of the period: `(1, fn)`.
    pub end: KeyPoint,
}

impl Contour {
    /// Key points in schedule order.
    pub fn points(&self) -> [KeyPoint; 6] {
        [
            self.start,
            self.before_jump1,
            self.after_jump1,
            self.before_jump2,
            self.after_jump2,
            self.end,
        ]
    }

    /// A contour that holds `frequency` for the whole period.
    pub fn flat(frequency: f64) -> Self {
        plan_contour(&ContourParams::flat(frequency))
    }
}

/// Sweep and jump parameters for one contour.
///
/// Jump times are fractions of the period. Jump magnitudes are relative:
/// `0.5` raises the frequency by half, `-0.5` halves it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourParams {
    pub frequency: f64,
    pub sweep: f64,
    pub jump_at1: f64,
    pub jump_at2: f64,
    pub jump_by1: f64,
    pub jump_by2: f64,
}

impl ContourParams {
    pub fn flat(frequency: f64) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }
}

/// Derive the key points of one contour period.
pub fn plan_contour(params: &ContourParams) -> Contour {
    let f0 = params.frequency;
    let mut fn_ = if params.sweep != 0.0 {
        f0 * (1.0 + params.sweep)
    } else {
        f0
    };

    let (mut t1, mut j1) = (params.jump_at1.clamp(0.0, 1.0), params.jump_by1);
    let (mut t2, mut j2) = (params.jump_at2.clamp(0.0, 1.0), params.jump_by2);
    if t2 < t1 {
        std::mem::swap(&mut t1, &mut t2);
        std::mem::swap(&mut j1, &mut j2);
    }

    if j1 == 0.0 {
        t1 = 0.0;
    }
    let f1 = interpolate(0.0, 1.0, f0, fn_, t1);
    let f1b = f1 * (1.0 + j1);
    fn_ += f1b - f1;

    if j2 == 0.0 {
        t2 = t1;
    }
    let f2 = interpolate(t1, 1.0, f1b, fn_, t2);
    let f2b = f2 * (1.0 + j2);
    fn_ += f2b - f2;

    Contour {
        start: KeyPoint::new(0.0, f0),
        before_jump1: KeyPoint::new(t1, f1),
        after_jump1: KeyPoint::new(t1, f1b),
        before_jump2: KeyPoint::new(t2, f2),
        after_jump2: KeyPoint::new(t2, f2b),
        end: KeyPoint::new(1.0, fn_),
    }
}
