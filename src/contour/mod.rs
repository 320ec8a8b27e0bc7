//! Frequency contours: plan one period of sweeps and jumps, then schedule it
//! repeatedly onto a frequency control.
//!
//! ```
//! use saavy_fx::contour::{plan_contour, schedule, ContourParams, ScheduleInstruction};
//!
//! let contour = plan_contour(&ContourParams {
//!     frequency: 220.0,
//!     sweep: 1.0,
//!     ..ContourParams::default()
//! });
//!
//! let mut out: Vec<ScheduleInstruction> = Vec::new();
//! schedule(&mut out, &contour, 1.0, 1.0, 0.0);
//!
//! assert_eq!(out.len(), 2); // jump to 220 Hz, ramp to 440 Hz
//! ```

/// Key points of one contour period.
pub mod plan;
/// Periodic repetition of a contour onto a control.
pub mod schedule;

pub use plan::{plan_contour, Contour, ContourParams, KeyPoint};
pub use schedule::{period_for, schedule, InstructionKind, ScheduleInstruction, MAX_REPEAT_HZ};
