#![forbid(unsafe_code)]

//! Headless disc de-overlap and containment relaxation.
//!
//! `sanddollar` takes a list of discs that may collide with each other or stick out of a
//! rectangular area and nudges them, pass after pass, until no pair overlaps and every disc sits
//! fully inside. Corrections are randomly overshot past the minimum distance so configurations
//! never settle on exact tangency, which would re-trigger the overlap test under floating-point
//! error and cycle.
//!
//! Generation of the initial discs and rendering of the result are left to callers; randomness and
//! progress reporting are injected (see [`UniformSource`] and [`ProgressSink`]) so runs are
//! seedable and the engine stays headless under test.

pub mod diag;
pub mod error;
pub mod geom;
pub mod rand;
pub mod relax;

pub use diag::{NullSink, ProgressSink, TracingSink};
pub use error::{Error, Result};
pub use geom::{Area, Disc, Point, Unit, Vector, area, point, vector};
pub use rand::{UniformSource, XorShift64Star};
pub use relax::{RelaxOptions, RelaxReport, contain, relax, separate};
