//! Fixed-point relaxation of disc overlap and containment.

use std::time::{Duration, Instant};

use crate::diag::ProgressSink;
use crate::error::{Error, Result};
use crate::geom::{Area, Disc};
use crate::rand::UniformSource;

/// Tuning knobs for a relaxation run.
///
/// The default ranges are empirical. Both corrections overshoot the minimum corrective distance by
/// a random factor: an exact-minimum correction leaves discs tangent, and tangency re-triggers the
/// overlap test under floating-point error on the next pass, which can cycle forever. The random
/// draw breaks such cycles with probability 1 and keeps symmetric many-body configurations from
/// deadlocking.
#[derive(Debug, Clone)]
pub struct RelaxOptions {
    /// Multiplier interval for the pairwise separation excess.
    pub separation_overshoot: (f64, f64),
    /// Multiplier interval, in radii, for the inward containment margin.
    pub containment_margin: (f64, f64),
    /// Iteration count past which [`ProgressSink::excessive_iterations`] fires. The loop itself
    /// never self-terminates on this.
    pub advisory_threshold: u32,
}

impl RelaxOptions {
    pub const SEPARATION_OVERSHOOT: (f64, f64) = (1.001, 2.0);
    pub const CONTAINMENT_MARGIN: (f64, f64) = (1.0, 2.0);
    pub const ADVISORY_THRESHOLD: u32 = 120;
}

impl Default for RelaxOptions {
    fn default() -> Self {
        Self {
            separation_overshoot: Self::SEPARATION_OVERSHOOT,
            containment_margin: Self::CONTAINMENT_MARGIN,
            advisory_threshold: Self::ADVISORY_THRESHOLD,
        }
    }
}

/// Outcome of a completed relaxation run.
#[derive(Debug, Clone, Copy)]
pub struct RelaxReport {
    /// Full passes performed, the terminal clean pass included. An already-resolved input reports
    /// a single pass.
    pub iterations: u32,
    /// Wall time spent in the loop.
    pub elapsed: Duration,
}

/// Pushes two overlapping discs apart along the line joining their centers.
///
/// Both discs move away from the midpoint between them by half of the overlap amount scaled by a
/// draw from `overshoot`, in opposite directions, so the pair's combined centroid stays put.
/// Returns whether anything moved; overlapping discs with the exact same center are rejected, as
/// the push direction is undefined there.
pub fn separate(
    a: &mut Disc,
    b: &mut Disc,
    overshoot: (f64, f64),
    rng: &mut dyn UniformSource,
) -> Result<bool> {
    let between = b.center - a.center;
    let r_sum = a.radius() + b.radius();
    let dist = between.length();
    if r_sum <= dist {
        return Ok(false);
    }
    if dist == 0.0 {
        return Err(Error::CoincidentCenters {
            x: a.center.x,
            y: a.center.y,
        });
    }

    let mid = between / 2.0;
    let excess = (r_sum - dist) * rng.sample(overshoot.0, overshoot.1);
    let half_dist = dist / 2.0;
    a.translate(mid, -(excess / (2.0 * half_dist)));
    b.translate(mid, excess / (2.0 * half_dist));
    Ok(true)
}

/// Relocates a boundary-crossing disc fully inside `area`.
///
/// Axes are handled independently; the relocated center sits `radius * k` inward from the crossed
/// edge, `k` drawn from `margin`, so the disc never lands exactly tangent to the wall. At most one
/// side per axis can be violated as long as disc diameters stay below the area extent (validated
/// by [`relax`]; direct callers own that precondition). Returns whether anything moved.
pub fn contain(
    disc: &mut Disc,
    area: &Area,
    margin: (f64, f64),
    rng: &mut dyn UniformSource,
) -> bool {
    let r = disc.radius();
    let mut changed = false;
    if disc.center.x - r < area.min.x {
        disc.center.x = area.min.x + r * rng.sample(margin.0, margin.1);
        changed = true;
    } else if disc.center.x + r > area.max.x {
        disc.center.x = area.max.x - r * rng.sample(margin.0, margin.1);
        changed = true;
    }
    if disc.center.y - r < area.min.y {
        disc.center.y = area.min.y + r * rng.sample(margin.0, margin.1);
        changed = true;
    } else if disc.center.y + r > area.max.y {
        disc.center.y = area.max.y - r * rng.sample(margin.0, margin.1);
        changed = true;
    }
    changed
}

/// Relaxes `discs` in place until no disc overlaps another and every disc lies inside `area`.
///
/// Each iteration sweeps every unordered index pair through [`separate`] (i ascending, then j),
/// then every disc through [`contain`] in list order; the loop ends on the first pass that changes
/// nothing. Termination is probabilistic, not bounded: past `opts.advisory_threshold` passes the
/// sink is advised once and the loop keeps going.
pub fn relax(
    discs: &mut [Disc],
    area: &Area,
    opts: &RelaxOptions,
    rng: &mut dyn UniformSource,
    sink: &mut dyn ProgressSink,
) -> Result<RelaxReport> {
    validate_fit(discs, area)?;

    let n = discs.len();
    sink.started(n, n * n.saturating_sub(1) / 2);
    let begin = Instant::now();

    let mut iterations = 0u32;
    let mut advised = false;
    let mut changed = true;
    while changed {
        changed = false;
        iterations += 1;
        for i in 0..n {
            let (head, tail) = discs.split_at_mut(i + 1);
            for other in tail.iter_mut() {
                if separate(&mut head[i], other, opts.separation_overshoot, rng)? {
                    changed = true;
                }
            }
        }
        for disc in discs.iter_mut() {
            if contain(disc, area, opts.containment_margin, rng) {
                changed = true;
            }
        }
        if !advised && iterations > opts.advisory_threshold {
            advised = true;
            sink.excessive_iterations(iterations);
        }
    }

    let elapsed = begin.elapsed();
    sink.finished(iterations, elapsed);
    Ok(RelaxReport {
        iterations,
        elapsed,
    })
}

fn validate_fit(discs: &[Disc], area: &Area) -> Result<()> {
    for (index, disc) in discs.iter().enumerate() {
        let diameter = 2.0 * disc.radius();
        if diameter > area.width() {
            return Err(Error::UnsatisfiableContainment {
                index,
                diameter,
                axis: "x",
                extent: area.width(),
            });
        }
        if diameter > area.height() {
            return Err(Error::UnsatisfiableContainment {
                index,
                diameter,
                axis: "y",
                extent: area.height(),
            });
        }
    }
    Ok(())
}
