// Progress ring geometry - arc endpoint and sweep flag for a completion ratio
use std::f64::consts::{FRAC_PI_2, TAU};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArcError {
    #[error("arc parameter {name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("arc parameter {name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("part {part} exceeds total {total}")]
    PartExceedsTotal { part: f64, total: f64 },
}

/// Endpoint of a partial arc, in the offset canvas coordinate space, plus the
/// SVG large-arc flag selecting which of the two arcs joins it to the start
/// point. The start point is always `(offset, offset + radius)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub end_x: f64,
    pub end_y: f64,
    pub large_arc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcResult {
    /// Nothing is finished; only the background track is drawn.
    Empty,
    /// Everything is finished; the ring is a full circle, no arc needed.
    Full,
    Partial(ArcSpec),
}

/// Compute the arc descriptor for a ring that is `part/total` complete.
///
/// `total == 0` carries no completion fraction and is treated as empty.
/// Negative or non-finite parameters and `part > total` are contract
/// violations.
pub fn compute_arc(radius: f64, offset: f64, part: f64, total: f64) -> Result<ArcResult, ArcError> {
    validate(radius, offset, part, total)?;

    if part == 0.0 {
        return Ok(ArcResult::Empty);
    }
    if part == total {
        return Ok(ArcResult::Full);
    }

    let theta = (part / total) * TAU;
    let x = radius * theta.cos();
    let y = radius * theta.sin();

    Ok(ArcResult::Partial(correct_for_quadrant(
        quadrant_of(theta),
        radius,
        offset,
        x,
        y,
    )))
}

fn validate(radius: f64, offset: f64, part: f64, total: f64) -> Result<(), ArcError> {
    let params = [
        ("radius", radius),
        ("offset", offset),
        ("part", part),
        ("total", total),
    ];
    for (name, value) in params {
        if !value.is_finite() {
            return Err(ArcError::NotFinite { name, value });
        }
        if value < 0.0 {
            return Err(ArcError::Negative { name, value });
        }
    }
    if part > total {
        return Err(ArcError::PartExceedsTotal { part, total });
    }
    Ok(())
}

/// Quadrant index (0-3) of an angle in `[0, 2π)`, each quadrant spanning
/// `π/2` and closed at its lower bound. Rounding can land `theta` exactly on
/// `2π` for ratios just below 1; that collapses into the fourth quadrant.
fn quadrant_of(theta: f64) -> usize {
    ((theta / FRAC_PI_2) as usize).min(3)
}

/// Translate a unit-circle point into canvas coordinates and pick the
/// large-arc flag. One row per quadrant: the first half turn keeps the short
/// arc, the second half needs the long one.
fn correct_for_quadrant(quadrant: usize, radius: f64, offset: f64, x: f64, y: f64) -> ArcSpec {
    match quadrant {
        0 => ArcSpec {
            end_x: radius - x + offset,
            end_y: radius - y + offset,
            large_arc: false,
        },
        1 => ArcSpec {
            end_x: -(x - radius) + offset,
            end_y: radius - y + offset,
            large_arc: false,
        },
        2 => ArcSpec {
            end_x: -(x - radius) + offset,
            end_y: -(y - radius) + offset,
            large_arc: true,
        },
        _ => ArcSpec {
            end_x: radius - x + offset,
            end_y: -(y - radius) + offset,
            large_arc: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 40.0;
    const OFFSET: f64 = 10.0;

    fn partial(part: f64, total: f64) -> ArcSpec {
        match compute_arc(RADIUS, OFFSET, part, total) {
            Ok(ArcResult::Partial(spec)) => spec,
            other => panic!("expected partial arc, got {other:?}"),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_part_is_empty() {
        assert_eq!(compute_arc(RADIUS, OFFSET, 0.0, 40.0), Ok(ArcResult::Empty));
        assert_eq!(compute_arc(RADIUS, OFFSET, 0.0, 0.0), Ok(ArcResult::Empty));
    }

    #[test]
    fn test_complete_ratio_is_full() {
        assert_eq!(compute_arc(RADIUS, OFFSET, 40.0, 40.0), Ok(ArcResult::Full));
    }

    #[test]
    fn test_part_exceeding_total_is_rejected() {
        assert_eq!(
            compute_arc(RADIUS, OFFSET, 41.0, 40.0),
            Err(ArcError::PartExceedsTotal {
                part: 41.0,
                total: 40.0
            })
        );
    }

    #[test]
    fn test_negative_parameters_are_rejected() {
        assert_eq!(
            compute_arc(-1.0, OFFSET, 1.0, 4.0),
            Err(ArcError::Negative {
                name: "radius",
                value: -1.0
            })
        );
        assert_eq!(
            compute_arc(RADIUS, OFFSET, -1.0, 4.0),
            Err(ArcError::Negative {
                name: "part",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        assert!(matches!(
            compute_arc(RADIUS, OFFSET, f64::NAN, 4.0),
            Err(ArcError::NotFinite { name: "part", .. })
        ));
        assert!(matches!(
            compute_arc(RADIUS, f64::INFINITY, 1.0, 4.0),
            Err(ArcError::NotFinite { name: "offset", .. })
        ));
    }

    #[test]
    fn test_first_quadrant_arc() {
        // ratio 1/8: theta = pi/4, endpoint below and left of center
        let spec = partial(5.0, 40.0);
        let leg = RADIUS / std::f64::consts::SQRT_2;
        assert_close(spec.end_x, RADIUS - leg + OFFSET);
        assert_close(spec.end_y, RADIUS - leg + OFFSET);
        assert!(!spec.large_arc);
    }

    #[test]
    fn test_quarter_ratio_lands_on_second_quadrant_boundary() {
        // theta = pi/2 exactly; the boundary belongs to quadrant 2
        let spec = partial(10.0, 40.0);
        assert_close(spec.end_x, 50.0);
        assert_close(spec.end_y, 10.0);
        assert!(!spec.large_arc);
    }

    #[test]
    fn test_half_ratio_switches_to_long_arc() {
        // theta = pi exactly; quadrant 3 picks the long way around
        let spec = partial(20.0, 40.0);
        assert_close(spec.end_x, 90.0);
        assert_close(spec.end_y, 50.0);
        assert!(spec.large_arc);
    }

    #[test]
    fn test_three_quarter_ratio_is_fourth_quadrant() {
        let spec = partial(30.0, 40.0);
        assert_close(spec.end_x, 50.0);
        assert_close(spec.end_y, 90.0);
        assert!(spec.large_arc);
    }

    #[test]
    fn test_late_fourth_quadrant_arc() {
        // ratio 7/8: theta = 7pi/4
        let spec = partial(35.0, 40.0);
        let leg = RADIUS / std::f64::consts::SQRT_2;
        assert_close(spec.end_x, RADIUS - leg + OFFSET);
        assert_close(spec.end_y, RADIUS + leg + OFFSET);
        assert!(spec.large_arc);
    }

    #[test]
    fn test_ratio_just_below_one_stays_partial() {
        let total = 1.0;
        let part = 1.0 - 1e-12;
        match compute_arc(RADIUS, OFFSET, part, total) {
            Ok(ArcResult::Partial(spec)) => assert!(spec.large_arc),
            other => panic!("expected partial arc, got {other:?}"),
        }
    }
}
