use crate::errors::{Result, SvgeqError};
use crate::geometry::{Point, Segment};
use crate::poly::{bernstein, Polynomial};

/// The parametric equations of one curve: x(t) and y(t) for t in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricPair {
    pub x: Polynomial,
    pub y: Polynomial,
}

impl ParametricPair {
    pub fn eval(&self, t: f64) -> Point {
        Point::new(self.x.eval(t), self.y.eval(t))
    }
}

/// Blend a control polygon with the Bernstein basis of matching degree.
///
/// Each weighted term is simplified as it is produced and the sums are
/// simplified once more at the end, keeping intermediate forms minimal.
pub fn bernstein_blend(points: &[Point]) -> ParametricPair {
    let degree = points.len() - 1;
    let mut x = Polynomial::zero();
    let mut y = Polynomial::zero();
    for (i, p) in points.iter().enumerate() {
        let basis = bernstein(degree, i);
        x = x.add(&basis.scale(p.x).simplify());
        y = y.add(&basis.scale(p.y).simplify());
    }
    ParametricPair {
        x: x.simplify(),
        y: y.simplify(),
    }
}

/// Convert a single segment to its parametric equation pair.
///
/// Lines use the affine interpolation `(1-t)*start + t*end`; quadratic and
/// cubic Béziers use the degree-2 and degree-3 Bernstein blends. Arcs have
/// no polynomial form and are rejected.
pub fn build(segment: &Segment) -> Result<ParametricPair> {
    if !segment.is_finite() {
        return Err(SvgeqError::InvalidGeometry(format!(
            "{} segment has non-finite coordinates",
            segment.kind()
        )));
    }
    match *segment {
        Segment::Line { start, end } => Ok(bernstein_blend(&[start, end])),
        Segment::QuadraticBezier {
            start,
            control,
            end,
        } => Ok(bernstein_blend(&[start, control, end])),
        Segment::CubicBezier {
            start,
            control1,
            control2,
            end,
        } => Ok(bernstein_blend(&[start, control1, control2, end])),
        Segment::Arc { .. } => Err(SvgeqError::UnsupportedSegment(
            "Arc has no parametric polynomial form".to_string(),
        )),
    }
}
