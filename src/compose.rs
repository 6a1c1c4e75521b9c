use crate::equation::{bernstein_blend, build, ParametricPair};
use crate::errors::{Result, SvgeqError};
use crate::geometry::{Point, Segment};

/// An ordered run of segments converted as one curve.
///
/// Runs longer than one segment only ever contain a single Bézier family
/// (all cubic or all quadratic) with matching endpoints; `group_path`
/// maintains that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeGroup {
    segments: Vec<Segment>,
}

impl CompositeGroup {
    pub fn single(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `segment` may extend this group: same fusable kind as the
    /// last member and starting where it ended.
    fn accepts(&self, segment: &Segment) -> bool {
        match self.segments.last() {
            Some(prev) => {
                segment.is_fusable()
                    && prev.kind() == segment.kind()
                    && segment.start().close_to(prev.end())
            }
            None => false,
        }
    }

    /// The concatenated control polygon: the first segment's start point,
    /// then each segment's control point(s) and end point in order.
    fn control_polygon(&self) -> Vec<Point> {
        let mut points = vec![self.segments[0].start()];
        for segment in &self.segments {
            match *segment {
                Segment::QuadraticBezier { control, end, .. } => {
                    points.push(control);
                    points.push(end);
                }
                Segment::CubicBezier {
                    control1,
                    control2,
                    end,
                    ..
                } => {
                    points.push(control1);
                    points.push(control2);
                    points.push(end);
                }
                // unreachable for len > 1 groups by construction
                Segment::Line { end, .. } | Segment::Arc { end, .. } => points.push(end),
            }
        }
        points
    }
}

/// Partition a path's segments into composite groups.
///
/// A segment joins the preceding group when it is a cubic or quadratic
/// Bézier of the same kind as its predecessor and starts at the
/// predecessor's end point; otherwise it opens a new group. Lines and arcs
/// always form groups of one.
pub fn group_path(segments: &[Segment]) -> Vec<CompositeGroup> {
    segments
        .iter()
        .fold(Vec::new(), |mut groups: Vec<CompositeGroup>, segment| {
            match groups.last_mut() {
                Some(group) if group.accepts(segment) => group.segments.push(*segment),
                _ => groups.push(CompositeGroup::single(*segment)),
            }
            groups
        })
}

/// Convert a composite group into a single equation pair.
///
/// A group of `n` fused cubic segments yields degree-3n polynomials
/// (degree-2n for quadratics): the concatenated control polygon is blended
/// with the Bernstein basis of the fused degree.
pub fn compose(group: &CompositeGroup) -> Result<ParametricPair> {
    match group.len() {
        0 => Err(SvgeqError::EmptyGroup),
        1 => build(&group.segments[0]),
        _ => {
            for segment in &group.segments {
                if !segment.is_finite() {
                    return Err(SvgeqError::InvalidGeometry(format!(
                        "{} segment has non-finite coordinates",
                        segment.kind()
                    )));
                }
            }
            Ok(bernstein_blend(&group.control_polygon()))
        }
    }
}
