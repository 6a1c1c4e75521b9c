use std::fmt;

/// Tolerance for endpoint-coincidence checks.
pub const POINT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn close_to(&self, other: Point) -> bool {
        (self.x - other.x).abs() <= POINT_EPSILON && (self.y - other.y).abs() <= POINT_EPSILON
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Line,
    QuadraticBezier,
    CubicBezier,
    Arc,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Line => "Line",
            SegmentKind::QuadraticBezier => "QuadraticBezier",
            SegmentKind::CubicBezier => "CubicBezier",
            SegmentKind::Arc => "Arc",
        };
        f.write_str(name)
    }
}

/// A single path segment with absolute coordinates.
///
/// Arc is recognised by the parser but has no equation conversion;
/// its parameters are carried only so errors can report it faithfully.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    QuadraticBezier {
        start: Point,
        control: Point,
        end: Point,
    },
    CubicBezier {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    Arc {
        start: Point,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Line { .. } => SegmentKind::Line,
            Segment::QuadraticBezier { .. } => SegmentKind::QuadraticBezier,
            Segment::CubicBezier { .. } => SegmentKind::CubicBezier,
            Segment::Arc { .. } => SegmentKind::Arc,
        }
    }

    pub fn start(&self) -> Point {
        match *self {
            Segment::Line { start, .. }
            | Segment::QuadraticBezier { start, .. }
            | Segment::CubicBezier { start, .. }
            | Segment::Arc { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Segment::Line { end, .. }
            | Segment::QuadraticBezier { end, .. }
            | Segment::CubicBezier { end, .. }
            | Segment::Arc { end, .. } => end,
        }
    }

    /// All coordinate data of this segment, anchors first.
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Segment::Line { start, end } => vec![start, end],
            Segment::QuadraticBezier {
                start,
                control,
                end,
            } => vec![start, control, end],
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => vec![start, control1, control2, end],
            Segment::Arc {
                start,
                rx,
                ry,
                end,
                ..
            } => vec![start, Point::new(rx, ry), end],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points().iter().all(Point::is_finite)
    }

    /// Only Bézier families take part in composite fusion.
    pub fn is_fusable(&self) -> bool {
        matches!(
            self.kind(),
            SegmentKind::QuadraticBezier | SegmentKind::CubicBezier
        )
    }
}

/// An ordered sequence of contiguous segments from a single `d` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
