use crate::errors::{Result, SvgeqError};
use crate::geometry::{Path, Point, Segment};

pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }
}

impl PathSyntax for SvgPathSyntax {
    fn at_command(&self) -> Result<bool> {
        self.check_not_end()?;
        let c = self
            .current()
            .ok_or_else(|| SvgeqError::ParseError("no data".to_string()))?;
        Ok("MmLlHhVvZzCcSsQqTtAa".contains(c))
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }
}

pub trait PathSyntax {
    fn at_command(&self) -> Result<bool>;
    fn current(&self) -> Option<char>;
    fn advance(&mut self);
    fn at_end(&self) -> bool;

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(SvgeqError::ParseError("ran out of data!".to_string()))
        } else {
            Ok(())
        }
    }

    fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while !self.at_end() && self.current().unwrap().is_ascii_whitespace() {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if !self.at_end() && self.current().unwrap() == ',' {
            self.advance();
            self.skip_whitespace();
        }
    }

    fn read_flag(&mut self) -> Result<bool> {
        self.check_not_end()?;
        // per the grammar for `a`/`A`, could have '00' etc for
        // the two adjacent flags...
        let res = match self.current().unwrap() {
            '0' => false,
            '1' => true,
            other => {
                return Err(SvgeqError::ParseError(format!(
                    "invalid arc flag '{}'",
                    other
                )))
            }
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    fn read_number(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut mult = 1.;
        match self.current().unwrap() {
            '-' => {
                mult = -1.;
                self.advance();
            }
            '+' => {
                self.advance();
            }
            _ => {}
        };
        Ok(mult * self.read_non_negative()?)
    }

    fn read_non_negative(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E' if exp_valid && s.ends_with(|c: char| c.is_ascii_digit()) => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if self.current() == Some('-') || self.current() == Some('+') {
                        s.push(self.current().unwrap());
                        self.advance();
                    }
                    dot_valid = false;
                    exp_valid = false;
                }
                _ => break,
            }
        }
        self.skip_wsp_comma();
        Ok(s.parse()?)
    }

    fn read_coord(&mut self) -> Result<(f64, f64)> {
        let x = self.read_number()?;
        self.skip_wsp_comma();
        let y = self.read_number()?;
        self.skip_wsp_comma();
        Ok((x, y))
    }

    fn read_command(&mut self) -> Result<char> {
        if self.at_command()? {
            let command = self.current().unwrap();
            self.advance();
            self.skip_wsp_comma();
            Ok(command)
        } else {
            Err(SvgeqError::ParseError("invalid path command".to_string()))
        }
    }
}

struct PathParser {
    tokens: SvgPathSyntax,
    position: Point,
    subpath_start: Point,
    command: Option<char>,
    // reflection anchors for the S/T shorthand commands
    prev_cubic_control: Option<Point>,
    prev_quad_control: Option<Point>,
    segments: Vec<Segment>,
}

impl PathParser {
    fn new(data: &str) -> Self {
        PathParser {
            tokens: SvgPathSyntax::new(data),
            position: Point::new(0., 0.),
            subpath_start: Point::new(0., 0.),
            command: None,
            prev_cubic_control: None,
            prev_quad_control: None,
            segments: Vec::new(),
        }
    }

    fn read_point(&mut self, relative: bool) -> Result<Point> {
        let (x, y) = self.tokens.read_coord()?;
        Ok(if relative {
            Point::new(self.position.x + x, self.position.y + y)
        } else {
            Point::new(x, y)
        })
    }

    fn line_to(&mut self, end: Point) {
        self.segments.push(Segment::Line {
            start: self.position,
            end,
        });
        self.position = end;
    }

    fn process_instruction(&mut self) -> Result<()> {
        if self.command.is_none() || self.tokens.at_command()? {
            self.command = Some(self.tokens.read_command()?);
        }

        let command = self.command.expect("command should be already set");
        let relative = command.is_ascii_lowercase();
        // shorthand reflection only applies directly after the matching family
        let cubic_anchor = self.prev_cubic_control.take();
        let quad_anchor = self.prev_quad_control.take();

        match command {
            'M' | 'm' => {
                let xy = self.read_point(relative)?;
                self.position = xy;
                self.subpath_start = xy;
                // "If a moveto is followed by multiple pairs of coordinates,
                // the subsequent pairs are treated as implicit lineto commands."
                self.command = Some(if relative { 'l' } else { 'L' });
            }
            'L' | 'l' => {
                let xy = self.read_point(relative)?;
                self.line_to(xy);
            }
            'H' | 'h' => {
                let x = self.tokens.read_number()?;
                let x = if relative { self.position.x + x } else { x };
                self.line_to(Point::new(x, self.position.y));
            }
            'V' | 'v' => {
                let y = self.tokens.read_number()?;
                let y = if relative { self.position.y + y } else { y };
                self.line_to(Point::new(self.position.x, y));
            }
            'Z' | 'z' => {
                if !self.position.close_to(self.subpath_start) {
                    self.line_to(self.subpath_start);
                } else {
                    self.position = self.subpath_start;
                }
                // close must be followed by a fresh command
                if !self.tokens.at_end() && !self.tokens.at_command()? {
                    return Err(SvgeqError::ParseError(
                        "expected command after path close".to_string(),
                    ));
                }
                self.command = None;
            }
            'C' | 'c' => {
                let control1 = self.read_point(relative)?;
                let control2 = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.segments.push(Segment::CubicBezier {
                    start: self.position,
                    control1,
                    control2,
                    end,
                });
                self.position = end;
                self.prev_cubic_control = Some(control2);
            }
            'S' | 's' => {
                let control2 = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                let control1 = match cubic_anchor {
                    Some(prev) => Point::new(
                        2. * self.position.x - prev.x,
                        2. * self.position.y - prev.y,
                    ),
                    None => self.position,
                };
                self.segments.push(Segment::CubicBezier {
                    start: self.position,
                    control1,
                    control2,
                    end,
                });
                self.position = end;
                self.prev_cubic_control = Some(control2);
            }
            'Q' | 'q' => {
                let control = self.read_point(relative)?;
                let end = self.read_point(relative)?;
                self.segments.push(Segment::QuadraticBezier {
                    start: self.position,
                    control,
                    end,
                });
                self.position = end;
                self.prev_quad_control = Some(control);
            }
            'T' | 't' => {
                let end = self.read_point(relative)?;
                let control = match quad_anchor {
                    Some(prev) => Point::new(
                        2. * self.position.x - prev.x,
                        2. * self.position.y - prev.y,
                    ),
                    None => self.position,
                };
                self.segments.push(Segment::QuadraticBezier {
                    start: self.position,
                    control,
                    end,
                });
                self.position = end;
                self.prev_quad_control = Some(control);
            }
            'A' | 'a' => {
                // "(rx ry x-axis-rotation large-arc-flag sweep-flag x y)+"
                let (rx, ry) = self.tokens.read_coord()?;
                let x_rotation = self.tokens.read_number()?;
                let large_arc = self.tokens.read_flag()?;
                let sweep = self.tokens.read_flag()?;
                let end = self.read_point(relative)?;
                self.segments.push(Segment::Arc {
                    start: self.position,
                    rx,
                    ry,
                    x_rotation,
                    large_arc,
                    sweep,
                    end,
                });
                self.position = end;
            }
            _ => {
                return Err(SvgeqError::ParseError(format!(
                    "unknown path instruction '{}'",
                    command
                )))
            }
        }
        Ok(())
    }

    fn evaluate(mut self) -> Result<Path> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            self.process_instruction()?;
        }
        Ok(Path::new(self.segments))
    }
}

/// Parse a path `d` attribute into absolute-coordinate segments.
///
/// Move commands establish position without producing a segment; `Z`
/// produces the closing line back to the subpath start when one is needed.
pub fn parse_path_data(data: &str) -> Result<Path> {
    PathParser::new(data).evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SegmentKind;

    #[test]
    fn test_ps_number() {
        let mut ps = SvgPathSyntax::new("123 4.5  -9.25 1e2 2.5e-1");
        ps.skip_whitespace();
        assert_eq!(ps.read_number().unwrap(), 123.);
        assert_eq!(ps.read_number().unwrap(), 4.5);
        assert_eq!(ps.read_number().unwrap(), -9.25);
        assert_eq!(ps.read_number().unwrap(), 100.);
        assert_eq!(ps.read_number().unwrap(), 0.25);
    }

    #[test]
    fn test_ps_coord() {
        let mut ps = SvgPathSyntax::new("123 456");
        assert_eq!(ps.read_coord().unwrap(), (123., 456.));

        let mut ps = SvgPathSyntax::new("123,456");
        assert_eq!(ps.read_coord().unwrap(), (123., 456.));

        let mut ps = SvgPathSyntax::new("123 ,   456");
        assert_eq!(ps.read_coord().unwrap(), (123., 456.));
    }

    #[test]
    fn test_parse_line() {
        let path = parse_path_data("M0 0 L10 0").unwrap();
        assert_eq!(path.segments.len(), 1);
        assert_eq!(
            path.segments[0],
            Segment::Line {
                start: Point::new(0., 0.),
                end: Point::new(10., 0.),
            }
        );
    }

    #[test]
    fn test_parse_implicit_lineto() {
        // extra moveto coordinate pairs become linetos
        let path = parse_path_data("M10 20 100 200 150 250").unwrap();
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[0].start(), Point::new(10., 20.));
        assert_eq!(path.segments[1].end(), Point::new(150., 250.));

        let path = parse_path_data("m10 20 100 200").unwrap();
        assert_eq!(path.segments[0].end(), Point::new(110., 220.));
    }

    #[test]
    fn test_parse_hv() {
        let path = parse_path_data("M1 2 H 10 v 3").unwrap();
        assert_eq!(
            path.segments[0],
            Segment::Line {
                start: Point::new(1., 2.),
                end: Point::new(10., 2.),
            }
        );
        assert_eq!(
            path.segments[1],
            Segment::Line {
                start: Point::new(10., 2.),
                end: Point::new(10., 5.),
            }
        );
    }

    #[test]
    fn test_parse_close() {
        let path = parse_path_data("M0 0 L10 0 L10 10 Z").unwrap();
        assert_eq!(path.segments.len(), 3);
        assert_eq!(
            path.segments[2],
            Segment::Line {
                start: Point::new(10., 10.),
                end: Point::new(0., 0.),
            }
        );
        // no degenerate closing line when already back at the start
        let path = parse_path_data("M0 0 L10 0 L0 0 Z").unwrap();
        assert_eq!(path.segments.len(), 2);
    }

    #[test]
    fn test_parse_cubic() {
        let path = parse_path_data("M0 0 C0 10 10 10 10 0").unwrap();
        assert_eq!(
            path.segments[0],
            Segment::CubicBezier {
                start: Point::new(0., 0.),
                control1: Point::new(0., 10.),
                control2: Point::new(10., 10.),
                end: Point::new(10., 0.),
            }
        );

        let path = parse_path_data("M1 1 c1 2 3 2 4 0").unwrap();
        assert_eq!(
            path.segments[0],
            Segment::CubicBezier {
                start: Point::new(1., 1.),
                control1: Point::new(2., 3.),
                control2: Point::new(4., 3.),
                end: Point::new(5., 1.),
            }
        );
    }

    #[test]
    fn test_parse_smooth_cubic() {
        let path = parse_path_data("M0 0 C0 10 10 10 10 0 S20 -10 20 0").unwrap();
        assert_eq!(path.segments.len(), 2);
        // control1 of the S segment reflects (10,10) about (10,0)
        assert_eq!(
            path.segments[1],
            Segment::CubicBezier {
                start: Point::new(10., 0.),
                control1: Point::new(10., -10.),
                control2: Point::new(20., -10.),
                end: Point::new(20., 0.),
            }
        );

        // S without a preceding cubic: first control is the current point
        let path = parse_path_data("M5 5 S10 10 15 5").unwrap();
        assert_eq!(
            path.segments[0],
            Segment::CubicBezier {
                start: Point::new(5., 5.),
                control1: Point::new(5., 5.),
                control2: Point::new(10., 10.),
                end: Point::new(15., 5.),
            }
        );
    }

    #[test]
    fn test_parse_quadratic() {
        let path = parse_path_data("M10 30 Q20 40 30 30 T50 30").unwrap();
        assert_eq!(path.segments.len(), 2);
        assert_eq!(
            path.segments[0],
            Segment::QuadraticBezier {
                start: Point::new(10., 30.),
                control: Point::new(20., 40.),
                end: Point::new(30., 30.),
            }
        );
        // T reflects (20,40) about (30,30)
        assert_eq!(
            path.segments[1],
            Segment::QuadraticBezier {
                start: Point::new(30., 30.),
                control: Point::new(40., 20.),
                end: Point::new(50., 30.),
            }
        );
    }

    #[test]
    fn test_parse_arc() {
        let path = parse_path_data("M0 0 A5 5 0 0 1 10 0").unwrap();
        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].kind(), SegmentKind::Arc);
        assert_eq!(path.segments[0].end(), Point::new(10., 0.));

        // compressed flag syntax
        let path = parse_path_data("M0 0 a5,5 0 0,1 10,0").unwrap();
        assert_eq!(path.segments[0].kind(), SegmentKind::Arc);
        assert_eq!(path.segments[0].end(), Point::new(10., 0.));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_path_data("M0 0 L").is_err());
        assert!(parse_path_data("X0 0").is_err());
        assert!(parse_path_data("M0 0 A5 5 0 2 1 10 0").is_err());
        assert!(parse_path_data("M0 0 Z 1 2").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_path_data("").unwrap().is_empty());
        assert!(parse_path_data("   ").unwrap().is_empty());
    }
}
