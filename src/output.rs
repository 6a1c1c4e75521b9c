use itertools::Itertools;

use crate::equation::ParametricPair;

/// Plain equation listing: one `=== Path N ===` header per input path,
/// followed by the x(t)/y(t) pair of each retained segment or fused group.
pub fn render_plain(paths: &[Vec<ParametricPair>], sig: u32) -> String {
    paths
        .iter()
        .enumerate()
        .map(|(i, equations)| {
            let body = equations
                .iter()
                .map(|eqn| {
                    format!(
                        "x(t) = {}\ny(t) = {}\n",
                        eqn.x.plain(sig),
                        eqn.y.plain(sig)
                    )
                })
                .join("\n");
            format!("=== Path {} ===\n{}", i + 1, body)
        })
        .join("\n")
}

/// A complete LaTeX document with one section per path and an `align`
/// environment per equation pair, ready for a TeX toolchain.
pub fn render_latex(paths: &[Vec<ParametricPair>], sig: u32) -> String {
    let mut out = String::new();
    out.push_str("\\documentclass[a4paper]{report}\n");
    out.push_str("\\usepackage{amsmath}\n");
    out.push_str("\\usepackage[margin=0.5in]{geometry}\n");
    out.push_str("\\renewcommand{\\thesection}{\\arabic{section}}\n");
    out.push_str("\\begin{document}\n");
    out.push_str("Plot the following equations from $t=0$ to $t=1$:\n");
    for (i, equations) in paths.iter().enumerate() {
        out.push_str(&format!("\\section{{Path {}}}\n", i + 1));
        for eqn in equations {
            out.push_str("\\begin{align}\n");
            out.push_str(&format!("\\textrm{{x}}(t) &= {}\\\\\n", eqn.x.latex(sig)));
            out.push_str(&format!("\\textrm{{y}}(t) &= {}\n", eqn.y.latex(sig)));
            out.push_str("\\end{align}\n");
        }
    }
    out.push_str("\\end{document}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Segment};

    fn line_eqn() -> ParametricPair {
        crate::equation::build(&Segment::Line {
            start: Point::new(0., 0.),
            end: Point::new(10., 0.),
        })
        .unwrap()
    }

    #[test]
    fn test_render_plain() {
        let paths = vec![vec![line_eqn()]];
        assert_eq!(
            render_plain(&paths, 11),
            "=== Path 1 ===\nx(t) = 10*t\ny(t) = 0\n"
        );
    }

    #[test]
    fn test_render_plain_multiple_paths() {
        let paths = vec![vec![line_eqn()], vec![line_eqn(), line_eqn()]];
        let out = render_plain(&paths, 11);
        assert!(out.contains("=== Path 1 ==="));
        assert!(out.contains("=== Path 2 ==="));
        assert_eq!(out.matches("x(t) = 10*t").count(), 3);
    }

    #[test]
    fn test_render_latex() {
        let paths = vec![vec![line_eqn()]];
        let out = render_latex(&paths, 11);
        assert!(out.starts_with("\\documentclass[a4paper]{report}\n"));
        assert!(out.contains("\\section{Path 1}\n"));
        assert!(out.contains("\\textrm{x}(t) &= 10 t\\\\\n"));
        assert!(out.contains("\\textrm{y}(t) &= 0\n"));
        assert!(out.ends_with("\\end{document}\n"));
    }
}
