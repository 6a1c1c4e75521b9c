use crate::types::fstr;

/// Coefficients whose relative magnitude falls below this are treated as
/// cancellation residue and collapsed to zero by `simplify()`.
const COEFF_EPSILON: f64 = 1e-12;

/// A dense univariate polynomial in `t`, coefficients in ascending degree.
///
/// This is the symbolic substrate for equation building: Bernstein basis
/// expansion and collection of like terms is all the algebra required.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            Self::zero()
        } else {
            Self { coeffs }
        }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![0.] }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Index of the highest non-zero coefficient; the zero polynomial
    /// reports degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|&c| c != 0.)
            .unwrap_or(0)
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = vec![0.; len];
        for (i, c) in coeffs.iter_mut().enumerate() {
            *c = self.coeffs.get(i).unwrap_or(&0.) + other.coeffs.get(i).unwrap_or(&0.);
        }
        Polynomial::new(coeffs)
    }

    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|c| c * factor).collect())
    }

    /// Horner evaluation at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        self.coeffs.iter().rev().fold(0., |acc, &c| acc * t + c)
    }

    /// Collect the polynomial into minimal form: clamp cancellation residue
    /// to zero and drop trailing zero coefficients. Idempotent; simplified
    /// polynomials compare structurally equal iff their terms match.
    pub fn simplify(&self) -> Polynomial {
        let largest = self.coeffs.iter().fold(0_f64, |m, c| m.max(c.abs()));
        let limit = largest * COEFF_EPSILON;
        let mut coeffs: Vec<f64> = self
            .coeffs
            .iter()
            .map(|&c| if c.abs() <= limit { 0. } else { c })
            .collect();
        while coeffs.len() > 1 && coeffs.last() == Some(&0.) {
            coeffs.pop();
        }
        Polynomial::new(coeffs)
    }

    /// Plain textual form, e.g. `30*t^2 - 20*t^3`, coefficients rounded
    /// to `sig` significant digits.
    pub fn plain(&self, sig: u32) -> String {
        self.render(sig, false)
    }

    /// LaTeX form, e.g. `30 t^{2} - 20 t^{3}`.
    pub fn latex(&self, sig: u32) -> String {
        self.render(sig, true)
    }

    fn render(&self, sig: u32, latex: bool) -> String {
        let mut out = String::new();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0. {
                continue;
            }
            let coeff = fstr(c.abs(), sig);
            if out.is_empty() {
                if c < 0. {
                    out.push('-');
                }
            } else {
                out.push_str(if c < 0. { " - " } else { " + " });
            }
            let var = match i {
                0 => String::new(),
                1 => "t".to_string(),
                _ if latex => format!("t^{{{}}}", i),
                _ => format!("t^{}", i),
            };
            if var.is_empty() {
                out.push_str(&coeff);
            } else if coeff == "1" {
                out.push_str(&var);
            } else {
                out.push_str(&coeff);
                out.push_str(if latex { " " } else { "*" });
                out.push_str(&var);
            }
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

/// Binomial coefficient C(n, k), computed multiplicatively; exact for the
/// degrees reachable from realistic path data.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c
}

/// The Bernstein basis term `C(n,i) * (1-t)^(n-i) * t^i`, expanded into
/// monomial coefficients.
pub fn bernstein(n: usize, i: usize) -> Polynomial {
    let mut coeffs = vec![0.; n + 1];
    let scale = binomial(n, i);
    for j in 0..=(n - i) {
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        coeffs[i + j] = sign * scale * binomial(n - i, j);
    }
    Polynomial::new(coeffs)
}
