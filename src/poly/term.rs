use std::fmt;

/// Significant digits used when rendering a coefficient.
const PRECISION: usize = 6;

/// A single monomial `coefficient * x^exponent`.
///
/// Terms carry no ordering and no arithmetic of their own: combining them is
/// the job of `Polynomial`. Any coefficient and any exponent is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Term {
    coefficient: f64,
    exponent: i32,
}

impl Term {
    #[inline]
    pub fn new(coefficient: f64, exponent: i32) -> Term {
        Term {
            coefficient,
            exponent,
        }
    }

    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    #[inline]
    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient;
    }

    #[inline]
    pub fn set_exponent(&mut self, exponent: i32) {
        self.exponent = exponent;
    }

    /// Returns the term with the sign of the coefficient flipped.
    #[inline]
    pub(crate) fn negated(&self) -> Term {
        Term::new(-self.coefficient, self.exponent)
    }

    /// Multiplies the coefficients and adds the exponents. The exponent sum
    /// wraps around on overflow.
    #[inline]
    pub(crate) fn product(&self, other: &Term) -> Term {
        Term::new(
            self.coefficient * other.coefficient,
            self.exponent.wrapping_add(other.exponent),
        )
    }
}

impl From<(f64, i32)> for Term {
    #[inline]
    fn from((coefficient, exponent): (f64, i32)) -> Term {
        Term::new(coefficient, exponent)
    }
}

/// Strips trailing zeros of a fractional part, and the point if nothing is
/// left after it.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes `c` with `PRECISION` significant digits, in fixed notation for
/// moderate magnitudes and in `1.5e+20` notation otherwise.
fn write_coefficient(f: &mut fmt::Formatter, c: f64) -> fmt::Result {
    if c.is_nan() {
        return write!(f, "nan");
    }
    if c.is_infinite() {
        return write!(f, "{}", if c < 0. { "-inf" } else { "inf" });
    }
    if c == 0. {
        return write!(f, "{}", if c.is_sign_negative() { "-0" } else { "0" });
    }

    // the decimal exponent after rounding to PRECISION digits
    let sci = format!("{:.*e}", PRECISION - 1, c);
    let (mantissa, exp) = match sci.find('e') {
        Some(i) => match sci[i + 1..].parse::<i32>() {
            Ok(exp) => (&sci[..i], exp),
            Err(_) => return write!(f, "{}", c),
        },
        None => return write!(f, "{}", c),
    };

    if exp < -4 || exp >= PRECISION as i32 {
        write!(
            f,
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        )
    } else {
        let fixed = format!("{:.*}", (PRECISION as i32 - 1 - exp) as usize, c);
        write!(f, "{}", trim_fraction(&fixed))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_coefficient(f, self.coefficient)?;
        write!(f, "x^{}", self.exponent)
    }
}

#[test]
fn test_default_term() {
    let t = Term::default();
    assert_eq!(t.coefficient(), 0.0);
    assert_eq!(t.exponent(), 0);
}

#[test]
fn test_setters_accept_anything() {
    let mut t = Term::new(1.5, 3);
    t.set_coefficient(0.0);
    t.set_exponent(-7);
    assert_eq!(t, Term::new(0.0, -7));
}

#[test]
fn test_term_display() {
    assert_eq!(Term::new(2., 4).to_string(), "2x^4");
    assert_eq!(Term::new(-3., 2).to_string(), "-3x^2");
    assert_eq!(Term::new(0.5, -1).to_string(), "0.5x^-1");
}

#[test]
fn test_coefficient_significant_digits() {
    assert_eq!(Term::new(0.1 + 0.2, 1).to_string(), "0.3x^1");
    assert_eq!(Term::new(1e20, 0).to_string(), "1e+20x^0");
    assert_eq!(Term::new(-1e-5, 0).to_string(), "-1e-05x^0");
    assert_eq!(Term::new(123456789., 2).to_string(), "1.23457e+08x^2");
    assert_eq!(Term::new(100000., 2).to_string(), "100000x^2");
    assert_eq!(Term::new(999999.7, 2).to_string(), "1e+06x^2");
    assert_eq!(Term::new(0.0001234567, 3).to_string(), "0.000123457x^3");
    assert_eq!(Term::new(2.5e-300, 3).to_string(), "2.5e-300x^3");
    assert_eq!(Term::new(::std::f64::INFINITY, 0).to_string(), "infx^0");
}

#[test]
fn test_product_and_negation() {
    let a = Term::new(2., 4);
    let b = Term::new(-3., 2);
    assert_eq!(a.product(&b), Term::new(-6., 6));
    assert_eq!(b.negated(), Term::new(3., 2));
}

#[test]
fn test_product_exponent_wraps() {
    let a = Term::new(1., i32::max_value());
    let b = Term::new(1., 1);
    assert_eq!(a.product(&b), Term::new(1., i32::min_value()));
}
