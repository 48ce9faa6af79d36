use itertools::Itertools;
use num_traits::Zero;
use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice;

use poly::term::Term;

/// Univariate polynomial stored as an ordered list of terms.
///
/// Addition and subtraction merge the two term lists and expect both of them
/// to be sorted by strictly descending exponent. This is not checked: the
/// order given at construction time is kept as is. Like terms are never
/// combined, so the result of a product is in general unsorted and may
/// contain repeated exponents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Constructs a polynomial without terms.
    #[inline]
    pub fn new() -> Polynomial {
        Polynomial { terms: vec![] }
    }

    /// Constructs a polynomial from terms that are already in descending
    /// exponent order.
    #[inline]
    pub fn from_terms(terms: Vec<Term>) -> Polynomial {
        Polynomial { terms }
    }

    /// Replaces all terms.
    #[inline]
    pub fn set_terms(&mut self, terms: Vec<Term>) {
        self.terms = terms;
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Returns the number of stored terms, including zero ones.
    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<Term> {
        self.terms.iter()
    }

    /// Writes the polynomial followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Prints the polynomial on stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }

    /// Stable merge of two term lists on descending exponent. On equal
    /// exponents the term of `a` comes first. Nothing is summed.
    fn merge<I: IntoIterator<Item = Term>>(a: &[Term], b: I) -> Polynomial {
        let terms: Vec<Term> = a
            .iter()
            .cloned()
            .merge_by(b, |x, y| x.exponent() >= y.exponent())
            .collect();
        trace!("Merged {} terms into {}", a.len(), terms.len());
        Polynomial { terms }
    }

    /// Every pair of terms, left-major.
    fn cross_product(a: &[Term], b: &[Term]) -> Polynomial {
        let mut terms = Vec::with_capacity(a.len() * b.len());
        for t1 in a {
            for t2 in b {
                terms.push(t1.product(t2));
            }
        }
        trace!("Multiplied {} by {} terms", a.len(), b.len());
        Polynomial { terms }
    }
}

impl From<Vec<Term>> for Polynomial {
    #[inline]
    fn from(terms: Vec<Term>) -> Polynomial {
        Polynomial::from_terms(terms)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Polynomial {
        Polynomial {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = slice::Iter<'a, Term>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut is_first_term = true;
        for term in self {
            if term.coefficient().is_zero() {
                continue;
            }
            if !is_first_term && term.coefficient() > 0. {
                write!(f, "+ ")?;
            }
            write!(f, "{} ", term)?;
            is_first_term = false;
        }
        Ok(())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        for t in &mut self.terms {
            *t = t.negated();
        }
        self
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.iter().map(Term::negated).collect()
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        Polynomial::merge(&self.terms, other.terms.iter().cloned())
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        Polynomial::merge(&self.terms, other.terms)
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'a Polynomial) -> Polynomial {
        Polynomial::merge(&self.terms, other.iter().map(Term::negated))
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        self + (-other)
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'a Polynomial) -> Polynomial {
        Polynomial::cross_product(&self.terms, &other.terms)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        Polynomial::cross_product(&self.terms, &other.terms)
    }
}

impl<'a> AddAssign<&'a Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &'a Polynomial) {
        *self = &*self + other;
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, other: Polynomial) {
        *self += &other;
    }
}

impl<'a> SubAssign<&'a Polynomial> for Polynomial {
    fn sub_assign(&mut self, other: &'a Polynomial) {
        *self = &*self - other;
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, other: Polynomial) {
        *self -= &other;
    }
}

impl<'a> MulAssign<&'a Polynomial> for Polynomial {
    fn mul_assign(&mut self, other: &'a Polynomial) {
        *self = &*self * other;
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, other: Polynomial) {
        *self *= &other;
    }
}

#[cfg(test)]
fn poly(terms: &[(f64, i32)]) -> Polynomial {
    terms.iter().map(|&t| Term::from(t)).collect()
}

#[cfg(test)]
fn pairs(p: &Polynomial) -> Vec<(f64, i32)> {
    p.iter().map(|t| (t.coefficient(), t.exponent())).collect()
}

#[test]
fn test_add_keeps_equal_exponents_apart() {
    let a = poly(&[(1., 3), (4., 1)]);
    let b = poly(&[(2., 3), (-4., 1)]);
    assert_eq!(pairs(&(&a + &b)), vec![(1., 3), (2., 3), (4., 1), (-4., 1)]);
}

#[test]
fn test_add_length_and_order() {
    let a = poly(&[(1., 9), (1., 5), (1., 2)]);
    let b = poly(&[(2., 8), (2., 7), (2., 1), (2., -3)]);
    let r = &a + &b;
    assert_eq!(r.nterms(), a.nterms() + b.nterms());
    let exps: Vec<i32> = r.iter().map(|t| t.exponent()).collect();
    assert_eq!(exps, vec![9, 8, 7, 5, 2, 1, -3]);
}

#[test]
fn test_add_empty() {
    let a = poly(&[(3., 2), (1., 0)]);
    assert_eq!(&a + &Polynomial::new(), a);
    assert_eq!(&Polynomial::new() + &a, a);
}

#[test]
fn test_sub_is_add_of_negation() {
    let a = poly(&[(2., 4), (-3., 2), (5., 0)]);
    let b = poly(&[(3., 3), (1., 2), (2., 0)]);
    let negated = poly(&[(-3., 3), (-1., 2), (-2., 0)]);
    assert_eq!(&a - &b, &a + &negated);
    assert_eq!(a.clone() - b.clone(), a + (-b));
}

#[test]
fn test_sub_self_does_not_cancel() {
    let a = poly(&[(1., 1), (1., 0)]);
    let r = &a - &a;
    assert_eq!(pairs(&r), vec![(1., 1), (-1., 1), (1., 0), (-1., 0)]);
}

#[test]
fn test_mul_cross_product_order() {
    let a = poly(&[(1., 1), (2., 0)]);
    let b = poly(&[(3., 0), (4., 2), (5., 1)]);
    assert_eq!(
        pairs(&(&a * &b)),
        vec![(3., 1), (4., 3), (5., 2), (6., 0), (8., 2), (10., 1)]
    );
}

#[test]
fn test_mul_exponent_overflow() {
    let a = poly(&[(1., i32::max_value())]);
    let b = poly(&[(1., 1)]);
    assert_eq!(pairs(&(&a * &b)), vec![(1., i32::min_value())]);
}

#[test]
fn test_mul_by_empty() {
    let a = poly(&[(1., 1)]);
    assert!((&a * &Polynomial::new()).is_empty());
    assert!((&Polynomial::new() * &a).is_empty());
}

#[test]
fn test_compound_assignment() {
    let a = poly(&[(1., 2)]);
    let b = poly(&[(2., 1)]);

    let mut r = a.clone();
    r += &b;
    assert_eq!(r, &a + &b);
    r -= b.clone();
    assert_eq!(r, &(&a + &b) - &b);
    r *= &a;
    assert_eq!(r.nterms(), 3);
}

#[test]
fn test_display_skips_exact_zero() {
    let p = poly(&[(0., 5), (-1., 3), (0.5, 1), (0., 0)]);
    assert_eq!(p.to_string(), "-1x^3 + 0.5x^1 ");

    let tiny = poly(&[(1e-300, 2)]);
    assert_eq!(tiny.to_string(), "1e-300x^2 ");
    assert_eq!(poly(&[(-0., 2)]).to_string(), "");
}

#[test]
fn test_write_to_all_zero() {
    let mut out = Vec::new();
    poly(&[(0., 2), (-0., 1)]).write_to(&mut out).unwrap();
    assert_eq!(out, b"\n");
}
