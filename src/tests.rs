#[cfg(test)]
mod tests {
    use array::DoubleSubscriptedArray;
    use poly::polynomial::Polynomial;
    use poly::term::Term;

    fn p1() -> Polynomial {
        Polynomial::from_terms(vec![Term::new(2., 4), Term::new(-3., 2), Term::new(5., 0)])
    }

    fn p2() -> Polynomial {
        Polynomial::from_terms(vec![Term::new(3., 3), Term::new(1., 2), Term::new(2., 0)])
    }

    fn expect(terms: &[(f64, i32)]) -> Polynomial {
        terms.iter().map(|&t| Term::from(t)).collect()
    }

    fn render(p: &Polynomial) -> String {
        let mut out = Vec::new();
        p.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sample_sum() {
        assert_eq!(
            &p1() + &p2(),
            expect(&[(2., 4), (3., 3), (-3., 2), (1., 2), (5., 0), (2., 0)])
        );
        assert_eq!(
            render(&(p1() + p2())),
            "2x^4 + 3x^3 -3x^2 + 1x^2 + 5x^0 + 2x^0 \n"
        );
    }

    #[test]
    fn sample_difference() {
        assert_eq!(
            &p1() - &p2(),
            expect(&[(2., 4), (-3., 3), (-3., 2), (-1., 2), (5., 0), (-2., 0)])
        );
        assert_eq!(
            render(&(p1() - p2())),
            "2x^4 -3x^3 -3x^2 -1x^2 + 5x^0 -2x^0 \n"
        );
    }

    #[test]
    fn sample_product() {
        let p = p1() * p2();
        assert_eq!(p.nterms(), 9);
        assert_eq!(
            p,
            expect(&[
                (6., 7),
                (2., 6),
                (4., 4),
                (-9., 5),
                (-3., 4),
                (-6., 2),
                (15., 3),
                (5., 2),
                (10., 0),
            ])
        );
    }

    #[test]
    fn product_pairs_every_term() {
        let a = p1();
        let b = p2();
        let p = &a * &b;
        let mut k = 0;
        for x in &a {
            for y in &b {
                assert_eq!(p.terms()[k].coefficient(), x.coefficient() * y.coefficient());
                assert_eq!(p.terms()[k].exponent(), x.exponent() + y.exponent());
                k += 1;
            }
        }
        assert_eq!(k, p.nterms());
    }

    #[test]
    fn compound_operators_match_binary() {
        let mut a = p1();
        a += p2();
        assert_eq!(a, &p1() + &p2());

        let mut s = p1();
        s -= &p2();
        assert_eq!(s, &p1() - &p2());

        let mut m = p1();
        m *= p2();
        assert_eq!(m, &p1() * &p2());
    }

    #[test]
    fn self_assignment() {
        let mut a = p1();
        let before = a.terms().to_vec();
        a = a.clone();
        assert_eq!(a.terms(), &before[..]);

        let source = a.clone();
        a.clone_from(&source);
        assert_eq!(a.terms(), &before[..]);
    }

    #[test]
    fn set_terms_replaces_everything() {
        let mut a = p1();
        a.set_terms(vec![Term::new(1., 1)]);
        assert_eq!(a.into_terms(), vec![Term::new(1., 1)]);
    }

    #[test]
    fn unsorted_input_is_trusted() {
        // A product is not sorted; adding to it just merges positionally.
        let prod = expect(&[(1., 0), (1., 5)]);
        let r = &prod + &expect(&[(2., 3)]);
        assert_eq!(r, expect(&[(2., 3), (1., 0), (1., 5)]));
    }

    #[test]
    fn print_of_zero_polynomials() {
        assert_eq!(render(&Polynomial::new()), "\n");
        assert_eq!(render(&expect(&[(0., 3), (0., 0)])), "\n");
        assert_eq!(render(&expect(&[(0., 3), (-2., 1), (1., 0)])), "-2x^1 + 1x^0 \n");
        assert_eq!(render(&expect(&[(0., 3), (2., 1)])), "2x^1 \n");
        assert_eq!(render(&expect(&[(0., 3), (2., 1), (3., 0)])), "2x^1 + 3x^0 \n");
    }

    #[test]
    fn array_sample() {
        let mut a = DoubleSubscriptedArray::new(3, 4).unwrap();
        for i in 0..3 {
            for j in 0..4 {
                *a.get_mut(i, j).unwrap() = (i + j) as i32;
            }
        }
        assert_eq!(a.to_string(), "0 1 2 3 \n1 2 3 4 \n2 3 4 5 \n");
        assert!(a.get(3, 0).is_err());
    }
}
