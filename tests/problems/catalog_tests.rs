use approx::assert_abs_diff_eq;
use rstest::rstest;

use rootfind::problems::catalog::{
    catalog, cosine_growth, cosine_growth_derivative, cubic_decay, cubic_decay_derivative, 
    cubic_exp, cubic_exp_derivative, damped_sine, damped_sine_derivative,
};
use rootfind::root_finding::errors::DomainError;

#[test]
fn four_problems_in_order() -> Result<(), DomainError> {
    let problems = catalog()?;
    let names: Vec<_> = problems.iter().map(|p| p.name).collect();

    assert_eq!(names, [
        "x^3 - e^(0.8x) = 20 on 0 <= x <= 8",
        "3 sin(0.5x) - 0.5x + 2 = 0",
        "x^3 - x^2 e^(-0.5x) - 3x = -1",
        "cos^2(x) - 0.5x e^(0.3x) + 5 = 0",
    ]);
    Ok(())
}

#[test]
fn inputs_line_up() -> Result<(), DomainError> {
    for p in catalog()? { 
        assert_eq!(p.brackets.len(), p.seeds.len(), "{}", p.name);
        assert_eq!(p.brackets.len(), p.pairs.len(), "{}", p.name);
        assert!(p.derivative.is_some());

        for (bracket, &(x0, x1)) in p.brackets.iter().zip(&p.pairs) { 
            assert!(p.domain.contains(bracket.low()) && p.domain.contains(bracket.high()));
            assert_eq!((bracket.low(), bracket.high()), (x0, x1));

            let f = &p.function;
            assert!(f(bracket.low()) * f(bracket.high()) < 0.0, "{} on {bracket}", p.name);
        }
        for (bracket, &seed) in p.brackets.iter().zip(&p.seeds) { 
            assert!(bracket.contains(seed));
        }
    }
    Ok(())
}

#[rstest]
#[case(cubic_exp, cubic_exp_derivative, 3.5)]
#[case(damped_sine, damped_sine_derivative, 5.5)]
#[case(cubic_decay, cubic_decay_derivative, 0.5)]
#[case(cosine_growth, cosine_growth_derivative, 3.5)]
fn derivatives_match_central_difference(
    #[case] f: fn(f64) -> f64,
    #[case] df: fn(f64) -> f64,
    #[case] x: f64,
) {
    let h = 1e-6;
    assert_abs_diff_eq!(df(x), (f(x + h) - f(x - h)) / (2.0 * h), epsilon = 1e-5);
}

#[test]
fn cubic_exp_matches_its_equation() {
    // x^3 - e^(0.8x) = 20
    assert_abs_diff_eq!(cubic_exp(0.0), -21.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cubic_exp(4.0), 64.0 - 3.2f64.exp() - 20.0, epsilon = 1e-12);
}
