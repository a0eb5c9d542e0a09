use std::io::Cursor;

use num_rational::BigRational;
use pattern_finder::inference::errors::InferenceError;
use pattern_finder::inference::exponential::Exponential;
use pattern_finder::inference::polynomial::Term;
use pattern_finder::session::{find_pattern, respond, run, Outcome, SessionError, Settings};

fn session<T: pattern_finder::inference::Sample>(settings: &Settings, input: &str) -> (usize, String) {
    let mut output = Vec::new();
    let answered = run::<T, _, _>(settings, Cursor::new(input), &mut output).expect("in-memory io");
    (answered, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn answers_every_line_until_eof() {
    let input = "1,2,3,4,5\nabc\n\n2, 6, 12, 20, 30\n1\n1,2,4,8,16\n";
    let (answered, output) = session::<f64>(&Settings::default(), input);

    let expected = concat!(
        "Pattern: [{coefficient: 1, exponent: 1}]\n",
        "Pattern: Error: abc is not a number\n",
        "Pattern: ",
        "Pattern: [{coefficient: 1, exponent: 2}, {coefficient: 1, exponent: 1}]\n",
        "Pattern: Error: insufficient data: got 1 sample(s), need at least 2\n",
        "Pattern: {stretch: 0.5, ratio: 2, asymptote: 0}\n",
        "Pattern: \n",
    );
    assert_eq!(answered, 5);
    assert_eq!(output, expected);
}

#[test]
fn exponential_fallback_can_be_disabled() {
    let settings = Settings { exponential: false, ..Settings::default() };
    let (_, output) = session::<f64>(&settings, "1,2,4,8,16\n");
    assert_eq!(output, "Pattern: No pattern found\nPattern: \n");
}

#[test]
fn exact_session_prints_ratios() {
    let settings = Settings { starting_at: 0, ..Settings::default() };
    let (_, output) = session::<BigRational>(&settings, "0, 1/2, 1\n");
    assert_eq!(output, "Pattern: [{coefficient: 1/2, exponent: 1}]\nPattern: \n");
}

#[test]
fn empty_input_ends_immediately() {
    let (answered, output) = session::<f64>(&Settings::default(), "");
    assert_eq!(answered, 0);
    assert_eq!(output, "Pattern: \n");
}

#[test]
fn respond_surfaces_typed_errors() {
    let err = respond::<f64>("1, two", &Settings::default()).unwrap_err();
    assert!(matches!(err, SessionError::Parse(_)));

    let err = respond::<f64>("4", &Settings::default()).unwrap_err();
    assert!(matches!(err, SessionError::Inference(InferenceError::InsufficientData { got: 1 })));
}

#[test]
fn find_pattern_prefers_polynomial() -> Result<(), InferenceError> {
    let outcome = find_pattern(&[1.0, 4.0, 9.0, 16.0, 25.0], &Settings::default())?;
    match outcome {
        Outcome::Polynomial(p) => assert_eq!(p.terms(), &[Term { coefficient: 1.0, exponent: 2 }]),
        other => panic!("expected polynomial, got {other:?}"),
    }
    Ok(())
}

#[test]
fn find_pattern_reports_no_pattern() -> Result<(), InferenceError> {
    let outcome = find_pattern(&[1.0, 5.0, 2.0, 8.0], &Settings::default())?;
    assert_eq!(outcome, Outcome::NoPattern);
    Ok(())
}

#[test]
fn long_powers_of_two_fall_back_to_exponential() -> Result<(), InferenceError> {
    let values: Vec<f64> = (0..140).map(|i| 2f64.powi(i)).collect();
    let outcome = find_pattern(&values, &Settings::default())?;
    assert_eq!(outcome, Outcome::Exponential(Exponential { stretch: 0.5, ratio: 2.0, asymptote: 0.0 }));
    Ok(())
}

#[test]
fn long_line_without_pattern_is_not_an_error() -> Result<(), SessionError> {
    let line = (0..200).map(|i| (i % 3).to_string()).collect::<Vec<_>>().join(", ");
    let outcome = respond::<f64>(&line, &Settings::default())?;
    assert_eq!(outcome, Outcome::NoPattern);
    Ok(())
}

#[test]
fn settings_reach_the_exponential_fit() -> Result<(), SessionError> {
    let line = "1, 2, 4, 8.0000001";

    let strict = Settings { starting_at: 0, ..Settings::default() };
    assert_eq!(respond::<f64>(line, &strict)?, Outcome::NoPattern);

    let tolerant = Settings { starting_at: 0, tolerance: 1e-6, ..Settings::default() };
    let outcome  = respond::<f64>(line, &tolerant)?;
    assert_eq!(outcome, Outcome::Exponential(Exponential { stretch: 1.0, ratio: 2.0, asymptote: 0.0 }));
    Ok(())
}
