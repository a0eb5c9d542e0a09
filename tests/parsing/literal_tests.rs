use num_bigint::BigInt;
use num_rational::BigRational;
use pattern_finder::parsing::{parse_line, parse_number, Literal, ParseError};

type TestResult = Result<(), ParseError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

fn invalid(token: &str) -> ParseError {
    ParseError::InvalidToken { token: token.to_owned() }
}

#[test]
fn whole_number() -> TestResult {
    assert_eq!(parse_number::<f64>("5")?, 5.0);
    Ok(())
}

#[test]
fn decimals() -> TestResult {
    assert_eq!(parse_number::<f64>("2.5")?, 2.5);
    assert_eq!(parse_number::<f64>(".5")?, 0.5);
    assert_eq!(parse_number::<f64>("5.")?, 5.0);
    Ok(())
}

#[test]
fn simple_fraction() -> TestResult {
    assert_eq!(parse_number::<f64>("3/4")?, 0.75);
    Ok(())
}

#[test]
fn mixed_number() -> TestResult {
    assert!(approx_eq(parse_number::<f64>("1 2/3")?, 5.0 / 3.0));
    assert_eq!(parse_number::<f64>("2   1/4")?, 2.25);
    Ok(())
}

#[test]
fn negatives() -> TestResult {
    assert_eq!(parse_number::<f64>("-3")?, -3.0);
    assert_eq!(parse_number::<f64>("-3/4")?, -0.75);
    assert_eq!(parse_number::<f64>("-1 1/2")?, -1.5);
    Ok(())
}

#[test]
fn surrounding_whitespace_is_trimmed() -> TestResult {
    assert_eq!(parse_number::<f64>("  7 \n")?, 7.0);
    Ok(())
}

#[test]
fn not_a_number() {
    assert_eq!(parse_number::<f64>("abc").unwrap_err(), invalid("abc"));
    assert_eq!(parse_number::<f64>(".").unwrap_err(), invalid("."));
    assert_eq!(parse_number::<f64>("").unwrap_err(), invalid(""));
    assert_eq!(parse_number::<f64>("1 2").unwrap_err(), invalid("1 2"));
    assert_eq!(parse_number::<f64>("3/4/5").unwrap_err(), invalid("3/4/5"));
}

#[test]
fn error_message_names_the_token() {
    let err = parse_number::<f64>("abc").unwrap_err();
    assert_eq!(err.to_string(), "abc is not a number");
}

#[test]
fn zero_denominator() {
    let err = parse_number::<f64>("1/0").unwrap_err();
    assert_eq!(err, ParseError::ZeroDenominator { token: "1/0".to_owned() });
}

#[test]
fn classification_order() -> TestResult {
    assert_eq!(Literal::classify("12.5")?, Literal::Decimal("12.5"));
    assert_eq!(
        Literal::classify("3/4")?,
        Literal::Fraction { negative: false, numer: "3", denom: "4" }
    );
    assert_eq!(
        Literal::classify("-1 2/3")?,
        Literal::Mixed { negative: true, whole: "1", numer: "2", denom: "3" }
    );
    Ok(())
}

#[test]
fn exact_decimals_do_not_round() -> TestResult {
    assert_eq!(parse_number::<BigRational>("0.3")?, ratio(3, 10));
    assert_eq!(parse_number::<BigRational>("-12.25")?, ratio(-49, 4));
    Ok(())
}

#[test]
fn exact_mixed_number() -> TestResult {
    assert_eq!(parse_number::<BigRational>("1 2/3")?, ratio(5, 3));
    Ok(())
}

#[test]
fn line_of_numbers() -> TestResult {
    let values = parse_line::<f64>("1, 4, 9/1, 16, 25\n")?;
    assert_eq!(values, vec![1.0, 4.0, 9.0, 16.0, 25.0]);
    Ok(())
}

#[test]
fn line_fails_on_first_bad_token() {
    let err = parse_line::<f64>("1, x, 9, y").unwrap_err();
    assert_eq!(err, invalid("x"));
}
