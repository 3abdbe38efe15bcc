use shunt::{
    Kind, Number, Token, convert_infix_to_postfix,
    error::{ConversionError, EvaluationError, StageError, ValidationError},
    evaluate_infix, evaluate_postfix, evaluate_postfix_expression, format_tokens, lex, to_postfix,
    validate,
};

fn tokens(texts: &[&'static str]) -> Vec<Token<'static>> {
    texts.iter().copied().map(Token::new).collect()
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_infix(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression failed: {e}"),
    }
}

fn validation_error(src: &str) -> ValidationError {
    match validate(&lex(src)) {
        Ok(()) => panic!("{src:?} validated but was expected to fail"),
        Err(e) => e,
    }
}

fn postfix(src: &str) -> Vec<&str> {
    to_postfix(&lex(src)).unwrap_or_else(|e| panic!("conversion of {src:?} failed: {e}"))
                         .iter()
                         .map(Token::text)
                         .collect()
}

fn evaluation_error(texts: &[&'static str]) -> EvaluationError {
    match evaluate_postfix(&tokens(texts)) {
        Ok(value) => panic!("{texts:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn lexing_groups_digits_and_letters() {
    assert_eq!(lex("1 + 3"), ["1", "+", "3"]);
    assert_eq!(lex("A+B"), ["A", "+", "B"]);
    assert_eq!(lex("(A+B)*C"), ["(", "A", "+", "B", ")", "*", "C"]);
    assert_eq!(lex("12+34"), ["12", "+", "34"]);
    assert_eq!(lex("A/B^C"), ["A", "/", "B", "^", "C"]);
    assert_eq!(lex("  A  +   B   "), ["A", "+", "B"]);
    assert_eq!(lex("((x+y)*(z-w))"),
               ["(", "(", "x", "+", "y", ")", "*", "(", "z", "-", "w", ")", ")"]);
    assert_eq!(lex("1+2*(3-4)/5"), ["1", "+", "2", "*", "(", "3", "-", "4", ")", "/", "5"]);
    assert_eq!(lex("(A)"), ["(", "A", ")"]);
    assert_eq!(lex("\t7\n*\r\n8"), ["7", "*", "8"]);
}

#[test]
fn lexing_empty_input() {
    assert!(lex("").is_empty());
    assert!(lex("   \t ").is_empty());
}

#[test]
fn lexing_assigns_kinds() {
    let kinds: Vec<Kind> = lex("(12 * ab)").iter().map(Token::kind).collect();
    assert_eq!(kinds,
               [Kind::OpenParen, Kind::Number, Kind::Operator, Kind::Identifier, Kind::CloseParen]);
}

#[test]
fn lexing_keeps_unrecognised_characters() {
    let lexed = lex("A + B @ C");
    assert_eq!(lexed, ["A", "+", "B", "@", "C"]);
    assert_eq!(lexed[3].kind(), Kind::Invalid);

    let lexed = lex("1 !@# 2");
    assert_eq!(lexed, ["1", "!@#", "2"]);

    let lexed = lex("3.5");
    assert_eq!(lexed, ["3", ".", "5"]);
    assert_eq!(lexed[1].kind(), Kind::Invalid);

    let lexed = lex("é+1");
    assert_eq!(lexed, ["é", "+", "1"]);
    assert_eq!(lexed[0].kind(), Kind::Invalid);
}

#[test]
fn lexing_is_idempotent_on_its_own_output() {
    for src in ["3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3", "(a+b)*cd-12", "1 ?? 2", ""] {
        let first = lex(src);
        let joined = format_tokens(&first);
        assert_eq!(lex(&joined), first);
    }
}

#[test]
fn classifier_recognises_token_shapes() {
    assert_eq!(Kind::classify("1"), Kind::Number);
    assert_eq!(Kind::classify("123"), Kind::Number);
    assert_eq!(Kind::classify("x"), Kind::Identifier);
    assert_eq!(Kind::classify("var"), Kind::Identifier);
    for op in ["*", "/", "+", "-", "^"] {
        assert_eq!(Kind::classify(op), Kind::Operator, "operator {op}");
    }
    assert_eq!(Kind::classify("("), Kind::OpenParen);
    assert_eq!(Kind::classify(")"), Kind::CloseParen);
}

#[test]
fn classifier_rejects_everything_else() {
    for text in ["1x", "123abc", "", "!@#", " 1", "1 ", "++", "()", "%", "x_y"] {
        assert_eq!(Kind::classify(text), Kind::Invalid, "text {text:?}");
    }
}

#[test]
fn validator_accepts_well_formed_expressions() {
    for src in ["x + y",
                "1 + 2 * var",
                "(x + y)",
                "A + B * C",
                "(A + B) * C",
                "((A + B) * C) - D",
                "42",
                ""]
    {
        assert_eq!(validate(&lex(src)), Ok(()), "expression {src:?}");
    }
}

#[test]
fn validator_reports_each_rule() {
    assert!(matches!(validation_error("+ A * B"),
                     ValidationError::LeadingOperator { token } if token == "+"));
    assert!(matches!(validation_error("( A + B * )"),
                     ValidationError::CloseParenAfterOperator { position: 5 }));
    assert!(matches!(validation_error("( + A )"),
                     ValidationError::OperatorAfterOpenParen { position: 1, .. }));
    assert!(matches!(validation_error("( )"), ValidationError::EmptyParentheses { position: 1 }));
    assert!(matches!(validation_error("1 2 3"),
                     ValidationError::ConsecutiveSameKind { kind: Kind::Number, position: 1, .. }));
    assert!(matches!(validation_error("A + * B"),
                     ValidationError::ConsecutiveSameKind { kind: Kind::Operator, .. }));
    assert!(matches!(validation_error("A B"),
                     ValidationError::ConsecutiveSameKind { kind: Kind::Identifier, .. }));
    assert!(matches!(validation_error("A + B *"),
                     ValidationError::TrailingOperator { position: 3, .. }));
    assert!(matches!(validation_error("A + B @ C"),
                     ValidationError::InvalidToken { token, position: 3 } if token == "@"));
}

#[test]
fn validator_checks_balance_before_anything_else() {
    assert_eq!(validation_error("(A + B * C"), ValidationError::UnbalancedParentheses);
    assert_eq!(validation_error("A + ) B"), ValidationError::UnbalancedParentheses);
    assert_eq!(validation_error(") + ("), ValidationError::UnbalancedParentheses);
    assert_eq!(validation_error("+ (1"), ValidationError::UnbalancedParentheses);
}

#[test]
fn validator_reports_first_violation_only() {
    // Leading operator is found before the invalid token later on.
    assert!(matches!(validation_error("+ @"), ValidationError::LeadingOperator { .. }));
    // Invalid token is found before the trailing operator.
    assert!(matches!(validation_error("1 # 2 +"), ValidationError::InvalidToken { .. }));
}

#[test]
fn validator_allows_mixed_operand_kinds_and_nested_groups() {
    assert_eq!(validate(&lex("((A + B) * C) - D")), Ok(()));
    assert_eq!(validate(&lex("(1) (2)")), Ok(()));
    assert_eq!(validate(&lex("x 1")), Ok(()));
}

#[test]
fn converter_respects_precedence() {
    assert_eq!(postfix("1 + 2"), ["1", "2", "+"]);
    assert_eq!(postfix("A+B*C"), ["A", "B", "C", "*", "+"]);
    assert_eq!(postfix("A+B*C-D/E"), ["A", "B", "C", "*", "+", "D", "E", "/", "-"]);
    assert_eq!(postfix("A+B*C/D-E^F"),
               ["A", "B", "C", "*", "D", "/", "+", "E", "F", "^", "-"]);
    assert_eq!(postfix("A - B - C"), ["A", "B", "-", "C", "-"]);
}

#[test]
fn converter_groups_power_to_the_right() {
    assert_eq!(postfix("A ^ B ^ C"), ["A", "B", "C", "^", "^"]);
    assert_eq!(postfix("(A ^ B) ^ C"), ["A", "B", "^", "C", "^"]);
}

#[test]
fn converter_handles_parentheses() {
    assert_eq!(postfix("(A+B)*C"), ["A", "B", "+", "C", "*"]);
    assert_eq!(postfix("((A+B)*C)-D"), ["A", "B", "+", "C", "*", "D", "-"]);
    assert_eq!(postfix("A*(B+C*D)-E/F"), ["A", "B", "C", "D", "*", "+", "*", "E", "F", "/", "-"]);
    assert_eq!(postfix("(A+(B*C))^D"), ["A", "B", "C", "*", "+", "D", "^"]);
    assert_eq!(postfix("(((A+B)*C)+D)/E"), ["A", "B", "+", "C", "*", "D", "+", "E", "/"]);
    assert_eq!(postfix("A"), ["A"]);
    assert!(postfix("").is_empty());
}

#[test]
fn converter_drops_exactly_the_parentheses() {
    let src = "((A + B) * (C - D) / E) + F^G - H * (I + J) / (K - L)";
    let infix = lex(src);
    let parens = infix.iter().filter(|t| t.kind().is_paren()).count();
    let converted = to_postfix(&infix).unwrap();
    assert_eq!(converted.len(), infix.len() - parens);
    assert_eq!(format_tokens(&converted), "A B + C D - * E / F G ^ + H I J + * K L - / -");
}

#[test]
fn converter_reports_mismatched_parentheses() {
    assert_eq!(to_postfix(&tokens(&["A", ")"])),
               Err(ConversionError::UnmatchedCloseParen { position: 1 }));
    assert_eq!(to_postfix(&tokens(&["(", "A", "+", "B"])),
               Err(ConversionError::UnmatchedOpenParen { position: 0 }));
}

#[test]
fn convert_infix_to_postfix_formats_output() {
    assert_eq!(convert_infix_to_postfix("A + B * C").unwrap(), "A B C * +");
    assert_eq!(convert_infix_to_postfix("  A + B * C  ").unwrap(), "A B C * +");
    assert_eq!(convert_infix_to_postfix("A + (B * C) - (D / E) ^ F").unwrap(),
               "A B C * + D E / F ^ -");
    assert_eq!(convert_infix_to_postfix("").unwrap(), "");

    let err = convert_infix_to_postfix("A + + B").unwrap_err();
    assert!(matches!(err.cause(),
                     StageError::Validation(ValidationError::ConsecutiveSameKind { .. })));
}

#[test]
fn evaluator_computes_postfix_values() {
    assert_eq!(evaluate_postfix(&tokens(&["2", "3", "^", "4", "*"])).unwrap(), 32);
    assert_eq!(evaluate_postfix(&tokens(&["2", "3", "+", "4", "*"])).unwrap(), 20);
    assert_eq!(evaluate_postfix(&tokens(&["10", "5", "-", "2", "/"])).unwrap(), 2.5);
    assert_eq!(evaluate_postfix(&tokens(&["5"])).unwrap(), 5);
    assert_eq!(evaluate_postfix_expression("3 4 + 2 * 5 -").unwrap(), 9);
    assert_eq!(evaluate_postfix_expression("3 4 + 2 * 5 - 6 +").unwrap(), 15);
    assert_eq!(evaluate_postfix_expression("2 3 ^ 4 2 ^ ^ 6 3 ^ 5 2 ^ * + 7 +").unwrap(),
               Number::Integer(281_474_976_716_063));
}

#[test]
fn evaluator_reports_failures() {
    assert_eq!(evaluation_error(&["5", "0", "/"]), EvaluationError::DivisionByZero { position: 2 });
    assert_eq!(evaluation_error(&["5", "+"]),
               EvaluationError::InsufficientOperands { position: 1,
                                                       needed:   2,
                                                       found:    1, });
    assert!(matches!(evaluation_error(&["3", "4", "+", "*"]),
                     EvaluationError::InsufficientOperands { position: 3, .. }));
    assert_eq!(evaluation_error(&["1", "2"]), EvaluationError::TooManyOperands { count: 2 });
    assert!(matches!(evaluation_error(&[]),
                     EvaluationError::InsufficientOperands { needed: 1, found: 0, .. }));
    assert!(matches!(evaluation_error(&["3", "A", "+"]),
                     EvaluationError::InvalidPostfixToken { token, position: 1 } if token == "A"));
    assert!(matches!(evaluation_error(&["(", "1", ")"]),
                     EvaluationError::InvalidPostfixToken { position: 0, .. }));
}

#[test]
fn division_is_real_division() {
    assert_eq!(evaluate_infix("10 / 2").unwrap(), Number::Integer(5));
    assert_eq!(evaluate_infix("7 / 2").unwrap(), Number::Real(3.5));
    assert_eq!(evaluate_infix("1 / 3 * 3").unwrap(), 1.0);
    assert_eq!(evaluate_infix("0 / 1").unwrap(), 0);
}

#[test]
fn basic_arithmetic() {
    assert_value("3 + 4", 7.0);
    assert_value("10 + 2 * 6", 22.0);
    assert_value("100 * 2 + 12", 212.0);
    assert_value("(100 * (2 + 12)) / 14", 100.0);
    assert_value("50 / (5 * (2 + 3))", 2.0);
    assert_value("42", 42.0);
    assert_value("1 + 0", 1.0);
    assert_value("0 * 100", 0.0);
    assert_value("1 / 1", 1.0);
    assert_value("(6 + (3 * 2)) / (1 + 1)", 6.0);
    assert_value("2 - 5", -3.0);
}

#[test]
fn full_precedence_ladder() {
    assert_value("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3", 3.000_122_070_312_5);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("(2 ^ 3) ^ 2", 64.0);
    assert_value("2 ^ 0 - 1", 0.0);
}

fn infix_evaluation_error(src: &str) -> EvaluationError {
    match evaluate_infix(src).map_err(shunt::error::ExpressionError::into_cause) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(StageError::Evaluation(e)) => e,
        Err(other) => panic!("{src:?} failed before evaluation: {other}"),
    }
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(infix_evaluation_error("9223372036854775807 + 1"),
               EvaluationError::Overflow { operator: "+".into(),
                                           position: 2 });
    assert_eq!(infix_evaluation_error("9223372036854775807 + 1 - 1"),
               EvaluationError::Overflow { operator: "+".into(),
                                           position: 2 });
    assert_eq!(infix_evaluation_error("2 ^ 64"),
               EvaluationError::Overflow { operator: "^".into(),
                                           position: 2 });
    assert_eq!(infix_evaluation_error("3037000500 * 3037000500"),
               EvaluationError::Overflow { operator: "*".into(),
                                           position: 2 });
    assert_eq!(infix_evaluation_error("10 ^ 400 / 10 ^ 400"),
               EvaluationError::Overflow { operator: "^".into(),
                                           position: 2 });
    assert_eq!(infix_evaluation_error("2 ^ 2000 - 2 ^ 2000"),
               EvaluationError::Overflow { operator: "^".into(),
                                           position: 2 });
}

#[test]
fn results_near_the_integer_limit_stay_exact() {
    assert_eq!(evaluate_infix("9223372036854775807 - 1 + 1").unwrap(),
               Number::Integer(i64::MAX));
    assert_eq!(evaluate_infix("2 ^ 62 - 1 + 2 ^ 62").unwrap(), Number::Integer(i64::MAX));
    assert_eq!(evaluate_infix("9223372036854775807 / 1").unwrap(), Number::Integer(i64::MAX));
    assert_eq!(evaluate_infix("0 - 9223372036854775807 - 1").unwrap(),
               Number::Integer(i64::MIN));
}

#[test]
fn oversized_literals_are_rejected() {
    assert_eq!(infix_evaluation_error("99999999999999999999 - 1"),
               EvaluationError::LiteralTooLarge { token:    "99999999999999999999".into(),
                                                  position: 0, });
    assert_eq!(evaluation_error(&["1", "9223372036854775808", "+"]),
               EvaluationError::LiteralTooLarge { token:    "9223372036854775808".into(),
                                                  position: 1, });
}

#[test]
fn zero_to_a_negative_power_divides_by_zero() {
    assert_eq!(infix_evaluation_error("0 ^ (0 - 1)"),
               EvaluationError::DivisionByZero { position: 4 });
    assert_eq!(evaluate_infix("2 ^ (0 - 2)").unwrap(), 0.25);
    assert_eq!(evaluate_infix("0 ^ 0").unwrap(), Number::Integer(1));
}

#[test]
fn integers_and_reals_compare_exactly() {
    assert_ne!(Number::Integer(i64::MAX), Number::Real(9.223_372_036_854_776e18));
    assert_ne!(Number::Real(9.223_372_036_854_776e18), Number::Integer(i64::MAX));
    assert_ne!(Number::Integer(9_007_199_254_740_993), Number::Real(9_007_199_254_740_992.0));
    assert_eq!(Number::Integer(9_007_199_254_740_992), Number::Real(9_007_199_254_740_992.0));
    assert_eq!(Number::Integer(3), Number::Real(3.0));
}

#[test]
fn number_display() {
    assert_eq!(evaluate_infix("6 * 7").unwrap().to_string(), "42");
    assert_eq!(evaluate_infix("7 / 2").unwrap().to_string(), "3.5");
    assert_eq!(evaluate_infix("(100 * (2 + 12)) / 14").unwrap().to_string(), "100");
}

#[test]
fn infix_failures_carry_expression_and_cause() {
    let err = evaluate_infix("").unwrap_err();
    assert_eq!(err.expression(), "");
    assert!(matches!(err.cause(),
                     StageError::Evaluation(EvaluationError::InsufficientOperands { .. })));

    let err = evaluate_infix("3 + ").unwrap_err();
    assert!(matches!(err.cause(),
                     StageError::Validation(ValidationError::TrailingOperator { .. })));
    assert!(err.to_string().starts_with("Error processing expression '3 + '"));

    let err = evaluate_infix("3 + a").unwrap_err();
    assert!(matches!(err.cause(),
                     StageError::Evaluation(EvaluationError::InvalidPostfixToken { .. })));

    let err = evaluate_infix("(1 + 2").unwrap_err();
    assert_eq!(err.into_cause(),
               StageError::Validation(ValidationError::UnbalancedParentheses));

    // Evaluation positions index the postfix sequence `4 2 2 - /`.
    let err = evaluate_infix("4 / (2 - 2)").unwrap_err();
    assert!(matches!(err.cause(),
                     StageError::Evaluation(EvaluationError::DivisionByZero { position: 4 })));
}
