use simpas::{
    ast::{BinaryOperator, Expr, Program, Read, Statement},
    error::{Error, ParseError},
    interpreter::parser::core::MAX_NESTING_DEPTH,
    parse_program,
};

fn parse(source: &str) -> Program {
    parse_program(source).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
}

fn parse_err(source: &str) -> ParseError {
    match parse_program(source) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {source:?}, got {other:?}"),
    }
}

/// The expression of the first statement, which must be a display.
fn displayed(source: &str) -> Expr {
    match parse(source).statements.into_iter().next() {
        Some(Statement::Display { value, .. }) => value,
        other => panic!("Expected a display statement, got {other:?}"),
    }
}

fn num(n: i64) -> Expr {
    Expr::Number(n)
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1, }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::binary(left, op, right, 1)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(displayed("display 3 + 4 * 2"),
               bin(num(3), BinaryOperator::Add, bin(num(4), BinaryOperator::Mul, num(2))));
}

#[test]
fn relational_operators_bind_loosest() {
    assert_eq!(displayed("display a + b < c * d"),
               bin(bin(var("a"), BinaryOperator::Add, var("b")),
                   BinaryOperator::Less,
                   bin(var("c"), BinaryOperator::Mul, var("d"))));
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(displayed("display 10 - 4 - 3"),
               bin(bin(num(10), BinaryOperator::Sub, num(4)), BinaryOperator::Sub, num(3)));
    assert_eq!(displayed("display 1 < 2 = 1"),
               bin(bin(num(1), BinaryOperator::Less, num(2)), BinaryOperator::Equal, num(1)));
}

#[test]
fn unary_minus_applies_to_the_value_only() {
    assert_eq!(displayed("display -2 * 3"),
               bin(bin(num(-1), BinaryOperator::Mul, num(2)), BinaryOperator::Mul, num(3)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(displayed("display (1 + 2) * 3"),
               bin(bin(num(1), BinaryOperator::Add, num(2)), BinaryOperator::Mul, num(3)));
    assert_eq!(displayed("display -(-x)"),
               bin(num(-1), BinaryOperator::Mul, bin(num(-1), BinaryOperator::Mul, var("x"))));
}

#[test]
fn every_assignment_spelling_builds_the_same_node() {
    let expected = Statement::Assign { name:  "x".to_string(),
                                       value: num(1),
                                       line:  1, };

    for source in ["x := 1", "x = 1", "assign x := 1", "assign x = 1 ;"] {
        assert_eq!(parse(source).statements, [expected.clone()], "source: {source}");
    }
}

#[test]
fn semicolons_are_optional() {
    let with = parse("x := 1 ; y := 2 ; display x + y ;");
    let without = parse("x := 1 y := 2 display x + y");

    assert_eq!(with, without);
    assert_eq!(with.statements.len(), 3);
}

#[test]
fn display_may_carry_a_read() {
    assert_eq!(parse("display 1 read x").statements,
               [Statement::Display { value: num(1),
                                     read:  Some(Read { name: "x".to_string(),
                                                        line: 1, }),
                                     line:  1, }]);
    assert_eq!(parse("read y").statements,
               [Statement::Read(Read { name: "y".to_string(),
                                       line: 1, })]);
}

#[test]
fn if_with_and_without_else() {
    let program = parse("if x then display 1 end\nIF x THEN display 1 ELSE display 2 END");

    match &program.statements[..] {
        [Statement::If { else_branch: None,
                         then_branch,
                         line: 1,
                         .. },
         Statement::If { else_branch: Some(else_branch),
                         line: 2,
                         .. }] => {
            assert_eq!(then_branch.statements.len(), 1);
            assert_eq!(else_branch.statements.len(), 1);
        },
        other => panic!("Unexpected statements: {other:?}"),
    }
}

#[test]
fn else_if_is_a_nested_if() {
    let program = parse("if a then display 1 else if b then display 2 else display 3 end end");

    let Statement::If { else_branch: Some(else_branch),
                        .. } = &program.statements[0]
    else {
        panic!("Expected an if statement with an else branch");
    };
    assert!(matches!(else_branch.statements[..],
                     [Statement::If { else_branch: Some(_),
                                      .. }]));
}

#[test]
fn while_body_holds_several_statements() {
    let program = parse("while x < 3 do display x ; x := x + 1 ; end");

    match &program.statements[..] {
        [Statement::While { condition, body, .. }] => {
            assert_eq!(*condition, bin(var("x"), BinaryOperator::Less, num(3)));
            assert_eq!(body.statements.len(), 2);
            assert!(body.procedures.is_empty());
        },
        other => panic!("Unexpected statements: {other:?}"),
    }
}

#[test]
fn procedures_come_before_statements() {
    let program = parse("procedure max(a, b)\n\
                         var m;\n\
                         m := a\n\
                         if b > a then m := b end\n\
                         max := m\n\
                         end;\n\
                         procedure zero() zero := 0 end\n\
                         display max(zero(), 4)");

    assert_eq!(program.procedures.len(), 2);
    let max = &program.procedures[0];
    assert_eq!(max.name, "max");
    assert_eq!(max.params, ["a", "b"]);
    assert_eq!(max.locals, ["m"]);
    assert_eq!(max.body.statements.len(), 3);
    assert!(program.procedures[1].params.is_empty());

    match &program.statements[..] {
        [Statement::Display { value: Expr::ProcedureCall { name, arguments, line: 8 },
                              .. }] => {
            assert_eq!(name, "max");
            assert_eq!(arguments.len(), 2);
            assert!(matches!(arguments[0], Expr::ProcedureCall { ref arguments, .. } if arguments.is_empty()));
        },
        other => panic!("Unexpected statements: {other:?}"),
    }
}

#[test]
fn parsing_is_deterministic() {
    let source = "procedure f(n) f := n * 2 end\n\
                  x := 0\n\
                  while x < 10 do if x = 3 then display f(x) else display -x end x := x + 1 end";

    assert_eq!(parse(source), parse(source));
}

#[test]
fn missing_then_is_reported() {
    assert_eq!(parse_err("if x display 1 end"),
               ParseError::UnexpectedToken { expected: "'then'".to_string(),
                                             found:    "'display'".to_string(),
                                             line:     1, });
}

#[test]
fn unclosed_block_is_reported() {
    assert_eq!(parse_err("while 1 do\ndisplay 1"),
               ParseError::UnexpectedToken { expected: "'end'".to_string(),
                                             found:    "end of input".to_string(),
                                             line:     2, });
}

#[test]
fn blocks_must_not_be_empty() {
    assert!(matches!(parse_err("if 1 then end"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err(""), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("procedure f() f := 1 end"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn stray_terminators_are_rejected() {
    assert!(matches!(parse_err("display 1 end"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("display 1 else display 2"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn malformed_expressions_are_rejected() {
    for source in ["display (1 + 2", "display --1", "display 1 +", "display 5 % 2", "x := := 1"] {
        assert!(parse_program(source).is_err(), "source: {source}");
    }
}

#[test]
fn procedures_after_statements_are_rejected() {
    assert!(matches!(parse_err("display 1\nprocedure f() f := 1 end"),
                     ParseError::UnexpectedToken { line: 2, .. }));
}

#[test]
fn procedure_bindings_must_be_distinct() {
    assert_eq!(parse_err("procedure f(a, a) f := a end display f(1, 2)"),
               ParseError::DuplicateBinding { name:      "a".to_string(),
                                              procedure: "f".to_string(),
                                              line:      1, });
    assert!(matches!(parse_err("procedure f(a) var b, a; f := a end display 1"),
                     ParseError::DuplicateBinding { .. }));
    assert!(matches!(parse_err("procedure f(f) f := 1 end display 1"),
                     ParseError::DuplicateBinding { .. }));
}

#[test]
fn parse_errors_render_with_their_line() {
    let err = parse_err("x := 1\nwhile x do x := 0");
    assert_eq!(err.to_string(), "Error on line 2: Expected 'end', found end of input.");
}

#[test]
fn statements_remember_their_line() {
    let program = parse("x := 1\n\ndisplay x\nif x then\nread y\nend\nwhile 0 do x := 2 end");
    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();

    assert_eq!(lines, [1, 3, 4, 7]);

    let Statement::If { then_branch, .. } = &program.statements[2] else {
        panic!("Expected an if statement");
    };
    assert_eq!(then_branch.statements[0].line_number(), 5);
}

fn nested_parentheses(depth: usize) -> String {
    format!("display {}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn parentheses_nest_up_to_the_limit() {
    assert_eq!(displayed(&nested_parentheses(MAX_NESTING_DEPTH)), num(1));
    assert_eq!(parse_err(&nested_parentheses(MAX_NESTING_DEPTH + 1)),
               ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                            line:  1, });
}

#[test]
fn runaway_nesting_is_an_error() {
    assert!(matches!(parse_err(&nested_parentheses(2000)), ParseError::NestingTooDeep { .. }));

    let blocks = format!("{}display 1\n{}", "if 1 then\n".repeat(2000), "end\n".repeat(2000));
    assert_eq!(parse_err(&blocks),
               ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                            line:  MAX_NESTING_DEPTH + 1, });
}

#[test]
fn nesting_closes_levels() {
    let sequential = "x := 0\n".to_string()
                     + &"if x then display (((x))) end\n".repeat(MAX_NESTING_DEPTH * 2);

    assert_eq!(parse(&sequential).statements.len(), MAX_NESTING_DEPTH * 2 + 1);
}
