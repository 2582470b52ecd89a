use pyhton::{
    ast::{BinaryOperator, ComparisonOperator, Expr, LogicalOperator, Program, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{MAX_NESTING_DEPTH, parse},
    },
};

fn parse_source(source: &str) -> Program {
    parse(&tokenize(source)).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

fn parse_error(source: &str) -> ParseError {
    match parse(&tokenize(source)) {
        Ok(program) => panic!("{source:?} parsed but should not have: {program:?}"),
        Err(e) => e,
    }
}

fn single_expression(source: &str) -> Expr {
    let program = parse_source(source);
    match program.statements.as_slice() {
        [Statement::Expression { expr, .. }] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn num(value: f64) -> Box<Expr> {
    Box::new(Expr::Number { value, line: 1 })
}

fn ident(name: &str) -> Box<Expr> {
    Box::new(Expr::Identifier { name: name.to_string(),
                                line: 1, })
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single_expression("1 + 2 * 3"),
               Expr::Binary { left:  num(1.0),
                              op:    BinaryOperator::Add,
                              right: Box::new(Expr::Binary { left:  num(2.0),
                                                             op:    BinaryOperator::Mul,
                                                             right: num(3.0),
                                                             line:  1, }),
                              line:  1, });
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(single_expression("8 - 4 - 2"),
               Expr::Binary { left:  Box::new(Expr::Binary { left:  num(8.0),
                                                             op:    BinaryOperator::Sub,
                                                             right: num(4.0),
                                                             line:  1, }),
                              op:    BinaryOperator::Sub,
                              right: num(2.0),
                              line:  1, });
}

#[test]
fn or_binds_looser_than_and() {
    assert_eq!(single_expression("a or b and x"),
               Expr::Logical { left:  ident("a"),
                               op:    LogicalOperator::Or,
                               right: Box::new(Expr::Logical { left:  ident("b"),
                                                               op:    LogicalOperator::And,
                                                               right: ident("x"),
                                                               line:  1, }),
                               line:  1, });
}

#[test]
fn ordering_binds_tighter_than_equality() {
    assert_eq!(single_expression("a < b == x"),
               Expr::Comparison { left:  Box::new(Expr::Comparison { left:  ident("a"),
                                                                     op:    ComparisonOperator::Less,
                                                                     right: ident("b"),
                                                                     line:  1, }),
                                  op:    ComparisonOperator::Equal,
                                  right: ident("x"),
                                  line:  1, });
}

#[test]
fn unary_operators_nest() {
    assert_eq!(single_expression("nott -x"),
               Expr::Unary { op:      UnaryOperator::Not,
                             operand: Box::new(Expr::Unary { op:      UnaryOperator::Negate,
                                                             operand: ident("x"),
                                                             line:    1, }),
                             line:    1, });
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(single_expression("(1 + 2) * 3"),
               Expr::Binary { left:  Box::new(Expr::Binary { left:  num(1.0),
                                                             op:    BinaryOperator::Add,
                                                             right: num(2.0),
                                                             line:  1, }),
                              op:    BinaryOperator::Mul,
                              right: num(3.0),
                              line:  1, });
}

#[test]
fn call_with_arguments() {
    assert_eq!(single_expression("add(1, x)"),
               Expr::Call { name:      "add".to_string(),
                            arguments: vec![*num(1.0), *ident("x")],
                            line:      1, });
    assert_eq!(single_expression("add()"),
               Expr::Call { name:      "add".to_string(),
                            arguments: vec![],
                            line:      1, });
}

#[test]
fn assignment_needs_a_bare_identifier() {
    let program = parse_source("x = 1 + 2");
    assert!(matches!(program.statements.as_slice(),
                     [Statement::Assignment { name, .. }] if name == "x"));

    assert!(parse(&tokenize("a + b = 5")).is_err());
}

#[test]
fn function_body_runs_until_next_def() {
    let program = parse_source("deff one():\n  retrn 1\n\ndeff two():\n  x = 2\n  retrn x\nprnit(two())");
    let [Statement::Function(one), Statement::Function(two)] = program.statements.as_slice() else {
        panic!("expected two function definitions, got {:?}", program.statements);
    };

    assert_eq!(one.name, "one");
    assert!(one.params.is_empty());
    assert_eq!(one.body.len(), 1);

    assert_eq!(two.name, "two");
    assert_eq!(two.body.len(), 3);
    assert_eq!(two.line, 4);
}

#[test]
fn parameters_are_collected_in_order() {
    let program = parse_source("deff add(a, b, x):\n  retrn a");
    let [Statement::Function(def)] = program.statements.as_slice() else {
        panic!("expected a function definition");
    };
    assert_eq!(def.params, vec!["a", "b", "x"]);
}

#[test]
fn if_chain_on_one_line() {
    let program = parse_source("iff False: print(\"a\") elfi True: print(\"b\") esle: print(\"c\")");
    let [Statement::If(stmt)] = program.statements.as_slice() else {
        panic!("expected an if statement, got {:?}", program.statements);
    };

    assert_eq!(stmt.condition, Expr::Bool { value: false, line: 1 });
    assert_eq!(stmt.then_body.len(), 1);
    assert_eq!(stmt.elif_clauses.len(), 1);
    assert_eq!(stmt.else_body.as_ref().map(Vec::len), Some(1));
}

#[test]
fn bare_return_has_no_value() {
    let program = parse_source("deff nothing():\n  retrn\n");
    let [Statement::Function(def)] = program.statements.as_slice() else {
        panic!("expected a function definition");
    };
    assert!(matches!(def.body.as_slice(), [Statement::Return { value: None, line: 2 }]));
}

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(parse_source("\n\nx = 1\n\n\ny = 2\n").statements.len(), 2);
    assert!(parse_source("").statements.is_empty());
}

#[test]
fn error_points_at_offending_token() {
    match parse_error("x = 1\ny = )") {
        ParseError::UnexpectedToken { token, line, column } => {
            assert_eq!(token, "')'");
            assert_eq!((line, column), (2, 5));
        },
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn print_requires_parentheses() {
    let err = parse_error("prnit 1");
    assert!(matches!(err, ParseError::Expected { line: 1, column: 7, .. }), "{err:?}");
}

#[test]
fn missing_colon_is_reported() {
    let err = parse_error("deff add(a, b)\n  retrn a");
    assert!(matches!(err, ParseError::Expected { line: 1, .. }), "{err:?}");
}

#[test]
fn malformed_number_is_rejected() {
    assert!(matches!(parse_error("x = 1.2.3"), ParseError::InvalidNumber { .. }));
}

#[test]
fn unclosed_call_is_rejected() {
    assert!(parse(&tokenize("add(1, 2")).is_err());
}

#[test]
fn statements_and_expressions_report_their_line() {
    let program = parse_source("x = 1\n\nprnit(x)\niff x: prnit(2)");
    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![1, 3, 4]);

    match &program.statements[0] {
        Statement::Assignment { value, .. } => assert_eq!(value.line_number(), 1),
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let source = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(single_expression(&source), Expr::Number { value: 1.0, line: 1 });
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let source = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    let err = parse_error(&source);
    assert_eq!(err,
               ParseError::NestingTooDeep { line:   1,
                                            column: MAX_NESTING_DEPTH + 1, });
}

#[test]
fn long_not_chain_is_rejected() {
    let source = format!("{}Treu", "nott ".repeat(500));
    assert!(matches!(parse_error(&source), ParseError::NestingTooDeep { line: 1, .. }));
}

#[test]
fn deeply_nested_calls_are_rejected() {
    let source = format!("{}1{}", "add(".repeat(500), ")".repeat(500));
    assert!(matches!(parse_error(&source), ParseError::NestingTooDeep { line: 1, .. }));
}

#[test]
fn deeply_nested_ifs_are_rejected() {
    let source = format!("{}prnit(1)", "iff 1: ".repeat(500));
    assert!(matches!(parse_error(&source), ParseError::NestingTooDeep { line: 1, .. }));
}
