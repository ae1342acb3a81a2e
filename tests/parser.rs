use lox::{
    ast::{Expr, Statement},
    error::Diagnostics,
    parse, scan,
};
use pretty_assertions::assert_eq;

fn parse_source(src: &str) -> (Vec<Statement>, Vec<String>) {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan(src, &mut diagnostics);
    let statements = parse(tokens, &mut diagnostics);

    (statements, diagnostics.reports())
}

/// Parses a single expression statement and renders it in prefix form.
fn expr(src: &str) -> String {
    let (statements, reports) = parse_source(&format!("{src};"));
    assert!(reports.is_empty(), "unexpected errors: {reports:?}");

    match statements.as_slice() {
        [Statement::Expression { expr }] => expr.to_string(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

#[test]
fn precedence_levels() {
    assert_eq!(expr("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(expr("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(expr("1 < 2 == 3 > 4"), "(== (< 1 2) (> 3 4))");
    assert_eq!(expr("a or b and c"), "(or a (and b c))");
    assert_eq!(expr("a == b or c"), "(or (== a b) c)");
    assert_eq!(expr("-a * b"), "(* (- a) b)");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(expr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(expr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(expr("a or b or c"), "(or (or a b) c)");
}

#[test]
fn unary_and_assignment_are_right_associative() {
    assert_eq!(expr("!!true"), "(! (! true))");
    assert_eq!(expr("--1"), "(- (- 1))");
    assert_eq!(expr("a = b = 1"), "(= a (= b 1))");
}

#[test]
fn grouping_and_literals() {
    assert_eq!(expr("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
    assert_eq!(expr("\"s\" + nil"), "(+ \"s\" nil)");
    assert_eq!(expr("2.5"), "2.5");
}

#[test]
fn calls_chain_and_take_arguments() {
    assert_eq!(expr("f()"), "(call f)");
    assert_eq!(expr("f(1, a + b)"), "(call f 1 (+ a b))");
    assert_eq!(expr("f(1)(2)"), "(call (call f 1) 2)");
    assert_eq!(expr("-f(x)"), "(- (call f x))");
}

#[test]
fn call_records_the_closing_parenthesis_line() {
    let (statements, _) = parse_source("f(\n1\n);");

    let [Statement::Expression { expr: Expr::Call { line, .. } }] = statements.as_slice() else {
        panic!("expected a call statement");
    };
    assert_eq!(*line, 3);
}

#[test]
fn for_loop_desugars_to_while() {
    let (desugared, _) = parse_source("for (var i = 0; i < 3; i = i + 1) print i;");
    let (by_hand, _) = parse_source("{ var i = 0; while (i < 3) { print i; i = i + 1; } }");

    assert_eq!(desugared, by_hand);
}

#[test]
fn for_loop_without_clauses() {
    let (statements, reports) = parse_source("for (;;) print 1;");
    assert!(reports.is_empty());

    let [Statement::While { condition, body }] = statements.as_slice() else {
        panic!("expected a bare while loop, got {statements:?}");
    };
    assert_eq!(condition.to_string(), "true");
    assert!(matches!(**body, Statement::Print { .. }));
}

#[test]
fn else_binds_to_the_nearest_if() {
    let (statements, _) = parse_source("if (a) if (b) print 1; else print 2;");

    let [Statement::If { else_branch: None, then_branch, .. }] = statements.as_slice() else {
        panic!("outer if should have no else branch");
    };
    assert!(matches!(**then_branch, Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn function_declarations() {
    let (statements, reports) = parse_source("fun add(a, b) { return a + b; }");
    assert!(reports.is_empty());

    let [Statement::Function(declaration)] = statements.as_slice() else {
        panic!("expected a function declaration");
    };
    let params: Vec<_> = declaration.params.iter().map(|p| p.lexeme.as_str()).collect();

    assert_eq!(declaration.name.lexeme, "add");
    assert_eq!(params, ["a", "b"]);
    assert!(matches!(declaration.body.as_slice(), [Statement::Return { value: Some(_), line: 1 }]));
}

#[test]
fn return_records_the_line_of_its_keyword() {
    let (statements, reports) = parse_source("fun f() {
  print 1;
  return;
}");
    assert!(reports.is_empty());

    let [Statement::Function(declaration)] = statements.as_slice() else {
        panic!("expected a function declaration");
    };

    assert!(matches!(declaration.body.as_slice(),
                     [Statement::Print { .. }, Statement::Return { value: None, line: 3 }]));
}

#[test]
fn error_recovery_reports_each_bad_statement() {
    let (statements, reports) = parse_source("var a = ;\nprint a\nvar b = 2;\nprint (b;\nvar c = 3;");

    assert_eq!(reports,
               ["[line 1] error  at ';': Expect expression.",
                "[line 3] error  at 'var': Expect ';' after value.",
                "[line 4] error  at ';': Expect ')' after expression."]);

    // Recovery discards the offending `var`, so `var b = 2;` goes with it.
    assert_eq!(statements.len(), 1);
    assert!(matches!(&statements[0], Statement::Var { name, .. } if name.lexeme == "c"));
}

#[test]
fn errors_inside_blocks_recover_within_the_block() {
    let (statements, reports) = parse_source("{ print ; print 1; }");

    assert_eq!(reports, ["[line 1] error  at ';': Expect expression."]);
    let [Statement::Block { statements: inner }] = statements.as_slice() else {
        panic!("expected the block to survive");
    };
    assert_eq!(inner.len(), 1);
}

#[test]
fn missing_pieces_at_end_of_input() {
    assert_eq!(parse_source("{ print 1;").1, ["[line 1] error at end: Expect '}' after block."]);
    assert_eq!(parse_source("fun f(").1, ["[line 1] error at end: Expect parameter name."]);
    assert_eq!(parse_source("1 +").1, ["[line 1] error at end: Expect expression."]);
}

#[test]
fn invalid_assignment_target_keeps_parsing() {
    let (statements, reports) = parse_source("(a) = 1; print 2;");

    assert_eq!(reports, ["[line 1] error  at '=': Invalid assignment target."]);
    assert_eq!(statements.len(), 2);
}

#[test]
fn argument_count_is_limited() {
    let arguments = vec!["1"; 256].join(", ");
    let (statements, reports) = parse_source(&format!("f({arguments});"));

    assert_eq!(reports, ["[line 1] error  at '1': Can't have more than 255 arguments."]);
    assert_eq!(statements.len(), 1);

    let params: Vec<_> = (0..256).map(|i| format!("p{i}")).collect();
    let (_, reports) = parse_source(&format!("fun f({}) {{}}", params.join(", ")));
    assert_eq!(reports, ["[line 1] error  at 'p255': Can't have more than 255 parameters."]);
}
