use whilst::{
    ast::Node,
    interpreter::{
        evaluator::Namespace,
        lexer::{Lexer, Token},
        parser::core::parse,
        value::Value,
    },
    run,
};

fn eval(source: &str) -> Namespace {
    let mut namespace = Namespace::new();
    eval_into(source, &mut namespace);
    namespace
}

fn eval_into(source: &str, namespace: &mut Namespace) {
    if let Err(e) = run(source, namespace) {
        panic!("Script failed: {e}");
    }
}

#[test]
fn tokenization_yields_classified_stream() {
    let mut lexer = Lexer::new("x := 12; y := x + 3");
    let mut tokens = Vec::new();
    loop {
        let (token, _) = lexer.next_token().expect("lexing failed");
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    assert_eq!(tokens,
               vec![Token::Identifier("x".to_string()),
                    Token::Assign,
                    Token::Integer(12),
                    Token::Semicolon,
                    Token::Identifier("y".to_string()),
                    Token::Assign,
                    Token::Identifier("x".to_string()),
                    Token::Plus,
                    Token::Integer(3),
                    Token::Eof]);
}

#[test]
fn unbound_variables_read_as_zero() {
    let namespace = eval("y := x + 1");

    assert_eq!(namespace["y"], Value::Integer(1));
    assert!(!namespace.contains_key("x"));
}

#[test]
fn conditional_takes_the_live_branch() {
    let mut namespace = Namespace::new();
    namespace.insert("x".to_string(), Value::Integer(5));
    eval_into("if x > 0 then y := 1 else y := 0", &mut namespace);
    assert_eq!(namespace["y"], Value::Integer(1));

    let mut namespace = Namespace::new();
    namespace.insert("x".to_string(), Value::Integer(0));
    eval_into("if x > 0 then y := 1 else y := 0", &mut namespace);
    assert_eq!(namespace["y"], Value::Integer(0));
}

#[test]
fn missing_else_is_a_noop() {
    let namespace = eval("if 1 > 2 then y := 1");

    assert!(namespace.is_empty());
}

#[test]
fn loop_runs_until_condition_fails() {
    let namespace = eval("while x < 5 do (x := x + 1; n := n + 1)");

    assert_eq!(namespace["x"], Value::Integer(5));
    assert_eq!(namespace["n"], Value::Integer(5));
}

#[test]
fn loop_with_false_condition_never_runs() {
    let mut namespace = Namespace::new();
    namespace.insert("x".to_string(), Value::Integer(7));
    eval_into("while x < 5 do (x := x + 1; n := n + 1)", &mut namespace);

    assert_eq!(namespace["x"], Value::Integer(7));
    assert!(!namespace.contains_key("n"));
}

#[test]
fn division_is_true_division() {
    let namespace = eval("y := 7 / 2");
    assert_eq!(namespace["y"], Value::Real(3.5));

    // Even when it would divide evenly, the result is a real.
    let namespace = eval("y := 8 / 2");
    assert_eq!(namespace["y"], Value::Real(4.0));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let mut namespace = Namespace::new();
    let error = run("y := 1 / 0", &mut namespace).unwrap_err();

    assert!(error.to_string().contains("Division by zero"));
    assert!(namespace.is_empty());
}

#[test]
fn skip_changes_nothing() {
    let mut namespace = Namespace::new();
    namespace.insert("x".to_string(), Value::Integer(3));
    let before = namespace.clone();
    eval_into("skip", &mut namespace);

    assert_eq!(namespace, before);
}

#[test]
fn missing_right_hand_side_is_fatal() {
    let mut namespace = Namespace::new();
    namespace.insert("kept".to_string(), Value::Bool(true));
    let error = run("x := ", &mut namespace).unwrap_err();
    let message = error.to_string();

    assert!(message.contains("line 1"), "unexpected message: {message}");
    assert!(message.contains("end of input"), "unexpected message: {message}");
    // The first syntax error aborts before any evaluation.
    assert_eq!(namespace.len(), 1);
    assert_eq!(namespace["kept"], Value::Bool(true));
}

#[test]
fn parse_errors_carry_the_offending_line() {
    let error = parse("x := 1;\ny := then").unwrap_err();
    let message = error.to_string();

    assert!(message.contains("line 2"), "unexpected message: {message}");
    assert!(message.contains("y := then"), "unexpected message: {message}");
    assert!(message.contains('^'), "unexpected message: {message}");
}

#[test]
fn unrecognized_characters_are_lexical_errors() {
    let error = parse("x := 3 $ 4").unwrap_err();
    let message = error.to_string();

    assert!(message.contains("line 1"), "unexpected message: {message}");
    assert!(message.contains("Unrecognized character '$'"),
            "unexpected message: {message}");
    assert!(message.contains('^'), "unexpected message: {message}");
}

#[test]
fn both_not_spellings_negate() {
    let namespace = eval("x := !true; y := \u{ac}true");

    assert_eq!(namespace["x"], Value::Bool(false));
    assert_eq!(namespace["y"], Value::Bool(false));
}

#[test]
fn each_tier_admits_one_operator() {
    // Only the first `+` binds at the additive tier; nothing accounts
    // for the second one, so the parse fails at the trailing `+ 3`.
    assert!(parse("x := 1 + 2 + 3").is_err());

    // Parentheses restart the ladder, so the chained form is written
    // explicitly.
    let namespace = eval("x := (1 + 2) + 3");
    assert_eq!(namespace["x"], Value::Integer(6));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let namespace = eval("x := 2 + 3 * 4");

    assert_eq!(namespace["x"], Value::Integer(14));
}

#[test]
fn equality_and_logical_operators() {
    let namespace = eval("a := 1 = 1; b := true & true; c := false | true; d := 2 <= 2");

    assert_eq!(namespace["a"], Value::Bool(true));
    assert_eq!(namespace["b"], Value::Bool(true));
    assert_eq!(namespace["c"], Value::Bool(true));
    assert_eq!(namespace["d"], Value::Bool(true));
}

#[test]
fn reassignment_overwrites() {
    let namespace = eval("x := 1; x := 2");

    assert_eq!(namespace["x"], Value::Integer(2));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let namespace = eval("// setup\nx := 1;\n\n  y := x // trailing note");

    assert_eq!(namespace["x"], Value::Integer(1));
    assert_eq!(namespace["y"], Value::Integer(1));
}

#[test]
#[should_panic]
fn expression_nodes_never_run_in_statement_position() {
    let mut namespace = Namespace::new();
    let _ = Node::Constant(Value::Integer(1)).visit(&mut namespace);
}

#[test]
fn evaluation_is_deterministic() {
    let source = "x := 0; while x < 10 do x := x + 1; y := x * x; z := y / 4";

    let first = eval(source);
    let second = eval(source);

    assert_eq!(first, second);
    assert_eq!(first["x"], Value::Integer(10));
    assert_eq!(first["y"], Value::Integer(100));
    assert_eq!(first["z"], Value::Real(25.0));
}

#[test]
fn arithmetic_on_booleans_is_a_runtime_error() {
    let error = run("x := true + 1", &mut Namespace::new()).unwrap_err();

    assert!(error.to_string().contains("expects a number"));
}

#[test]
fn integer_overflow_is_a_runtime_error() {
    let mut namespace = Namespace::new();
    namespace.insert("big".to_string(), Value::Integer(i64::MAX));
    let error = run("x := big + 1", &mut namespace).unwrap_err();

    assert!(error.to_string().contains("overflow"));
}
