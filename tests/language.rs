use std::fs;

use pilcrow::{
    error::{Error, RuntimeErrorKind},
    get_result,
    interpreter::{lexer::Token, value::core::Value},
    tokenize,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "pil"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = get_result(&code) {
            panic!("Demo {path:?} failed:\n{code}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn eval_last(src: &str) -> Value {
    match get_result(src) {
        Ok(Value::List(values)) => values.last().cloned().unwrap_or(Value::NULL),
        Ok(other) => panic!("Program produced {other} instead of a statement list"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeErrorKind {
    match get_result(src) {
        Err(Error::Runtime(e)) => e.kind,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(value) => panic!("Script succeeded with {value}"),
    }
}

fn numbers(values: &[f64]) -> Value {
    Value::from(values.iter().copied().map(Value::Number).collect::<Vec<_>>())
}

#[test]
fn number_literals_are_single_tokens() {
    for (literal, expected) in [("0", 0.0), ("42", 42.0), ("3.25", 3.25), ("7.", 7.0), ("007", 7.0)] {
        let tokens = tokenize(literal).unwrap();

        assert_eq!(tokens.len(), 2, "{literal} should be one token plus end of input");
        let text = match &tokens[0].0 {
            Token::Int(text) | Token::Float(text) => text.clone(),
            other => panic!("{literal} lexed as {other}"),
        };
        assert_eq!(text.parse::<f64>().unwrap(), expected);
        assert_eq!(tokens[1].0, Token::Eof);
    }
}

#[test]
fn string_literals_round_trip() {
    for text in ["", "plain", "Buenos días!", "tab\there", "back\\slash", "quote \" inside"] {
        let literal = format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""));
        let tokens = tokenize(&literal).unwrap();

        assert_eq!(tokens[0].0, Token::Str(text.to_string()));
        assert_eq!(eval_last(&literal), Value::from(text));
    }
}

#[test]
fn pure_programs_are_idempotent() {
    let source = "FUNCTION fib(n) => IF n < 2 THEN n ELSE fib(n - 1) + fib(n - 2)\n\
                  FOR i = 0 TO 8 THEN fib(i)";

    assert_eq!(get_result(source).unwrap(), get_result(source).unwrap());
    assert_eq!(eval_last(source), numbers(&[0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0]));
}

#[test]
fn division() {
    assert_eq!(eval_last("6 / 3"), Value::Number(2.0));
    assert_eq!(runtime_error("6 / 0"), RuntimeErrorKind::DivisionByZero);
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(eval_last("1 + 2 * 3"), Value::Number(7.0));
    assert_eq!(eval_last("(1 + 2) * 3"), Value::Number(9.0));
    assert_eq!(eval_last("-2 ^ 2"), Value::Number(-4.0));
    assert_eq!(eval_last("2 ^ 3 ^ 2"), Value::Number(512.0));
    assert_eq!(eval_last("2 ^ -1"), Value::Number(0.5));
    assert_eq!(eval_last("10 - 4 - 3"), Value::Number(3.0));
}

#[test]
fn variables_and_constants() {
    assert_eq!(eval_last("VAR a = VAR b = 50\nVAR c = 25\nVAR a = b > c"), Value::Number(1.0));
    assert_eq!(eval_last("TRUE && NULL"), Value::NULL);
    assert_failure("VAR y = x + 1");
}

#[test]
fn scoping_uses_call_time_lookup() {
    assert_eq!(eval_last("VAR a = 1\nFUNCTION f() => a\nVAR a = 2\nf()"), Value::Number(2.0));
}

#[test]
fn arity_is_never_padded_or_truncated() {
    assert!(matches!(runtime_error("FUNCTION f(a, b) => a\nf(1)"),
                     RuntimeErrorKind::TooFewArguments { .. }));
    assert!(matches!(runtime_error("FUNCTION f(a, b) => a\nf(1, 2, 3)"),
                     RuntimeErrorKind::TooManyArguments { .. }));
    assert!(matches!(runtime_error("LEN()"), RuntimeErrorKind::TooFewArguments { .. }));
}

#[test]
fn loop_direction_follows_the_step() {
    assert_eq!(eval_last("FOR i = -3 TO 2 THEN i"), numbers(&[-3.0, -2.0, -1.0, 0.0, 1.0]));
    assert_eq!(eval_last("FOR i = 5 TO 1 THEN i"), numbers(&[]));
    assert_eq!(eval_last("FOR i = 5 TO 1 STEP -1 THEN i"), numbers(&[5.0, 4.0, 3.0, 2.0]));
    assert_eq!(eval_last("FOR i = 0 TO 10 STEP 4 THEN i"), numbers(&[0.0, 4.0, 8.0]));
}

#[test]
fn loop_variable_outlives_the_loop() {
    assert_eq!(eval_last("FOR i = 0 TO 3 THEN i\ni"), Value::Number(2.0));
}

#[test]
fn while_loops() {
    assert_eq!(eval_last("VAR i = 1\nWHILE i < 10 THEN\n  VAR i = i * 2\nEND\ni"),
               Value::Number(16.0));
    assert_eq!(eval_last("WHILE 0 THEN 1"), numbers(&[]));
}

#[test]
fn list_operations() {
    assert_eq!(eval_last("[\"a\", \"b\", \"c\"] / 1"), Value::from("b"));
    assert!(matches!(runtime_error("[\"a\", \"b\", \"c\"] / 5"),
                     RuntimeErrorKind::IndexOutOfBounds { length: 3, .. }));
    assert_eq!(eval_last("[1, 2] + 3"), numbers(&[1.0, 2.0, 3.0]));
    assert_eq!(eval_last("[1, 2, 3] - 0"), numbers(&[2.0, 3.0]));
    assert_eq!(eval_last("VAR l = [1]\nVAR m = l + 2\nl"), numbers(&[1.0]));
}

#[test]
fn conditionals() {
    assert_eq!(eval_last("IF 1 == 1 THEN \"SI\" ELSE \"NO\""), Value::from("SI"));
    assert_eq!(eval_last("IF 0 THEN 1 ELIF 0 THEN 2 ELIF 1 THEN 3 ELSE 4"), Value::Number(3.0));
    assert_eq!(eval_last("IF 0 THEN 1"), Value::NULL);
    assert_eq!(eval_last(&fs::read_to_string("demos/nested_if.pil").unwrap()),
               Value::from("Verde"));
}

#[test]
fn strings() {
    assert_eq!(eval_last("\"Hola, \" + \"mundo\""), Value::from("Hola, mundo"));
    assert_eq!(eval_last("\"a\" < \"b\""), Value::Number(1.0));
    assert_eq!(eval_last("LEN(\"año\")"), Value::Number(3.0));
    assert_failure("\"a\" * 2");
}

#[test]
fn functions_from_the_demos() {
    assert_eq!(eval_last(&fs::read_to_string("demos/count_block.pil").unwrap()),
               numbers(&[1.0, 2.0, 3.0]));
    assert_eq!(eval_last(&fs::read_to_string("demos/count_inline.pil").unwrap()),
               numbers(&[1.0, 2.0, 3.0]));
    assert_eq!(eval_last(&fs::read_to_string("demos/greeting.pil").unwrap()),
               Value::from("Hola, Andrea!"));
}

#[test]
fn pilcrow_separates_statements() {
    assert_eq!(eval_last(&fs::read_to_string("demos/pilcrows.pil").unwrap()),
               numbers(&[3.0, 2.0, 1.0]));
    assert_success("VAR a = 1 ⁋ VAR b = 2\r\na + b");
}

#[test]
fn builtins() {
    assert_eq!(eval_last("LEN([\"Manzana\", \"Pera\", \"Naranja\"])"), Value::Number(3.0));
    assert_eq!(eval_last("PRINT(\"Buenos días!\")"), Value::from("Buenos días!"));
    assert_eq!(eval_last("VERSION()"), Value::from(env!("CARGO_PKG_VERSION")));
    assert!(matches!(eval_last("NOW()"), Value::String(_)));
    assert!(matches!(eval_last("HELP()"), Value::String(_)));
    assert!(matches!(eval_last("VAR p = PRINT\np(1)"), Value::Number(_)));
}

#[test]
fn syntax_errors() {
    assert!(matches!(get_result("VAR = 1"), Err(Error::Parse(_))));
    assert!(matches!(get_result("IF 1 THEN\n1"), Err(Error::Parse(_))));
    assert!(matches!(get_result("(1 + 2"), Err(Error::Parse(_))));
    assert!(matches!(get_result("1 2"), Err(Error::Parse(_))));
}

#[test]
fn lexical_errors() {
    assert!(matches!(get_result("1 $ 2"), Err(Error::Lex(_))));
    assert!(matches!(get_result("\"open"), Err(Error::Lex(_))));
    assert!(matches!(get_result("1 & 2"), Err(Error::Lex(_))));
}

#[test]
fn runtime_errors_name_the_scope_chain() {
    let source = "FUNCTION outer()\nFUNCTION inner() => missing\ninner()\nEND\nouter()";
    let Err(Error::Runtime(e)) = get_result(source) else {
        panic!("expected a runtime error");
    };
    let message = e.to_string();

    assert!(message.contains("'missing' is not defined"));
    let inner = message.find("in inner").unwrap();
    let outer = message.find("in outer").unwrap();
    let program = message.find("in <program>").unwrap();
    assert!(inner < outer && outer < program);
}
