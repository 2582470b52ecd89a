use std::{fs, path::Path};

use pyhton::{
    error::{Error, LoadError, RuntimeError},
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse, value::core::Value},
    run, run_file,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_match_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "yp"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                               panic!("Failed to read {expected_path:?}: {e}")
                                                           });

        count += 1;
        let mut out: Vec<u8> = Vec::new();
        if let Err(e) = run_file(path, &mut out) {
            panic!("Demo {path:?} failed: {e}");
        }
        let actual = String::from_utf8(out).unwrap_or_else(|e| panic!("Non UTF-8 output: {e}"));
        assert_eq!(actual, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn output_of(src: &str) -> String {
    let mut out: Vec<u8> = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(out).unwrap_or_else(|e| panic!("Non UTF-8 output: {e}"))
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected, "script:\n{src}");
}

fn runtime_failure_of(src: &str) -> RuntimeError {
    match run(src, Vec::<u8>::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(Error::Runtime(e)) => e,
        Err(other) => panic!("expected a runtime error, got {other:?}"),
    }
}

/// Runs several programs, one after another, on a single interpreter.
///
/// A function body extends to the next `def` or the end of its program, so
/// calling a function from top level means running the call as a later
/// program.
fn run_session(programs: &[&str]) -> (String, Result<(), RuntimeError>) {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    let mut result = Ok(());

    for src in programs {
        let program = parse(&tokenize(src)).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"));
        result = interpreter.interpret(&program);
        if result.is_err() {
            break;
        }
    }

    let output = String::from_utf8(interpreter.into_output()).unwrap_or_else(|e| panic!("Non UTF-8 output: {e}"));
    (output, result)
}

fn assert_session_output(programs: &[&str], expected: &str) {
    let (output, result) = run_session(programs);
    if let Err(e) = result {
        panic!("Session failed: {e}\n{programs:?}");
    }
    assert_eq!(output, expected, "session:\n{programs:?}");
}

fn session_failure_of(programs: &[&str]) -> RuntimeError {
    match run_session(programs).1 {
        Ok(()) => panic!("Session succeeded but was expected to fail:\n{programs:?}"),
        Err(e) => e,
    }
}

#[test]
fn add_function_prints_float() {
    assert_session_output(&["deff add(a, b):\n  retrn a + b", "prrint(add(2, 3))"], "5.0\n");
    assert_session_output(&["def add(a, b):\n  return a + b", "print(add(2, 3))"], "5.0\n");
}

#[test]
fn statements_after_a_def_belong_to_its_body() {
    assert_output("deff add(a, b):\n  retrn a + b\nprrint(add(2, 3))", "");
    assert_session_output(&["deff show(a):\n  prnit(a)\n\nprnit(\"inside\")", "show(1)"],
                          "1.0\ninside\n");
}

#[test]
fn number_formatting() {
    assert_output("prnit(7 / 2)", "3.5\n");
    assert_output("prnit(10 / 4)", "2.5\n");
    assert_output("prnit(2 * 3)", "6.0\n");
    assert_output("prnit(-4)", "-4.0\n");
    assert_output("prnit(0.1 + 0.2)", "0.30000000000000004\n");
}

#[test]
fn if_elif_else_runs_one_branch() {
    assert_output("if False: print(\"a\") elif True: print(\"b\") else: print(\"c\")", "b\n");
    assert_output("iff Fasle: prnit(\"a\") elfi Treu: prnit(\"b\") esle: prnit(\"c\")", "b\n");
}

#[test]
fn if_without_match_runs_nothing() {
    assert_output("iff 0: prnit(\"a\") elfi \"\": prnit(\"b\")", "");
    assert_output("prnit(\"start\")\niff 0:\n  prnit(\"a\")\n  prnit(\"still a\")", "start\n");
}

#[test]
fn else_branch_runs_when_nothing_matches() {
    assert_output("x = 3\niff x > 5:\n  prnit(\"big\")\nesle:\n  prnit(\"small\")", "small\n");
}

#[test]
fn comparisons() {
    assert_output("prnit(2 < 3)\nprnit(3 <= 2)\nprnit(2 == 2)\nprnit(2 != 2)", "True\nFalse\nTrue\nFalse\n");
    assert_output("prnit(\"abc\" < \"abd\")", "True\n");
    assert_output("prnit(1 == \"1\")", "False\n");
}

#[test]
fn logic_returns_deciding_operand() {
    assert_output("prnit(0 or \"x\")", "x\n");
    assert_output("prnit(1 adn 2)", "2.0\n");
    assert_output("prnit(nto 0)", "True\n");
    assert_output("prnit(Treu and Fasle)", "False\n");
}

#[test]
fn logic_short_circuits() {
    assert_output("prnit(Fasle and missing)", "False\n");
    assert_output("prnit(Treu or missing())", "True\n");
}

#[test]
fn string_concatenation() {
    assert_output("greet = \"hi \" + \"there\"\nprnit(greet)", "hi there\n");
}

#[test]
fn assignment_yields_its_value() {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    let program = parse(&tokenize("x = 2 * 4")).unwrap_or_else(|e| panic!("{e}"));

    let flow = interpreter.execute(&program.statements[0])
                          .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(flow, pyhton::interpreter::evaluator::core::Flow::Normal(Value::Number(8.0)));
}

#[test]
fn locals_do_not_leak() {
    let programs = ["deff setx():\n  total = 5\n  retrn total", "prnit(setx())", "prnit(total)"];
    let (output, result) = run_session(&programs);

    assert_eq!(output, "5.0\n");
    assert!(matches!(result,
                     Err(RuntimeError::UnknownVariable { ref name, line: 1 }) if name == "total"));
}

#[test]
fn parameters_shadow_globals() {
    assert_session_output(&["x = 1", "deff show(x):\n  prnit(x)", "show(2)\nprnit(x)"],
                          "2.0\n1.0\n");
}

#[test]
fn assignment_inside_a_call_stays_local() {
    assert_session_output(&["x = 1", "deff setx():\n  x = 99\n  retrn x", "prnit(setx())\nprnit(x)"],
                          "99.0\n1.0\n");
}

#[test]
fn functions_see_globals_but_not_caller_locals() {
    assert_session_output(&["n = 10\ndeff get():\n  retrn n", "prnit(get())"], "10.0\n");

    let err = session_failure_of(&["deff inner():\n  retrn y\ndeff outer():\n  y = 1\n  retrn inner()",
                                   "prnit(outer())"]);
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "y"));
}

#[test]
fn return_stops_the_body() {
    assert_session_output(&["deff first():\n  retrn 1\n  prnit(\"unreachable\")", "prnit(first())"],
                          "1.0\n");

    let sign = "deff sign(n):\n  iff n < 0:\n    retrn -1\n  esle:\n    retrn 1";
    assert_session_output(&[sign, "prnit(sign(-5))\nprnit(sign(5))"], "-1.0\n1.0\n");
}

#[test]
fn missing_return_yields_none() {
    assert_session_output(&["deff nothing():\n  x = 1", "prnit(nothing())"], "None\n");
    assert_session_output(&["deff bare():\n  retrn", "prnit(bare())"], "None\n");
}

#[test]
fn recursion() {
    let fact = "deff fact(n):\n  iff n <= 1:\n    retrn 1\n  esle:\n    retrn n * fact(n - 1)";
    assert_session_output(&[fact, "prnit(fact(5))"], "120.0\n");
}

#[test]
fn runaway_recursion_is_stopped() {
    let err = session_failure_of(&["deff loop(n):\n  retrn loop(n + 1)", "loop(0)"]);
    assert!(matches!(err, RuntimeError::RecursionLimit { ref name, .. } if name == "loop"));
}

#[test]
fn functions_can_be_redefined() {
    assert_session_output(&["deff val():\n  retrn 1\ndeff val():\n  retrn 2", "prnit(val())"], "2.0\n");
}

#[test]
fn arguments_are_evaluated_in_the_caller_scope() {
    assert_session_output(&["deff twice(n):\n  retrn n * 2", "x = 4\nprnit(twice(x + 1))"], "10.0\n");
}

#[test]
fn unknown_function() {
    assert!(matches!(runtime_failure_of("nope(1)"),
                     RuntimeError::UnknownFunction { ref name, line: 1 } if name == "nope"));
}

#[test]
fn arity_mismatch() {
    let err = session_failure_of(&["deff add(a, b):\n  retrn a + b", "prnit(add(1))"]);
    assert!(matches!(err, RuntimeError::ArityMismatch { expected: 2, found: 1, line: 1, .. }));
}

#[test]
fn unknown_variable() {
    assert!(matches!(runtime_failure_of("prnit(x)"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn division_by_zero() {
    assert!(matches!(runtime_failure_of("x = 1\nprnit(x / 0)"),
                     RuntimeError::DivisionByZero { line: 2 }));
}

#[test]
fn type_errors() {
    assert!(matches!(runtime_failure_of("prnit(\"a\" - 1)"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure_of("prnit(1 < \"a\")"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure_of("prnit(-\"a\")"), RuntimeError::TypeError { .. }));
}

#[test]
fn booleans_are_not_numbers() {
    assert_output("prnit(1 == Treu)", "False\n");
    assert_output("prnit(0 != Flase)", "True\n");
    assert!(matches!(runtime_failure_of("prnit(Treu + 1)"), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn unicode_identifiers() {
    assert_output("café = 1\nprnit(café + 1)", "2.0\n");
    assert_output("größe = \"x\"\nprnit(größe)", "x\n");
}

#[test]
fn return_outside_function() {
    assert!(matches!(runtime_failure_of("retrn 1"),
                     RuntimeError::ReturnOutsideFunction { line: 1 }));
    assert!(matches!(runtime_failure_of("x = 1\niff x: retrn x"),
                     RuntimeError::ReturnOutsideFunction { line: 2 }));
}

#[test]
fn syntax_error_runs_nothing() {
    let mut out: Vec<u8> = Vec::new();
    let result = run("prnit(1)\nprnit(", &mut out);
    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out: Vec<u8> = Vec::new();
    let result = run("prnit(1)\nprnit(x)\nprnit(2)", &mut out);
    assert!(matches!(result, Err(Error::Runtime(_))));
    assert_eq!(out, b"1.0\n");
}

#[test]
fn runs_are_idempotent() {
    let programs = ["deff add(a, b):\n  retrn a + b", "x = add(1, 2)\nprnit(x)"];
    let (first, _) = run_session(&programs);
    let (second, _) = run_session(&programs);
    assert_eq!(first, "3.0\n");
    assert_eq!(first, second);

    let src = programs.join("\n");
    let tokens = tokenize(&src);
    assert_eq!(tokens, tokenize(&src));
    let program = parse(&tokens).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(program, parse(&tokens).unwrap_or_else(|e| panic!("{e}")));
}

#[test]
fn state_persists_across_programs_on_one_interpreter() {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());

    for src in ["x = 41", "deff inc(n):\n  retrn n + 1", "prnit(inc(x))"] {
        let program = parse(&tokenize(src)).unwrap_or_else(|e| panic!("{e}"));
        interpreter.interpret(&program)
                   .unwrap_or_else(|e| panic!("{e}"));
    }

    assert_eq!(interpreter.get_variable("x"), Some(&Value::Number(41.0)));
    assert!(interpreter.locals.is_empty());
    assert_eq!(interpreter.into_output(), b"42.0\n");
}

#[test]
fn call_scope_is_popped_after_failure() {
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    let definition = parse(&tokenize("deff bad(n):\n  retrn n / 0")).unwrap_or_else(|e| panic!("{e}"));
    interpreter.interpret(&definition)
               .unwrap_or_else(|e| panic!("{e}"));

    let call = parse(&tokenize("bad(1)")).unwrap_or_else(|e| panic!("{e}"));
    let result = interpreter.interpret(&call);
    assert!(matches!(result, Err(RuntimeError::DivisionByZero { line: 2 })), "{result:?}");

    assert!(interpreter.locals.is_empty());
    assert!(interpreter.functions.contains_key("bad"));
}

#[test]
fn separate_interpreters_share_nothing() {
    let mut first = Interpreter::with_output(Vec::<u8>::new());
    let program = parse(&tokenize("x = 1\ndeff f1():\n  retrn 1")).unwrap_or_else(|e| panic!("{e}"));
    first.interpret(&program).unwrap_or_else(|e| panic!("{e}"));

    let second = Interpreter::with_output(Vec::<u8>::new());
    assert!(second.get_variable("x").is_none());
    assert!(second.functions.is_empty());
}

#[test]
fn wrong_extension_is_rejected() {
    let err = run_file(Path::new("demos/arithmetic.py"), Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::WrongExtension { .. })));

    let err = run_file(Path::new("demos/does_not_exist.yp"), Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Io { .. })));
}
