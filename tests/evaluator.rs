use std::io;

use simpas::{
    ast::ProcedureDecl,
    error::{Error, RuntimeError},
    get_result,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::{DEFAULT_MAX_CALL_DEPTH, EvalConfig, Evaluator},
    },
    parse_program, run,
};

fn output(source: &str) -> String {
    output_with_input(source, "")
}

fn output_with_input(source: &str, input: &str) -> String {
    get_result(source, input).unwrap_or_else(|e| panic!("Script failed: {e}\n{source}"))
}

fn runtime_error(source: &str, input: &str) -> RuntimeError {
    match get_result(source, input) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error for {source:?}, got {other:?}"),
    }
}

#[test]
fn multiplication_before_addition() {
    assert_eq!(output("assign x := 3 + 4 * 2 ; display x"), "11\n");
    assert_eq!(output("assign x = 3+4*2 display x"), "11\n");
}

#[test]
fn division_truncates() {
    assert_eq!(output("display 7 / 2"), "3\n");
    assert_eq!(output("display -7 / 2"), "-3\n");
}

#[test]
fn relations_are_integers() {
    assert_eq!(output("display 5 > 3 display 5 < 3"), "1\n0\n");
    assert_eq!(output("display 2 = 2 display 2 <> 2 display 2 <= 2 display 1 >= 2"),
               "1\n0\n1\n0\n");
    assert_eq!(output("display (1 < 2) + (2 < 3)"), "2\n");
}

#[test]
fn unary_minus_precedence() {
    assert_eq!(output("display -2*3"), "-6\n");
    assert_eq!(output("x := 4 display -x + 1"), "-3\n");
}

#[test]
fn while_is_a_pre_test_loop() {
    assert_eq!(output("x := 0 while x < 3 do display x ; assign x := x + 1 ; end"),
               "0\n1\n2\n");
    assert_eq!(output("x := 5 while x < 3 do display x end display 9"), "9\n");
}

#[test]
fn zero_is_false() {
    assert_eq!(output("if 0 then display 1 else display 2 end"), "2\n");
    assert_eq!(output("if -4 then display 1 else display 2 end"), "1\n");
    assert_eq!(output("if 0 then display 1 end display 3"), "3\n");
}

#[test]
fn read_after_display() {
    assert_eq!(output_with_input("display 0 read x display x + 1", "41\n"), "0\n42\n");
}

#[test]
fn read_trims_white_space() {
    assert_eq!(output_with_input("read x read y display x * y", "  6 \r\n-7\n"), "-42\n");
}

#[test]
fn read_consumes_one_line_per_statement() {
    let source = "total := 0 n := 3\n\
                  while n > 0 do read x ; total := total + x ; n := n - 1 end\n\
                  display total";

    assert_eq!(output_with_input(source, "1\n2\n3\n4\n"), "6\n");
}

#[test]
fn non_integer_input_is_rejected() {
    assert_eq!(runtime_error("read x", "twelve\n"),
               RuntimeError::InputFormat { input: "twelve".to_string(),
                                           line:  1, });
}

#[test]
fn missing_input_is_rejected() {
    assert_eq!(runtime_error("display 1\nread x", ""),
               RuntimeError::InputExhausted { name: "x".to_string(),
                                              line: 2, });
}

#[test]
fn division_by_zero_is_error() {
    let err = runtime_error("x := 0\ndisplay 1 / x", "");

    assert_eq!(err, RuntimeError::DivisionByZero { line: 2 });
    assert_eq!(err.to_string(), "Error on line 2: Division by zero.");
}

#[test]
fn overflow_is_error() {
    assert_eq!(runtime_error("display 9223372036854775807 + 1", ""),
               RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_error("x := 0 - 9223372036854775807 - 1 display x / -1", ""),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn undefined_variable_is_error() {
    assert_eq!(runtime_error("display 1\ndisplay y", ""),
               RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                 line: 2, });
}

#[test]
fn output_before_an_error_is_kept() {
    let mut out = Vec::new();
    let result = run("display 1 display 2 / 0 display 3",
                     io::empty(),
                     &mut out,
                     EvalConfig::default());

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn run_returns_the_final_environment() {
    let env = run("x := 5 y := x * x", io::empty(), io::sink(), EvalConfig::default()).unwrap();

    assert_eq!(env.get_variable(ScopeId::ROOT, "x", 1), Ok(5));
    assert_eq!(env.get_variable(ScopeId::ROOT, "y", 1), Ok(25));
}

#[test]
fn procedures_return_through_their_name() {
    let source = "procedure max(a, b) var m; m := a if b > a then m := b end max := m end\n\
                  display max(3, 9) display max(4, -1)";

    assert_eq!(output(source), "9\n4\n");
}

#[test]
fn return_slot_and_locals_start_at_zero() {
    assert_eq!(output("procedure f() var l; display l end display f()"), "0\n0\n");
}

#[test]
fn procedures_recurse() {
    let source = "procedure fact(n)\n\
                    if n <= 1 then fact := 1 else fact := n * fact(n - 1) end\n\
                  end\n\
                  display fact(10)";

    assert_eq!(output(source), "3628800\n");
}

#[test]
fn procedures_see_globals_but_not_caller_locals() {
    assert_eq!(output("procedure scaled(x) scaled := x * factor end factor := 3 display scaled(5)"),
               "15\n");

    let source = "procedure inner() inner := secret end\n\
                  procedure outer() var secret; secret := 1 outer := inner() end\n\
                  display outer()";
    assert_eq!(runtime_error(source, ""),
               RuntimeError::UndefinedVariable { name: "secret".to_string(),
                                                 line: 1, });
}

#[test]
fn parameters_shadow_globals() {
    let source = "procedure twice(x) x := x * 2 twice := x end\n\
                  x := 10 display twice(4) display x";

    assert_eq!(output(source), "8\n10\n");
}

#[test]
fn procedures_can_update_globals() {
    let source = "procedure bump() count := count + 1 bump := count end\n\
                  count := 0 display bump() display bump() display count";

    assert_eq!(output(source), "1\n2\n2\n");
}

#[test]
fn arguments_are_evaluated_left_to_right() {
    let source = "procedure tick(n) log := log * 10 + n tick := n end\n\
                  log := 0\n\
                  x := tick(1) + tick(2) * tick(3)\n\
                  display log\n\
                  procedureless := tick(tick(4) + tick(5))\n\
                  display log";

    assert_eq!(output(source), "123\n123459\n");
}

#[test]
fn arity_mismatch_is_error() {
    assert_eq!(runtime_error("procedure f(a, b) f := a + b end\ndisplay f(1)", ""),
               RuntimeError::ArityMismatch { name:     "f".to_string(),
                                             expected: 2,
                                             found:    1,
                                             line:     2, });
}

#[test]
fn unknown_procedure_is_error() {
    assert_eq!(runtime_error("display g(1)", ""),
               RuntimeError::UnknownProcedure { name: "g".to_string(),
                                                line: 1, });
}

#[test]
fn duplicate_procedure_is_error() {
    assert!(matches!(runtime_error("procedure f() f := 1 end procedure f() f := 2 end display 1",
                                   ""),
                     RuntimeError::ProcedureAlreadyDefined { .. }));
}

#[test]
fn runaway_recursion_is_stopped() {
    let result = run("procedure f(n) f := f(n + 1) end display f(0)",
                     io::empty(),
                     io::sink(),
                     EvalConfig { max_call_depth: 16 });

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::StackOverflow { depth: 16, .. }))));
}

/// Recursion with nested blocks in the body, `calls` procedure calls deep.
fn nested_recursion(calls: usize) -> String {
    format!("procedure f(n)\n\
             var i;\n\
             while i < 1 do\n\
             if n > 0 then f := 1 + f(n - 1) end\n\
             i := i + 1\n\
             end\n\
             end\n\
             display f({})",
            calls - 1)
}

#[test]
fn default_call_depth_fits_the_thread_stack() {
    assert_eq!(output(&nested_recursion(DEFAULT_MAX_CALL_DEPTH)),
               format!("{}\n", DEFAULT_MAX_CALL_DEPTH - 1));

    assert_eq!(runtime_error(&nested_recursion(DEFAULT_MAX_CALL_DEPTH + 1), ""),
               RuntimeError::StackOverflow { depth: DEFAULT_MAX_CALL_DEPTH,
                                             line:  4, });
}

#[test]
fn scopes_are_released_after_a_failed_call() {
    let program = parse_program("procedure f(n) f := 10 / n end display f(1) display f(0)").unwrap();
    let mut env = Environment::new();
    let mut evaluator = Evaluator::new(io::empty(), Vec::new());

    let result = evaluator.exec(&program, &mut env);

    assert_eq!(result, Err(RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(env.depth(), 1);
    assert_eq!(evaluator.output(), b"10\n");
}

#[test]
fn environment_scopes() {
    let mut env = Environment::new();
    env.set_variable(ScopeId::ROOT, "g", 1);

    let scope = env.push_scope();
    env.declare_variable(scope, "g", 2);
    env.set_variable(scope, "g", 3);
    env.set_variable(scope, "fresh", 4);

    assert_eq!(env.get_variable(scope, "g", 1), Ok(3));
    assert_eq!(env.get_variable(ScopeId::ROOT, "g", 1), Ok(1));
    assert!(env.get_variable(ScopeId::ROOT, "fresh", 1).is_err());

    env.pop_scope(scope);
    assert_eq!(env.depth(), 1);
}

#[test]
fn popping_an_older_scope_releases_newer_ones() {
    let mut env = Environment::new();
    let outer = env.push_scope();
    let inner = env.push_scope();
    env.declare_variable(inner, "t", 1);

    env.pop_scope(outer);
    assert_eq!(env.depth(), 1);

    let fresh = env.push_scope();
    assert_eq!(fresh, outer);
    assert!(env.get_variable(fresh, "t", 1).is_err());

    env.pop_scope(ScopeId::ROOT);
    assert_eq!(env.depth(), 2);
}

#[test]
fn environment_procedure_registry() {
    let decl = ProcedureDecl { name:   "p".to_string(),
                               params: vec!["a".to_string()],
                               locals: vec!["t".to_string(), "u".to_string()],
                               body:   parse_program("p := a").unwrap(),
                               line:   1, };
    let mut env = Environment::new();

    env.set_procedure(decl.clone()).unwrap();

    assert_eq!(env.params("p", 1), Ok(&["a".to_string()][..]));
    assert_eq!(env.local_vars("p", 1).map(<[String]>::len), Ok(2));
    assert_eq!(*env.get_procedure("p", 1).unwrap(), decl);
    assert_eq!(env.set_procedure(decl),
               Err(RuntimeError::ProcedureAlreadyDefined { name: "p".to_string(),
                                                           line: 1, }));
    assert!(env.params("q", 1).is_err());
}

#[test]
fn environment_is_reusable_across_programs() {
    let mut env = Environment::new();
    let mut evaluator = Evaluator::new(io::empty(), Vec::new());

    evaluator.exec(&parse_program("x := 20").unwrap(), &mut env).unwrap();
    evaluator.exec(&parse_program("display x + 1").unwrap(), &mut env).unwrap();

    assert_eq!(evaluator.into_output(), b"21\n");
}
