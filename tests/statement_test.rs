mod common;
use common::{run, var};

#[test]
fn test_empty_program() {
    let runtime = run(";");
    assert!(runtime.variables().iter().all(|v| v == 0));
}

#[test]
fn test_block_sequencing() {
    let runtime = run("{ a = 1; b = a + 1; c = b + 1; }");
    assert_eq!(1, var(&runtime, 'a'));
    assert_eq!(2, var(&runtime, 'b'));
    assert_eq!(3, var(&runtime, 'c'));
}

#[test]
fn test_if_taken() {
    let runtime = run("{ a = 1; if (a < 2) b = 7; }");
    assert_eq!(7, var(&runtime, 'b'));
}

#[test]
fn test_if_not_taken() {
    let runtime = run("{ a = 5; if (a < 2) b = 7; }");
    assert_eq!(0, var(&runtime, 'b'));
}

#[test]
fn test_if_else() {
    let runtime = run("{ a = 5; if (a < 2) b = 7; else b = 9; }");
    assert_eq!(9, var(&runtime, 'b'));
}

#[test]
fn test_nested_if_else() {
    let runtime = run("{ i = 2; if (i < 1) a = 1; else if (i < 3) a = 2; else a = 3; }");
    assert_eq!(2, var(&runtime, 'a'));
}

#[test]
fn test_expression_statement_leaves_stack_balanced() {
    let runtime = run("{ 1 + 2; a = 3; }");
    assert_eq!(3, var(&runtime, 'a'));
    assert_eq!(0, runtime.stack().pointer());
}
