mod common;
use common::{run, var};

#[test]
fn test_assignment() {
    let runtime = run("a = 42;");
    assert_eq!(42, var(&runtime, 'a'));
}

#[test]
fn test_sum_is_left_associative() {
    let runtime = run("a = 10 - 3 - 2;");
    assert_eq!(5, var(&runtime, 'a'));
}

#[test]
fn test_parentheses() {
    let runtime = run("a = 10 - (3 - 2);");
    assert_eq!(9, var(&runtime, 'a'));
}

#[test]
fn test_comparison_yields_boolean() {
    let runtime = run("{ a = 1 < 2; b = 2 < 1; }");
    assert_eq!(1, var(&runtime, 'a'));
    assert_eq!(0, var(&runtime, 'b'));
}

#[test]
fn test_variable_reference() {
    let runtime = run("{ z = 9; a = z + z; }");
    assert_eq!(18, var(&runtime, 'a'));
}

#[test]
fn test_unset_variable_is_zero() {
    let runtime = run("a = q + 1;");
    assert_eq!(1, var(&runtime, 'a'));
}
