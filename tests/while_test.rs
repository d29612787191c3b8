mod common;
use common::{run, var};

#[test]
fn test_while_counts() {
    let runtime = run("{ i = 0; while (i < 10) i = i + 1; }");
    assert_eq!(10, var(&runtime, 'i'));
}

#[test]
fn test_while_false_skips_body() {
    let runtime = run("{ i = 100; while (i < 10) i = i + 1; }");
    assert_eq!(100, var(&runtime, 'i'));
}

#[test]
fn test_do_while_runs_body_at_least_once() {
    let runtime = run("{ i = 100; do i = i + 1; while (i < 10); }");
    assert_eq!(101, var(&runtime, 'i'));
}

#[test]
fn test_do_while_loops() {
    let runtime = run("{ i = 0; do i = i + 1; while (i < 10); }");
    assert_eq!(10, var(&runtime, 'i'));
}

#[test]
fn test_fibonacci() {
    let runtime = run(
        "{ i = 1; a = 0; b = 1; while (i < 10) { c = a; a = b; b = c + a; i = i + 1; } }",
    );
    assert_eq!(55, var(&runtime, 'b'));
}

#[test]
fn test_nested_loops() {
    let runtime = run(
        "{ t = 0; i = 0; while (i < 3) { j = 0; while (j < 3) { t = t + 1; j = j + 1; } i = i + 1; } }",
    );
    assert_eq!(9, var(&runtime, 't'));
}
