use super::*;

fn add(a: &str, b: &str) -> String {
    let machine = binary_addition().unwrap();
    let mut run = machine.start(a, b);
    run.run(200_000).unwrap();
    run.result()
}

#[test]
fn binary_addition_examples() {
    // 11 + 7 = 18
    assert_eq!(add("1011", "111"), "10010");
    assert_eq!(add("1", "1"), "10");
    assert_eq!(add("0", "0"), "0");
    // carry ripples through every bit
    assert_eq!(add("1111", "1"), "10000");
    // widely different operand lengths
    assert_eq!(add("100000", "1"), "100001");
    assert_eq!(add("1", "100000"), "100001");
}

#[test]
fn binary_addition_matches_u64_arithmetic() {
    let machine = binary_addition().unwrap();
    for (a, b) in [(0u64, 5u64), (13, 13), (255, 1), (1023, 511), (6, 9)] {
        let mut run = machine.start(&format!("{a:b}"), &format!("{b:b}"));
        run.run(10_000).unwrap();
        assert_eq!(run.result(), format!("{:b}", a + b), "{a} + {b}");
    }
}

#[test]
fn step_is_a_no_op_once_halted() {
    let machine = binary_addition().unwrap();
    let mut run = machine.start("1", "1");
    run.run(1_000).unwrap();
    assert!(run.halted());
    let steps = run.steps;
    assert!(!run.step().unwrap());
    assert_eq!(run.steps, steps);
}

#[test]
fn undefined_transition_is_reported_with_context() {
    let table = r#"
initial state: start
final states: [halt]
transitions:
  start:
    "a,_": {state: halt, write: "a,_", move: "N,N"}
"#;
    let machine = Machine::from_yaml(table).unwrap();
    let mut run = machine.start("b", "");
    let err = run.run(10).unwrap_err();
    match err {
        TmError::UndefinedTransition { state, s1, s2 } => {
            assert_eq!(state, "start");
            assert_eq!(s1, 'b');
            assert_eq!(s2, BLANK);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn step_limit_is_enforced() {
    let table = r#"
initial state: spin
final states: [never]
transitions:
  spin:
    "_,_": {state: spin, write: "_,_", move: "N,N"}
"#;
    let machine = Machine::from_yaml(table).unwrap();
    let mut run = machine.start("", "");
    assert!(matches!(
        run.run(10),
        Err(TmError::StepLimit { limit: 10, .. })
    ));
    assert_eq!(run.steps, 10);
}

#[test]
fn malformed_tables_are_rejected() {
    let bad_move = r#"
initial state: s
final states: [s]
transitions:
  s:
    "0,0": {state: s, write: "0,0", move: "X,N"}
"#;
    assert!(matches!(
        Machine::from_yaml(bad_move),
        Err(TmError::BadMove(_))
    ));

    let bad_symbol = r#"
initial state: s
final states: [s]
transitions:
  s:
    "00,0": {state: s, write: "0,0", move: "N,N"}
"#;
    assert!(matches!(
        Machine::from_yaml(bad_symbol),
        Err(TmError::BadSymbol(_))
    ));

    // target state exists nowhere: not a source, not final
    let dangling_target = r#"
initial state: s
final states: [halt]
transitions:
  s:
    "_,_": {state: nowhere, write: "_,_", move: "N,N"}
"#;
    match Machine::from_yaml(dangling_target) {
        Err(TmError::UnknownState(name)) => assert_eq!(name, "nowhere"),
        other => panic!("expected UnknownState, got {other:?}"),
    }

    let missing_field = "initial state: s\n";
    assert!(matches!(
        Machine::from_yaml(missing_field),
        Err(TmError::Table(_))
    ));
}

#[test]
fn result_strips_leading_zeros() {
    let table = r#"
initial state: go
final states: [halt]
transitions:
  go:
    "_,0": {state: halt, write: "_,0", move: "N,N"}
"#;
    let machine = Machine::from_yaml(table).unwrap();
    let mut run = machine.start("", "007");
    run.run(10).unwrap();
    assert_eq!(run.result(), "7");
}
