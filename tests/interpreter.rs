use minicalc::interpreter::{eval_binop, Interpreter, RuntimeError, Store};
use minicalc::ir::{Instr, Operand};
use minicalc::parser::BinOpKind;

fn name(s: &str) -> Operand {
    Operand::Name(s.to_string())
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval_binop(BinOpKind::Div, -7, 2), Ok(-3));
    assert_eq!(eval_binop(BinOpKind::Div, 7, -2), Ok(-3));
    assert_eq!(eval_binop(BinOpKind::Div, 7, 2), Ok(3));
}

#[test]
fn checked_arithmetic() {
    assert_eq!(eval_binop(BinOpKind::Add, 2, 3), Ok(5));
    assert_eq!(eval_binop(BinOpKind::Sub, 2, 3), Ok(-1));
    assert_eq!(eval_binop(BinOpKind::Mul, -4, 3), Ok(-12));
    assert_eq!(
        eval_binop(BinOpKind::Div, 1, 0),
        Err(RuntimeError::DivisionByZero(1))
    );
    assert_eq!(
        eval_binop(BinOpKind::Mul, i64::MAX, 2),
        Err(RuntimeError::Overflow {
            op: BinOpKind::Mul,
            lhs: i64::MAX,
            rhs: 2
        })
    );
    assert!(eval_binop(BinOpKind::Div, i64::MIN, -1).is_err());
}

#[test]
fn moves_binaries_and_prints() {
    let instrs = vec![
        Instr::Move {
            src: Operand::Literal(10),
            dest: "a".to_string(),
        },
        Instr::Binary {
            op: BinOpKind::Mul,
            lhs: name("a"),
            rhs: Operand::Literal(4),
            dest: "%t1".to_string(),
        },
        Instr::Print(name("%t1")),
        Instr::Print(Operand::Literal(-2)),
    ];
    let mut store = Store::new();
    let mut interpreter = Interpreter::new(&mut store);
    interpreter.run(&instrs).unwrap();
    assert_eq!(interpreter.output(), &[40, -2]);
    assert_eq!(store.get("a"), 10);
    assert_eq!(store.get("%t1"), 40);
}

#[test]
fn unknown_names_read_as_zero() {
    let mut store = Store::new();
    let mut interpreter = Interpreter::new(&mut store);
    interpreter.run(&[Instr::Print(name("nowhere"))]).unwrap();
    assert_eq!(interpreter.into_output(), vec![0]);
    assert!(!store.contains("nowhere"));
}

#[test]
fn failure_keeps_partial_state() {
    let instrs = vec![
        Instr::Move {
            src: Operand::Literal(1),
            dest: "a".to_string(),
        },
        Instr::Print(name("a")),
        Instr::Binary {
            op: BinOpKind::Div,
            lhs: name("a"),
            rhs: Operand::Literal(0),
            dest: "%t1".to_string(),
        },
        Instr::Print(Operand::Literal(99)),
    ];
    let mut store = Store::new();
    let mut interpreter = Interpreter::new(&mut store);
    assert_eq!(
        interpreter.run(&instrs),
        Err(RuntimeError::DivisionByZero(1))
    );
    assert_eq!(interpreter.output(), &[1]);
    assert_eq!(store.get("a"), 1);
    assert!(!store.contains("%t1"));
}

#[test]
fn store_carries_over_between_runs() {
    let mut store = Store::new();
    Interpreter::new(&mut store)
        .run(&[Instr::Move {
            src: Operand::Literal(7),
            dest: "x".to_string(),
        }])
        .unwrap();

    let mut interpreter = Interpreter::new(&mut store);
    interpreter.run(&[Instr::Print(name("x"))]).unwrap();
    assert_eq!(interpreter.output(), &[7]);
}
