use minicalc::analyzer::Ty;
use minicalc::lexer::{Lexer, TokenKind};
use minicalc::parser::*;

fn parse(input: &str) -> Result<Program, ParseError> {
    let tokens = Lexer::tokenize(input).unwrap();
    Parser::new(tokens).parse()
}

fn parse_expr(expr: &str) -> Expr {
    let program = parse(&format!("print({});", expr)).unwrap();
    let Stmt::Print(e) = &program.0[0] else {
        panic!();
    };
    e.clone()
}

#[test]
fn statements_in_source_order() {
    let program = parse("int a; a = 1; print(a);").unwrap();
    assert_eq!(
        program.0,
        vec![
            Stmt::VarDecl {
                name: "a".to_string(),
                ty: Ty::Int
            },
            Stmt::Assign {
                target: "a".to_string(),
                value: Expr::Num(1)
            },
            Stmt::Print(Expr::Var("a".to_string())),
        ]
    );
}

#[test]
fn scenario_a_statement_count() {
    let program = parse("int a; a = 10; int b; b = a + 5 * (2 + 3); print(b);").unwrap();
    assert_eq!(program.0.len(), 5);
    let decls = program
        .0
        .iter()
        .filter(|s| matches!(s, Stmt::VarDecl { .. }))
        .count();
    assert_eq!(decls, 2);
}

#[test]
fn bare_semicolons_are_skipped() {
    assert_eq!(parse(";").unwrap(), Program(vec![]));
    assert_eq!(parse(";;print(1);;").unwrap().0.len(), 1);
    assert_eq!(parse("").unwrap(), Program(vec![]));
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(parse_expr("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
    assert_eq!(parse_expr("10 - 6 / 2").to_string(), "(10 - (6 / 2))");
}

#[test]
fn left_associative() {
    assert_eq!(parse_expr("10 - 4 - 3").to_string(), "((10 - 4) - 3)");
    assert_eq!(parse_expr("64 / 4 / 2").to_string(), "((64 / 4) / 2)");
    assert_eq!(parse_expr("1 * 2 / 3 * 4").to_string(), "(((1 * 2) / 3) * 4)");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        parse_expr("(1 + 2) * 3"),
        Expr::binary(
            BinOpKind::Mul,
            Expr::binary(BinOpKind::Add, Expr::Num(1), Expr::Num(2)),
            Expr::Num(3)
        )
    );
    assert_eq!(parse_expr("((x))"), Expr::Var("x".to_string()));
}

#[test]
fn missing_semicolon() {
    let err = parse("int a").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: "';'".to_string(),
            found: TokenKind::Eof,
            pos: 5,
        }
    );
    assert_eq!(err.to_string(), "expected ';', found end of input at offset 5");
}

#[test]
fn declaration_needs_identifier() {
    let err = parse("int 5;").unwrap_err();
    let ParseError::UnexpectedToken {
        expected, found, ..
    } = err;
    assert_eq!(expected, "identifier");
    assert_eq!(found, TokenKind::Num(5));
}

#[test]
fn print_needs_parentheses() {
    let ParseError::UnexpectedToken {
        expected, found, ..
    } = parse("print 1;").unwrap_err();
    assert_eq!(expected, "'('");
    assert_eq!(found, TokenKind::Num(1));
}

#[test]
fn statement_cannot_start_with_a_number() {
    let ParseError::UnexpectedToken {
        expected, found, ..
    } = parse("5 = a;").unwrap_err();
    assert_eq!(expected, "statement");
    assert_eq!(found, TokenKind::Num(5));
}

#[test]
fn dangling_operator() {
    let ParseError::UnexpectedToken {
        expected, found, ..
    } = parse("a = 1 +;").unwrap_err();
    assert_eq!(expected, "expression");
    assert_eq!(found, TokenKind::SemiColon);
}

#[test]
fn unbalanced_parenthesis() {
    let ParseError::UnexpectedToken {
        expected, found, ..
    } = parse("print((1 + 2);").unwrap_err();
    assert_eq!(expected, "')'");
    assert_eq!(found, TokenKind::SemiColon);
}

#[test]
fn parser_without_eof_token_stops_cleanly() {
    let mut tokens = Lexer::tokenize("print(1);").unwrap();
    tokens.pop();
    let program = Parser::new(tokens).parse().unwrap();
    assert_eq!(program.0, vec![Stmt::Print(Expr::Num(1))]);
}
