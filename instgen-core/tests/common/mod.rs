use instgen_core::{Config, Token, Tokens};
use std::collections::HashSet;

/// Number of seeds that property tests are run with.
pub const SEEDS: u64 = 200;

fn is_leaf(t: &Token) -> bool {
    matches!(t, Token::Ident(_) | Token::Int(_))
}

/// Check an expression that may only refer to `declared` variables.
pub fn check_expr(expr: &[Token], declared: &HashSet<String>, config: &Config) {
    assert!(!expr.is_empty(), "empty expression");

    let mut open = 0usize;
    let mut expect_operand = true;
    for t in expr {
        match t {
            Token::Ident(x) => {
                assert!(declared.contains(x), "{x} used before declaration");
                assert!(expect_operand, "two operands in a row");
                expect_operand = false;
            }
            Token::Int(i) => {
                assert!(*i <= config.max_literal, "literal {i} out of range");
                assert!(expect_operand, "two operands in a row");
                expect_operand = false;
            }
            Token::Op(_) => {
                assert!(!expect_operand, "operator without left operand");
                expect_operand = true;
            }
            Token::LParen => {
                assert!(expect_operand, "parenthesis after operand");
                open += 1;
            }
            Token::RParen => {
                assert!(!expect_operand, "empty parentheses");
                open = open.checked_sub(1).expect("unbalanced `)`");
            }
            t => panic!("unexpected token {t:?} in expression"),
        }
    }
    assert!(!expect_operand, "expression ends with operator");
    assert_eq!(open, 0, "unbalanced `(`");

    let leaves = expr.iter().filter(|t| is_leaf(t)).count();
    assert!(leaves <= 1 << config.max_depth, "{leaves} leaves");
}

/// Check all structural properties of a generated program,
/// returning the declared variables in order of declaration.
pub fn check_program(program: &Tokens, config: &Config) -> Vec<String> {
    let tokens = &program.0;
    for (i, t) in tokens.iter().enumerate() {
        if *t == Token::Newline {
            assert_eq!(tokens.get(i.wrapping_sub(1)), Some(&Token::Semi));
        }
    }

    let mut declared = HashSet::new();
    let mut order = Vec::new();
    for stmt in program.statements() {
        match stmt {
            [Token::Ident(x), Token::Assign, expr @ .., Token::Semi, Token::Ident(y)] => {
                assert_eq!(x, y, "assignment must be followed by its variable");
                assert_eq!(*x, format!("{}{}", config.prefix, order.len()));
                check_expr(expr, &declared, config);
                assert!(declared.insert(x.clone()), "{x} declared twice");
                order.push(x.clone());
            }
            expr => check_expr(expr, &declared, config),
        }
    }

    let text = program.to_string();
    assert!(text.split(' ').eq(program.iter().map(|t| t.to_string())));
    order
}
