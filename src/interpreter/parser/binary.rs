use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_call, parse_factor},
            utils::{TokenCursor, token_to_binary_operator},
        },
    },
};

/// Parses a left-associative chain of binary operators.
///
/// `operand` parses each side and `accepts` selects which operators belong to
/// this precedence level. The resulting node is positioned at its left
/// operand.
fn parse_left_associative(tokens: &mut TokenCursor<'_>,
                          operand: fn(&mut TokenCursor<'_>) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
    let mut left = operand(tokens)?;
    loop {
        if let Some(op) = token_to_binary_operator(tokens.peek())
           && accepts(op)
        {
            tokens.advance();
            let right = operand(tokens)?;
            let position = left.position();
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical conjunction and disjunction.
///
/// Both operators share one precedence level and associate to the left, so
/// `a || b && c` is `(a || b) && c`.
///
/// The rule is: `logical := comparison (("&&" | "||") comparison)*`
pub fn parse_logical(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_comparison, |op| {
        matches!(op, BinaryOperator::And | BinaryOperator::Or)
    })
}

/// Parses comparisons and logical negation.
///
/// `!` negates a whole comparison chain, so `!a == b` is `!(a == b)`.
///
/// The rule is:
/// ```text
/// comparison := "!" comparison
///             | arithmetic (("==" | "!=" | "<" | ">" | "<=" | ">=") arithmetic)*
/// ```
pub fn parse_comparison(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    if tokens.is(&Token::Bang) {
        let (_, position) = tokens.advance();
        let operand = parse_comparison(tokens)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                  operand: Box::new(operand),
                                  position: *position });
    }

    parse_left_associative(tokens, parse_arithmetic, |op| {
        matches!(op,
                 BinaryOperator::Equal
                 | BinaryOperator::NotEqual
                 | BinaryOperator::Less
                 | BinaryOperator::Greater
                 | BinaryOperator::LessEqual
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition and subtraction.
///
/// The rule is: `arithmetic := term (("+" | "-") term)*`
pub fn parse_arithmetic(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_term, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, parse_factor, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Parses exponentiation.
///
/// The right-hand side is a full factor, which makes `^` right-associative
/// and lets it take a signed exponent: `2 ^ -1`.
///
/// The rule is: `power := call ("^" factor)*`
pub fn parse_power(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_call(tokens)?;
    while tokens.is(&Token::Caret) {
        tokens.advance();
        let right = parse_factor(tokens)?;
        let position = left.position();
        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::Pow,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{lexer::tokenize, parser::parse};

    fn render(source: &str) -> String {
        parse(&tokenize(source).unwrap()).unwrap().to_string()
    }

    #[test]
    fn logical_operators_share_a_level() {
        assert_eq!(render("1 || 0 && 0"), "[((1 || 0) && 0)]");
    }

    #[test]
    fn comparisons_chain_left() {
        assert_eq!(render("1 < 2 == 1"), "[((1 < 2) == 1)]");
    }

    #[test]
    fn signed_exponent() {
        assert_eq!(render("2 ^ -1"), "[(2 ^ (-1))]");
    }

    #[test]
    fn binary_node_sits_at_its_left_operand() {
        let program = parse(&tokenize("x * 2").unwrap()).unwrap();
        let crate::ast::Expr::List { elements, .. } = program else {
            panic!("program is not a list");
        };
        assert_eq!(elements[0].position().offset, 0);
    }
}
