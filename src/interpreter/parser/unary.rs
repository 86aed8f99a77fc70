use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            binary::parse_power,
            block::{parse_for, parse_function_def, parse_if, parse_while},
            core::{ParseResult, parse_expression},
            utils::{TokenCursor, parse_comma_separated},
        },
    },
};

/// Parses a signed factor.
///
/// Signs nest, so `--x` is `-(-x)`. A sign binds looser than `^`, which makes
/// `-2 ^ 2` equal to `-(2 ^ 2)`.
///
/// The rule is: `factor := ("+" | "-") factor | power`
pub(crate) fn parse_factor(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let op = match tokens.peek() {
        Token::Plus => UnaryOperator::Plus,
        Token::Minus => UnaryOperator::Negate,
        _ => return parse_power(tokens),
    };

    let (_, position) = tokens.advance();
    let operand = parse_factor(tokens)?;

    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       position: *position })
}

/// Parses an atom optionally followed by one argument list.
///
/// The rule is: `call := atom ("(" (expression ("," expression)*)? ")")?`
pub(crate) fn parse_call(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let atom = parse_atom(tokens)?;
    if !tokens.is(&Token::LParen) {
        return Ok(atom);
    }

    tokens.advance();
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
    let position = atom.position();

    Ok(Expr::Call { callee: Box::new(atom),
                    arguments,
                    position })
}

/// Parses the smallest self-contained expressions: literals, names,
/// parenthesized expressions, lists and the keyword-led constructs.
///
/// # Errors
/// Returns `UnexpectedToken` if no atom starts at the current token.
pub(crate) fn parse_atom(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let (token, position) = tokens.current();
    let position = *position;

    match token {
        Token::Int(text) | Token::Float(text) => {
            let value = text.parse::<f64>()
                            .map_err(|_| tokens.unexpected("a valid number literal"))?;
            tokens.advance();
            Ok(Expr::Number { value, position })
        },
        Token::Str(value) => {
            tokens.advance();
            Ok(Expr::String { value: value.clone(),
                              position })
        },
        Token::Identifier(name) => {
            tokens.advance();
            Ok(Expr::VarAccess { name: name.clone(),
                                 position })
        },
        Token::LParen => parse_grouping(tokens),
        Token::LBracket => parse_list(tokens),
        Token::Keyword(Keyword::If) => parse_if(tokens),
        Token::Keyword(Keyword::For) => parse_for(tokens),
        Token::Keyword(Keyword::While) => parse_while(tokens),
        Token::Keyword(Keyword::Function) => parse_function_def(tokens),
        _ => Err(tokens.unexpected("number, string, identifier, 'IF', 'FOR', 'WHILE', 'FUNCTION', '(' or '['")),
    }
}

/// Parses a parenthesized expression.
fn parse_grouping(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    tokens.expect(&Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    tokens.expect(&Token::RParen, "')'")?;
    Ok(expr)
}

/// Parses a list literal.
///
/// The rule is: `list := "[" (expression ("," expression)*)? "]"`
fn parse_list(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.expect(&Token::LBracket, "'['")?;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;

    Ok(Expr::List { elements, position })
}
