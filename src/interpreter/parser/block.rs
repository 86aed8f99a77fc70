use crate::{
    ast::{Body, Expr, IfCase},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statements,
            utils::{TokenCursor, parse_comma_separated},
        },
    },
};

/// Parses the statement list of a block body, after its opening newline.
fn parse_block_statements(tokens: &mut TokenCursor<'_>) -> ParseResult<Body> {
    tokens.expect(&Token::NewLine, "newline")?;
    Ok(Body::block(parse_statements(tokens)?))
}

/// Consumes the `END` closing a block opened by `construct`.
///
/// # Errors
/// Returns the error of a discarded trailing statement if there is one at
/// this point, otherwise `UnclosedBlock`.
fn expect_end(tokens: &mut TokenCursor<'_>, construct: Keyword) -> ParseResult<()> {
    if tokens.is_keyword(Keyword::End) {
        tokens.advance();
        return Ok(());
    }

    Err(tokens.take_backtracked()
              .unwrap_or_else(|| ParseError::UnclosedBlock { construct: construct.as_str()
                                                                                 .to_string(),
                                                             found:     tokens.peek()
                                                                              .to_string(),
                                                             position:  tokens.position(), }))
}

/// Parses a body that is either a block closed by `END` or a single
/// expression.
///
/// A newline right after `THEN` (or a function header) opens a block.
fn parse_body(tokens: &mut TokenCursor<'_>, construct: Keyword) -> ParseResult<Body> {
    if tokens.is(&Token::NewLine) {
        let body = parse_block_statements(tokens)?;
        expect_end(tokens, construct)?;
        return Ok(body);
    }
    Ok(Body::inline(parse_expression(tokens)?))
}

/// Parses an `IF` expression with its `ELIF` and `ELSE` branches.
///
/// Syntax:
/// ```text
/// IF <condition> THEN <expression> [ELIF ...] [ELSE <expression>]
///
/// IF <condition> THEN
///     <statements>
/// ELIF <condition> THEN
///     <statements>
/// ELSE
///     <statements>
/// END
/// ```
///
/// A block branch runs until `ELIF`, `ELSE` or the `END` that closes the whole
/// chain. Inline and block branches may be mixed.
///
/// # Errors
/// - `UnexpectedToken` if `THEN` is missing after a condition.
/// - `UnclosedBlock` if a block branch is followed by anything other than
///   `ELIF`, `ELSE` or `END`.
pub fn parse_if(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.position();
    let mut cases = Vec::new();
    let else_case = parse_if_cases(tokens, Keyword::If, &mut cases)?;

    Ok(Expr::If { cases,
                  else_case,
                  position })
}

/// Parses one `IF`/`ELIF` branch and everything chained after it.
///
/// Cases are appended to `cases` in source order; the `ELSE` body, if any, is
/// returned.
fn parse_if_cases(tokens: &mut TokenCursor<'_>,
                  keyword: Keyword,
                  cases: &mut Vec<IfCase>)
                  -> ParseResult<Option<Body>> {
    tokens.expect_keyword(keyword)?;
    let condition = parse_expression(tokens)?;
    tokens.expect_keyword(Keyword::Then)?;

    if tokens.is(&Token::NewLine) {
        let body = parse_block_statements(tokens)?;
        cases.push(IfCase { condition, body });

        if tokens.is_keyword(Keyword::End) {
            tokens.advance();
            return Ok(None);
        }
        if tokens.is_keyword(Keyword::Elif) || tokens.is_keyword(Keyword::Else) {
            return parse_elif_or_else(tokens, cases);
        }
        return expect_end(tokens, Keyword::If).map(|()| None);
    }

    let body = Body::inline(parse_expression(tokens)?);
    cases.push(IfCase { condition, body });

    parse_elif_or_else(tokens, cases)
}

/// Parses an optional `ELIF` chain or `ELSE` branch.
fn parse_elif_or_else(tokens: &mut TokenCursor<'_>,
                      cases: &mut Vec<IfCase>)
                      -> ParseResult<Option<Body>> {
    if tokens.is_keyword(Keyword::Elif) {
        return parse_if_cases(tokens, Keyword::Elif, cases);
    }
    if tokens.is_keyword(Keyword::Else) {
        tokens.advance();
        return parse_body(tokens, Keyword::Else).map(Some);
    }
    Ok(None)
}

/// Parses a counted loop.
///
/// Syntax:
/// ```text
/// FOR <name> = <start> TO <end> [STEP <step>] THEN <body>
/// ```
///
/// # Errors
/// Returns `UnexpectedToken` for a missing name, `=`, `TO` or `THEN`, and
/// `UnclosedBlock` for a block without `END`.
pub fn parse_for(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.expect_keyword(Keyword::For)?;
    let var = tokens.expect_identifier()?;
    tokens.expect(&Token::Equals, "'='")?;
    let start = parse_expression(tokens)?;
    tokens.expect_keyword(Keyword::To)?;
    let end = parse_expression(tokens)?;

    let step = if tokens.is_keyword(Keyword::Step) {
        tokens.advance();
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };

    tokens.expect_keyword(Keyword::Then)?;
    let body = parse_body(tokens, Keyword::For)?;

    Ok(Expr::For { var,
                   start: Box::new(start),
                   end: Box::new(end),
                   step,
                   body,
                   position })
}

/// Parses a conditional loop.
///
/// Syntax: `WHILE <condition> THEN <body>`
pub fn parse_while(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.expect_keyword(Keyword::While)?;
    let condition = parse_expression(tokens)?;
    tokens.expect_keyword(Keyword::Then)?;
    let body = parse_body(tokens, Keyword::While)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body,
                     position })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
/// FUNCTION [name](<params>) => <expression>
///
/// FUNCTION [name](<params>)
///     <statements>
/// END
/// ```
///
/// # Errors
/// Returns `UnexpectedToken` if the parameter list is malformed or neither
/// `=>` nor a newline follows it.
pub fn parse_function_def(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.expect_keyword(Keyword::Function)?;

    let name = match tokens.peek() {
        Token::Identifier(name) => {
            tokens.advance();
            Some(name.clone())
        },
        _ => None,
    };

    let expected_paren = if name.is_some() { "'('" } else { "identifier or '('" };
    tokens.expect(&Token::LParen, expected_paren)?;
    let params =
        parse_comma_separated(tokens, |tokens| tokens.expect_identifier(), &Token::RParen)?;

    let body = if tokens.is(&Token::Arrow) {
        tokens.advance();
        Body::inline(parse_expression(tokens)?)
    } else if tokens.is(&Token::NewLine) {
        let body = parse_block_statements(tokens)?;
        expect_end(tokens, Keyword::Function)?;
        body
    } else {
        return Err(tokens.unexpected("'=>' or newline"));
    };

    Ok(Expr::FunctionDef { name,
                           params,
                           body,
                           position })
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ParseError,
        interpreter::{lexer::tokenize, parser::parse},
    };

    fn render(source: &str) -> String {
        parse(&tokenize(source).unwrap()).unwrap().to_string()
    }

    fn parse_error(source: &str) -> ParseError {
        parse(&tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn inline_if_chain_keeps_every_case() {
        assert_eq!(render("IF a THEN 1 ELIF b THEN 2 ELIF c THEN 3 ELSE 4"),
                   "[(IF a THEN 1 ELIF b THEN 2 ELIF c THEN 3 ELSE 4)]");
    }

    #[test]
    fn block_if_chain() {
        let source = "IF a THEN\n1\n2\nELIF b THEN\n3\nELSE\n4\nEND";
        assert_eq!(render(source), "[(IF a THEN {1; 2} ELIF b THEN {3} ELSE {4})]");
    }

    #[test]
    fn block_if_without_else() {
        assert_eq!(render("IF a THEN\n1\nEND"), "[(IF a THEN {1})]");
    }

    #[test]
    fn for_loop_with_step() {
        assert_eq!(render("FOR i = 10 TO 0 STEP -2 THEN i"),
                   "[(FOR i = 10 TO 0 STEP (-2) THEN i)]");
    }

    #[test]
    fn block_loops() {
        assert_eq!(render("WHILE i < 3 THEN\nVAR i = i + 1\nEND"),
                   "[(WHILE (i < 3) THEN {(VAR i = (i + 1))})]");
        assert_eq!(render("FOR i = 0 TO 3 THEN\ni\nEND"), "[(FOR i = 0 TO 3 THEN {i})]");
    }

    #[test]
    fn function_definitions() {
        assert_eq!(render("FUNCTION add(a, b) => a + b"),
                   "[(FUNCTION add(a, b) => (a + b))]");
        assert_eq!(render("FUNCTION () => 1"), "[(FUNCTION () => 1)]");
        assert_eq!(render("FUNCTION f(x)\nVAR y = x * 2\ny\nEND"),
                   "[(FUNCTION f(x) => {(VAR y = (x * 2)); y})]");
    }

    #[test]
    fn missing_end_is_an_unclosed_block() {
        assert!(matches!(parse_error("WHILE 1 THEN\n1\n"),
                         ParseError::UnclosedBlock { ref construct, .. } if construct == "WHILE"));
        assert!(matches!(parse_error("IF 1 THEN\n1\n2"),
                         ParseError::UnclosedBlock { ref construct, .. } if construct == "IF"));
    }

    #[test]
    fn broken_statement_inside_block_is_reported() {
        assert!(matches!(parse_error("FUNCTION f()\n1\nVAR 2\nEND"),
                         ParseError::UnexpectedToken { ref expected, .. } if expected == "identifier"));
    }

    #[test]
    fn missing_then() {
        assert!(matches!(parse_error("IF 1 2"),
                         ParseError::UnexpectedToken { ref expected, .. } if expected == "'THEN'"));
    }

    #[test]
    fn function_needs_arrow_or_newline() {
        assert!(matches!(parse_error("FUNCTION f(x) x"),
                         ParseError::UnexpectedToken { ref expected, .. } if expected == "'=>' or newline"));
    }
}
