use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            binary::parse_logical,
            statement::parse_statements,
            utils::{TokenCursor, expected_if_untouched},
        },
        position::Position,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Everything that can start an expression, for error messages.
pub(in crate::interpreter::parser) const EXPRESSION_START: &str =
    "'VAR', number, string, identifier, 'IF', 'FOR', 'WHILE', 'FUNCTION', '+', '-', '!', '(' or '['";

/// Parses a whole program.
///
/// Grammar: `program := statements EOF`
///
/// The result is always an [`Expr::List`] with one element per top-level
/// statement. A program made only of separators produces an empty list.
///
/// # Parameters
/// - `tokens`: The token stream produced by the lexer, ending in `Eof`.
///
/// # Errors
/// Returns the first syntax error. When a trailing statement was discarded
/// because it did not parse, its error is reported instead of the generic
/// "expected end of input" one.
///
/// # Example
/// ```
/// use pilcrow::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("VAR x = 1\nx + 2").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.to_string(), "[(VAR x = 1), (x + 2)]");
/// ```
pub fn parse(tokens: &[(Token, Position)]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);

    cursor.skip_newlines();
    if cursor.is(&Token::Eof) {
        return Ok(Expr::List { elements: Vec::new(),
                               position: cursor.position(), });
    }

    let program = parse_statements(&mut cursor)?;

    if !cursor.is(&Token::Eof) {
        return Err(cursor.unexpected_or_backtracked("an operator or end of input"));
    }

    if let Expr::List { elements, .. } = &program {
        trace!("parsed {} top-level statements", elements.len());
    }

    Ok(program)
}

/// Parses a full expression.
///
/// Grammar:
/// ```text
/// expression := 'VAR' IDENT '=' expression
///             | compExpr (('&&' | '||') compExpr)*
/// ```
///
/// # Errors
/// If the expression cannot even start at the current token, the error lists
/// every token that could have started one.
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    if tokens.is_keyword(Keyword::Var) {
        return parse_var_assign(tokens);
    }

    let start = tokens.index();
    let result = parse_logical(tokens);

    expected_if_untouched(tokens, start, result, EXPRESSION_START)
}

/// Parses `VAR name = value`.
fn parse_var_assign(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.expect_keyword(Keyword::Var)?;
    let name = tokens.expect_identifier()?;
    tokens.expect(&Token::Equals, "'='")?;
    let value = parse_expression(tokens)?;

    Ok(Expr::VarAssign { name,
                         value: Box::new(value),
                         position })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn render(source: &str) -> String {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap().to_string()
    }

    fn parse_error(source: &str) -> ParseError {
        let tokens = tokenize(source).unwrap();
        parse(&tokens).unwrap_err()
    }

    #[test]
    fn precedence_climbs_from_logic_to_power() {
        assert_eq!(render("1 + 2 * 3"), "[(1 + (2 * 3))]");
        assert_eq!(render("1 < 2 && 3 >= 4"), "[((1 < 2) && (3 >= 4))]");
        assert_eq!(render("-2 ^ 2"), "[(-(2 ^ 2))]");
        assert_eq!(render("2 ^ 3 ^ 2"), "[(2 ^ (3 ^ 2))]");
        assert_eq!(render("(1 + 2) * 3"), "[((1 + 2) * 3)]");
        assert_eq!(render("10 - 4 - 3"), "[((10 - 4) - 3)]");
    }

    #[test]
    fn not_applies_to_a_whole_comparison() {
        assert_eq!(render("!1 == 2"), "[(!(1 == 2))]");
    }

    #[test]
    fn chained_assignment() {
        assert_eq!(render("VAR a = VAR b = 50"), "[(VAR a = (VAR b = 50))]");
    }

    #[test]
    fn statements_and_separators() {
        assert_eq!(render("\n\n1\n\n2⁋3\n"), "[1, 2, 3]");
        assert_eq!(render(""), "[]");
        assert_eq!(render("\n⁋\n"), "[]");
    }

    #[test]
    fn calls_and_lists() {
        assert_eq!(render("f(1, [2, \"a\"])"), "[f(1, [2, \"a\"])]");
        assert_eq!(render("NOW()"), "[NOW()]");
        assert_eq!(render("[]"), "[[]]");
    }

    #[test]
    fn leftmost_token_positions() {
        let tokens = tokenize("  a + 1").unwrap();
        let program = parse(&tokens).unwrap();
        let Expr::List { elements, .. } = program else {
            panic!("program is not a list");
        };

        assert_eq!(elements[0].position().column, 2);
    }

    #[test]
    fn missing_expression_lists_the_alternatives() {
        let error = parse_error("1 + ");
        assert!(matches!(error,
                         ParseError::UnexpectedToken { ref found, .. } if found == "end of input"));

        let error = parse_error(")");
        assert!(matches!(error,
                         ParseError::UnexpectedToken { ref expected, .. } if expected == EXPRESSION_START));
    }

    #[test]
    fn discarded_statement_error_is_reported() {
        let error = parse_error("1\nVAR = 3");
        assert!(matches!(error,
                         ParseError::UnexpectedToken { ref expected, .. } if expected == "identifier"));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let error = parse_error("1 2");
        assert!(matches!(error,
                         ParseError::UnexpectedToken { ref expected, .. }
                         if expected == "an operator or end of input"));
    }
}
