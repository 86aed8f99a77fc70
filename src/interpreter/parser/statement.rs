use log::trace;

use crate::{
    ast::Expr,
    interpreter::parser::{
        core::{ParseResult, parse_expression},
        utils::TokenCursor,
    },
};

/// Parses a sequence of statements separated by newlines.
///
/// Grammar: `statements := NEWLINE* expression (NEWLINE+ expression)* NEWLINE*`
///
/// The list has no terminator of its own. After each run of separators one
/// more expression is attempted; if it fails, the cursor is rewound to where
/// the attempt began and the list ends there. The caller then checks for the
/// token that must follow (`END`, `ELIF`, `ELSE` or end of input). If the
/// discarded attempt had consumed tokens, its error is kept on the cursor so
/// the caller can report it instead of a less specific one.
///
/// # Returns
/// An `Expr::List` holding one element per statement, positioned at the first
/// statement.
///
/// # Errors
/// Only the first statement's error is returned directly.
pub fn parse_statements(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    tokens.skip_newlines();

    let first = parse_expression(tokens)?;
    let position = first.position();
    let mut elements = vec![first];

    loop {
        if tokens.skip_newlines() == 0 {
            break;
        }

        let start = tokens.index();
        match parse_expression(tokens) {
            Ok(statement) => elements.push(statement),
            Err(error) => {
                let advanced = tokens.index() - start;
                if advanced > 0 {
                    trace!("backtracking over {advanced} tokens: {error}");
                    tokens.record_backtrack(start, error);
                }
                tokens.reverse(advanced);
                break;
            },
        }
    }

    Ok(Expr::List { elements, position })
}
