use std::fmt;

/// A location in the source text.
///
/// All three fields count characters, not bytes, and start at zero. The lexer
/// owns a live cursor that advances one character at a time; tokens, AST nodes
/// and errors keep copies of the cursor taken when they were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Number of characters before this position.
    pub offset: usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column within `line`.
    pub column: usize,
}

impl Position {
    /// Returns the position of the first character of a source text.
    #[must_use]
    pub const fn start() -> Self {
        Self { offset: 0,
               line:   0,
               column: 0, }
    }

    /// Moves the cursor past `ch`.
    ///
    /// A newline moves to column zero of the next line; every other character
    /// moves one column to the right.
    ///
    /// # Example
    /// ```
    /// use pilcrow::interpreter::position::Position;
    ///
    /// let mut cursor = Position::start();
    /// cursor.advance('a');
    /// cursor.advance('\n');
    /// cursor.advance('b');
    ///
    /// assert_eq!(cursor, Position { offset: 3, line: 1, column: 1 });
    /// ```
    pub const fn advance(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor over every character of `text`.
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(ch);
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "line {}, column {} (index {})",
               self.line + 1,
               self.column + 1,
               self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_resets_column() {
        let mut cursor = Position::start();
        cursor.advance_str("ab\ncd");

        assert_eq!(cursor.offset, 5);
        assert_eq!(cursor.line, 1);
        assert_eq!(cursor.column, 2);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let mut cursor = Position::start();
        cursor.advance_str("ñ⁋");

        assert_eq!(cursor.offset, 2);
        assert_eq!(cursor.column, 2);
    }

    #[test]
    fn display_is_one_based() {
        let position = Position { offset: 7,
                                  line:   2,
                                  column: 4, };
        assert_eq!(position.to_string(), "line 3, column 5 (index 7)");
    }
}
