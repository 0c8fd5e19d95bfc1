//! Character-level scanner — literal text into an EOF-terminated token stream.
//!
//! The scanner is a finite-state dispatcher: a single dispatch loop skips
//! whitespace, then routes on the current character to one of four scan
//! states (number, string, identifier, delimiter), each of which emits one
//! token and returns to dispatch. All cursor state lives in a call-local
//! [`Scanner`] value, so concurrent `tokenize` calls share nothing.
//!
//! Two leniencies are deliberate and load-bearing for the parser's error
//! reporting:
//!
//! - an unterminated string yields its content up to end of input as a
//!   normal string token (the parser then reports the structural problem);
//! - an unknown escape sequence passes the escaped character through
//!   literally instead of failing.

use crate::error::{PylitError, Result};

/// Token kind, with the resolved payload on the scalar-producing kinds.
///
/// `Ident` covers any keyword-like word that is not `True`/`False`/`None`;
/// no grammar production accepts it, so it surfaces as a syntax error with
/// a useful kind name rather than a scan error.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
    Ident(String),
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Comma,
    Colon,
    Eof,
}

impl TokenKind {
    /// Kind name used in syntax-error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) | TokenKind::Float(_) => "number",
            TokenKind::Str(_) => "string",
            TokenKind::Bool(_) => "boolean",
            TokenKind::None => "None",
            TokenKind::Ident(_) => "identifier",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Eof => "end of input",
        }
    }
}

/// One lexical unit. `offset` is the character index of the token's first
/// character in the input, used by every downstream error message.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Scan literal text into tokens, terminated by a single [`TokenKind::Eof`].
///
/// The first unrecognizable character aborts the scan with
/// [`PylitError::Scan`]; there is no resynchronization.
///
/// # Examples
///
/// ```
/// use pylit_core::scanner::{tokenize, TokenKind};
///
/// let tokens = tokenize("[1, 'a']").unwrap();
/// assert_eq!(tokens.len(), 6); // '[' 1 ',' 'a' ']' EOF
/// assert_eq!(tokens[1].kind, TokenKind::Int(1));
/// assert_eq!(tokens[1].offset, 1);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Scanner::new(input).run()
}

/// Call-local cursor over the input characters.
struct Scanner {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Dispatch state: route each lexeme's first character to the scan
    /// state that owns it, until the input runs out.
    fn run(mut self) -> Result<Vec<Token>> {
        loop {
            self.skip_whitespace();
            let ch = match self.current() {
                Some(ch) => ch,
                Option::None => break,
            };
            if ch.is_ascii_digit() || ch == '-' {
                self.scan_number()?;
            } else if ch == '\'' || ch == '"' {
                self.scan_string();
            } else if ch.is_alphabetic() || ch == '_' {
                self.scan_identifier();
            } else {
                self.scan_delimiter()?;
            }
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            offset: self.pos,
        });
        Ok(self.tokens)
    }

    /// Number state: optional `-`, digits, optional single `.` and more
    /// digits. No exponents; a second `.` ends the lexeme. A lexeme with a
    /// `.` becomes a float, otherwise an integer, promoted to float when it
    /// overflows `i64`.
    fn scan_number(&mut self) -> Result<()> {
        let start = self.pos;
        let mut lexeme = String::new();
        if self.current() == Some('-') {
            lexeme.push('-');
            self.advance();
        }
        let mut has_digits = false;
        let mut has_dot = false;
        while let Some(ch) = self.current() {
            if ch.is_ascii_digit() {
                lexeme.push(ch);
                self.advance();
                has_digits = true;
            } else if ch == '.' && !has_dot {
                lexeme.push(ch);
                self.advance();
                has_dot = true;
            } else {
                break;
            }
        }
        if !has_digits {
            // A bare minus sign is not a lexeme.
            return Err(PylitError::Scan {
                ch: '-',
                code: '-' as u32,
                offset: start,
            });
        }
        let kind = if has_dot {
            TokenKind::Float(Self::parse_float(&lexeme, start)?)
        } else {
            match lexeme.parse::<i64>() {
                Ok(n) => TokenKind::Int(n),
                Err(_) => TokenKind::Float(Self::parse_float(&lexeme, start)?),
            }
        };
        self.tokens.push(Token {
            kind,
            offset: start,
        });
        Ok(())
    }

    fn parse_float(lexeme: &str, offset: usize) -> Result<f64> {
        // The lexeme shape `-?digits(.digits?)?` with at least one digit is
        // always a valid f64 literal.
        lexeme.parse::<f64>().map_err(|_| PylitError::Scan {
            ch: '-',
            code: '-' as u32,
            offset,
        })
    }

    /// String state: content between matching `'` or `"` delimiters, with
    /// the fixed escape table. Hitting end of input before the closing
    /// quote emits the truncated content; a lone trailing backslash is
    /// dropped with it.
    fn scan_string(&mut self) {
        let start = self.pos;
        let quote = self.chars[self.pos];
        self.advance();
        let mut content = String::new();
        while let Some(ch) = self.current() {
            if ch == quote {
                self.advance();
                break;
            }
            if ch == '\\' {
                self.advance();
                match self.current() {
                    Some(escaped) => {
                        content.push(match escaped {
                            'n' => '\n',
                            't' => '\t',
                            'r' => '\r',
                            // Unknown escapes pass the character through.
                            other => other,
                        });
                        self.advance();
                    }
                    Option::None => break,
                }
            } else {
                content.push(ch);
                self.advance();
            }
        }
        self.tokens.push(Token {
            kind: TokenKind::Str(content),
            offset: start,
        });
    }

    /// Identifier state: letters, digits, `_`. The keyword table resolves
    /// `True`/`False`/`None`; everything else stays a generic identifier.
    fn scan_identifier(&mut self) {
        let start = self.pos;
        let mut word = String::new();
        while let Some(ch) = self.current() {
            if ch.is_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        let kind = match word.as_str() {
            "True" => TokenKind::Bool(true),
            "False" => TokenKind::Bool(false),
            "None" => TokenKind::None,
            _ => TokenKind::Ident(word),
        };
        self.tokens.push(Token {
            kind,
            offset: start,
        });
    }

    /// Delimiter state: the single-character table. Anything else is the
    /// fatal scan error carrying the character, its code point, and offset.
    fn scan_delimiter(&mut self) -> Result<()> {
        let ch = self.chars[self.pos];
        let kind = match ch {
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            _ => {
                return Err(PylitError::Scan {
                    ch,
                    code: ch as u32,
                    offset: self.pos,
                })
            }
        };
        self.tokens.push(Token {
            kind,
            offset: self.pos,
        });
        self.advance();
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}
