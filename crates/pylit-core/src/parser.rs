//! Recursive-descent parser — tokens into one value tree.
//!
//! One function per production, one token of lookahead, except at the `{`
//! ambiguity where the parser reads one sub-value and then inspects a
//! single following token: `:` commits to a mapping, anything else to a
//! set. The two continuations are always distinguishable there, so no
//! backtracking exists anywhere.
//!
//! Cursor state (`tokens`, `pos`, `depth`) is call-local; nothing survives
//! a `parse` call. The first expected-token mismatch aborts with a syntax
//! error naming the expected kind, the actual kind, and the source offset
//! — no partial result, no recovery.

use crate::error::{PylitError, Result};
use crate::scanner::{Token, TokenKind};
use crate::value::{Scalar, Value};

/// Nesting cap. Recursion depth equals input nesting depth, so without
/// this an adversarially deep input overflows the call stack instead of
/// returning an error.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Parse a token stream into a single value tree, consuming it up to and
/// including EOF. Tokens after the root literal are a syntax error.
///
/// # Examples
///
/// ```
/// use pylit_core::scanner::tokenize;
/// use pylit_core::parser::parse;
/// use pylit_core::value::{Scalar, Value};
///
/// let tree = parse(tokenize("(1,)").unwrap()).unwrap();
/// assert_eq!(tree, Value::Tuple(vec![Value::Scalar(Scalar::Int(1))]));
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Value> {
    if tokens.is_empty() {
        return Err(PylitError::Syntax {
            expected: "a value",
            found: TokenKind::Eof.name(),
            offset: 0,
        });
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let root = parser.parse_value()?;
    parser.expect(TokenKind::Eof)?;
    Ok(root)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// value := scalar | list | tuple | dict_or_set
    fn parse_value(&mut self) -> Result<Value> {
        match self.current().kind {
            TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Bool(_)
            | TokenKind::None => self.parse_scalar(),
            TokenKind::LeftBracket => self.parse_list(),
            TokenKind::LeftParen => self.parse_tuple(),
            TokenKind::LeftBrace => self.parse_dict_or_set(),
            _ => Err(self.unexpected("a value")),
        }
    }

    fn parse_scalar(&mut self) -> Result<Value> {
        let scalar = match &self.current().kind {
            TokenKind::Int(n) => Scalar::Int(*n),
            TokenKind::Float(x) => Scalar::Float(*x),
            TokenKind::Str(s) => Scalar::Str(s.clone()),
            TokenKind::Bool(b) => Scalar::Bool(*b),
            TokenKind::None => Scalar::None,
            _ => return Err(self.unexpected("a scalar")),
        };
        self.advance();
        Ok(Value::Scalar(scalar))
    }

    /// list := '[' elements? ']'
    fn parse_list(&mut self) -> Result<Value> {
        let offset = self.current().offset;
        self.expect(TokenKind::LeftBracket)?;
        self.enter(offset)?;
        let items = self.parse_elements(&TokenKind::RightBracket)?;
        self.expect(TokenKind::RightBracket)?;
        self.leave();
        Ok(Value::List(items))
    }

    /// tuple := '(' elements? ')'
    fn parse_tuple(&mut self) -> Result<Value> {
        let offset = self.current().offset;
        self.expect(TokenKind::LeftParen)?;
        self.enter(offset)?;
        let items = self.parse_elements(&TokenKind::RightParen)?;
        self.expect(TokenKind::RightParen)?;
        self.leave();
        Ok(Value::Tuple(items))
    }

    /// Comma-separated values up to (not including) the closing delimiter.
    fn parse_elements(&mut self, close: &TokenKind) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        if self.at(close) {
            return Ok(items);
        }
        items.push(self.parse_value()?);
        while self.eat(&TokenKind::Comma) {
            // Close delimiter right after a comma: trailing comma.
            // Stopping at EOF too lets expect() name the missing closer.
            if self.at(close) || self.at(&TokenKind::Eof) {
                break;
            }
            items.push(self.parse_value()?);
        }
        Ok(items)
    }

    /// dict_or_set := '{' '}' | '{' pairs '}' | '{' elements '}'
    ///
    /// An immediate `}` is the empty mapping by convention, not an empty
    /// set. Otherwise the first sub-value is parsed, and the one token
    /// after it decides the container form.
    fn parse_dict_or_set(&mut self) -> Result<Value> {
        let offset = self.current().offset;
        self.expect(TokenKind::LeftBrace)?;
        self.enter(offset)?;
        if self.eat(&TokenKind::RightBrace) {
            self.leave();
            return Ok(Value::Dict(Vec::new()));
        }
        let first = self.parse_value()?;
        let value = if self.at(&TokenKind::Colon) {
            self.parse_dict_rest(first)?
        } else {
            self.parse_set_rest(first)?
        };
        self.leave();
        Ok(value)
    }

    fn parse_dict_rest(&mut self, first_key: Value) -> Result<Value> {
        let mut entries = Vec::new();
        self.expect(TokenKind::Colon)?;
        let first_value = self.parse_value()?;
        entries.push((first_key, first_value));
        while self.eat(&TokenKind::Comma) {
            if self.at(&TokenKind::RightBrace) || self.at(&TokenKind::Eof) {
                break;
            }
            let key = self.parse_value()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value()?;
            entries.push((key, value));
        }
        self.expect(TokenKind::RightBrace)?;
        Ok(Value::Dict(entries))
    }

    fn parse_set_rest(&mut self, first: Value) -> Result<Value> {
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.at(&TokenKind::RightBrace) || self.at(&TokenKind::Eof) {
                break;
            }
            items.push(self.parse_value()?);
        }
        self.expect(TokenKind::RightBrace)?;
        Ok(Value::Set(items))
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(PylitError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                offset,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn current(&self) -> &Token {
        // tokenize terminates every stream with Eof; stay on it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn at(&self, kind: &TokenKind) -> bool {
        self.current().kind == *kind
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.current().kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    fn unexpected(&self, expected: &'static str) -> PylitError {
        let token = self.current();
        PylitError::Syntax {
            expected,
            found: token.kind.name(),
            offset: token.offset,
        }
    }
}
