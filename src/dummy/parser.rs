//! Recursive-descent parser for a single intermediate-syntax line.
//!
//! Grammar (one statement, `;` terminated, trailing `%` comment allowed):
//!
//! ```text
//! statement  := parameter | variable | constraint | goal
//! parameter  := domain ':' ID '=' literal ';'
//! variable   := 'var' (domain | bound '..' bound) ':' ID ';'
//! constraint := 'constraint' ID ':' expression ';'
//! goal       := 'solve' ('satisfy' | ('minimize' | 'maximize') expression) ';'
//! domain     := 'int' | 'float' | 'bool'
//! ```
//!
//! `ID` is the raw text before the next `:`, `=` or `;` (whatever the model
//! allowed as an id, keywords and `-` included) and must not contain spaces.

use text_size::TextSize;

use super::lexer::{Token, TokenKind, tokenize};
use crate::base::Mark;
use crate::model::{
    Constraint, Domain, Goal, GoalKind, Literal, Parameter, Range, Statement, Variable,
};
use crate::syntax::SyntaxError;

pub(super) struct StatementParser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

type ParseResult<T> = Result<T, SyntaxError>;

impl<'a> StatementParser<'a> {
    pub(super) fn new(source: &'a str) -> Self {
        let tokens = tokenize(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub(super) fn parse(mut self) -> ParseResult<Statement> {
        let statement = match self.current_kind() {
            Some(TokenKind::IntKw | TokenKind::FloatKw | TokenKind::BoolKw) => {
                self.parse_parameter()?
            }
            Some(TokenKind::VarKw) => self.parse_variable()?,
            Some(TokenKind::ConstraintKw) => self.parse_constraint()?,
            Some(TokenKind::SolveKw) => self.parse_goal()?,
            Some(_) => return Err(self.error_here("expected a statement")),
            None => return Err(self.error_here("empty statement")),
        };

        if self.current().is_some() {
            return Err(self.error_here("unexpected input after ';'"));
        }
        Ok(statement)
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn parse_parameter(&mut self) -> ParseResult<Statement> {
        let domain = self.parse_domain()?;
        self.expect(TokenKind::Colon)?;
        let id = self.parse_id(TokenKind::Eq)?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_value(domain)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::Parameters(vec![Parameter {
            id: id.into(),
            domain,
            value,
        }]))
    }

    fn parse_variable(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::VarKw)?;

        let (domain, range) = match self.current_kind() {
            Some(TokenKind::IntKw | TokenKind::FloatKw | TokenKind::BoolKw) => {
                (self.parse_domain()?, None)
            }
            _ => {
                let min = self.parse_number()?;
                self.expect(TokenKind::DotDot)?;
                let max = self.parse_number()?;
                let domain = match (min, max) {
                    (Literal::Int(_), Literal::Int(_)) => Domain::Int,
                    _ => Domain::Float,
                };
                (domain, Some(Range { min, max }))
            }
        };

        self.expect(TokenKind::Colon)?;
        let id = self.parse_id(TokenKind::Semicolon)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::Variables(vec![Variable {
            id: id.into(),
            domain,
            range,
        }]))
    }

    fn parse_constraint(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::ConstraintKw)?;
        let id = self.parse_id(TokenKind::Colon)?;
        self.expect(TokenKind::Colon)?;
        let expression = self.parse_expression()?;

        Ok(Statement::Constraints(vec![Constraint {
            id: id.into(),
            expression,
        }]))
    }

    fn parse_goal(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::SolveKw)?;

        let goal = match self.current_kind() {
            Some(TokenKind::SatisfyKw) => {
                self.bump();
                self.expect(TokenKind::Semicolon)?;
                Goal {
                    id: GoalKind::Satisfy,
                    expression: None,
                }
            }
            Some(kind @ (TokenKind::MinimizeKw | TokenKind::MaximizeKw)) => {
                self.bump();
                let id = if kind == TokenKind::MinimizeKw {
                    GoalKind::Minimize
                } else {
                    GoalKind::Maximize
                };
                Goal {
                    id,
                    expression: Some(self.parse_expression()?),
                }
            }
            _ => return Err(self.error_here("expected 'satisfy', 'minimize' or 'maximize'")),
        };

        Ok(Statement::Goal(goal))
    }

    // =========================================================================
    // PIECES
    // =========================================================================

    fn parse_domain(&mut self) -> ParseResult<Domain> {
        let domain = match self.current_kind() {
            Some(TokenKind::IntKw) => Domain::Int,
            Some(TokenKind::FloatKw) => Domain::Float,
            Some(TokenKind::BoolKw) => Domain::Bool,
            _ => return Err(self.error_here("expected 'int', 'float' or 'bool'")),
        };
        self.bump();
        Ok(domain)
    }

    /// Source text of the tokens before the first `terminator`.
    fn parse_id(&mut self, terminator: TokenKind) -> ParseResult<&'a str> {
        let start = self.pos;
        let Some(end) = self.tokens[start..]
            .iter()
            .position(|t| t.kind == terminator)
            .map(|i| start + i)
        else {
            return Err(self.error_at_end(format!("expected {}", terminator.describe())));
        };
        if end == start {
            return Err(self.error_here(format!(
                "expected identifier, found {}",
                terminator.describe()
            )));
        }

        let first = self.tokens[start];
        if matches!(first.kind, TokenKind::Newline | TokenKind::Error) {
            return Err(self.error_here(format!("unexpected {}", first.kind.describe())));
        }
        for pair in self.tokens[start..end].windows(2) {
            if matches!(pair[1].kind, TokenKind::Newline | TokenKind::Error) {
                let reason = format!("unexpected {}", pair[1].kind.describe());
                return Err(self.error_at_offset(reason, pair[1].offset));
            }
            if pair[0].end() != pair[1].offset {
                let offset = pair[1].offset;
                return Err(self.error_at_offset("unexpected space in identifier", offset));
            }
        }

        let source = self.source;
        let from = usize::from(first.offset);
        let to = usize::from(self.tokens[end - 1].end());
        self.pos = end;
        Ok(&source[from..to])
    }

    /// A literal checked against the declared domain.
    fn parse_value(&mut self, domain: Domain) -> ParseResult<Literal> {
        let start = self.pos;
        let literal = match self.current_kind() {
            Some(TokenKind::TrueKw) => {
                self.bump();
                Literal::Bool(true)
            }
            Some(TokenKind::FalseKw) => {
                self.bump();
                Literal::Bool(false)
            }
            _ => self.parse_number()?,
        };

        match (domain, literal) {
            (Domain::Bool, Literal::Bool(_))
            | (Domain::Int, Literal::Int(_))
            | (Domain::Float, Literal::Float(_)) => Ok(literal),
            (Domain::Float, Literal::Int(i)) => Ok(Literal::Float(i as f64)),
            _ => {
                self.pos = start;
                Err(self.error_here(format!("expected {domain} value")))
            }
        }
    }

    /// Optionally negated integer or decimal.
    fn parse_number(&mut self) -> ParseResult<Literal> {
        let negative = self.eat(TokenKind::Minus);
        let Some(token) = self.current() else {
            return Err(self.error_here("expected a number"));
        };

        let literal = match token.kind {
            TokenKind::Integer => {
                let text = if negative {
                    format!("-{}", token.text)
                } else {
                    token.text.to_string()
                };
                text.parse::<i64>()
                    .map(Literal::Int)
                    .map_err(|_| self.error_here("integer out of range"))?
            }
            TokenKind::Decimal => {
                let value: f64 = token
                    .text
                    .parse()
                    .map_err(|_| self.error_here("invalid decimal"))?;
                Literal::Float(if negative { -value } else { value })
            }
            _ => return Err(self.error_here("expected a number")),
        };
        self.bump();
        Ok(literal)
    }

    /// Raw source text up to the terminating `;`, which must close the line.
    fn parse_expression(&mut self) -> ParseResult<String> {
        let Some(first) = self.current() else {
            return Err(self.error_here("expected an expression"));
        };
        if first.kind == TokenKind::Semicolon {
            return Err(self.error_here("expected an expression"));
        }

        let Some(last_semicolon) = self
            .tokens
            .iter()
            .rposition(|t| t.kind == TokenKind::Semicolon)
            .filter(|&i| i > self.pos)
        else {
            return Err(self.error_at_end("expected ';'"));
        };

        if let Some(bad) = self.tokens[self.pos..last_semicolon]
            .iter()
            .find(|t| matches!(t.kind, TokenKind::Newline | TokenKind::Error))
        {
            let offset = bad.offset;
            let reason = format!("unexpected {}", bad.kind.describe());
            return Err(self.error_at_offset(reason, offset));
        }

        let start = usize::from(first.offset);
        let end = usize::from(self.tokens[last_semicolon].offset);
        let expression = self.source[start..end].trim().to_string();

        self.pos = last_semicolon + 1;
        Ok(expression)
    }

    // =========================================================================
    // TOKEN CURSOR
    // =========================================================================

    fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_kind() == Some(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'a>> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.bump();
                Ok(token)
            }
            Some(token) => Err(self.error_here(format!(
                "expected {}, found {}",
                kind.describe(),
                token.kind.describe()
            ))),
            None => Err(self.error_at_end(format!("expected {}", kind.describe()))),
        }
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    fn error_here(&self, reason: impl Into<String>) -> SyntaxError {
        match self.current() {
            Some(token) => self.error_at_offset(reason, token.offset),
            None => self.error_at_end(reason),
        }
    }

    fn error_at_end(&self, reason: impl Into<String>) -> SyntaxError {
        let end = self.source.trim_end().len();
        SyntaxError::new(reason, Mark::from_offset(self.source, end))
    }

    fn error_at_offset(&self, reason: impl Into<String>, offset: TextSize) -> SyntaxError {
        SyntaxError::new(reason, Mark::from_offset(self.source, usize::from(offset)))
    }
}
