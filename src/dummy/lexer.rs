//! Logos-based lexer for the intermediate syntax
//!
//! The lexer is lossless: trivia and unknown characters are kept so that
//! expression text can be sliced straight out of the source.

use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = logos_token.unwrap_or(TokenKind::Error);

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"%[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("var")]
    VarKw,

    #[token("constraint")]
    ConstraintKw,

    #[token("solve")]
    SolveKw,

    #[token("satisfy")]
    SatisfyKw,

    #[token("minimize")]
    MinimizeKw,

    #[token("maximize")]
    MaximizeKw,

    #[token("int")]
    IntKw,

    #[token("float")]
    FloatKw,

    #[token("bool")]
    BoolKw,

    #[token("true")]
    TrueKw,

    #[token("false")]
    FalseKw,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Decimal,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("..")]
    DotDot,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Eq,

    #[token("-")]
    Minus,

    /// Any other operator character; only meaningful inside expressions.
    #[regex(r"[^ \t\r\n%a-zA-Z0-9_:;=\-]")]
    Symbol,

    Error,
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Keywords that may also appear as plain words in an expression.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::VarKw
                | TokenKind::ConstraintKw
                | TokenKind::SolveKw
                | TokenKind::SatisfyKw
                | TokenKind::MinimizeKw
                | TokenKind::MaximizeKw
                | TokenKind::IntKw
                | TokenKind::FloatKw
                | TokenKind::BoolKw
                | TokenKind::TrueKw
                | TokenKind::FalseKw
        )
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Newline => "line break",
            TokenKind::VarKw => "'var'",
            TokenKind::ConstraintKw => "'constraint'",
            TokenKind::SolveKw => "'solve'",
            TokenKind::SatisfyKw => "'satisfy'",
            TokenKind::MinimizeKw => "'minimize'",
            TokenKind::MaximizeKw => "'maximize'",
            TokenKind::IntKw => "'int'",
            TokenKind::FloatKw => "'float'",
            TokenKind::BoolKw => "'bool'",
            TokenKind::TrueKw => "'true'",
            TokenKind::FalseKw => "'false'",
            TokenKind::Ident => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::String => "string",
            TokenKind::DotDot => "'..'",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Eq => "'='",
            TokenKind::Minus => "'-'",
            TokenKind::Symbol => "symbol",
            TokenKind::Error => "invalid character",
        }
    }
}
