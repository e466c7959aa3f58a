//! Lexer for anchor and offset spec strings using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Must outrank Word so "12" lexes as a number, while "12px" stays a word
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 3)]
    Integer(i64),

    #[regex(r"[^ \t\n\r]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

/// A lexed item: either a token or a slice the lexer could not accept
/// (an integer that overflows `i64`).
pub type Lexeme = (Result<Token, ()>, Span);

/// Lex input string into tokens with spans
///
/// Unlike a filtering lexer, invalid lexemes are kept so callers can report
/// them with their span.
pub fn lex(input: &str) -> impl Iterator<Item = Lexeme> + '_ {
    Token::lexer(input).spanned()
}
