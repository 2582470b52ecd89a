use logos::Logos;

use crate::interpreter::typo::{find_original_word, is_vocabulary_word};

/// The kind of a lexical token.
///
/// Keyword kinds are never matched by spelling directly. Every word goes
/// through [`classify_word`], which resolves exact spellings and single-edit
/// typos to the same kind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal, a maximal run of digits and dots such as `3.14`.
    /// The text is parsed later by the parser.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// String literal. There are no escapes, and a missing closing quote
    /// ends the string at the end of input.
    #[regex(r#""[^"]*"?"#)]
    String,
    /// Any word that does not resolve to a vocabulary entry.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", classify_word)]
    Identifier,
    /// `True` or `False`, or a typo of either.
    Boolean(bool),
    /// `def`
    Def,
    /// `return`
    Return,
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `print`
    Print,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// Line break. Statements are separated by these.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Always the last token of a stream.
    Eof,
}

/// A token with its source text and 1-based position.
///
/// For words the text keeps the spelling found in the source, so a `prnit`
/// token has kind [`TokenKind::Print`] and text `"prnit"`. String tokens hold
/// the characters between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The source slice the token came from.
    pub text:   String,
    /// Line of the first character.
    pub line:   usize,
    /// Column of the first character. Tabs between tokens count as four.
    pub column: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::NewLine => write!(f, "newline"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Maps a canonical vocabulary word to its token kind.
///
/// Words outside the vocabulary map to [`TokenKind::Identifier`].
#[must_use]
pub fn keyword_kind(word: &str) -> TokenKind {
    match word {
        "def" => TokenKind::Def,
        "return" => TokenKind::Return,
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "else" => TokenKind::Else,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "print" => TokenKind::Print,
        "True" => TokenKind::Boolean(true),
        "False" => TokenKind::Boolean(false),
        _ => TokenKind::Identifier,
    }
}

/// Decides what a scanned word is.
///
/// An exact vocabulary spelling wins first. Otherwise the typo matcher gets a
/// chance, and anything it cannot resolve stays an identifier.
fn classify_word(lex: &mut logos::Lexer<TokenKind>) -> TokenKind {
    let word = lex.slice();
    if is_vocabulary_word(word) {
        return keyword_kind(word);
    }
    find_original_word(word).map_or(TokenKind::Identifier, keyword_kind)
}

/// Turns source text into tokens.
///
/// Tokenizing never fails. Characters that start no token are skipped, and
/// the result always ends with one [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use pyhton::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("prnit(1)").into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Print,
///                 TokenKind::LParen,
///                 TokenKind::Number,
///                 TokenKind::RParen,
///                 TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut cursor = 0;
    let mut line = 1;
    let mut column = 1;

    while let Some(result) = lexer.next() {
        let Ok(kind) = result else {
            continue;
        };
        let span = lexer.span();

        column += gap_width(&source[cursor..span.start]);
        let slice = lexer.slice();
        let text = match kind {
            TokenKind::String => string_contents(slice).to_string(),
            _ => slice.to_string(),
        };
        tokens.push(Token { kind,
                            text,
                            line,
                            column });

        cursor = span.end;
        if kind == TokenKind::NewLine {
            line += 1;
            column = 1;
        } else {
            column += slice.chars().count();
        }
    }

    column += gap_width(&source[cursor..]);
    tokens.push(Token { kind: TokenKind::Eof,
                        text: String::new(),
                        line,
                        column });

    tokens
}

/// Width of skipped text between two tokens.
fn gap_width(gap: &str) -> usize {
    gap.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum()
}

fn string_contents(slice: &str) -> &str {
    let inner = &slice[1..];
    inner.strip_suffix('"').unwrap_or(inner)
}
