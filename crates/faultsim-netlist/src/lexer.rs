//! Netlist lexer using Logos
//!
//! Tokenizes the structural Verilog subset into a stream of tokens with
//! position information. Gate primitives (`and`, `nand`, ...) are lexed as
//! identifiers and resolved by the parser, so unknown primitives surface as
//! parse errors rather than lexer errors.

use logos::Logos;
use std::fmt;

/// Token types for structural Verilog
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("module")]
    Module,
    #[token("endmodule")]
    EndModule,
    #[token("input")]
    Input,
    #[token("output")]
    Output,
    #[token("wire")]
    Wire,

    // Plain identifiers, optionally with a constant bit select (e.g. "a[3]")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*(\[[0-9]+\])?", |lex| lex.slice().to_owned())]
    Identifier(String),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Whitespace and comments
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", logos::skip)]
    // Unrecognized character
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Module => write!(f, "module"),
            Token::EndModule => write!(f, "endmodule"),
            Token::Input => write!(f, "input"),
            Token::Output => write!(f, "output"),
            Token::Wire => write!(f, "wire"),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Error => write!(f, "<invalid>"),
        }
    }
}

/// A token and the byte range it was read from
#[derive(Debug, Clone)]
pub struct TokenWithPos {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Netlist lexer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Start lexing `source` from its first byte
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    /// Next token and its byte span, or `None` at end of input
    pub fn next_token(&mut self) -> Option<TokenWithPos> {
        self.inner.next().map(|result| {
            let token = result.unwrap_or(Token::Error);
            let span = self.inner.span();
            TokenWithPos { token, span }
        })
    }

    /// Collect every remaining token
    pub fn tokenize(&mut self) -> Vec<TokenWithPos> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("module endmodule input output wire"),
            vec![
                Token::Module,
                Token::EndModule,
                Token::Input,
                Token::Output,
                Token::Wire
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(
            kinds("inputs wire_1"),
            vec![
                Token::Identifier("inputs".to_string()),
                Token::Identifier("wire_1".to_string())
            ]
        );
    }

    #[test]
    fn test_gate_statement() {
        assert_eq!(
            kinds("nand NAND2_1 (N10, N1, N3);"),
            vec![
                Token::Identifier("nand".to_string()),
                Token::Identifier("NAND2_1".to_string()),
                Token::LParen,
                Token::Identifier("N10".to_string()),
                Token::Comma,
                Token::Identifier("N1".to_string()),
                Token::Comma,
                Token::Identifier("N3".to_string()),
                Token::RParen,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_bit_select_identifier() {
        assert_eq!(kinds("a[3]"), vec![Token::Identifier("a[3]".to_string())]);
    }

    #[test]
    fn test_comments_skipped() {
        let tokens = kinds("// header\ninput /* inline */ a;\n");
        assert_eq!(
            tokens,
            vec![
                Token::Input,
                Token::Identifier("a".to_string()),
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_invalid_character() {
        let tokens = kinds("input @a;");
        assert_eq!(tokens[1], Token::Error);
    }

    #[test]
    fn test_spans() {
        let tokens = Lexer::new("input a;").tokenize();
        assert_eq!(tokens[0].span, 0..5);
        assert_eq!(tokens[1].span, 6..7);
    }
}
