//! Recursive-descent parser for structural Verilog
//!
//! Accepts a single combinational module built from gate primitives:
//!
//! ```text
//! module c17 (N1, N2, N3, N6, N7, N22, N23);
//!   input N1, N2, N3, N6, N7;
//!   output N22, N23;
//!   wire N10, N11, N16, N19;
//!   nand NAND2_1 (N10, N1, N3);
//!   ...
//! endmodule
//! ```
//!
//! The first connection of a gate is its output, the rest are inputs in port
//! order. The instance name is optional; unnamed gates get `<kind>_<n>`.

use crate::error::{NetlistError, Result};
use crate::lexer::{Lexer, Token, TokenWithPos};
use crate::netlist::{GateInstance, GateKind, NetlistDesc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortDirection {
    Input,
    Output,
}

/// Parser state over a token stream
pub struct NetlistParser<'a> {
    /// Tokens from lexer
    tokens: Vec<TokenWithPos>,
    /// Current token position
    current: usize,
    /// Source text, kept for line numbers
    source: &'a str,
    desc: NetlistDesc,
}

impl<'a> NetlistParser<'a> {
    /// Create a new parser over the given source
    pub fn new(source: &'a str) -> Self {
        let tokens = Lexer::new(source).tokenize();
        Self {
            tokens,
            current: 0,
            source,
            desc: NetlistDesc::new(),
        }
    }

    /// Parse the whole source into a netlist description
    pub fn parse(mut self) -> Result<NetlistDesc> {
        while let Some(token) = self.current_token().cloned() {
            match token.token {
                Token::Module => self.parse_module_header()?,
                Token::Input => {
                    self.advance();
                    for name in self.parse_name_list_until_semicolon()? {
                        declare(&mut self.desc.primary_inputs, name);
                    }
                }
                Token::Output => {
                    self.advance();
                    for name in self.parse_name_list_until_semicolon()? {
                        declare(&mut self.desc.primary_outputs, name);
                    }
                }
                Token::Wire => {
                    // Wires are implied by use
                    self.advance();
                    self.parse_name_list_until_semicolon()?;
                }
                Token::EndModule => self.advance(),
                Token::Identifier(keyword) => self.parse_gate(&keyword, &token.span)?,
                _ => return Err(self.unexpected("a declaration or gate instance")),
            }
        }

        debug!(
            inputs = self.desc.primary_inputs.len(),
            outputs = self.desc.primary_outputs.len(),
            gates = self.desc.instances.len(),
            "parsed netlist"
        );
        Ok(self.desc)
    }

    /// `module <name> [ ( <ports> ) ] ;`
    ///
    /// A plain port list is informational. ANSI-style `input`/`output`
    /// prefixes inside it declare primary inputs and outputs.
    fn parse_module_header(&mut self) -> Result<()> {
        self.advance();
        let name = self.expect_identifier("module name")?;
        self.desc.module_name = Some(name);

        if self.at(&Token::LParen) {
            self.advance();
            let mut direction = None;
            loop {
                match self.current_token().map(|t| t.token.clone()) {
                    Some(Token::RParen) => {
                        self.advance();
                        break;
                    }
                    Some(Token::Input) => {
                        direction = Some(PortDirection::Input);
                        self.advance();
                    }
                    Some(Token::Output) => {
                        direction = Some(PortDirection::Output);
                        self.advance();
                    }
                    Some(Token::Wire) | Some(Token::Comma) => self.advance(),
                    Some(Token::Identifier(port)) => {
                        match direction {
                            Some(PortDirection::Input) => {
                                declare(&mut self.desc.primary_inputs, port)
                            }
                            Some(PortDirection::Output) => {
                                declare(&mut self.desc.primary_outputs, port)
                            }
                            None => {}
                        }
                        self.advance();
                    }
                    Some(_) => return Err(self.unexpected("a port name or ')'")),
                    None => return Err(Self::eof("')' closing the port list")),
                }
            }
        }

        self.expect(&Token::Semicolon, "';'")
    }

    /// `<kind> [<instance>] ( <output>, <in1> [, <in2>] ) ;`
    fn parse_gate(&mut self, keyword: &str, span: &std::ops::Range<usize>) -> Result<()> {
        let line = self.line_of(span.start);
        let kind = GateKind::from_keyword(keyword).ok_or_else(|| NetlistError::UnknownPrimitive {
            line,
            keyword: keyword.to_string(),
        })?;
        self.advance();

        let name = match self.current_token().map(|t| t.token.clone()) {
            Some(Token::Identifier(name)) => {
                self.advance();
                name
            }
            _ => format!("{}_{}", kind.keyword(), self.desc.instances.len() + 1),
        };

        self.expect(&Token::LParen, "'(' opening the connection list")?;
        let mut connections = Vec::new();
        loop {
            connections.push(self.expect_identifier("a signal name")?);
            match self.current_token().map(|t| &t.token) {
                Some(Token::Comma) => self.advance(),
                Some(Token::RParen) => {
                    self.advance();
                    break;
                }
                Some(_) => return Err(self.unexpected("',' or ')'")),
                None => return Err(Self::eof("')' closing the connection list")),
            }
        }
        self.expect(&Token::Semicolon, "';'")?;

        let output = connections.remove(0);
        if connections.len() != kind.arity() {
            return Err(NetlistError::Arity {
                line,
                instance: name,
                kind: kind.keyword().to_string(),
                expected: kind.arity(),
                found: connections.len(),
            });
        }

        self.desc.instances.push(GateInstance {
            kind,
            name,
            output,
            inputs: connections,
        });
        Ok(())
    }

    /// Comma-separated identifiers terminated by `;` (which is consumed)
    fn parse_name_list_until_semicolon(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        loop {
            names.push(self.expect_identifier("a signal name")?);
            match self.current_token().map(|t| &t.token) {
                Some(Token::Comma) => self.advance(),
                Some(Token::Semicolon) => {
                    self.advance();
                    return Ok(names);
                }
                Some(_) => return Err(self.unexpected("',' or ';'")),
                None => return Err(Self::eof("';'")),
            }
        }
    }

    fn current_token(&self) -> Option<&TokenWithPos> {
        self.tokens.get(self.current)
    }

    fn at(&self, token: &Token) -> bool {
        self.current_token().map(|t| &t.token) == Some(token)
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn expect(&mut self, token: &Token, expected: &str) -> Result<()> {
        match self.current_token() {
            Some(t) if &t.token == token => {
                self.advance();
                Ok(())
            }
            Some(_) => Err(self.unexpected(expected)),
            None => Err(Self::eof(expected)),
        }
    }

    fn expect_identifier(&mut self, expected: &str) -> Result<String> {
        match self.current_token().map(|t| t.token.clone()) {
            Some(Token::Identifier(name)) => {
                self.advance();
                Ok(name)
            }
            Some(_) => Err(self.unexpected(expected)),
            None => Err(Self::eof(expected)),
        }
    }

    fn unexpected(&self, expected: &str) -> NetlistError {
        match self.current_token() {
            Some(token) => NetlistError::UnexpectedToken {
                line: self.line_of(token.span.start),
                expected: expected.to_string(),
                found: self.source[token.span.clone()].to_string(),
            },
            None => Self::eof(expected),
        }
    }

    fn eof(expected: &str) -> NetlistError {
        NetlistError::UnexpectedEof {
            expected: expected.to_string(),
        }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.source[..offset].matches('\n').count() + 1
    }
}

/// Record a port once; ANSI headers may be repeated by body declarations
fn declare(ports: &mut Vec<String>, name: String) {
    if !ports.contains(&name) {
        ports.push(name);
    }
}
