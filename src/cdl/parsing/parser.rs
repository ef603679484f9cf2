//! Recursive descent parser
//!
//! Builds the element tree top-down from the flat token stream. Each node
//! kind is constructed through its `allocate` factory and bound to the
//! shared source buffer; spans come from the tokens that produced the node
//! (container spans cover from the opening to the closing delimiter).
//! Children are appended in arrival order, which the tree preserves.
//!
//! The document must be a single top-level object; arrays only appear
//! nested. Trailing commas inside containers are accepted on input (the
//! canonical output never emits them).

use crate::cdl::ast::elements::{Array, Literal, LiteralKind, Number, Object, Str};
use crate::cdl::ast::info::SourceBuffer;
use crate::cdl::ast::span::Span;
use crate::cdl::ast::Element;
use crate::cdl::lexing::{tokenize, Token};
use std::sync::Arc;

use super::error::{ParseError, ParseErrorKind};

/// Parse a cdl document into its top-level object.
pub fn parse(source: &str) -> Result<Object, ParseError> {
    let tokens = tokenize(source).map_err(|e| {
        let kind = if e.slice.starts_with('\'') || e.slice.starts_with('"') {
            ParseErrorKind::UnterminatedString
        } else {
            ParseErrorKind::UnrecognizedInput { slice: e.slice }
        };
        ParseError::new(kind, e.span, source)
    })?;

    let mut parser = Parser {
        buffer: Arc::from(source),
        tokens,
        pos: 0,
    };
    parser.parse_document()
}

struct Parser {
    buffer: SourceBuffer,
    tokens: Vec<(Token, Span)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, Span)> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<(Token, Span)> {
        let next = self.tokens.get(self.pos).cloned();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span, &self.buffer)
    }

    fn error_at_end(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, Span::at(self.buffer.len(), 0), &self.buffer)
    }

    fn parse_document(&mut self) -> Result<Object, ParseError> {
        match self.bump() {
            None => Err(self.error_at_end(ParseErrorKind::EmptyDocument)),
            Some((Token::OpenBrace, open)) => {
                let object = self.parse_object(open)?;
                match self.bump() {
                    None => Ok(object),
                    Some((token, span)) => Err(self.error(
                        ParseErrorKind::TrailingContent {
                            found: token.describe(),
                        },
                        span,
                    )),
                }
            }
            Some((token, span)) => Err(self.error(
                ParseErrorKind::ExpectedObjectDocument {
                    found: token.describe(),
                },
                span,
            )),
        }
    }

    /// Parse members until the matching '}'. The opening brace has already
    /// been consumed; its span anchors the object's own span.
    fn parse_object(&mut self, open: Span) -> Result<Object, ParseError> {
        let mut object = Object::allocate(self.buffer.clone());

        loop {
            match self.bump() {
                None => return Err(self.error_at_end(ParseErrorKind::UnexpectedEnd {
                    expected: "'}'",
                })),
                Some((Token::CloseBrace, close)) => {
                    object.info.set_span(open.join(close));
                    return Ok(object);
                }
                Some((token, span)) if token.is_member_name() => {
                    let name = self.member_name(&token, span);
                    match self.bump() {
                        Some((Token::Colon, _)) => {}
                        Some((token, span)) => {
                            return Err(self.error(
                                ParseErrorKind::UnexpectedToken {
                                    expected: "':' after a member name",
                                    found: token.describe(),
                                },
                                span,
                            ))
                        }
                        None => {
                            return Err(self.error_at_end(ParseErrorKind::UnexpectedEnd {
                                expected: "':' after a member name",
                            }))
                        }
                    }
                    let value = self.parse_value()?;
                    object.push_named(name, value);
                    self.expect_separator(Token::CloseBrace, "',' or '}'")?;
                }
                Some((token, span)) => {
                    return Err(self.error(
                        ParseErrorKind::UnexpectedToken {
                            expected: "a member name",
                            found: token.describe(),
                        },
                        span,
                    ))
                }
            }
        }
    }

    /// Parse values until the matching ']'. The opening bracket has already
    /// been consumed.
    fn parse_array(&mut self, open: Span) -> Result<Array, ParseError> {
        let mut array = Array::allocate(self.buffer.clone());

        loop {
            match self.peek() {
                None => {
                    return Err(self.error_at_end(ParseErrorKind::UnexpectedEnd {
                        expected: "']'",
                    }))
                }
                Some((Token::CloseBracket, close)) => {
                    let close = *close;
                    self.bump();
                    array.info.set_span(open.join(close));
                    return Ok(array);
                }
                Some(_) => {
                    let value = self.parse_value()?;
                    array.push(value);
                    self.expect_separator(Token::CloseBracket, "',' or ']'")?;
                }
            }
        }
    }

    /// After a value: consume a comma, or leave the container's closing
    /// delimiter for the caller. Anything else is an error.
    fn expect_separator(
        &mut self,
        closer: Token,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        match self.peek() {
            Some((Token::Comma, _)) => {
                self.bump();
                Ok(())
            }
            Some((token, _)) if *token == closer => Ok(()),
            Some((token, span)) => Err(self.error(
                ParseErrorKind::UnexpectedToken {
                    expected,
                    found: token.describe(),
                },
                *span,
            )),
            // The container loop reports the unexpected end
            None => Ok(()),
        }
    }

    fn parse_value(&mut self) -> Result<Element, ParseError> {
        match self.bump() {
            None => Err(self.error_at_end(ParseErrorKind::UnexpectedEnd {
                expected: "a value",
            })),
            Some((Token::OpenBrace, open)) => Ok(Element::Object(self.parse_object(open)?)),
            Some((Token::OpenBracket, open)) => Ok(Element::Array(self.parse_array(open)?)),
            Some((Token::DoubleQuoted, span)) | Some((Token::SingleQuoted, span)) => {
                let mut string = Str::allocate(self.buffer.clone());
                string.info.set_span(span);
                string.set_value_span(Span::at(span.start() + 1, span.len() - 2));
                Ok(Element::Str(string))
            }
            Some((Token::Word, span)) => {
                let mut string = Str::allocate(self.buffer.clone());
                string.info.set_span(span);
                Ok(Element::Str(string))
            }
            Some((Token::Number, span)) => {
                let literal = &self.buffer[span.range()];
                let value: f64 = literal.parse().map_err(|_| {
                    self.error(
                        ParseErrorKind::InvalidNumber {
                            literal: literal.to_string(),
                        },
                        span,
                    )
                })?;
                let mut number = Number::allocate(self.buffer.clone());
                number.info.set_span(span);
                number.set_value(value);
                Ok(Element::Number(number))
            }
            Some((Token::True, span)) => Ok(self.literal(LiteralKind::Bool(true), span)),
            Some((Token::False, span)) => Ok(self.literal(LiteralKind::Bool(false), span)),
            Some((Token::Null, span)) => Ok(self.literal(LiteralKind::Null, span)),
            Some((token, span)) => Err(self.error(
                ParseErrorKind::UnexpectedToken {
                    expected: "a value",
                    found: token.describe(),
                },
                span,
            )),
        }
    }

    fn literal(&self, kind: LiteralKind, span: Span) -> Element {
        let mut literal = Literal::allocate(self.buffer.clone());
        literal.info.set_span(span);
        literal.set_kind(kind);
        Element::Literal(literal)
    }

    /// The member name a key token denotes: quoted strings without their
    /// quotes, bare words as-is.
    fn member_name(&self, token: &Token, span: Span) -> String {
        let slice = &self.buffer[span.range()];
        match token {
            Token::DoubleQuoted | Token::SingleQuoted => slice[1..slice.len() - 1].to_string(),
            _ => slice.to_string(),
        }
    }
}
