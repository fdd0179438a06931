//! Parser for the mutation path dialect.
//!
//! Grammar: `segment ('.' segment | '[' index ']')*` where a segment
//! is an ASCII identifier and an index a non-negative base-10 integer
//! (leading zeros accepted). No escaping exists: field names are a
//! fixed, known vocabulary. Parsing is pure and total over well-formed
//! syntax; everything else is a [`PathError::Malformed`].

use logos::Logos;
use thiserror::Error;

pub type PathResult<T> = Result<T, PathError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Malformed path `{path}`: {reason}")]
    Malformed { path: String, reason: String },
}

impl PathError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// One navigation step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Map lookup by field name.
    Field(String),
    /// Sequence lookup by position.
    Index(usize),
}

/// Token types for the path dialect
#[derive(Logos, Debug, Clone, PartialEq)]
enum Token<'src> {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'src str),

    #[token(".")]
    Dot,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,
}

fn tokenize(path: &str) -> PathResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(path);
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(PathError::malformed(
                    path,
                    format!("unexpected character at offset {}", lexer.span().start),
                ))
            }
        }
    }
    Ok(tokens)
}

/// Parse a path string into navigation steps.
pub fn parse_path(path: &str) -> PathResult<Vec<PathStep>> {
    if path.is_empty() {
        return Err(PathError::malformed(path, "path is empty"));
    }

    let tokens = tokenize(path)?;
    let mut steps = Vec::new();
    let mut pos = 0;

    match tokens.first() {
        Some(Token::Ident(name)) => {
            steps.push(PathStep::Field((*name).to_string()));
            pos += 1;
        }
        _ => return Err(PathError::malformed(path, "expected a field name")),
    }

    while pos < tokens.len() {
        match tokens[pos] {
            Token::Dot => match tokens.get(pos + 1) {
                Some(Token::Ident(name)) => {
                    steps.push(PathStep::Field((*name).to_string()));
                    pos += 2;
                }
                _ => return Err(PathError::malformed(path, "expected a field name after `.`")),
            },
            Token::LBracket => {
                let index = match tokens.get(pos + 1) {
                    Some(Token::Number(digits)) => digits.parse::<usize>().map_err(|_| {
                        PathError::malformed(path, format!("index `{digits}` is out of range"))
                    })?,
                    _ => {
                        return Err(PathError::malformed(
                            path,
                            "expected a non-negative integer index after `[`",
                        ))
                    }
                };
                match tokens.get(pos + 2) {
                    Some(Token::RBracket) => {
                        steps.push(PathStep::Index(index));
                        pos += 3;
                    }
                    _ => return Err(PathError::malformed(path, "unbalanced brackets")),
                }
            }
            _ => return Err(PathError::malformed(path, "unexpected token")),
        }
    }

    Ok(steps)
}

/// Render steps back into the string dialect, for diagnostics.
pub fn display_path(steps: &[PathStep]) -> String {
    let mut out = String::new();
    for step in steps {
        match step {
            PathStep::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            PathStep::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}
