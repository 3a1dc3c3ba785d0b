use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("print", TokenKind::Print);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("end_if", TokenKind::EndIf);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("end_while", TokenKind::EndWhile);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("greater", TokenKind::Greater);
        map.insert("less", TokenKind::Less);
        map.insert("equal", TokenKind::Equal);
        map.insert("not_equal", TokenKind::NotEqual);
        map.insert("greater_equal", TokenKind::GreaterEqual);
        map.insert("less_equal", TokenKind::LessEqual);
        map.insert("add", TokenKind::Add);
        map.insert("sub", TokenKind::Sub);
        map.insert("mul", TokenKind::Mul);
        map.insert("div", TokenKind::Div);
        map.insert("pow", TokenKind::Pow);
        map.insert("concat", TokenKind::Concat);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    Assign, // =
    LParen,
    RParen,
    Semicolon,

    // Reserved
    Var,
    Print,
    If,
    Then,
    EndIf,
    While,
    Do,
    EndWhile,

    // Logical
    And,
    Or,

    // Comparison
    Greater,
    Less,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Concat,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One line for token dumps: `KIND (payload)`.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
