#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    /// Integer literal.
    Literal(i64),
    Word(Word),
    Operator(Operator),
    /// Variable slot index, 0 for `a` through 25 for `z`.
    Ident(usize),
    LBrace,
    RBrace,
    LParen,
    RParen,
    Semicolon,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(n) => write!(f, "{}", n),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(i) => write!(f, "{}", (b'a' + (*i as u8 % 26)) as char),
            LBrace => write!(f, "{{"),
            RBrace => write!(f, "}}"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Semicolon => write!(f, ";"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Do,
    Else,
    If,
    While,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        match s {
            "do" => Some(Word::Do),
            "else" => Some(Word::Else),
            "if" => Some(Word::If),
            "while" => Some(Word::While),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Do => write!(f, "do"),
            Else => write!(f, "else"),
            If => write!(f, "if"),
            While => write!(f, "while"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Less,
    Plus,
    Minus,
    Equal,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Less => write!(f, "<"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
        }
    }
}
