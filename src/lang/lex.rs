use super::token::{Operator, Token, Word};

pub fn lex(s: &str) -> Vec<Token> {
    TinyLexer::lex(s)
}

fn is_tiny_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_tiny_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_tiny_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct TinyLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> TinyLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        TinyLexer {
            chars: s.chars().peekable(),
        }
        .collect()
    }

    fn whitespace(&mut self) -> Token {
        let mut len = 0;
        loop {
            self.chars.next();
            len += 1;
            if let Some(pk) = self.chars.peek() {
                if is_tiny_whitespace(*pk) {
                    continue;
                }
            }
            return Token::Whitespace(len);
        }
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        loop {
            if let Some(ch) = self.chars.next() {
                s.push(ch);
            }
            if let Some(pk) = self.chars.peek() {
                if is_tiny_digit(*pk) {
                    continue;
                }
            }
            break;
        }
        match s.parse::<i64>() {
            Ok(n) => Token::Literal(n),
            Err(_) => Token::Unknown(s),
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        loop {
            if let Some(ch) = self.chars.next() {
                s.push(ch.to_ascii_lowercase());
            }
            if let Some(pk) = self.chars.peek() {
                if is_tiny_alphabetic(*pk) {
                    continue;
                }
            }
            break;
        }
        if let Some(word) = Word::from_string(&s) {
            return Token::Word(word);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Token::Ident(ch as usize - 'a' as usize),
            _ => Token::Unknown(s),
        }
    }

    fn minutia(&mut self) -> Token {
        match self.chars.next() {
            Some('{') => Token::LBrace,
            Some('}') => Token::RBrace,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(';') => Token::Semicolon,
            Some('<') => Token::Operator(Operator::Less),
            Some('+') => Token::Operator(Operator::Plus),
            Some('-') => Token::Operator(Operator::Minus),
            Some('=') => Token::Operator(Operator::Equal),
            Some(ch) => Token::Unknown(ch.to_string()),
            None => Token::Unknown(String::new()),
        }
    }
}

impl<'a> Iterator for TinyLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if is_tiny_whitespace(*pk) {
            return Some(self.whitespace());
        }
        if is_tiny_digit(*pk) {
            return Some(self.number());
        }
        if is_tiny_alphabetic(*pk) {
            return Some(self.alphabetic());
        }
        Some(self.minutia())
    }
}
