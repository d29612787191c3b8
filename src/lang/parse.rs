use super::ast::{Kind, NodeId, Tree};
use super::build::{Builder, Symbol};
use super::token::{Operator, Token, Word};
use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Parse a token stream into a syntax tree, returning the arena and
/// the id of the `PROG` root.
pub fn parse(tokens: &[Token]) -> Result<(Tree, NodeId)> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    builder: Builder,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<(Tree, NodeId)> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            builder: Builder::new(),
        };
        match parse.program() {
            Ok(root) => Ok((parse.builder.into_tree(), root)),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        let tree = self.builder.tree_mut();
        tree.add_child(parent, child);
        tree.add_parent(child, parent);
    }

    fn program(&mut self) -> Result<NodeId> {
        let statement = self.statement()?;
        if self.peek().is_some() {
            return Err(error!(SyntaxError; "EXPECTED END OF PROGRAM"));
        }
        let program = self.builder.node(Kind::Prog);
        self.attach(program, statement);
        Ok(program)
    }

    fn statement(&mut self) -> Result<NodeId> {
        match self.peek() {
            Some(Token::Word(Word::If)) => {
                self.next();
                self.r#if()
            }
            Some(Token::Word(Word::While)) => {
                self.next();
                self.r#while()
            }
            Some(Token::Word(Word::Do)) => {
                self.next();
                self.r#do()
            }
            Some(Token::LBrace) => {
                self.next();
                self.block()
            }
            Some(Token::Semicolon) => {
                self.next();
                Ok(self.builder.node(Kind::Empty))
            }
            Some(_) => self.expression_statement(),
            None => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#if(&mut self) -> Result<NodeId> {
        let condition = self.paren_expression()?;
        let consequent = self.statement()?;
        if let Some(Token::Word(Word::Else)) = self.peek() {
            self.next();
            let alternate = self.statement()?;
            let node = self.builder.node(Kind::IfElse);
            self.attach(node, condition);
            self.attach(node, consequent);
            self.attach(node, alternate);
            return Ok(node);
        }
        let node = self.builder.node(Kind::If);
        self.attach(node, condition);
        self.attach(node, consequent);
        Ok(node)
    }

    fn r#while(&mut self) -> Result<NodeId> {
        let condition = self.paren_expression()?;
        let body = self.statement()?;
        let node = self.builder.node(Kind::While);
        self.attach(node, condition);
        self.attach(node, body);
        Ok(node)
    }

    fn r#do(&mut self) -> Result<NodeId> {
        let body = self.statement()?;
        match self.next() {
            Some(Token::Word(Word::While)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED WHILE")),
        }
        let condition = self.paren_expression()?;
        self.expect(Token::Semicolon)?;
        let node = self.builder.node(Kind::Do);
        self.attach(node, body);
        self.attach(node, condition);
        Ok(node)
    }

    /// `{ s1 s2 .. }` builds the left-leaning SEQ chain
    /// `SEQ(SEQ(EMPTY, s1), s2)..` so an empty block is just EMPTY.
    fn block(&mut self) -> Result<NodeId> {
        let mut node = self.builder.node(Kind::Empty);
        loop {
            match self.peek() {
                Some(Token::RBrace) => {
                    self.next();
                    return Ok(node);
                }
                None => return Err(error!(SyntaxError; "EXPECTED RIGHT BRACE")),
                Some(_) => {
                    let statement = self.statement()?;
                    let seq = self.builder.node(Kind::Seq);
                    self.attach(seq, node);
                    self.attach(seq, statement);
                    node = seq;
                }
            }
        }
    }

    fn expression_statement(&mut self) -> Result<NodeId> {
        let expression = self.expression()?;
        self.expect(Token::Semicolon)?;
        let node = self.builder.node(Kind::Expr);
        self.attach(node, expression);
        Ok(node)
    }

    fn paren_expression(&mut self) -> Result<NodeId> {
        self.expect(Token::LParen)?;
        let expression = self.expression()?;
        self.expect(Token::RParen)?;
        Ok(expression)
    }

    /// `<expr> ::= <test> | <id> "=" <expr>`. One token of lookahead
    /// is not enough to spot the assignment shape up front, so parse a
    /// test first and rewrite when it turns out to be a bare variable
    /// followed by `=`.
    fn expression(&mut self) -> Result<NodeId> {
        let lhs = self.test()?;
        if self.builder.tree().kind(lhs) == Kind::Var {
            if let Some(Token::Operator(Operator::Equal)) = self.peek() {
                self.next();
                let rhs = self.expression()?;
                return self.builder.expression("ID", lhs, rhs);
            }
        }
        Ok(lhs)
    }

    fn test(&mut self) -> Result<NodeId> {
        let lhs = self.sum()?;
        if let Some(Token::Operator(Operator::Less)) = self.peek() {
            self.next();
            let rhs = self.sum()?;
            return self.builder.expression("LT", lhs, rhs);
        }
        Ok(lhs)
    }

    fn sum(&mut self) -> Result<NodeId> {
        let mut lhs = self.term()?;
        loop {
            let symbol = match self.peek() {
                Some(Token::Operator(Operator::Plus)) => "PLUS",
                Some(Token::Operator(Operator::Minus)) => "MINUS",
                _ => break,
            };
            self.next();
            let rhs = self.term()?;
            lhs = self.builder.sum(symbol, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<NodeId> {
        match self.next() {
            Some(Token::Ident(index)) => {
                self.builder
                    .term(Symbol::Tag("ID"), Some(*index as i64), None, None)
            }
            Some(Token::Literal(value)) => {
                self.builder.term(Symbol::Tag("INT"), Some(*value), None, None)
            }
            Some(Token::LParen) => {
                let expression = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expression)
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                LBrace => "EXPECTED LEFT BRACE",
                RBrace => "EXPECTED RIGHT BRACE",
                LParen => "EXPECTED LEFT PARENTHESIS",
                RParen => "EXPECTED RIGHT PARENTHESIS",
                Semicolon => "EXPECTED SEMICOLON",
                _ => "UNEXPECTED TOKEN",
            }
        ))
    }
}
