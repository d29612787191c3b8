use super::ast::{Kind, NodeId, Tree};
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Grammar symbol accepted by the production builders: either a single
/// lexer tag such as `"ID"` or `"PLUS"`, or the three-element
/// parenthesis sequence `["LPAR", inner, "RPAR"]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol<'a> {
    Tag(&'a str),
    Seq([&'a str; 3]),
}

/// ## Syntax tree builder
///
/// Translates parsed grammar symbols into freshly minted subtrees in
/// its node arena. Owns the id sequence: it starts at 1 and advances
/// by exactly 1 per successfully built node, never on failure. A
/// failed build returns `Err` and mints nothing.
pub struct Builder {
    tree: Tree,
    global_id: i64,
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            tree: Tree::new(),
            global_id: 1,
        }
    }

    /// Next id the sequence will hand out.
    pub fn global_id(&self) -> i64 {
        self.global_id
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }

    fn next_id(&mut self) -> i64 {
        let id = self.global_id;
        self.global_id += 1;
        id
    }

    fn leaf(&mut self, kind: Kind, value: Option<i64>) -> NodeId {
        let id = self.next_id();
        self.tree.create(id, kind, value)
    }

    fn binary(&mut self, kind: Kind, lhs: NodeId, rhs: NodeId) -> NodeId {
        let node = self.leaf(kind, Some(-1));
        self.tree.add_parent(lhs, node);
        self.tree.add_parent(rhs, node);
        self.tree.add_child(node, lhs);
        self.tree.add_child(node, rhs);
        node
    }

    /// Mint a bare statement node, e.g. `SEQ` or `WHILE`, for the
    /// grammar parser's non-expression productions.
    pub fn node(&mut self, kind: Kind) -> NodeId {
        self.leaf(kind, None)
    }

    /// Build a `term`: a variable, a constant, or a parenthesis
    /// expression.
    ///
    /// Two mutually exclusive call shapes. Simple: `symbol` is the tag
    /// `"ID"` or `"INT"` and `value` holds the variable slot or the
    /// literal. Parenthesis: `symbol` is the three-element sequence and
    /// both `lhs` and `rhs` are supplied. Anything else is a
    /// precondition violation.
    pub fn term(
        &mut self,
        symbol: Symbol,
        value: Option<i64>,
        lhs: Option<NodeId>,
        rhs: Option<NodeId>,
    ) -> Result<NodeId> {
        let simple = matches!(symbol, Symbol::Tag(_)) && value.is_some();
        let paren = matches!(symbol, Symbol::Seq(_)) && lhs.is_some() && rhs.is_some();
        if simple == paren {
            return Err(
                error!(MalformedProduction; "SET EITHER (SYMBOL, VALUE) OR (SYMBOL, LHS, RHS)"),
            );
        }
        match (symbol, lhs, rhs) {
            (Symbol::Tag("ID"), ..) => Ok(self.leaf(Kind::Var, value)),
            (Symbol::Tag("INT"), ..) => Ok(self.leaf(Kind::Cst, value)),
            (Symbol::Tag(_), ..) => Err(error!(MalformedProduction; "NO TERM FOR SYMBOL")),
            (Symbol::Seq(seq), Some(lhs), Some(rhs)) => {
                self.parenthesis_expression(seq, lhs, rhs)
            }
            (Symbol::Seq(_), ..) => {
                Err(error!(MalformedProduction; "SET EITHER (SYMBOL, VALUE) OR (SYMBOL, LHS, RHS)"))
            }
        }
    }

    /// Build a parenthesis expression from `["LPAR", inner, "RPAR"]`,
    /// delegating the inner symbol to [`Builder::expression`].
    pub fn parenthesis_expression(
        &mut self,
        symbol: [&str; 3],
        lhs: NodeId,
        rhs: NodeId,
    ) -> Result<NodeId> {
        let [lpar, inner, rpar] = symbol;
        if lpar != "LPAR" {
            return Err(error!(MalformedProduction; "MISSING OR MISPLACED LEFT PARENTHESIS"));
        }
        if rpar != "RPAR" {
            return Err(error!(MalformedProduction; "MISSING OR MISPLACED RIGHT PARENTHESIS"));
        }
        self.expression(inner, lhs, rhs)
    }

    /// Build an `expression`: an assignment when `symbol` is `"ID"`,
    /// otherwise it degenerates to a comparison and `symbol` is
    /// irrelevant.
    pub fn expression(&mut self, symbol: &str, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        if symbol != "ID" {
            return self.comparison(lhs, rhs);
        }
        Ok(self.binary(Kind::Set, lhs, rhs))
    }

    /// Build a `sum`: an addition for `"PLUS"`, a subtraction for
    /// `"MINUS"`. Any other symbol has no matching production.
    pub fn sum(&mut self, symbol: &str, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        match symbol {
            "PLUS" => Ok(self.binary(Kind::Add, lhs, rhs)),
            "MINUS" => Ok(self.binary(Kind::Sub, lhs, rhs)),
            _ => Err(error!(MalformedProduction; "NO SUM FOR SYMBOL")),
        }
    }

    /// Build a `comparison`. Tiny-C only supports less-than.
    pub fn comparison(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        Ok(self.binary(Kind::Lt, lhs, rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_simple_terms() {
        let mut builder = Builder::new();
        assert_eq!(1, builder.global_id());

        let var = builder.term(Symbol::Tag("ID"), Some(3), None, None).unwrap();
        let node = builder.tree().get(var).unwrap();
        assert_eq!(1, node.id());
        assert_eq!(Kind::Var, node.get_kind());
        assert_eq!(Some(3), node.value());

        let cst = builder.term(Symbol::Tag("INT"), Some(7), None, None).unwrap();
        let node = builder.tree().get(cst).unwrap();
        assert_eq!(2, node.id());
        assert_eq!(Kind::Cst, node.get_kind());
        assert_eq!(Some(7), node.value());

        assert_eq!(3, builder.global_id());
    }

    #[test]
    fn test_term_malformed_shapes() {
        let mut builder = Builder::new();
        // Value and operands missing entirely.
        let err = builder.term(Symbol::Tag("ID"), None, None, None).unwrap_err();
        assert_eq!(ErrorCode::MalformedProduction, err.code());
        // Unknown simple tag.
        let err = builder.term(Symbol::Tag("FLOAT"), Some(1), None, None).unwrap_err();
        assert_eq!(ErrorCode::MalformedProduction, err.code());
        // Sequence shape without operands.
        let err = builder
            .term(Symbol::Seq(["LPAR", "ID", "RPAR"]), None, None, None)
            .unwrap_err();
        assert_eq!(ErrorCode::MalformedProduction, err.code());
        // Failures never advance the id sequence.
        assert_eq!(1, builder.global_id());
    }

    #[test]
    fn test_parenthesis_term() {
        let mut builder = Builder::new();
        let lhs = builder.term(Symbol::Tag("ID"), Some(0), None, None).unwrap();
        let rhs = builder.term(Symbol::Tag("INT"), Some(4), None, None).unwrap();
        let set = builder
            .term(Symbol::Seq(["LPAR", "ID", "RPAR"]), None, Some(lhs), Some(rhs))
            .unwrap();
        assert_eq!(Kind::Set, builder.tree().kind(set));
        assert_eq!(&[lhs, rhs], builder.tree().children(set));
    }

    #[test]
    fn test_parenthesis_delimiters() {
        let mut builder = Builder::new();
        let lhs = builder.term(Symbol::Tag("INT"), Some(1), None, None).unwrap();
        let rhs = builder.term(Symbol::Tag("INT"), Some(2), None, None).unwrap();
        let before = builder.global_id();

        let err = builder
            .parenthesis_expression(["RPAR", "ID", "RPAR"], lhs, rhs)
            .unwrap_err();
        assert_eq!(ErrorCode::MalformedProduction, err.code());
        assert!(err.to_string().contains("LEFT"));

        let err = builder
            .parenthesis_expression(["LPAR", "ID", "LPAR"], lhs, rhs)
            .unwrap_err();
        assert!(err.to_string().contains("RIGHT"));

        assert_eq!(before, builder.global_id());
    }

    #[test]
    fn test_expression_builds_set() {
        let mut builder = Builder::new();
        let lhs = builder.term(Symbol::Tag("ID"), Some(2), None, None).unwrap();
        let rhs = builder.term(Symbol::Tag("INT"), Some(5), None, None).unwrap();
        let set = builder.expression("ID", lhs, rhs).unwrap();
        let node = builder.tree().get(set).unwrap();
        assert_eq!(Kind::Set, node.get_kind());
        assert_eq!(Some(-1), node.value());
        assert_eq!(&[lhs, rhs], node.children());
        assert_eq!(Some(set), builder.tree().get(lhs).unwrap().parent());
        assert_eq!(Some(set), builder.tree().get(rhs).unwrap().parent());
    }

    #[test]
    fn test_expression_degenerates_to_comparison() {
        let mut builder = Builder::new();
        let lhs = builder.term(Symbol::Tag("INT"), Some(1), None, None).unwrap();
        let rhs = builder.term(Symbol::Tag("INT"), Some(2), None, None).unwrap();
        let node = builder.expression("NEQ", lhs, rhs).unwrap();
        assert_eq!(Kind::Lt, builder.tree().kind(node));
    }

    #[test]
    fn test_sum_symbols() {
        let mut builder = Builder::new();
        let lhs = builder.term(Symbol::Tag("INT"), Some(1), None, None).unwrap();
        let rhs = builder.term(Symbol::Tag("INT"), Some(2), None, None).unwrap();
        let add = builder.sum("PLUS", lhs, rhs).unwrap();
        assert_eq!(Kind::Add, builder.tree().kind(add));
        let sub = builder.sum("MINUS", lhs, rhs).unwrap();
        assert_eq!(Kind::Sub, builder.tree().kind(sub));

        let before = builder.global_id();
        let err = builder.sum("TIMES", lhs, rhs).unwrap_err();
        assert_eq!(ErrorCode::MalformedProduction, err.code());
        assert_eq!(before, builder.global_id());
    }

    #[test]
    fn test_id_sequence_shared_across_builders() {
        let mut builder = Builder::new();
        let a = builder.term(Symbol::Tag("ID"), Some(0), None, None).unwrap();
        let b = builder.term(Symbol::Tag("INT"), Some(1), None, None).unwrap();
        let sum = builder.sum("PLUS", a, b).unwrap();
        let cmp = builder.comparison(sum, b).unwrap();
        let set = builder.expression("ID", a, cmp).unwrap();
        let ids: Vec<i64> = [a, b, sum, cmp, set]
            .iter()
            .map(|n| builder.tree().get(*n).unwrap().id())
            .collect();
        assert_eq!(vec![1, 2, 3, 4, 5], ids);
        assert_eq!(6, builder.global_id());
    }
}
