use super::{Address, Opcode};
use crate::error;
use crate::lang::ast::{Kind, NodeId, Tree};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Linearize the tree rooted at `root` into an instruction list.
///
/// Forward branches are emitted with a placeholder address and patched
/// once their target position is known. As a side effect every visited
/// node is stamped with its emission position (`position_in_tree`).
pub fn generate(tree: &mut Tree, root: NodeId) -> Result<Vec<Opcode>> {
    let mut generator = Generator { code: vec![] };
    generator.statement(tree, root)?;
    Ok(generator.code)
}

struct Generator {
    code: Vec<Opcode>,
}

impl Generator {
    fn statement(&mut self, tree: &mut Tree, node: NodeId) -> Result<()> {
        self.mark(tree, node);
        match tree.kind(node) {
            Kind::Prog => {
                let body = self.child(tree, node, 0)?;
                self.statement(tree, body)?;
                self.emit(Opcode::Halt);
            }
            Kind::Empty => self.emit(Opcode::Empty),
            Kind::Seq => {
                let head = self.child(tree, node, 0)?;
                let tail = self.child(tree, node, 1)?;
                self.statement(tree, head)?;
                self.statement(tree, tail)?;
            }
            Kind::Expr => {
                let expression = self.child(tree, node, 0)?;
                self.expression(tree, expression)?;
                // ISTORE already consumed the value.
                if tree.kind(expression) != Kind::Set {
                    self.emit(Opcode::Pop);
                }
            }
            Kind::If => {
                let condition = self.child(tree, node, 0)?;
                let consequent = self.child(tree, node, 1)?;
                self.expression(tree, condition)?;
                let exit = self.branch(Opcode::JumpZero(0));
                self.statement(tree, consequent)?;
                self.patch(exit)?;
            }
            Kind::IfElse => {
                let condition = self.child(tree, node, 0)?;
                let consequent = self.child(tree, node, 1)?;
                let alternate = self.child(tree, node, 2)?;
                self.expression(tree, condition)?;
                let alt = self.branch(Opcode::JumpZero(0));
                self.statement(tree, consequent)?;
                let exit = self.branch(Opcode::Jump(0));
                self.patch(alt)?;
                self.statement(tree, alternate)?;
                self.patch(exit)?;
            }
            Kind::While => {
                let condition = self.child(tree, node, 0)?;
                let body = self.child(tree, node, 1)?;
                let top = self.code.len();
                self.expression(tree, condition)?;
                let exit = self.branch(Opcode::JumpZero(0));
                self.statement(tree, body)?;
                self.emit(Opcode::Jump(top));
                self.patch(exit)?;
            }
            Kind::Do => {
                let body = self.child(tree, node, 0)?;
                let condition = self.child(tree, node, 1)?;
                let top = self.code.len();
                self.statement(tree, body)?;
                self.expression(tree, condition)?;
                self.emit(Opcode::JumpNotZero(top));
            }
            _ => return Err(error!(InternalError; "EXPRESSION IN STATEMENT POSITION")),
        }
        Ok(())
    }

    fn expression(&mut self, tree: &mut Tree, node: NodeId) -> Result<()> {
        self.mark(tree, node);
        match tree.kind(node) {
            Kind::Var => self.emit(Opcode::Fetch(node)),
            Kind::Cst => self.emit(Opcode::Push(node)),
            Kind::Set => {
                let variable = self.child(tree, node, 0)?;
                let value = self.child(tree, node, 1)?;
                if tree.kind(variable) != Kind::Var {
                    return Err(error!(InternalError; "ASSIGNMENT TARGET IS NOT A VARIABLE"));
                }
                if tree.kind(value) == Kind::Set {
                    // ISTORE pops, so a chained assignment would leave
                    // nothing for the outer store to consume.
                    return Err(error!(SyntaxError; "CHAINED ASSIGNMENT NOT SUPPORTED"));
                }
                self.expression(tree, value)?;
                self.mark(tree, variable);
                self.emit(Opcode::Store(variable));
            }
            Kind::Add => {
                self.operands(tree, node)?;
                self.emit(Opcode::Add);
            }
            Kind::Sub => {
                self.operands(tree, node)?;
                self.emit(Opcode::Sub);
            }
            Kind::Lt => {
                self.operands(tree, node)?;
                self.emit(Opcode::Less);
            }
            _ => return Err(error!(InternalError; "STATEMENT IN EXPRESSION POSITION")),
        }
        Ok(())
    }

    fn operands(&mut self, tree: &mut Tree, node: NodeId) -> Result<()> {
        let lhs = self.child(tree, node, 0)?;
        let rhs = self.child(tree, node, 1)?;
        self.expression(tree, lhs)?;
        self.expression(tree, rhs)
    }

    fn child(&self, tree: &Tree, node: NodeId, index: usize) -> Result<NodeId> {
        match tree.children(node).get(index) {
            Some(child) => Ok(*child),
            None => Err(error!(InternalError; "MISSING OPERAND NODE")),
        }
    }

    fn mark(&self, tree: &mut Tree, node: NodeId) {
        if let Some(n) = tree.get_mut(node) {
            n.set_position_in_tree(self.code.len());
        }
    }

    fn emit(&mut self, op: Opcode) {
        self.code.push(op);
    }

    /// Emit a branch whose address will be patched later.
    fn branch(&mut self, op: Opcode) -> Address {
        let at = self.code.len();
        self.code.push(op);
        at
    }

    /// Point the branch at `at` to the current end of the code.
    fn patch(&mut self, at: Address) -> Result<()> {
        let target = self.code.len();
        match self.code.get_mut(at) {
            Some(Opcode::Jump(addr))
            | Some(Opcode::JumpZero(addr))
            | Some(Opcode::JumpNotZero(addr)) => {
                *addr = target;
                Ok(())
            }
            _ => Err(error!(InternalError; "PATCH TARGET IS NOT A BRANCH")),
        }
    }
}
