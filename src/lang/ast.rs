/*!
## Tiny-C Syntax Tree

Nodes live in an arena owned by [`Tree`] and refer to each other by
stable [`NodeId`] indices. Child attachment and parent attachment are
two separate calls; keeping the relation consistent is the caller's
obligation, not the arena's.

*/

/// Stable index of a node in its [`Tree`] arena.
pub type NodeId = usize;

/// Node kind vocabulary.
///
/// `Var` and `Cst` are the value-carrying leaves and `Set`, `Add`,
/// `Sub`, `Lt` the binary operator productions. The remaining kinds
/// are statement wrappers minted by the grammar parser; the machine
/// module treats them as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Var,
    Cst,
    Set,
    Add,
    Sub,
    Lt,
    Empty,
    Seq,
    Expr,
    Prog,
    If,
    IfElse,
    While,
    Do,
}

/// Options for [`Tree::merge`].
#[derive(Debug, Clone, Copy)]
pub struct MergeOptions {
    /// Copy the target's value into the merging node.
    pub absorb_value: bool,
    /// Place the merging node's pre-existing children before the
    /// absorbed ones. When false the absorbed children come first.
    pub parent_children_first: bool,
}

impl Default for MergeOptions {
    fn default() -> MergeOptions {
        MergeOptions {
            absorb_value: false,
            parent_children_first: true,
        }
    }
}

pub struct Node {
    id: i64,
    kind: Kind,
    value: Option<i64>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    position_in_tree: Option<usize>,
}

/// Equality is a value comparison of id, kind, and value. Tree
/// position is deliberately ignored so comparing never recurses.
impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.id == other.id && self.kind == other.kind && self.value == other.value
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {{ id: {}, kind: {:?}", self.id, self.kind)?;
        if let Some(value) = self.value {
            write!(f, ", value: {}", value)?;
        }
        if let Some(position) = self.position_in_tree {
            write!(f, ", position: {}", position)?;
        }
        write!(f, " }}")
    }
}

impl Node {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn get_kind(&self) -> Kind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn position_in_tree(&self) -> Option<usize> {
        self.position_in_tree
    }

    pub fn set_position_in_tree(&mut self, position: usize) {
        self.position_in_tree = Some(position);
    }
}

/// ## Node arena
///
/// Detached nodes stay allocated but unreferenced; the arena is
/// dropped as a whole when compilation is finished with it.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Tree {
        Tree::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a leaf with no parent and no children. The id is
    /// drawn by the caller; uniqueness is the caller's obligation.
    pub fn create(&mut self, id: i64, kind: Kind, value: Option<i64>) -> NodeId {
        self.nodes.push(Node {
            id,
            kind,
            value,
            parent: None,
            children: vec![],
            position_in_tree: None,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node)
    }

    pub fn kind(&self, node: NodeId) -> Kind {
        self.nodes[node].kind
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// Append `child` to the node's children. The child's parent
    /// back-reference is *not* touched; pair this with
    /// [`Tree::add_parent`].
    pub fn add_child(&mut self, node: NodeId, child: NodeId) {
        self.nodes[node].children.push(child);
    }

    /// Set the node's parent back-reference. The parent's children
    /// list is *not* touched; pair this with [`Tree::add_child`].
    pub fn add_parent(&mut self, node: NodeId, parent: NodeId) {
        self.nodes[node].parent = Some(parent);
    }

    /// Remove `child` from the node's children and clear its parent
    /// back-reference. No-op if `child` is not present.
    pub fn remove_child(&mut self, node: NodeId, child: NodeId) {
        let children = &mut self.nodes[node].children;
        if let Some(position) = children.iter().position(|c| *c == child) {
            children.remove(position);
            self.nodes[child].parent = None;
        }
    }

    /// Detach the node from its parent. No-op if it has none.
    pub fn remove_from_tree(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent {
            self.remove_child(parent, node);
        }
    }

    /// Merge `target` into `node`: every child of `target` is
    /// reparented onto `node` in its original relative order, then
    /// `target` is detached from the tree. Used to collapse wrapper
    /// productions while keeping their payload subtrees.
    pub fn merge(&mut self, node: NodeId, target: NodeId, options: MergeOptions) {
        if options.absorb_value {
            self.nodes[node].value = self.nodes[target].value;
        }
        let absorbed = std::mem::take(&mut self.nodes[target].children);
        for child in absorbed.iter() {
            self.nodes[*child].parent = Some(node);
        }
        if options.parent_children_first {
            self.nodes[node].children.extend(absorbed);
        } else {
            let tail = std::mem::replace(&mut self.nodes[node].children, absorbed);
            self.nodes[node].children.extend(tail);
        }
        self.remove_from_tree(target);
    }
}
