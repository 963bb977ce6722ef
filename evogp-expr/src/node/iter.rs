use super::Node;

/// An iterator that iteratively traverses the tree of nodes in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
    last_visited: Option<&'a Node>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new iterator that traverses the tree of nodes in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(node: &'a Node) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node matches the last visited node.
    fn is_last_visited(&self, node: &'a Node) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, node),
            None => false,
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.last()?;
            match node {
                Node::Constant(_) | Node::Variable(_, _) => return self.visit(),
                Node::Apply(_, children) => {
                    if children.is_empty() || self.is_last_visited(children.last().unwrap()) {
                        return self.visit();
                    }
                    for child in children.iter().rev() {
                        self.stack.push(child);
                    }
                },
            }
        }
    }
}
