//! The hierarchy describes where a job sits in an organization: its own
//! position and the positions that report to it.
//!
//! Each node owns its subordinates outright, so a hierarchy is always a tree
//! (a node can't end up as its own subordinate). Cloning a node copies the
//! whole subtree beneath it.

use std::fmt;

/// A rung on the org chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Employee,
    Manager,
    Executive,
    CEO,
}

impl Default for Position {
    fn default() -> Self {
        Position::Employee
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Employee => "Employee",
            Position::Manager => "Manager",
            Position::Executive => "Executive",
            Position::CEO => "CEO",
        };
        f.write_str(name)
    }
}

/// A position plus everyone who reports to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, getset::Getters)]
#[getset(get = "pub")]
pub struct Hierarchy {
    position: Position,
    subordinates: Vec<Hierarchy>,
}

impl Hierarchy {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            subordinates: vec![],
        }
    }

    pub fn with_subordinates(position: Position, subordinates: Vec<Hierarchy>) -> Self {
        Self {
            position,
            subordinates,
        }
    }

    /// Add a direct report to this node.
    pub fn add_subordinate(&mut self, subordinate: Hierarchy) {
        self.subordinates.push(subordinate);
    }

    /// Count the nodes in this subtree, including this one.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a hierarchy holds at least its own position.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The number of levels in this subtree. A node with no subordinates has a
    /// depth of 1.
    pub fn depth(&self) -> usize {
        1 + self.subordinates.iter().map(|sub| sub.depth()).max().unwrap_or(0)
    }

    /// Walk the subtree depth-first, parents before their subordinates.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Pre-order iterator over a `Hierarchy`, see [Hierarchy::iter].
pub struct Iter<'a> {
    stack: Vec<&'a Hierarchy>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Hierarchy;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed so the first subordinate comes off the stack first
        self.stack.extend(node.subordinates.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Hierarchy {
    type Item = &'a Hierarchy;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
