use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

// =============================================================================
// Component tree: one closed set of node kinds behind a single operation
// =============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum CompositeError {
    #[error("cannot add children to a leaf")]
    NotAGroup,

    #[error("adding this child would make the group contain itself")]
    CycleDetected,
}

/// A node in a part-whole hierarchy. Children are shared references so that
/// removal works on node identity, not on label equality.
#[derive(Debug)]
pub enum Component {
    Leaf { name: String },
    Group { children: RefCell<Vec<Rc<Component>>> },
}

impl Component {
    pub fn leaf(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Component::Leaf { name: name.into() })
    }

    pub fn group() -> Rc<Self> {
        Rc::new(Component::Group {
            children: RefCell::new(Vec::new()),
        })
    }

    /// Appends a child. The same node may be added more than once; inserting
    /// a group into itself (directly or through a descendant) is rejected.
    pub fn add(&self, child: &Rc<Component>) -> Result<(), CompositeError> {
        let Component::Group { children } = self else {
            return Err(CompositeError::NotAGroup);
        };
        if child.reaches(self) {
            return Err(CompositeError::CycleDetected);
        }
        children.borrow_mut().push(Rc::clone(child));
        Ok(())
    }

    /// Drops every child that is the same node as `child`. Removing a node
    /// that was never added is a no-op, as is removing from a leaf.
    pub fn remove(&self, child: &Rc<Component>) {
        if let Component::Group { children } = self {
            children.borrow_mut().retain(|c| !Rc::ptr_eq(c, child));
        }
    }

    pub fn operation(&self) -> String {
        match self {
            Component::Leaf { name } => format!("Leaf: {name}"),
            Component::Group { children } => {
                let parts: Vec<String> = children
                    .borrow()
                    .iter()
                    .map(|child| child.operation())
                    .collect();
                format!("Composite: [{}]", parts.join(", "))
            }
        }
    }

    pub fn child_count(&self) -> usize {
        match self {
            Component::Leaf { .. } => 0,
            Component::Group { children } => children.borrow().len(),
        }
    }

    /// True when `target` is this node or any node under it.
    fn reaches(&self, target: &Component) -> bool {
        if std::ptr::eq(self, target) {
            return true;
        }
        match self {
            Component::Leaf { .. } => false,
            Component::Group { children } => {
                children.borrow().iter().any(|c| c.reaches(target))
            }
        }
    }
}

// =============================================================================
// Demo
// =============================================================================

fn main() {
    println!("=== Building a two-level tree ===");
    let branch = Component::group();
    let leaf1 = Component::leaf("Leaf 1");
    let leaf2 = Component::leaf("Leaf 2");
    branch.add(&leaf1).expect("branch accepts leaves");
    branch.add(&leaf2).expect("branch accepts leaves");

    let root = Component::group();
    let leaf3 = Component::leaf("Leaf 3");
    root.add(&leaf3).expect("root accepts leaves");
    root.add(&branch).expect("root accepts the branch");

    println!("branch: {}", branch.operation());
    println!("root:   {}", root.operation());

    println!("\n=== Removing by identity ===");
    root.remove(&leaf3);
    println!("after removing Leaf 3: {}", root.operation());
    root.remove(&leaf3); // absent now, nothing happens
    println!("after removing it again: {}", root.operation());

    println!("\n=== Cycle guard ===");
    match root.add(&root) {
        Ok(()) => println!("root now contains itself?!"),
        Err(err) => println!("rejected: {err}"),
    }
    match branch.add(&root) {
        Ok(()) => println!("branch now contains its own ancestor?!"),
        Err(err) => println!("rejected: {err}"),
    }
}
