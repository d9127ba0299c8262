// =============================================================================
// Document and its opaque snapshots
// =============================================================================

/// A saved document state. Only `Document` can look inside.
#[derive(Debug, Clone)]
pub struct DocumentMemento {
    content: String,
}

impl DocumentMemento {
    fn new(content: String) -> Self {
        Self { content }
    }
}

#[derive(Debug, Default)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self) -> DocumentMemento {
        DocumentMemento::new(self.content.clone())
    }

    pub fn restore(&mut self, memento: &DocumentMemento) {
        self.content = memento.content.clone();
    }
}

// =============================================================================
// History: a plain undo stack
// =============================================================================

#[derive(Default)]
pub struct History {
    mementos: Vec<DocumentMemento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, memento: DocumentMemento) {
        self.mementos.push(memento);
    }

    pub fn pop(&mut self) -> Option<DocumentMemento> {
        self.mementos.pop()
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

fn main() {
    let mut document = Document::new();
    let mut history = History::new();

    println!("=== Writing with checkpoints ===");
    document.write("Dear team,");
    history.push(document.save());
    document.write(" the launch is on Friday.");
    history.push(document.save());
    document.write(" Cancel everything!");
    println!("current: {:?}", document.content());

    println!("\n=== Undoing twice ===");
    if let Some(snapshot) = history.pop() {
        document.restore(&snapshot);
        println!("after first undo:  {:?}", document.content());
    }
    if let Some(snapshot) = history.pop() {
        document.restore(&snapshot);
        println!("after second undo: {:?}", document.content());
    }
    println!("snapshots left: {}", history.len());
}
