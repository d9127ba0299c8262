use std::collections::HashMap;
use std::rc::Rc;

use rand::Rng;
use thiserror::Error;

/* ============================================================
 * Shared icon instances, keyed by intrinsic type
 * ============================================================
 */

#[derive(Debug, Error, PartialEq)]
pub enum FlyweightError {
    #[error("icon type key must not be empty")]
    EmptyTypeKey,
}

/// The shared part of an icon. Only the type name lives here; positions are
/// handed in per render call and never stored.
#[derive(Debug)]
pub struct Icon {
    kind: String,
}

impl Icon {
    fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn render(&self, x: i32, y: i32) -> String {
        format!(
            "Rendering icon of type '{}' at position ({x}, {y}).",
            self.kind
        )
    }
}

/// Hands out one shared instance per type key. Entries are created on first
/// request and never evicted.
#[derive(Default)]
pub struct IconFactory {
    icons: HashMap<String, Rc<Icon>>,
}

impl IconFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_icon(&mut self, kind: &str) -> Result<Rc<Icon>, FlyweightError> {
        if kind.is_empty() {
            return Err(FlyweightError::EmptyTypeKey);
        }
        let icon = self
            .icons
            .entry(kind.to_string())
            .or_insert_with(|| Rc::new(Icon::new(kind)));
        Ok(Rc::clone(icon))
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/* ============================================================
 * Client side: renders icons without knowing about sharing
 * ============================================================
 */

pub struct IconManager {
    factory: IconFactory,
}

impl IconManager {
    pub fn new(factory: IconFactory) -> Self {
        Self { factory }
    }

    pub fn display_icon(&mut self, kind: &str, x: i32, y: i32) -> Result<String, FlyweightError> {
        let icon = self.factory.get_icon(kind)?;
        Ok(icon.render(x, y))
    }

    pub fn cached_icons(&self) -> usize {
        self.factory.len()
    }
}

fn main() {
    println!("=== Fixed renders ===");
    let mut manager = IconManager::new(IconFactory::new());
    for (kind, x, y) in [("folder", 10, 10), ("file", 20, 10), ("folder", 10, 40)] {
        match manager.display_icon(kind, x, y) {
            Ok(line) => println!("{line}"),
            Err(err) => println!("skipped: {err}"),
        }
    }
    println!("distinct icons in cache: {}", manager.cached_icons());

    println!("\n=== A screen full of icons, three shared instances ===");
    let mut rng = rand::thread_rng();
    for _ in 0..8 {
        let kind = ["folder", "file", "trash"][rng.gen_range(0..3)];
        let x = rng.gen_range(0..800);
        let y = rng.gen_range(0..600);
        if let Ok(line) = manager.display_icon(kind, x, y) {
            println!("{line}");
        }
    }
    println!("distinct icons in cache: {}", manager.cached_icons());
}
