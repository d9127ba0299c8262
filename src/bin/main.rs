use std::env;

use colored::Colorize;
use serde::Serialize;

// =============================================================================
// The demo catalog
// =============================================================================

#[derive(Debug, Serialize)]
pub struct Demo {
    pub name: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "singleton",
        category: "creational",
        summary: "one service instance owned by the composition root",
    },
    Demo {
        name: "prototype",
        category: "creational",
        summary: "job posts cloned through an explicit duplicate hook",
    },
    Demo {
        name: "factory_method",
        category: "creational",
        summary: "search indexes built by interchangeable factories",
    },
    Demo {
        name: "adapter",
        category: "structural",
        summary: "a legacy task call wrapped to fit the client contract",
    },
    Demo {
        name: "bridge",
        category: "structural",
        summary: "shapes and colors varying independently",
    },
    Demo {
        name: "composite",
        category: "structural",
        summary: "leaf and group nodes behind one tree operation",
    },
    Demo {
        name: "facade",
        category: "structural",
        summary: "one front door over two launch subsystems",
    },
    Demo {
        name: "flyweight",
        category: "structural",
        summary: "shared icon instances keyed by type",
    },
    Demo {
        name: "proxy",
        category: "structural",
        summary: "lazy image loading behind an access gate",
    },
    Demo {
        name: "chain_of_responsibility",
        category: "behavioral",
        summary: "requests walking a handler pipeline",
    },
    Demo {
        name: "memento",
        category: "behavioral",
        summary: "document snapshots on an undo stack",
    },
    Demo {
        name: "observer",
        category: "behavioral",
        summary: "weather displays notified of temperature changes",
    },
    Demo {
        name: "state",
        category: "behavioral",
        summary: "a vending machine answering per current state",
    },
    Demo {
        name: "strategy",
        category: "behavioral",
        summary: "sort algorithms swapped at runtime",
    },
    Demo {
        name: "template_method",
        category: "behavioral",
        summary: "a fixed recipe skeleton with pluggable steps",
    },
];

/// Category names in first-appearance order.
pub fn categories(demos: &[Demo]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for demo in demos {
        if !seen.contains(&demo.category) {
            seen.push(demo.category);
        }
    }
    seen
}

pub fn demos_in<'a>(demos: &'a [Demo], category: &str) -> Vec<&'a Demo> {
    demos.iter().filter(|d| d.category == category).collect()
}

fn print_catalog(demos: &[Demo]) {
    println!("{}", "Design pattern demos".bold());
    for category in categories(demos) {
        let entries = demos_in(demos, category);
        println!("\n{} ({})", category.bold().yellow(), entries.len());
        for demo in entries {
            println!("  {:<24} {}", demo.name.cyan(), demo.summary);
            println!("  {:<24} cargo run --bin {}", "", demo.name);
        }
    }
}

fn main() {
    if env::args().any(|arg| arg == "--json") {
        let json = serde_json::to_string_pretty(DEMOS).expect("catalog serializes");
        println!("{json}");
    } else {
        print_catalog(DEMOS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_fifteen_patterns() {
        assert_eq!(DEMOS.len(), 15);
    }

    #[test]
    fn test_demo_names_are_unique() {
        let mut names: Vec<&str> = DEMOS.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEMOS.len());
    }

    #[test]
    fn test_categories_keep_catalog_order() {
        assert_eq!(
            categories(DEMOS),
            vec!["creational", "structural", "behavioral"]
        );
    }

    #[test]
    fn test_category_sizes_match_the_original_repo() {
        assert_eq!(demos_in(DEMOS, "creational").len(), 3);
        assert_eq!(demos_in(DEMOS, "structural").len(), 6);
        assert_eq!(demos_in(DEMOS, "behavioral").len(), 6);
    }

    #[test]
    fn test_json_output_lists_every_demo() {
        let json = serde_json::to_string(DEMOS).unwrap();
        for demo in DEMOS {
            assert!(json.contains(demo.name));
        }
    }
}
