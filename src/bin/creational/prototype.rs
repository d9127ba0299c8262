use std::collections::HashMap;

// =============================================================================
// JobPost prototype: copies come out marked and demoted to draft
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    New,
    Draft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobPost {
    title: String,
    status: Status,
}

impl JobPost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: Status::New,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The clone hook. A duplicate is never a verbatim copy: its title gets
    /// the copy marker and its status resets to draft.
    pub fn duplicate(&self) -> JobPost {
        JobPost {
            title: format!("Copy of ({})", self.title),
            status: Status::Draft,
        }
    }
}

// =============================================================================
// Registry of prototypes: hands out duplicates, never the originals
// =============================================================================

#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, JobPost>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, prototype: JobPost) {
        self.prototypes.insert(key.into(), prototype);
    }

    pub fn instantiate(&self, key: &str) -> Option<JobPost> {
        self.prototypes.get(key).map(JobPost::duplicate)
    }
}

fn main() {
    println!("=== Duplicating a post directly ===");
    let original = JobPost::new("Senior Backend Engineer");
    let copy = original.duplicate();
    println!("original: {:?} ({:?})", original.title(), original.status());
    println!("copy:     {:?} ({:?})", copy.title(), copy.status());

    println!("\n=== Stamping out posts from a registry ===");
    let mut registry = PrototypeRegistry::new();
    registry.register("backend", original);
    registry.register("frontend", JobPost::new("Frontend Engineer"));

    for key in ["backend", "frontend", "devops"] {
        match registry.instantiate(key) {
            Some(post) => println!("{key}: {:?} ({:?})", post.title(), post.status()),
            None => println!("{key}: no prototype registered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_starts_as_new() {
        let post = JobPost::new("Engineer");
        assert_eq!(post.title(), "Engineer");
        assert_eq!(post.status(), Status::New);
    }

    #[test]
    fn test_duplicate_marks_title_and_resets_status() {
        let post = JobPost::new("Engineer");
        let copy = post.duplicate();
        assert_eq!(copy.title(), "Copy of (Engineer)");
        assert_eq!(copy.status(), Status::Draft);
    }

    #[test]
    fn test_duplicate_leaves_the_original_untouched() {
        let post = JobPost::new("Engineer");
        let _copy = post.duplicate();
        assert_eq!(post.title(), "Engineer");
        assert_eq!(post.status(), Status::New);
    }

    #[test]
    fn test_duplicating_a_duplicate_nests_the_marker() {
        let copy = JobPost::new("Engineer").duplicate().duplicate();
        assert_eq!(copy.title(), "Copy of (Copy of (Engineer))");
    }

    #[test]
    fn test_registry_hands_out_fresh_duplicates() {
        let mut registry = PrototypeRegistry::new();
        registry.register("backend", JobPost::new("Backend Engineer"));

        let first = registry.instantiate("backend").unwrap();
        let second = registry.instantiate("backend").unwrap();
        assert_eq!(first.title(), "Copy of (Backend Engineer)");
        assert_eq!(first, second);

        // the stored prototype is still the pristine original
        let third = registry.instantiate("backend").unwrap();
        assert_eq!(third.status(), Status::Draft);
    }

    #[test]
    fn test_registry_miss_returns_none() {
        let registry = PrototypeRegistry::new();
        assert!(registry.instantiate("missing").is_none());
    }
}
