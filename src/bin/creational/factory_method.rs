use thiserror::Error;

// =============================================================================
// The product: a search index behind a capability trait
// =============================================================================

pub trait SearchIndex {
    fn search(&self) -> String;
}

pub struct PlainJobsIndex;

impl SearchIndex for PlainJobsIndex {
    fn search(&self) -> String {
        "Searching in plain text job index".to_string()
    }
}

pub struct AggregatedJobsIndex;

impl SearchIndex for AggregatedJobsIndex {
    fn search(&self) -> String {
        "Searching in aggregated job index".to_string()
    }
}

// =============================================================================
// The factories: each one knows how to build exactly one index
// =============================================================================

pub trait SearchIndexFactory: std::fmt::Debug {
    fn create_search_index(&self) -> Box<dyn SearchIndex>;
}

#[derive(Debug)]
pub struct PlainJobsIndexFactory;

impl SearchIndexFactory for PlainJobsIndexFactory {
    fn create_search_index(&self) -> Box<dyn SearchIndex> {
        Box::new(PlainJobsIndex)
    }
}

#[derive(Debug)]
pub struct AggregatedJobsIndexFactory;

impl SearchIndexFactory for AggregatedJobsIndexFactory {
    fn create_search_index(&self) -> Box<dyn SearchIndex> {
        Box::new(AggregatedJobsIndex)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FactoryError {
    #[error("unknown search index kind: '{0}'")]
    UnknownKind(String),
}

/// String-keyed front door, for callers that pick the index at runtime.
pub fn factory_for(kind: &str) -> Result<Box<dyn SearchIndexFactory>, FactoryError> {
    match kind {
        "plain" => Ok(Box::new(PlainJobsIndexFactory)),
        "aggregated" => Ok(Box::new(AggregatedJobsIndexFactory)),
        other => Err(FactoryError::UnknownKind(other.to_string())),
    }
}

// =============================================================================
// The client: built from a factory, unaware of the concrete index
// =============================================================================

pub struct JobSearch {
    index: Box<dyn SearchIndex>,
}

impl JobSearch {
    pub fn new(factory: &dyn SearchIndexFactory) -> Self {
        Self {
            index: factory.create_search_index(),
        }
    }

    pub fn search(&self) -> String {
        self.index.search()
    }
}

fn main() {
    println!("=== Fixed factories ===");
    let plain = JobSearch::new(&PlainJobsIndexFactory);
    let aggregated = JobSearch::new(&AggregatedJobsIndexFactory);
    println!("{}", plain.search());
    println!("{}", aggregated.search());

    println!("\n=== Picking the factory at runtime ===");
    for kind in ["plain", "aggregated", "fulltext"] {
        match factory_for(kind) {
            Ok(factory) => println!("{kind}: {}", JobSearch::new(factory.as_ref()).search()),
            Err(err) => println!("{kind}: {err}"),
        }
    }
}
