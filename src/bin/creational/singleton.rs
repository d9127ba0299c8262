use std::sync::OnceLock;

// =============================================================================
// One service instance, owned by the composition root
// =============================================================================

/// The service every part of the app shares. Construction happens once, in
/// `App::new`; everything else borrows it.
#[derive(Debug)]
pub struct AppService {
    name: &'static str,
}

impl AppService {
    fn new() -> Self {
        Self { name: "shared service" }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn operation_one(&self) -> &'static str {
        "Operation One"
    }

    pub fn operation_two(&self) -> &'static str {
        "Operation Two"
    }
}

/// Composition root. Owns the single `AppService` and lends it to consumers.
pub struct App {
    service: OnceLock<AppService>,
}

impl App {
    pub fn new() -> Self {
        Self {
            service: OnceLock::new(),
        }
    }

    /// First call constructs the service; every later call returns the same
    /// instance.
    pub fn service(&self) -> &AppService {
        self.service.get_or_init(AppService::new)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Consumers take the instance as a parameter instead of reaching for a global
// =============================================================================

pub fn run_reporting(service: &AppService) -> String {
    format!("reporting uses {}: {}", service.name(), service.operation_one())
}

pub fn run_billing(service: &AppService) -> String {
    format!("billing uses {}: {}", service.name(), service.operation_two())
}

fn main() {
    let app = App::new();

    println!("=== Two consumers, one instance ===");
    println!("{}", run_reporting(app.service()));
    println!("{}", run_billing(app.service()));

    println!("\n=== Repeated lookups return the same instance ===");
    let first = app.service() as *const AppService;
    let second = app.service() as *const AppService;
    println!("same instance: {}", std::ptr::eq(first, second));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_is_constructed_at_most_once() {
        let app = App::new();
        let first = app.service() as *const AppService;
        let second = app.service() as *const AppService;
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_consumers_share_the_instance() {
        let app = App::new();
        assert_eq!(
            run_reporting(app.service()),
            "reporting uses shared service: Operation One"
        );
        assert_eq!(
            run_billing(app.service()),
            "billing uses shared service: Operation Two"
        );
    }

    #[test]
    fn test_operations_keep_their_labels() {
        let app = App::new();
        assert_eq!(app.service().operation_one(), "Operation One");
        assert_eq!(app.service().operation_two(), "Operation Two");
    }

    #[test]
    fn test_separate_apps_own_separate_instances() {
        let one = App::new();
        let two = App::new();
        assert!(!std::ptr::eq(one.service(), two.service()));
    }
}
