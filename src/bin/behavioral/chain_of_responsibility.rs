// =============================================================================
// Handlers: each one claims the requests it understands
// =============================================================================

pub trait Handler {
    /// `Some` if this handler took the request, `None` to pass it along.
    fn try_handle(&self, request: &str) -> Option<String>;
}

pub struct AuthHandler;

impl Handler for AuthHandler {
    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "auth").then(|| "AuthHandler: Handling authentication.".to_string())
    }
}

pub struct LoggingHandler;

impl Handler for LoggingHandler {
    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "log").then(|| "LoggingHandler: Handling logging.".to_string())
    }
}

pub struct ValidationHandler;

impl Handler for ValidationHandler {
    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "validate").then(|| "ValidationHandler: Handling validation.".to_string())
    }
}

// =============================================================================
// The chain: first taker wins, unclaimed requests fall through
// =============================================================================

#[derive(Default)]
pub struct HandlerChain {
    handlers: Vec<Box<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handle(&self, request: &str) -> String {
        self.handlers
            .iter()
            .find_map(|handler| handler.try_handle(request))
            .unwrap_or_else(|| format!("No handler could process the request: {request}"))
    }
}

fn main() {
    let chain = HandlerChain::new()
        .append(Box::new(AuthHandler))
        .append(Box::new(LoggingHandler))
        .append(Box::new(ValidationHandler));

    println!("=== Requests walking the chain ===");
    for request in ["auth", "log", "validate", "report"] {
        println!("{request:>8} -> {}", chain.handle(request));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chain() -> HandlerChain {
        HandlerChain::new()
            .append(Box::new(AuthHandler))
            .append(Box::new(LoggingHandler))
            .append(Box::new(ValidationHandler))
    }

    #[test]
    fn test_each_request_reaches_its_handler() {
        let chain = full_chain();
        assert_eq!(chain.handle("auth"), "AuthHandler: Handling authentication.");
        assert_eq!(chain.handle("log"), "LoggingHandler: Handling logging.");
        assert_eq!(
            chain.handle("validate"),
            "ValidationHandler: Handling validation."
        );
    }

    #[test]
    fn test_unclaimed_requests_fall_through() {
        let chain = full_chain();
        assert_eq!(
            chain.handle("report"),
            "No handler could process the request: report"
        );
    }

    #[test]
    fn test_empty_chain_handles_nothing() {
        let chain = HandlerChain::new();
        assert_eq!(
            chain.handle("auth"),
            "No handler could process the request: auth"
        );
    }

    #[test]
    fn test_first_matching_handler_wins() {
        struct Greedy;
        impl Handler for Greedy {
            fn try_handle(&self, _request: &str) -> Option<String> {
                Some("Greedy: took it".to_string())
            }
        }

        let chain = HandlerChain::new()
            .append(Box::new(Greedy))
            .append(Box::new(AuthHandler));
        assert_eq!(chain.handle("auth"), "Greedy: took it");
    }

    #[test]
    fn test_order_matters() {
        let chain = HandlerChain::new()
            .append(Box::new(LoggingHandler))
            .append(Box::new(AuthHandler));
        assert_eq!(chain.handle("auth"), "AuthHandler: Handling authentication.");
    }
}
