use crate::domain::{Greeter, GreetingService};

/// Name used when the caller doesn't give us one.
pub const DEFAULT_NAME: &str = "Vincent";

#[derive(Debug, Clone)]
pub struct HelloWorldHandler<G = GreetingService> {
    greeter: G,
    default_name: String,
}

impl<G: Greeter> HelloWorldHandler<G> {
    pub fn new(greeter: G) -> Self {
        Self::with_default_name(greeter, DEFAULT_NAME)
    }

    pub fn with_default_name(greeter: G, default_name: impl Into<String>) -> Self {
        Self {
            greeter,
            default_name: default_name.into(),
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    //async only so the route can await it - nothing in here ever suspends
    #[tracing::instrument(name = "Building greeting", skip(self))]
    pub async fn handle(&self, name: Option<&str>) -> String {
        let name = name.unwrap_or(self.default_name.as_str());
        self.greeter.greet(name)
    }
}
