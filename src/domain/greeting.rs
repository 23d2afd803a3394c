/// Anything that can turn a name into a greeting.
//the app only ever uses GreetingService, the trait is here so the handler can be tested in isolation
pub trait Greeter: Send + Sync {
    fn greet(&self, name: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingService;

impl Greeter for GreetingService {
    fn greet(&self, name: &str) -> String {
        format_greeting(name)
    }
}

//no trimming, no validation - whatever comes in goes straight into the template
pub fn format_greeting(name: &str) -> String {
    format!(
        "Hello, {}! This is an Http triggered Azure Function at heart.",
        name
    )
}
