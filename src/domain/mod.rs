mod greeting;
mod handler;

pub use greeting::{format_greeting, Greeter, GreetingService};
pub use handler::{HelloWorldHandler, DEFAULT_NAME};
