use once_cell::sync::Lazy;

use hello_function::config::{get_config, TelemetrySettings};
use hello_function::startup::{Application, HELLO_WORLD_PATH};
use hello_function::telem::{get_subscriber, init_subscriber};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

//only initialise the subscriber once, logs stay hidden unless TEST_LOG is set
static TRACING: Lazy<()> = Lazy::new(|| {
    let settings = TelemetrySettings {
        name: String::from("test"),
        log_level: String::from("debug"),
    };
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(&settings, std::io::stdout).expect("bad log level");
        init_subscriber(subscriber).expect("failed to init tracing");
    } else {
        let subscriber = get_subscriber(&settings, std::io::sink).expect("bad log level");
        init_subscriber(subscriber).expect("failed to init tracing");
    }
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let config = {
        let mut c = get_config().expect("failed to load config");
        c.app.port = 0; //let the os pick a free port
        c
    };

    let app = Application::build(config).expect("failed to build");
    let port = app.port();
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        port,
        client: reqwest::Client::new(),
    }
}

// -----------------------------------------------------------------------------
// client to interact with our own api

impl TestApp {
    pub fn function_url(&self) -> String {
        format!("{}{}", self.address, HELLO_WORLD_PATH)
    }

    pub async fn get_hello_world(&self) -> reqwest::Response {
        self.client
            .get(&self.function_url())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_hello_world_with_query(&self, query: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}?{}", self.function_url(), query))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
