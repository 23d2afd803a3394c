use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::domain::{GreetingService, HelloWorldHandler};
use crate::routes::hello_world;

/// The functions host forwards `HelloWorldFunction` invocations here.
pub const HELLO_WORLD_PATH: &str = "/api/HelloWorldFunction";

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, std::io::Error> {
        let handler =
            HelloWorldHandler::with_default_name(GreetingService, config.greeting.default_name);

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(&address)?;
        //port 0 means the os picked one for us, so read it back
        let port = listener.local_addr()?.port();
        tracing::info!(%address, port, "listening");
        let server = run(listener, handler)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    //only returns once the server is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, handler: HelloWorldHandler) -> Result<Server, std::io::Error> {
    //built once, shared by every worker - web::Data is an Arc under the hood
    let handler = web::Data::new(handler);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            //a resource rather than App::route, so other methods get a 405 instead of a 404
            .service(web::resource(HELLO_WORLD_PATH).route(web::get().to(hello_world)))
            .app_data(handler.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
