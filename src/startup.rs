use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes;
use crate::webhook_client::WebhookClient;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let webhook_client = WebhookClient::new(
            configuration.webhooks.contact_url.clone(),
            configuration.webhooks.newsletter_url.clone(),
            configuration.webhooks.timeout(),
        )
        .context("Failed to build the CRM webhook client")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        // Port 0 asks the OS for a free port; read back what we got
        let port = listener.local_addr()?.port();
        let server = run(listener, webhook_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    webhook_client: WebhookClient,
) -> Result<Server, std::io::Error> {
    let webhook_client = Data::new(webhook_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check::health_check))
            .route("/contact", web::post().to(routes::contact::submit_contact))
            .route("/newsletter", web::post().to(routes::newsletter::subscribe_newsletter))
            .app_data(webhook_client.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}
