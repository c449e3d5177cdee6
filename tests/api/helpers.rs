use once_cell::sync::Lazy;
use oasis_leads::configuration::get_configuration;
use oasis_leads::startup::Application;
use oasis_leads::telemetry::{get_subscriber, init_subscriber};
use secrecy::Secret;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub crm_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/contact", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_newsletter(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/newsletter", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Parsed JSON bodies of every request the fake CRM received.
    pub async fn crm_bodies(&self) -> Vec<serde_json::Value> {
        self.crm_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // Stand-in for the CRM's webhook endpoints
    let crm_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.webhooks.contact_url = Secret::new(format!("{}/hooks/contact", crm_server.uri()));
        c.webhooks.newsletter_url = Secret::new(format!("{}/hooks/newsletter", crm_server.uri()));
        c.webhooks.timeout_milliseconds = 500;
        c
    };

    let application = Application::build(configuration).expect("Failed to build application.");
    let port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        crm_server,
        api_client: reqwest::Client::new(),
    }
}
