pub mod configuration;
pub mod domain;
pub mod forms;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod webhook_client;
