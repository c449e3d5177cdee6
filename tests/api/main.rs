mod configuration;
mod health_check;
mod helpers;
mod newsletter;
