use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

use super::validation::ContactForm;
use crate::config;
use crate::error::SubmitError;

pub async fn deliver(form: ContactForm) -> Result<(), SubmitError> {
    match config::contact_endpoint() {
        Some(url) => post(url, &form).await,
        None => {
            debug!("No contact endpoint configured, simulating delivery");
            TimeoutFuture::new(config::SIMULATED_DELIVERY_MS).await;
            info!("Simulated delivery of a {} character message", form.message.chars().count());
            Ok(())
        }
    }
}

async fn post(url: &str, form: &ContactForm) -> Result<(), SubmitError> {
    let response = Request::post(url)
        .json(form)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SubmitError::Rejected { status: response.status() });
    }
    info!("Contact message delivered to {}", url);
    Ok(())
}
