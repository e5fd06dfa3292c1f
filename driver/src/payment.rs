use error_stack::Report;
use reqwest::Client;
use serde::Deserialize;

use kernel::interface::payment::PaymentGateway;
use kernel::prelude::entity::{ClientSecret, Money};
use kernel::KernelError;

use crate::error::ConvertError;
use crate::optional_env;

const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";
const CURRENCY: &str = "usd";

/// Stripe adapter. Without a secret key every request is refused.
#[derive(Clone)]
pub struct StripePaymentGateway {
    client: Client,
    secret_key: Option<String>,
}

#[derive(Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

impl StripePaymentGateway {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let secret_key = optional_env(STRIPE_SECRET_KEY)?;
        if secret_key.is_none() {
            tracing::warn!("{STRIPE_SECRET_KEY} is not set; payment intents are disabled");
        }
        Ok(Self {
            client: Client::new(),
            secret_key,
        })
    }
}

fn intent_form(amount: &Money) -> error_stack::Result<[(&'static str, String); 3], KernelError> {
    let cents = amount.to_minor_units().ok_or_else(|| {
        Report::new(KernelError::PaymentFailed)
            .attach_printable(format!("amount out of range: {amount:?}"))
    })?;
    Ok([
        ("amount", cents.to_string()),
        ("currency", CURRENCY.to_string()),
        ("automatic_payment_methods[enabled]", "true".to_string()),
    ])
}

#[async_trait::async_trait]
impl PaymentGateway for StripePaymentGateway {
    async fn create_intent(&self, amount: &Money) -> error_stack::Result<ClientSecret, KernelError> {
        let secret_key = self.secret_key.as_deref().ok_or_else(|| {
            Report::new(KernelError::PaymentFailed)
                .attach_printable(format!("{STRIPE_SECRET_KEY} is not configured"))
        })?;
        let form = intent_form(amount)?;

        let response = self
            .client
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(secret_key)
            .form(&form)
            .send()
            .await
            .convert_error()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Report::new(KernelError::PaymentFailed)
                .attach_printable(format!("stripe responded with {status}: {body}")));
        }
        let intent = response
            .json::<PaymentIntentResponse>()
            .await
            .convert_error()?;
        Ok(ClientSecret::new(intent.client_secret))
    }
}
