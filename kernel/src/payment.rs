use crate::entity::{ClientSecret, Money};
use crate::KernelError;

/// External payment processor. Only the payment services talk to it; booking
/// lifecycle transitions never do.
#[async_trait::async_trait]
pub trait PaymentGateway: 'static + Sync + Send {
    async fn create_intent(&self, amount: &Money) -> error_stack::Result<ClientSecret, KernelError>;
}

pub trait DependOnPaymentGateway: 'static + Sync + Send {
    type PaymentGateway: PaymentGateway;
    fn payment_gateway(&self) -> &Self::PaymentGateway;
}
