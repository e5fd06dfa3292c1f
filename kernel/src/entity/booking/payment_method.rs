use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Cash,
}

impl PaymentMethod {
    pub fn parse(tag: Option<&str>) -> Result<Self, Report<KernelError>> {
        let tag = tag.map(str::trim).unwrap_or_default();
        if tag.is_empty() {
            return Err(Report::new(KernelError::MissingPaymentMethod));
        }
        Self::from_code(tag).ok_or_else(|| {
            Report::new(KernelError::UnknownPaymentMethod)
                .attach_printable(format!("unknown payment method: {tag}"))
        })
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "credit_card" => Some(PaymentMethod::CreditCard),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}
