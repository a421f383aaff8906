//! MoMo payment request signing.
//!
//! Signature = hex(HMAC-SHA256(secret, partner_code || request_id || amount || access_key)).
//! Only the signature is computed here; talking to the gateway is out of scope.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MomoPaymentRequest {
    pub partner_code: String,
    pub access_key: String,
    pub request_id: String,
    pub amount: String,
    pub order_id: String,
    /// Empty until `sign` is called
    pub signature: String,
}

/// Body of `POST /payments/momo/signature`
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct SignPaymentRequest {
    #[validate(length(min = 1, max = 50, message = "request_id must be 1-50 characters"))]
    pub request_id: String,
    #[validate(length(min = 1, max = 20, message = "amount must be 1-20 characters"))]
    pub amount: String,
    #[validate(length(min = 1, max = 50, message = "order_id must be 1-50 characters"))]
    pub order_id: String,
}

impl MomoPaymentRequest {
    pub fn new(
        partner_code: impl Into<String>,
        access_key: impl Into<String>,
        request_id: impl Into<String>,
        amount: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            partner_code: partner_code.into(),
            access_key: access_key.into(),
            request_id: request_id.into(),
            amount: amount.into(),
            order_id: order_id.into(),
            signature: String::new(),
        }
    }

    /// The string that gets signed.
    pub fn raw_signature(&self) -> String {
        format!(
            "{}{}{}{}",
            self.partner_code, self.request_id, self.amount, self.access_key
        )
    }

    fn mac(&self, secret_key: &str) -> Result<HmacSha256, AppError> {
        let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
            .map_err(|e| AppError::Internal(format!("HMAC key rejected: {}", e)))?;
        mac.update(self.raw_signature().as_bytes());
        Ok(mac)
    }

    /// Compute and store the signature.
    pub fn sign(&mut self, secret_key: &str) -> Result<&str, AppError> {
        let tag = self.mac(secret_key)?.finalize().into_bytes();
        self.signature = hex::encode(tag);
        Ok(&self.signature)
    }

    /// Constant-time check of the stored signature.
    pub fn verify(&self, secret_key: &str) -> Result<bool, AppError> {
        let Ok(expected) = hex::decode(&self.signature) else {
            return Ok(false);
        };
        Ok(self.mac(secret_key)?.verify_slice(&expected).is_ok())
    }
}
