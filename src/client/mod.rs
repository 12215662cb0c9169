//! Prop-firm REST API client
//!
//! Thin reqwest wrapper over the platform endpoints: breach check,
//! termination, email templates/sending, and the read-only challenge
//! catalog consumed by the pricing resolver.

use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::pricing::ConfigSource;
use crate::types::{
    Breach, BreachReport, ChallengeCode, ChallengeType, NotificationTemplate, PricingTier,
    TerminationRequest,
};
use crate::workflow::BreachService;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// REST client for the prop-firm platform API
#[derive(Clone)]
pub struct PropFirmClient {
    http: Client,
    base_url: String,
}

/// Common `{success, message?, error?, data?}` response envelope
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Map `success: false` to a business failure, missing data to an API error
    fn into_data(self) -> Result<T> {
        if !self.success {
            let msg = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(DeskError::Api(msg));
        }
        self.data
            .ok_or_else(|| DeskError::Api("Response missing data".to_string()))
    }
}

/// Envelope for endpoints that return no payload
#[derive(Debug, Deserialize)]
struct AckResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl AckResponse {
    fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(DeskError::Api(
                self.error.unwrap_or_else(|| "Request failed".to_string()),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct BreachCheckData {
    breaches_found: u32,
    breach_details: Vec<Breach>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    user_id: &'a str,
    template_id: &'a str,
}

impl PropFirmClient {
    /// Create a new client from desk configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/prop-firm/{}", self.base_url, path)
    }

    /// List notification templates
    pub async fn email_templates(&self) -> Result<Vec<NotificationTemplate>> {
        let resp: ApiEnvelope<Vec<NotificationTemplate>> = self
            .http
            .get(self.url("email-templates"))
            .send()
            .await?
            .json()
            .await?;

        resp.into_data()
    }

    /// Send a templated email to one user
    pub async fn send_email(&self, user_id: &str, template_id: &str) -> Result<()> {
        let req = SendEmailRequest {
            user_id,
            template_id,
        };
        let resp: AckResponse = self
            .http
            .post(self.url("send-email"))
            .json(&req)
            .send()
            .await?
            .json()
            .await?;

        resp.into_result()
    }
}

#[async_trait]
impl BreachService for PropFirmClient {
    async fn run_breach_check(&self) -> Result<BreachReport> {
        let resp: ApiEnvelope<BreachCheckData> = self
            .http
            .post(self.url("run-breach-check"))
            .send()
            .await?
            .json()
            .await?;

        let data = resp.into_data()?;
        Ok(BreachReport {
            breaches_found: data.breaches_found,
            breaches: data.breach_details,
            checked_at: Utc::now(),
        })
    }

    async fn terminate(&self, request: &TerminationRequest) -> Result<()> {
        let resp: AckResponse = self
            .http
            .post(self.url("terminate"))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        resp.into_result()
    }
}

#[async_trait]
impl ConfigSource for PropFirmClient {
    async fn challenge_types(&self) -> Result<Vec<ChallengeType>> {
        let resp: ApiEnvelope<Vec<ChallengeType>> = self
            .http
            .get(self.url("challenge-types"))
            .send()
            .await?
            .json()
            .await?;

        resp.into_data()
    }

    async fn pricing_tiers(&self, code: ChallengeCode) -> Result<Vec<PricingTier>> {
        let resp: ApiEnvelope<Vec<PricingTier>> = self
            .http
            .get(self.url("pricing"))
            .query(&[("code", code.as_str())])
            .send()
            .await?
            .json()
            .await?;

        resp.into_data()
    }
}
