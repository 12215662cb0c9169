//! Outbound trader notifications
//!
//! Fetches templates, previews them against a trader's merge context, and
//! sends the selected template to the selected trader.

use crate::client::PropFirmClient;
use crate::error::{DeskError, Result};
use crate::template::{self, MergeContext, RenderedNotification};
use crate::types::{NotificationTemplate, Trader};

/// Email notification flow for one operator session
pub struct Notifier {
    client: PropFirmClient,
    company_name: String,
}

impl Notifier {
    pub fn new(client: PropFirmClient, company_name: impl Into<String>) -> Self {
        Self {
            client,
            company_name: company_name.into(),
        }
    }

    /// Available notification templates
    pub async fn templates(&self) -> Result<Vec<NotificationTemplate>> {
        self.client.email_templates().await
    }

    /// Render a template for one trader. Pure, no network.
    pub fn preview(&self, template: &NotificationTemplate, trader: &Trader) -> RenderedNotification {
        let context = MergeContext::for_trader(trader, &self.company_name);
        template::render(template, &context)
    }

    /// Send the selected template to the selected trader.
    ///
    /// Missing selections are rejected before any network call.
    pub async fn send(
        &self,
        trader: Option<&Trader>,
        template: Option<&NotificationTemplate>,
    ) -> Result<()> {
        let trader = trader.ok_or_else(|| {
            DeskError::Validation("Select a trader before sending".to_string())
        })?;
        let template = template.ok_or_else(|| {
            DeskError::Validation("Select a template before sending".to_string())
        })?;

        self.client.send_email(&trader.user_id, &template.id).await?;
        tracing::info!(
            "Sent template '{}' to trader {}",
            template.name,
            trader.account_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rust_decimal_macros::dec;

    fn notifier() -> Notifier {
        let client = PropFirmClient::new(&Config::default()).unwrap();
        Notifier::new(client, "Propdesk Funding")
    }

    fn trader() -> Trader {
        Trader {
            user_id: "u-1".to_string(),
            name: "Jane".to_string(),
            account_id: "ACC1".to_string(),
            initial_balance: dec!(10000),
            current_equity: dec!(9400),
            breach_reason: Some("Max Daily Loss".to_string()),
        }
    }

    #[test]
    fn preview_substitutes_company_and_trader_fields() {
        let template = NotificationTemplate {
            id: "t-1".to_string(),
            name: "Warning".to_string(),
            subject: "Notice for {trader_name}".to_string(),
            body: "Regards, {company_name}".to_string(),
        };

        let rendered = notifier().preview(&template, &trader());
        assert_eq!(rendered.subject, "Notice for Jane");
        assert_eq!(rendered.body, "Regards, Propdesk Funding");
    }

    #[tokio::test]
    async fn send_rejects_missing_trader() {
        let result = notifier().send(None, None).await;
        assert!(matches!(result, Err(DeskError::Validation(_))));
    }

    #[tokio::test]
    async fn send_rejects_missing_template() {
        let t = trader();
        let result = notifier().send(Some(&t), None).await;
        assert!(matches!(result, Err(DeskError::Validation(_))));
    }
}
