//! Notification template rendering
//!
//! Substitutes `{placeholder}` merge fields in a template's subject and body
//! from a recipient context. Pure string work, no network.


use crate::types::{NotificationTemplate, Trader};
use std::collections::BTreeMap;

/// Merge-field values keyed by the literal placeholder text, braces included
#[derive(Debug, Clone, Default)]
pub struct MergeContext {
    values: BTreeMap<String, String>,
}

impl MergeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder (key must include the braces, e.g. `{trader_name}`)
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    /// Canonical context for notifying one trader
    pub fn for_trader(trader: &Trader, company_name: &str) -> Self {
        let mut ctx = Self::new();
        ctx.insert("{trader_name}", &trader.name);
        ctx.insert("{account_id}", &trader.account_id);
        ctx.insert("{initial_balance}", trader.initial_balance);
        ctx.insert("{current_equity}", trader.current_equity);
        ctx.insert(
            "{breach_reason}",
            trader.breach_reason.as_deref().unwrap_or(""),
        );
        ctx.insert("{company_name}", company_name);
        ctx
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn substitute(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (key, value) in &self.values {
            out = out.replace(key, value);
        }
        out
    }
}

/// Fully substituted subject/body pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotification {
    pub subject: String,
    pub body: String,
}

/// Render a template against a merge context.
///
/// Every occurrence of a bound placeholder is replaced, case-sensitively,
/// in subject and body independently. Placeholders the context does not
/// bind are left as literal text.
pub fn render(template: &NotificationTemplate, context: &MergeContext) -> RenderedNotification {
    RenderedNotification {
        subject: context.substitute(&template.subject),
        body: context.substitute(&template.body),
    }
}
