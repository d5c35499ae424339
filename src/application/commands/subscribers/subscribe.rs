// src/application/commands/subscribers/subscribe.rs
use super::SubscriberCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::subscriber::{EmailAddress, NewSubscriber},
};

#[derive(Debug, Clone, Default)]
pub struct SubscribeCommand {
    pub email: Option<String>,
    pub source: Option<String>,
}

impl SubscriberCommandService {
    /// Validate the address and create exactly one subscriber record. Nothing
    /// is written when validation fails.
    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<()> {
        let email = command
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("Email required"))?;
        let email = EmailAddress::new(email)
            .map_err(|_| ApplicationError::validation("Invalid email address"))?;

        let source = command
            .source
            .map(|source| source.trim().to_string())
            .filter(|source| !source.is_empty())
            .unwrap_or_else(|| self.default_source.clone());

        let subscriber = NewSubscriber {
            email,
            source,
            signup_date: self.clock.now(),
        };

        self.repo
            .create(subscriber)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to store subscriber"))?;
        Ok(())
    }
}
