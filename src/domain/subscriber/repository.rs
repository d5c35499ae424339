use crate::domain::errors::DomainResult;
use crate::domain::subscriber::entity::NewSubscriber;
use async_trait::async_trait;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn create(&self, subscriber: NewSubscriber) -> DomainResult<()>;
}
