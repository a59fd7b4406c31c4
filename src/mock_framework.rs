//! # Mock Framework
//!
//! Utilities for testing repositories and services without a running store.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_insert`] or [`expect_filter`] to assert behavior.

use crate::actor_framework::{Entity, Predicate, Response, StoreClient, StoreRequest};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends into a channel the test controls, so the test decides
/// what the "store" answers and can check that no request was sent at all.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(String, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Filter request
pub async fn expect_filter<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(Predicate<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Filter { predicate, respond_to }) => Some((predicate, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// True when nothing has been sent to the mock store.
///
/// A channel whose clients are all gone counts as empty too.
pub fn no_pending_request<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> bool {
    receiver.try_recv().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let insert_task = tokio::spawn(async move {
            let user = User::new("test@example.com", "Test", "User");
            client.insert(user).await
        });

        let (item, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(item.email, "test@example.com");
        let mut stored = item.clone();
        stored.id = "7".to_string();
        responder.send(Ok(stored)).unwrap();

        let result = insert_task.await.unwrap().unwrap();
        assert_eq!(result.id, "7");
        assert!(no_pending_request(&mut receiver));
    }
}
