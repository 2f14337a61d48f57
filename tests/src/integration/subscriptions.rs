//! # Notification Delivery

#[cfg(test)]
mod tests {
    use crate::harness::{connected_pair, HARNESS_WAIT};
    use dag_rpc_client::RpcClientError;
    use dag_wire::message::rpc::*;
    use shared_types::{DomainHash, RpcError};
    use std::sync::Arc;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    async fn recv<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> T {
        timeout(HARNESS_WAIT, rx.recv())
            .await
            .expect("notification not delivered")
            .expect("subscription ended early")
    }

    #[tokio::test]
    async fn test_notifications_delivered_in_order() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let registration = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .register_for_virtual_daa_score_changed_notifications(move |n| {
                        let _ = tx.send(n.virtual_daa_score);
                    })
                    .await
            })
        };
        let _: NotifyVirtualDaaScoreChangedRequest = server.next_request().await;
        server.reply(NotifyVirtualDaaScoreChangedResponse::default());
        registration.await.unwrap().unwrap();

        for score in 100..105 {
            server.reply(VirtualDaaScoreChangedNotification {
                virtual_daa_score: score,
            });
        }
        for score in 100..105 {
            assert_eq!(recv(&mut rx).await, score);
        }
    }

    #[tokio::test]
    async fn test_registration_error_is_returned() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);

        let registration = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .register_for_utxos_changed_notifications(vec!["dag:qz".into()], |_| {})
                    .await
            })
        };
        let request: NotifyUtxosChangedRequest = server.next_request().await;
        assert_eq!(request.addresses, vec!["dag:qz".to_string()]);
        server.reply(NotifyUtxosChangedResponse {
            error: Some(RpcError::new("UTXO index is disabled")),
        });

        assert!(matches!(
            registration.await.unwrap(),
            Err(RpcClientError::Rpc(_))
        ));
    }

    #[tokio::test]
    async fn test_finality_conflicts_use_two_handlers() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let (conflict_tx, mut conflicts) = mpsc::unbounded_channel();
        let (resolved_tx, mut resolutions) = mpsc::unbounded_channel();

        let registration = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .register_for_finality_conflicts_notifications(
                        move |n| {
                            let _ = conflict_tx.send(n.violating_block_hash);
                        },
                        move |n| {
                            let _ = resolved_tx.send(n.finality_block_hash);
                        },
                    )
                    .await
            })
        };
        let _: NotifyFinalityConflictsRequest = server.next_request().await;
        server.reply(NotifyFinalityConflictsResponse::default());
        registration.await.unwrap().unwrap();

        let violating = DomainHash::from_bytes([7; 32]);
        let finality = DomainHash::from_bytes([8; 32]);
        server.reply(FinalityConflictResolvedNotification {
            finality_block_hash: finality,
        });
        server.reply(FinalityConflictNotification {
            violating_block_hash: violating,
        });

        assert_eq!(recv(&mut conflicts).await, violating);
        assert_eq!(recv(&mut resolutions).await, finality);
    }

    #[tokio::test]
    async fn test_stop_notifying_utxos_changed() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);

        let call = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .stop_notifying_utxos_changed(vec!["dag:qa".into(), "dag:qb".into()])
                    .await
            })
        };
        let request: StopNotifyingUtxosChangedRequest = server.next_request().await;
        assert_eq!(request.addresses.len(), 2);
        server.reply(StopNotifyingUtxosChangedResponse::default());

        call.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_payload_free_notifications() {
        let (client, server) = connected_pair(HARNESS_WAIT);
        let client = Arc::new(client);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let registration = {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .register_for_new_block_template_notifications(move |n| {
                        let _ = tx.send(n);
                    })
                    .await
            })
        };
        let _: NotifyNewBlockTemplateRequest = server.next_request().await;
        server.reply(NotifyNewBlockTemplateResponse::default());
        registration.await.unwrap().unwrap();

        server.reply(NewBlockTemplateNotification);
        assert_eq!(recv(&mut rx).await, NewBlockTemplateNotification);
    }
}
