//! Scripted RPC server for driving a real client over an in-memory stream.

use dag_router::{run_connection, ConnectionHandle, Router};
use dag_rpc_client::{RpcClient, RpcClientConfig};
use dag_wire::{encode, Command, Dialect, DomainMessage, Envelope, Message};
use shared_types::{DomainTransaction, TransactionId};
use std::sync::Arc;
use std::time::Duration;

/// How long the harness waits for traffic before failing a test.
pub const HARNESS_WAIT: Duration = Duration::from_secs(5);

/// The server end of a client connection.
pub struct MockRpcServer {
    router: Arc<Router>,
    connection: Option<ConnectionHandle>,
}

impl MockRpcServer {
    /// Next request of kind `M` the client sent.
    pub async fn next_request<M: Message>(&self) -> M {
        let route = self
            .router
            .route(M::COMMAND)
            .expect("server routes every request kind");
        let message = route
            .dequeue_with_timeout(HARNESS_WAIT)
            .await
            .unwrap_or_else(|e| panic!("no {} from client: {e}", M::COMMAND));
        M::try_from(message).expect("request of the routed kind")
    }

    /// Queue a response or notification for the client.
    pub fn reply<M: Message>(&self, message: M) {
        self.router.send(message).expect("server connection open");
    }

    /// Queue a raw envelope, bypassing encode-side validation.
    pub fn reply_raw(&self, envelope: Envelope) {
        self.router
            .outgoing_queue()
            .enqueue(envelope)
            .expect("server connection open");
    }

    /// Queue a message of any dialect, bypassing the client's expectations.
    pub fn reply_message(&self, message: DomainMessage) {
        self.reply_raw(encode(message).expect("encodable message"));
    }

    /// Drop the connection from the server side.
    pub async fn disconnect(mut self) {
        self.router.close();
        if let Some(connection) = self.connection.take() {
            let _ = connection.join().await;
        }
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }
}

impl Drop for MockRpcServer {
    fn drop(&mut self) {
        self.router.close();
    }
}

/// A client and a mock server joined by an in-memory duplex stream.
pub fn connected_pair(timeout: Duration) -> (RpcClient, MockRpcServer) {
    let (client_end, server_end) = tokio::io::duplex(1 << 20);

    let client =
        RpcClient::connect(client_end, RpcClientConfig { timeout }).expect("client router builds");

    let router = Arc::new(
        Router::build("mock-server", Command::all_in(Dialect::RpcRequest))
            .expect("server router builds"),
    );
    let connection = run_connection(Arc::clone(&router), server_end);

    (
        client,
        MockRpcServer {
            router,
            connection: Some(connection),
        },
    )
}

/// A transaction whose id is distinct for each `lock_time`.
pub fn transaction(lock_time: u64) -> DomainTransaction {
    DomainTransaction {
        lock_time,
        ..Default::default()
    }
}

pub fn transaction_id(lock_time: u64) -> TransactionId {
    transaction(lock_time).id()
}
