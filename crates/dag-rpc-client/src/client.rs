//! # RPC Client Core
//!
//! Connection ownership, the generic call path, response reconciliation
//! and subscription task bookkeeping. The per-call methods live in
//! `calls.rs` and the `register_for_*` methods in `subscriptions.rs`.

use crate::config::RpcClientConfig;
use crate::errors::RpcClientError;
use dag_router::{run_connection, ConnectionHandle, Route, Router};
use dag_telemetry::{metric_inc, NOTIFICATIONS_DELIVERED, RPC_CALLS, STALE_RESPONSES};
use dag_wire::{Command, Dialect, DomainMessage, Message, RpcResponse};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Client for one RPC server connection.
pub struct RpcClient {
    router: Arc<Router>,
    timeout: RwLock<Duration>,
    connection: Mutex<Option<ConnectionHandle>>,
    subscriptions: Mutex<Vec<JoinHandle<()>>>,
}

impl RpcClient {
    /// Start a client over `stream`.
    ///
    /// Builds a router for every RPC response and notification kind and
    /// spawns the connection driver. Must be called inside a tokio runtime.
    pub fn connect<S>(stream: S, config: RpcClientConfig) -> Result<Self, RpcClientError>
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let router = Arc::new(Router::build(
            "rpc-client",
            Command::all_in(Dialect::RpcResponse),
        )?);
        let connection = run_connection(Arc::clone(&router), stream);

        let client = Self::from_router(router, config);
        *client.connection.lock() = Some(connection);
        Ok(client)
    }

    /// Wrap a router driven by a caller-supplied transport.
    ///
    /// The router must have a route for every response and notification the
    /// client will wait on; missing ones surface as `RpcClientError::Router`.
    pub fn from_router(router: Arc<Router>, config: RpcClientConfig) -> Self {
        Self {
            router,
            timeout: RwLock::new(config.timeout),
            connection: Mutex::new(None),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Change the timeout applied to calls started afterwards.
    pub fn set_timeout(&self, timeout: Duration) {
        *self.timeout.write() = timeout;
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        *self.timeout.read()
    }

    #[must_use]
    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.router.is_closed()
    }

    /// Close the connection and wait for every subscription task to end.
    ///
    /// Safe to call more than once.
    pub async fn close(&self) {
        self.router.close();

        let tasks: Vec<_> = self.subscriptions.lock().drain(..).collect();
        for task in tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Subscription task ended abnormally");
            }
        }

        let connection = self.connection.lock().take();
        if let Some(connection) = connection {
            if let Err(e) = connection.join().await {
                debug!(error = %e, "Connection ended with error");
            }
        }

        debug!("RPC client closed");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CALL PATH
    // ═══════════════════════════════════════════════════════════════════════

    /// Send `request` and wait for the next response of kind `Resp`.
    pub(crate) async fn call<Req, Resp>(&self, request: Req) -> Result<Resp, RpcClientError>
    where
        Req: Message,
        Resp: RpcResponse,
    {
        let result = self.round_trip(request).await;
        record_outcome(Resp::COMMAND, &result);
        result
    }

    async fn round_trip<Req, Resp>(&self, request: Req) -> Result<Resp, RpcClientError>
    where
        Req: Message,
        Resp: RpcResponse,
    {
        let route = self.response_route::<Resp>()?;
        self.router.send(request)?;
        let message = route.dequeue_with_timeout(self.timeout()).await?;
        into_success(Resp::try_from(message)?)
    }

    /// Send `request`, then wait for a response of kind `Resp` accepted by
    /// `matches`, discarding the others as stale.
    pub(crate) async fn call_matching<Req, Resp, P>(
        &self,
        request: Req,
        matches: P,
    ) -> Result<Resp, RpcClientError>
    where
        Req: Message,
        Resp: RpcResponse,
        P: FnMut(&Resp) -> bool,
    {
        let result: Result<Resp, RpcClientError> = async {
            // Resolve the route first so a misconfigured router does not
            // leave a request in flight.
            self.response_route::<Resp>()?;
            self.router.send(request)?;
            let response = self.dequeue_matching(self.timeout(), matches).await?;
            into_success(response)
        }
        .await;
        record_outcome(Resp::COMMAND, &result);
        result
    }

    /// Dequeue responses of kind `Resp` until one satisfies `matches`.
    ///
    /// Each wait gets the full `timeout`. Responses that fail the predicate
    /// answer an earlier call that already timed out; they are logged,
    /// counted and dropped. The returned response may still carry an
    /// application error.
    pub async fn dequeue_matching<Resp, P>(
        &self,
        timeout: Duration,
        mut matches: P,
    ) -> Result<Resp, RpcClientError>
    where
        Resp: RpcResponse,
        P: FnMut(&Resp) -> bool,
    {
        let route = self.response_route::<Resp>()?;
        loop {
            let message = route.dequeue_with_timeout(timeout).await?;
            let response = Resp::try_from(message)?;
            if matches(&response) {
                return Ok(response);
            }

            metric_inc!(STALE_RESPONSES);
            warn!(
                command = %Resp::COMMAND,
                "Discarding stale response belonging to an earlier timed-out call"
            );
        }
    }

    fn response_route<Resp: Message>(&self) -> Result<Arc<Route<DomainMessage>>, RpcClientError> {
        Ok(self.router.route(Resp::COMMAND)?)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SUBSCRIPTIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Register interest with `request`, then spawn a task delivering every
    /// `N` to `handler` until the client closes.
    pub(crate) async fn subscribe<Req, Resp, N, F>(
        &self,
        request: Req,
        handler: F,
    ) -> Result<(), RpcClientError>
    where
        Req: Message,
        Resp: RpcResponse,
        N: Message,
        F: FnMut(N) + Send + 'static,
    {
        let route = self.router.route(N::COMMAND)?;
        self.call::<Req, Resp>(request).await?;
        self.spawn_listener::<N, F>(route, handler);
        Ok(())
    }

    /// Spawn the delivery loop for one notification kind.
    pub(crate) fn spawn_listener<N, F>(&self, route: Arc<Route<DomainMessage>>, handler: F)
    where
        N: Message,
        F: FnMut(N) + Send + 'static,
    {
        let task = tokio::spawn(notification_loop(route, handler));

        let mut subscriptions = self.subscriptions.lock();
        subscriptions.retain(|task| !task.is_finished());
        subscriptions.push(task);
        debug!(command = %N::COMMAND, active = subscriptions.len(), "Subscription started");
    }
}

impl Drop for RpcClient {
    fn drop(&mut self) {
        // Ends the connection driver and every subscription task.
        self.router.close();
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("router", &self.router.name())
            .field("timeout", &self.timeout())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Split off the application error, if any.
fn into_success<Resp: RpcResponse>(mut response: Resp) -> Result<Resp, RpcClientError> {
    match response.take_error() {
        Some(error) => Err(RpcClientError::Rpc(error)),
        None => Ok(response),
    }
}

fn record_outcome<T>(command: Command, result: &Result<T, RpcClientError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => {
            debug!(command = %command, error = %e, "RPC call failed");
            e.outcome()
        }
    };
    metric_inc!(RPC_CALLS, &[outcome]);
}

/// Deliver notifications until the route closes.
///
/// A message of the wrong kind ends this subscription only.
async fn notification_loop<N, F>(route: Arc<Route<DomainMessage>>, mut handler: F)
where
    N: Message,
    F: FnMut(N),
{
    loop {
        let Ok(message) = route.dequeue().await else {
            debug!(command = %N::COMMAND, "Subscription ended");
            return;
        };

        match N::try_from(message) {
            Ok(notification) => {
                metric_inc!(NOTIFICATIONS_DELIVERED);
                handler(notification);
            }
            Err(e) => {
                error!(
                    command = %N::COMMAND,
                    error = %e,
                    "Unexpected message on notification route, ending subscription"
                );
                return;
            }
        }
    }
}
