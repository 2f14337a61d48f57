//! Client/server scenarios over a real framed connection.

mod calls;
mod protocol;
mod reconciliation;
mod shutdown;
mod subscriptions;
