//! Backend-facing value types: which storage service, its connection
//! lifecycle, and how report keys are derived.

mod connection;
mod key_scheme;
mod kind;

pub use connection::ConnectionState;
pub use key_scheme::KeyScheme;
pub use kind::BackendKind;
