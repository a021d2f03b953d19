//! Transaction context
//!
//! A logging transaction groups entries under one correlation id. Workflow
//! runs pass the id along so entries from later steps join the same
//! transaction.

use crate::error::Result;

/// Ambient transaction scope for subsequently enqueued entries
pub trait TransactionContext {
    /// Id of the active transaction, if one was started or resumed
    fn current_transaction_id(&self) -> Option<&str>;

    /// Makes `transaction_id` the active transaction
    ///
    /// Fails with [`crate::PipelineError::InvalidTransaction`] for a blank id.
    fn resume_transaction(&mut self, transaction_id: &str) -> Result<()>;

    /// Starts a fresh transaction and returns its id
    fn start_transaction(&mut self) -> String;
}
