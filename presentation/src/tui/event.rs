//! Commands sent from the TUI event loop to the background chat controller.

use shelfie_domain::Product;

/// Commands processed by the controller task.
///
/// The task consumes these sequentially from a channel, which serializes
/// chat invocations per conversation.
#[derive(Debug, Clone)]
pub enum TuiCommand {
    /// Generate a routine from the resolved selection (may be empty; the
    /// controller surfaces the validation message in that case).
    GenerateRoutine(Vec<Product>),
    /// Submit a follow-up question.
    Ask(String),
}
