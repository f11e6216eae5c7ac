use crate::domain::repository::ConfirmationNotifier;
use crate::error::CatalogError;

/// Writes confirmation codes to the log instead of sending mail. Stands in
/// for a real delivery channel; the account flow does not depend on which
/// one is plugged in.
#[derive(Clone, Default)]
pub struct LogNotifier;

impl ConfirmationNotifier for LogNotifier {
    async fn deliver(&self, email: &str, code: &str) -> Result<(), CatalogError> {
        tracing::info!(email, code, "confirmation code issued");
        Ok(())
    }
}
