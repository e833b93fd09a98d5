use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Blueprint, Customer, Product, ProductId};
use crate::error::SessionError;
use crate::messages::SessionRequest;
use crate::session::{CheckoutSummary, OrderView, Receipt, SessionState};

/// Handle to the session actor. Cheap to clone; every clone talks to the
/// same session.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        debug!("Sending shutdown request");
        self.sender
            .send(SessionRequest::Shutdown)
            .await
            .map_err(|e| SessionError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(SessionClient => fn login(number: String) -> Customer as SessionRequest::Login, Error = SessionError);
client_method!(SessionClient => fn logout() -> () as SessionRequest::Logout, Error = SessionError);
client_method!(SessionClient => fn browse(low_calorie_only: bool) -> Vec<Product> as SessionRequest::Browse, Error = SessionError);
client_method!(SessionClient => fn add_ons() -> Vec<Product> as SessionRequest::AddOns, Error = SessionError);
client_method!(SessionClient => fn list_blueprints() -> Vec<Blueprint> as SessionRequest::ListBlueprints, Error = SessionError);
client_method!(SessionClient => fn select_product(id: ProductId) -> OrderView as SessionRequest::SelectProduct, Error = SessionError);
client_method!(SessionClient => fn reorder_blueprint(index: usize) -> OrderView as SessionRequest::ReorderBlueprint, Error = SessionError);
client_method!(SessionClient => fn add_item(id: ProductId, quantity: u32) -> OrderView as SessionRequest::AddItem, Error = SessionError);
client_method!(SessionClient => fn remove_at(index: usize) -> OrderView as SessionRequest::RemoveAt, Error = SessionError);
client_method!(SessionClient => fn remove_product(id: ProductId) -> OrderView as SessionRequest::RemoveProduct, Error = SessionError);
client_method!(SessionClient => fn remove_one(id: ProductId) -> OrderView as SessionRequest::RemoveOne, Error = SessionError);
client_method!(SessionClient => fn back_to_catalog() -> () as SessionRequest::BackToCatalog, Error = SessionError);
client_method!(SessionClient => fn proceed_to_checkout() -> CheckoutSummary as SessionRequest::ProceedToCheckout, Error = SessionError);
client_method!(SessionClient => fn back_to_order() -> OrderView as SessionRequest::BackToOrder, Error = SessionError);
client_method!(SessionClient => fn confirm(save_blueprint: bool) -> Receipt as SessionRequest::Confirm, Error = SessionError);
client_method!(SessionClient => fn snapshot() -> SessionState as SessionRequest::Snapshot, Error = SessionError);
