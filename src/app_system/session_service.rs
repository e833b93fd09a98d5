use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use crate::clients::SessionClient;
use crate::messages::{ServiceResponse, ServiceResult, SessionRequest};
use crate::session::Session;

/// Owns the [`Session`] and applies requests to it one at a time, so each
/// runs to completion before the next is looked at.
pub struct SessionService {
    receiver: mpsc::Receiver<SessionRequest>,
    session: Session,
}

impl SessionService {
    pub fn new(buffer_size: usize, session: Session) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, session };
        let client = SessionClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Stops on `Shutdown` or once every client is dropped.
    #[instrument(name = "session_service", skip(self))]
    pub async fn run(mut self) {
        info!("SessionService starting");

        while let Some(msg) = self.receiver.recv().await {
            let session = &mut self.session;
            match msg {
                SessionRequest::Login { number, respond_to } => {
                    reply(respond_to, session.login(&number));
                }
                SessionRequest::Logout { respond_to } => {
                    session.logout();
                    reply(respond_to, Ok(()));
                }
                SessionRequest::Browse {
                    low_calorie_only,
                    respond_to,
                } => {
                    reply(respond_to, session.browse(low_calorie_only));
                }
                SessionRequest::AddOns { respond_to } => {
                    reply(respond_to, session.add_ons());
                }
                SessionRequest::ListBlueprints { respond_to } => {
                    reply(respond_to, session.blueprints());
                }
                SessionRequest::SelectProduct { id, respond_to } => {
                    reply(respond_to, session.select_product(id));
                }
                SessionRequest::ReorderBlueprint { index, respond_to } => {
                    reply(respond_to, session.reorder_blueprint(index));
                }
                SessionRequest::AddItem {
                    id,
                    quantity,
                    respond_to,
                } => {
                    reply(respond_to, session.add_item(id, quantity));
                }
                SessionRequest::RemoveAt { index, respond_to } => {
                    reply(respond_to, session.remove_at(index));
                }
                SessionRequest::RemoveProduct { id, respond_to } => {
                    reply(respond_to, session.remove_product(id));
                }
                SessionRequest::RemoveOne { id, respond_to } => {
                    reply(respond_to, session.remove_one(id));
                }
                SessionRequest::BackToCatalog { respond_to } => {
                    reply(respond_to, session.back_to_catalog());
                }
                SessionRequest::ProceedToCheckout { respond_to } => {
                    reply(respond_to, session.proceed_to_checkout());
                }
                SessionRequest::BackToOrder { respond_to } => {
                    reply(respond_to, session.back_to_order());
                }
                SessionRequest::Confirm {
                    save_blueprint,
                    respond_to,
                } => {
                    reply(respond_to, session.confirm(save_blueprint));
                }
                SessionRequest::Snapshot { respond_to } => {
                    reply(respond_to, Ok(session.state().clone()));
                }
                SessionRequest::Shutdown => {
                    info!("SessionService shutting down");
                    break;
                }
            }
        }

        info!("SessionService stopped");
    }
}

fn reply<T>(respond_to: ServiceResponse<T>, result: ServiceResult<T>) {
    if let Err(e) = &result {
        warn!(error = %e, "Request rejected");
    }
    let _ = respond_to.send(result);
}
