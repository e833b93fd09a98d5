use tokio::sync::oneshot;

use crate::domain::{Blueprint, Customer, Product, ProductId};
use crate::error::SessionError;
use crate::session::{CheckoutSummary, OrderView, Receipt, SessionState};

/// Generic type aliases for service communication
pub type ServiceResult<T> = std::result::Result<T, SessionError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Typed messages for the session actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum SessionRequest {
    Login {
        number: String,
        respond_to: ServiceResponse<Customer>,
    },
    Logout {
        respond_to: ServiceResponse<()>,
    },
    Browse {
        low_calorie_only: bool,
        respond_to: ServiceResponse<Vec<Product>>,
    },
    AddOns {
        respond_to: ServiceResponse<Vec<Product>>,
    },
    ListBlueprints {
        respond_to: ServiceResponse<Vec<Blueprint>>,
    },
    SelectProduct {
        id: ProductId,
        respond_to: ServiceResponse<OrderView>,
    },
    ReorderBlueprint {
        index: usize,
        respond_to: ServiceResponse<OrderView>,
    },
    AddItem {
        id: ProductId,
        quantity: u32,
        respond_to: ServiceResponse<OrderView>,
    },
    RemoveAt {
        index: usize,
        respond_to: ServiceResponse<OrderView>,
    },
    RemoveProduct {
        id: ProductId,
        respond_to: ServiceResponse<OrderView>,
    },
    RemoveOne {
        id: ProductId,
        respond_to: ServiceResponse<OrderView>,
    },
    BackToCatalog {
        respond_to: ServiceResponse<()>,
    },
    ProceedToCheckout {
        respond_to: ServiceResponse<CheckoutSummary>,
    },
    BackToOrder {
        respond_to: ServiceResponse<OrderView>,
    },
    Confirm {
        save_blueprint: bool,
        respond_to: ServiceResponse<Receipt>,
    },
    Snapshot {
        respond_to: ServiceResponse<SessionState>,
    },
    Shutdown,
}
