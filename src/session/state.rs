use crate::domain::{Blueprint, Customer, OrderLine, Product, Totals};
use crate::order::OrderDraft;

/// Where the customer currently is in the ordering flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    Browsing {
        customer: Customer,
    },
    Building {
        customer: Customer,
        base: Product,
        draft: OrderDraft,
    },
    Checkout {
        customer: Customer,
        base: Product,
        draft: OrderDraft,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::LoggedOut => "logged out",
            SessionState::Browsing { .. } => "browsing",
            SessionState::Building { .. } => "building an order",
            SessionState::Checkout { .. } => "at checkout",
        }
    }

    pub fn customer(&self) -> Option<&Customer> {
        match self {
            SessionState::LoggedOut => None,
            SessionState::Browsing { customer }
            | SessionState::Building { customer, .. }
            | SessionState::Checkout { customer, .. } => Some(customer),
        }
    }
}

/// The order screen: who is ordering, what they started from, and the
/// current lines with their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub customer: Customer,
    pub base: Product,
    pub lines: Vec<OrderLine>,
    pub totals: Totals,
}

impl OrderView {
    pub(crate) fn new(customer: &Customer, base: &Product, draft: &OrderDraft) -> Self {
        Self {
            customer: customer.clone(),
            base: base.clone(),
            lines: draft.lines().cloned().collect(),
            totals: draft.totals(),
        }
    }
}

/// What the customer is about to pay for.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub totals: Totals,
}

/// A confirmed order, plus the blueprint saved from it if one was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub summary: CheckoutSummary,
    pub blueprint: Option<Blueprint>,
}
