//! The single owned application state and its transitions.

mod state;

pub use state::*;

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, instrument, warn};

use crate::blueprint::{self, BlueprintStore};
use crate::catalog::{Catalog, DEFAULT_LOW_CALORIE_THRESHOLD};
use crate::config::AppConfig;
use crate::domain::{Blueprint, Category, Customer, Product, ProductId};
use crate::error::SessionError;
use crate::identity::{CustomerNumber, IdentityValidator};
use crate::order::{OrderDraft, OrderError};

/// One customer's ordering session.
///
/// Every operation checks the current [`SessionState`] and either moves to
/// the next one or leaves it untouched and returns an error.
pub struct Session {
    catalog: Catalog,
    validator: IdentityValidator,
    blueprints: BlueprintStore,
    low_calorie_threshold: u32,
    state: SessionState,
}

impl Session {
    pub fn new(catalog: Catalog, validator: IdentityValidator, blueprints: BlueprintStore) -> Self {
        Self {
            catalog,
            validator,
            blueprints,
            low_calorie_threshold: DEFAULT_LOW_CALORIE_THRESHOLD,
            state: SessionState::LoggedOut,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Catalog::breakfast(),
            IdentityValidator::default(),
            config.blueprint_store(),
        )
        .with_low_calorie_threshold(config.low_calorie_threshold)
    }

    pub fn with_low_calorie_threshold(mut self, threshold: u32) -> Self {
        self.low_calorie_threshold = threshold;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Logs a customer in, replacing whatever session was active.
    ///
    /// The number must be exactly eight digits after trimming.
    #[instrument(skip(self))]
    pub fn login(&mut self, number: &str) -> Result<Customer, SessionError> {
        let number = CustomerNumber::parse_strict(number)?;
        let customer = self.validator.resolve(number)?;
        info!(
            customer_name = %customer.name,
            past_orders = customer.past_orders,
            "Customer logged in"
        );
        self.state = SessionState::Browsing {
            customer: customer.clone(),
        };
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(customer) = self.state.customer() {
            info!(customer_name = %customer.name, "Customer logged out");
        }
        self.state = SessionState::LoggedOut;
    }

    /// The catalog, optionally only the products under the low-calorie
    /// threshold.
    #[instrument(skip(self))]
    pub fn browse(&self, low_calorie_only: bool) -> Result<Vec<Product>, SessionError> {
        self.require_customer()?;
        let products = if low_calorie_only {
            self.catalog.below_calories(self.low_calorie_threshold)
        } else {
            self.catalog.all().to_vec()
        };
        debug!(count = products.len(), "Catalog listed");
        Ok(products)
    }

    /// Simple products that can be added on top of any order.
    pub fn add_ons(&self) -> Result<Vec<Product>, SessionError> {
        self.require_customer()?;
        Ok(self.catalog.by_category(Category::Simple))
    }

    pub fn blueprints(&self) -> Result<Vec<Blueprint>, SessionError> {
        self.require_customer()?;
        Ok(self.blueprints.load()?)
    }

    /// Starts an order from a catalog product.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn select_product(&mut self, id: ProductId) -> Result<OrderView, SessionError> {
        let customer = self.browsing_customer()?.clone();
        let base = self.product(id)?;
        let draft = OrderDraft::for_selection(&base);
        info!(base = %base.name, category = %base.category, lines = draft.len(), "Order started");
        Ok(self.start_building(customer, base, draft))
    }

    /// Starts an order from the saved blueprint at `index`. Lines whose
    /// product has left the catalog are skipped.
    #[instrument(skip(self))]
    pub fn reorder_blueprint(&mut self, index: usize) -> Result<OrderView, SessionError> {
        let customer = self.browsing_customer()?.clone();
        let saved = self.blueprints.get(index)?;
        let resolved = blueprint::resolve(&saved, &self.catalog);
        if !resolved.dropped.is_empty() {
            warn!(dropped = resolved.dropped.len(), "Blueprint partially resolved");
        }

        let Some(base) = resolved.lines.first().map(|line| line.product.clone()) else {
            return Err(SessionError::BlueprintUnresolvable(saved.name));
        };
        let draft = OrderDraft::from_lines(resolved.lines)?;
        info!(blueprint_name = %saved.name, lines = draft.len(), "Order started from blueprint");
        Ok(self.start_building(customer, base, draft))
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub fn add_item(&mut self, id: ProductId, quantity: u32) -> Result<OrderView, SessionError> {
        let draft = match &mut self.state {
            SessionState::Building { draft, .. } => draft,
            other => return Err(unexpected(other, "building an order")),
        };
        let product = self
            .catalog
            .get(id)
            .ok_or(SessionError::UnknownProduct(id))?;
        draft.add_item(product, quantity)?;
        self.order_view()
    }

    /// Removes the whole line at `index` of the displayed order.
    #[instrument(skip(self))]
    pub fn remove_at(&mut self, index: usize) -> Result<OrderView, SessionError> {
        let draft = self.draft_mut()?;
        draft.remove_at(index)?;
        self.order_view()
    }

    /// Removes the whole line for `id`.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_product(&mut self, id: ProductId) -> Result<OrderView, SessionError> {
        let draft = self.draft_mut()?;
        draft.remove_product(id)?;
        self.order_view()
    }

    /// Takes one unit of `id` off the order.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_one(&mut self, id: ProductId) -> Result<OrderView, SessionError> {
        let draft = self.draft_mut()?;
        draft.remove_one(id)?;
        self.order_view()
    }

    /// The order as it currently stands.
    pub fn order_view(&self) -> Result<OrderView, SessionError> {
        match &self.state {
            SessionState::Building {
                customer,
                base,
                draft,
            } => Ok(OrderView::new(customer, base, draft)),
            other => Err(unexpected(other, "building an order")),
        }
    }

    /// Abandons any order in progress and returns to the catalog.
    #[instrument(skip(self))]
    pub fn back_to_catalog(&mut self) -> Result<(), SessionError> {
        let customer = self.require_customer()?.clone();
        if !matches!(self.state, SessionState::Browsing { .. }) {
            debug!(from = self.state.name(), "Order discarded");
        }
        self.state = SessionState::Browsing { customer };
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn proceed_to_checkout(&mut self) -> Result<CheckoutSummary, SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Building {
                customer,
                base,
                draft,
            } => {
                if draft.is_empty() {
                    self.state = SessionState::Building {
                        customer,
                        base,
                        draft,
                    };
                    return Err(OrderError::EmptyOrder.into());
                }
                let summary = summarize(&customer, &draft);
                info!(
                    total_price = %summary.totals.total_price,
                    total_calories = summary.totals.total_calories,
                    "Checkout started"
                );
                self.state = SessionState::Checkout {
                    customer,
                    base,
                    draft,
                };
                Ok(summary)
            }
            other => Err(self.restore(other, "building an order")),
        }
    }

    /// Leaves checkout with the order unchanged.
    #[instrument(skip(self))]
    pub fn back_to_order(&mut self) -> Result<OrderView, SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Checkout {
                customer,
                base,
                draft,
            } => Ok(self.start_building(customer, base, draft)),
            other => Err(self.restore(other, "at checkout")),
        }
    }

    /// Confirms the order, optionally saving its shape as a blueprint, and
    /// returns to the catalog.
    ///
    /// If saving the blueprint fails the session stays at checkout.
    #[instrument(skip(self))]
    pub fn confirm(&mut self, save_blueprint: bool) -> Result<Receipt, SessionError> {
        let (customer, draft) = match &self.state {
            SessionState::Checkout {
                customer, draft, ..
            } => (customer.clone(), draft),
            other => return Err(unexpected(other, "at checkout")),
        };

        let summary = summarize(&customer, draft);
        let blueprint = if save_blueprint {
            let name = Blueprint::default_name(now_millis());
            let blueprint = Blueprint::new(name, draft.blueprint_lines());
            self.blueprints.append(blueprint.clone())?;
            Some(blueprint)
        } else {
            None
        };

        info!(
            customer_name = %customer.name,
            total_price = %summary.totals.total_price,
            saved_blueprint = blueprint.is_some(),
            "Order confirmed"
        );
        self.state = SessionState::Browsing { customer };
        Ok(Receipt { summary, blueprint })
    }

    fn start_building(
        &mut self,
        customer: Customer,
        base: Product,
        draft: OrderDraft,
    ) -> OrderView {
        let view = OrderView::new(&customer, &base, &draft);
        self.state = SessionState::Building {
            customer,
            base,
            draft,
        };
        view
    }

    fn product(&self, id: ProductId) -> Result<Product, SessionError> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or(SessionError::UnknownProduct(id))
    }

    fn require_customer(&self) -> Result<&Customer, SessionError> {
        self.state.customer().ok_or(SessionError::NotLoggedIn)
    }

    fn browsing_customer(&self) -> Result<&Customer, SessionError> {
        match &self.state {
            SessionState::Browsing { customer } => Ok(customer),
            other => Err(unexpected(other, "browsing")),
        }
    }

    fn draft_mut(&mut self) -> Result<&mut OrderDraft, SessionError> {
        match &mut self.state {
            SessionState::Building { draft, .. } => Ok(draft),
            other => Err(unexpected(other, "building an order")),
        }
    }

    /// Puts a state taken out with `mem::take` back and describes why it
    /// could not be used.
    fn restore(&mut self, state: SessionState, expected: &'static str) -> SessionError {
        let error = unexpected(&state, expected);
        self.state = state;
        error
    }
}

fn unexpected(state: &SessionState, expected: &'static str) -> SessionError {
    match state {
        SessionState::LoggedOut => SessionError::NotLoggedIn,
        other => SessionError::InvalidState {
            expected,
            actual: other.name(),
        },
    }
}

fn summarize(customer: &Customer, draft: &OrderDraft) -> CheckoutSummary {
    CheckoutSummary {
        customer: customer.clone(),
        lines: draft.lines().cloned().collect(),
        totals: draft.totals(),
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
