//! Service layer for the add-address view
//!
//! Network collaborators sit behind traits so the handler and action
//! dispatch never touch HTTP directly. The engine owns one
//! [`Services`] bundle; spawned actions clone the `Arc`s out of it.
//!
//! ## Key Components
//!
//! - [`LocationLookup`]: Province / district / ward lists
//! - [`CustomerApi`]: Authenticated address creation
//! - [`HttpLocationLookup`], [`HttpCustomerApi`]: reqwest implementations

mod customer;
mod http;
mod location;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fake;

#[cfg(test)]
pub(crate) mod test_server;

use std::sync::Arc;

pub use customer::{CustomerApi, HttpCustomerApi, LocalCustomerApi};
pub use location::{HttpLocationLookup, LocalLocationLookup, LocationLookup};

/// The services the view's actions run against
pub struct Services<L, C> {
    pub location: Arc<L>,
    pub customer: Arc<C>,
}

impl<L, C> Services<L, C> {
    pub fn new(location: Arc<L>, customer: Arc<C>) -> Self {
        Self { location, customer }
    }
}

impl<L, C> Clone for Services<L, C> {
    fn clone(&self) -> Self {
        Self {
            location: Arc::clone(&self.location),
            customer: Arc::clone(&self.customer),
        }
    }
}
