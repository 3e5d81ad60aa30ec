//! Async client for the depot logistics back-office REST API.
//!
//! The backend wraps every response in a `{ code, message, data }` envelope;
//! this crate strips the envelope and hands callers typed payloads. Endpoint
//! methods are grouped per resource (products, customers, locations) as
//! inherent methods on [`ApiClient`] in separate files, keeping [`client`]
//! itself focused on transport mechanics.
//!
//! All operations are single-attempt: no retries, no backoff, no
//! cancellation. Any transport or non-success response surfaces as an
//! [`Error`].

pub mod client;
pub mod error;
pub mod models;

mod customers;
mod health;
mod locations;
mod products;

pub use client::ApiClient;
pub use error::Error;
pub use models::{
    Customer, CustomerUpdate, HealthStatus, NewCustomer, NewProduct, NewStorageLocation, Page,
    Product, ProductPageQuery, ProductUpdate, SortDir, StorageLocation, StorageLocationUpdate,
};
