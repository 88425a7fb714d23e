//! Core library for the consultancy site
//!
//! This crate implements the **Functional Core** of the consultancy site,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`consultancy_core`** (this crate): Pure transformation functions with zero I/O
//! - **`consultancy`**: HTTP client, relays, HTML rendering and the web server (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`content`]: Records returned by the content API and image normalization
//! - [`pagination`]: Windowed page-number sequences for listing pages
//! - [`listing`]: Listing kinds, page sizes and card shaping
//! - [`detail`]: Related/recent summaries for detail pages
//! - [`enquiry`]: Enquiry validation, topics and chat links
//! - [`contact`]: Email and chat message templating for the contact relay
//! - [`route`]: Route classification passed from the router to the page shell
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use consultancy_core::pagination::{paginate, PageToken};
//!
//! let tokens = paginate(5, 10);
//! assert_eq!(tokens.first(), Some(&PageToken::Previous(4)));
//! ```

pub mod contact;
pub mod content;
pub mod detail;
pub mod enquiry;
pub mod listing;
pub mod pagination;
pub mod route;
