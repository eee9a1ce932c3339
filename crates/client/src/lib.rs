//! `vitrine-client` -- HTTP synchronization layer for the portfolio
//! view model.
//!
//! [`api::PortfolioApi`] wraps the REST endpoints with [`reqwest`];
//! [`controller::PortfolioController`] owns the
//! [`ClientState`](vitrine_core::state::ClientState) and drives every
//! operation (startup sync plus project create/update/delete),
//! surfacing outcomes through the [`notice::NoticeBoard`].

pub mod api;
pub mod config;
pub mod controller;
pub mod notice;
