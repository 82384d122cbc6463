//! Presentational components shared by the pages.

pub(crate) mod atoms;
pub(crate) mod card;
pub(crate) mod message;
pub(crate) mod modal;
pub(crate) mod stat;
pub(crate) mod toast;
