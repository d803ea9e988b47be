//! sea-orm entities for the verify service.

pub mod outbox_events;
