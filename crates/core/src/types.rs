/// Visitor identifiers are opaque strings assigned by the registrant store.
pub type VisitorId = String;

/// Hall primary keys are integers in the registrant store.
pub type HallId = i64;
