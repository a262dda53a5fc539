//! sea-orm entities for the users service.

pub mod users;
