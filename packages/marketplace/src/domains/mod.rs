// Domain modules, one per marketplace screen

pub mod listings;
pub mod seller_registration;
pub mod support_chat;
