pub mod badge;
pub mod certificate;
pub mod criteria;
pub mod draft;
pub mod event;
pub mod notification;
pub mod profile;
