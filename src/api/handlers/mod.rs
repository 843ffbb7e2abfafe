pub mod achievements;
pub mod event;
pub mod health;
pub mod home;
pub mod organizer;
pub mod passbook;
pub mod wizard;
