pub mod referrer;
pub mod shell;
