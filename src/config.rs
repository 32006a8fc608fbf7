use log::Level;

use crate::quote::wizard::ReviewGate;

pub const COMPANY_NAME: &str = "Daluthi";
pub const CONTACT_EMAIL: &str = "d4luthi@gmail.com";
pub const CONTACT_PHONE: &str = "(62) 99999-9999";
pub const CONTACT_CITY: &str = "Goiânia, GO";

/// Contact details are checked on submit, not when leaving step 2.
pub const REVIEW_GATE: ReviewGate = ReviewGate::DeferToSubmit;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Wizard transitions and blocked moves show up locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
