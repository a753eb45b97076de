//! KYC onboarding: form validation and the additional-details wizard

pub mod validate;
pub mod wizard;

pub use wizard::{DetailsWizard, WizardStep};
