//! Five-step additional-details wizard
//!
//! Linear state machine: Identity → Address → Nominee → Security →
//! Bank. Each `next()` validates the current step before advancing and
//! reports the first failing field. Nothing is persisted until
//! `submit()` succeeds on the final step; abandoning the wizard loses
//! its state.

use crate::error::{KoshError, KoshResult};
use crate::model::{Address, BankDetails, Gender, Nominee, UserProfile};
use crate::onboarding::validate;
use chrono::Utc;
use serde::Deserialize;

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Identity,
    Address,
    Nominee,
    Security,
    Bank,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    /// 1-based position, used for the progress display
    pub fn number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Address => 2,
            Self::Nominee => 3,
            Self::Security => 4,
            Self::Bank => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Identity => "Personal Details",
            Self::Address => "Address Details",
            Self::Nominee => "Nominee Declaration",
            Self::Security => "Account Security",
            Self::Bank => "Bank Details",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::Address),
            Self::Address => Some(Self::Nominee),
            Self::Nominee => Some(Self::Security),
            Self::Security => Some(Self::Bank),
            Self::Bank => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::Address => Some(Self::Identity),
            Self::Nominee => Some(Self::Address),
            Self::Security => Some(Self::Nominee),
            Self::Bank => Some(Self::Security),
        }
    }
}

/// Step 1 fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityForm {
    pub pan_number: String,
    pub name_as_per_pan: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile: String,
    pub gender: Option<Gender>,
}

/// Step 2 fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressForm {
    pub line1: String,
    pub line2: String,
    pub pin_code: String,
    pub city: String,
    pub state: String,
}

/// Step 3 fields; nominee details matter only when `declared` is
/// answered yes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NomineeForm {
    pub declared: Option<bool>,
    pub name: String,
    pub date_of_birth: String,
    pub relation: String,
    pub age: String,
}

/// Step 4 fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityForm {
    pub password: String,
    pub confirm_password: String,
}

/// Step 5 fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankForm {
    pub ifsc_code: String,
    pub account_no: String,
    pub account_type: String,
    pub bank_name: String,
    pub branch_name: String,
    pub bank_address: String,
}

/// The wizard's full state. Forms are public so a front-end can bind
/// fields directly; step transitions go through `next`/`back`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailsWizard {
    #[serde(skip)]
    step: Option<WizardStep>,
    pub identity: IdentityForm,
    pub address: AddressForm,
    pub nominee: NomineeForm,
    pub security: SecurityForm,
    pub bank: BankForm,
}

impl DetailsWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step.unwrap_or(WizardStep::Identity)
    }

    /// Completion percentage shown in the progress bar
    pub fn progress_percent(&self) -> u8 {
        self.step().number() * 100 / WizardStep::COUNT
    }

    /// Validate the current step and advance. On the final step this
    /// validates without advancing; call `submit()` to finish.
    pub fn next(&mut self) -> KoshResult<()> {
        let step = self.step();
        self.validate_step(step)?;
        if let Some(next) = step.next() {
            self.step = Some(next);
        }
        Ok(())
    }

    /// Step backward without validating; field edits are kept
    pub fn back(&mut self) {
        if let Some(previous) = self.step().previous() {
            self.step = Some(previous);
        }
    }

    /// First failing field of `step`, if any
    pub fn validate_step(&self, step: WizardStep) -> KoshResult<()> {
        match step {
            WizardStep::Identity => self.validate_identity(),
            WizardStep::Address => self.validate_address(),
            WizardStep::Nominee => self.validate_nominee(),
            WizardStep::Security => self.validate_security(),
            WizardStep::Bank => self.validate_bank(),
        }
    }

    fn validate_identity(&self) -> KoshResult<()> {
        let form = &self.identity;
        if !validate::is_valid_pan(&form.pan_number) {
            return Err(KoshError::validation(
                "panNumber",
                "enter a valid PAN number (e.g. ABCDE1234F)",
            ));
        }
        if form.name_as_per_pan.trim().is_empty() {
            return Err(KoshError::validation("nameAsPerPan", "enter your name as per PAN"));
        }
        if form.date_of_birth.trim().is_empty() {
            return Err(KoshError::validation("dateOfBirth", "enter your date of birth"));
        }
        if !validate::is_valid_email(&form.email) {
            return Err(KoshError::validation("email", "enter a valid email address"));
        }
        if !validate::is_valid_mobile(&form.mobile) {
            return Err(KoshError::validation(
                "mobile",
                "enter a valid 10-digit mobile number",
            ));
        }
        if form.gender.is_none() {
            return Err(KoshError::validation("gender", "select your gender"));
        }
        Ok(())
    }

    fn validate_address(&self) -> KoshResult<()> {
        let form = &self.address;
        if form.line1.trim().is_empty() {
            return Err(KoshError::validation("addressLine1", "enter your address line 1"));
        }
        if !validate::is_valid_pin_code(&form.pin_code) {
            return Err(KoshError::validation("pinCode", "enter a valid 6-digit PIN code"));
        }
        if form.city.trim().is_empty() {
            return Err(KoshError::validation("city", "enter your city"));
        }
        if form.state.trim().is_empty() {
            return Err(KoshError::validation("state", "enter your state"));
        }
        Ok(())
    }

    fn validate_nominee(&self) -> KoshResult<()> {
        let form = &self.nominee;
        let Some(declared) = form.declared else {
            return Err(KoshError::validation(
                "nominee",
                "select whether you want to declare a nominee",
            ));
        };
        if !declared {
            return Ok(());
        }
        if form.name.trim().is_empty() {
            return Err(KoshError::validation("nomineeName", "enter nominee name"));
        }
        if form.date_of_birth.trim().is_empty() {
            return Err(KoshError::validation(
                "nomineeDob",
                "enter nominee date of birth",
            ));
        }
        if form.relation.trim().is_empty() {
            return Err(KoshError::validation(
                "nomineeRelation",
                "enter relation with nominee",
            ));
        }
        if form.age.trim().parse::<u32>().is_err() {
            return Err(KoshError::validation("nomineeAge", "enter valid nominee age"));
        }
        Ok(())
    }

    fn validate_security(&self) -> KoshResult<()> {
        let form = &self.security;
        if form.password.len() < validate::WIZARD_PASSWORD_MIN {
            return Err(KoshError::validation(
                "password",
                format!(
                    "password must be at least {} characters long",
                    validate::WIZARD_PASSWORD_MIN
                ),
            ));
        }
        if form.password != form.confirm_password {
            return Err(KoshError::validation("confirmPassword", "passwords do not match"));
        }
        Ok(())
    }

    fn validate_bank(&self) -> KoshResult<()> {
        let form = &self.bank;
        if !validate::is_valid_ifsc(&form.ifsc_code) {
            return Err(KoshError::validation(
                "ifscCode",
                "enter a valid 11-character IFSC code",
            ));
        }
        if !validate::is_valid_account_no(&form.account_no) {
            return Err(KoshError::validation("accountNo", "enter a valid account number"));
        }
        Ok(())
    }

    /// Validate every step and assemble the completed profile.
    /// Only meaningful once the wizard has been walked to the final
    /// step; earlier steps re-validate so stale edits can't slip
    /// through.
    pub fn submit(self) -> KoshResult<(UserProfile, String)> {
        for step in [
            WizardStep::Identity,
            WizardStep::Address,
            WizardStep::Nominee,
            WizardStep::Security,
            WizardStep::Bank,
        ] {
            self.validate_step(step)?;
        }

        let nominee = if self.nominee.declared == Some(true) {
            Some(Nominee {
                name: self.nominee.name,
                date_of_birth: self.nominee.date_of_birth,
                relation: self.nominee.relation,
                // Parse checked in validate_nominee
                age: self.nominee.age.trim().parse().unwrap_or_default(),
            })
        } else {
            None
        };

        let profile = UserProfile {
            email: self.identity.email,
            name: self.identity.name_as_per_pan,
            mobile: self.identity.mobile,
            pan_number: Some(self.identity.pan_number),
            date_of_birth: Some(self.identity.date_of_birth),
            gender: self.identity.gender,
            address: Some(Address {
                line1: self.address.line1,
                line2: if self.address.line2.trim().is_empty() {
                    None
                } else {
                    Some(self.address.line2)
                },
                pin_code: self.address.pin_code,
                city: self.address.city,
                state: self.address.state,
            }),
            nominee,
            bank_details: Some(BankDetails {
                ifsc_code: self.bank.ifsc_code,
                account_no: self.bank.account_no,
                account_type: self.bank.account_type,
                bank_name: self.bank.bank_name,
                branch_name: self.bank.branch_name,
                bank_address: self.bank.bank_address,
            }),
            created_at: Utc::now(),
        };

        Ok((profile, self.security.password))
    }
}
