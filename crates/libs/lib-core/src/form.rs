//! # Address Form State
//!
//! The form's local state and the submit flow, independent of any UI framework.
//!
//! ## Phases
//!
//! ```text
//!  Idle ──select──▶ Selected ──submit──▶ Submitting ──ok──▶ Success ──5s──▶ Idle
//!   ▲                  ▲                      │
//!   │                  └────── retry ─────────┤
//!   └──────────────────────────────────── err ▼
//!                                          Failed
//! ```
//!
//! The phase is derived from the flags rather than stored, so a stray timer clearing the
//! success flag can never leave the form in an inconsistent state.
//!
//! ## Where the state lives
//!
//! [`FormStore`] hides the container: a `RefCell` natively, a Leptos signal in the browser.
//! [`submit_address`] and [`dismiss_after`] only go through it, never holding a borrow across
//! an `.await`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;
use shared::dto::AddressSuggestion;

use crate::delay::Delay;
use crate::error::SubmitError;
use crate::transport::HttpTransport;
use crate::webhook::WebhookClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Selected,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressForm {
    address: Option<AddressSuggestion>,
    error: Option<String>,
    success: bool,
    submitting: bool,
}

impl AddressForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> Option<&AddressSuggestion> {
        self.address.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else if self.success {
            FormPhase::Success
        } else if self.error.is_some() {
            FormPhase::Failed
        } else if self.address.is_some() {
            FormPhase::Selected
        } else {
            FormPhase::Idle
        }
    }

    /// Replace the selection wholesale.
    pub fn select(&mut self, address: Option<AddressSuggestion>) {
        self.address = address;
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.address.is_some() && !self.submitting
    }

    /// Enter `Submitting` and hand out the address to send.
    ///
    /// Without a selection this records the validation error instead and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<AddressSuggestion, SubmitError> {
        if self.submitting {
            return Err(SubmitError::Busy);
        }

        let Some(address) = self.address.clone() else {
            let err = SubmitError::Validation;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.submitting = true;
        self.error = None;
        self.success = false;
        Ok(address)
    }

    /// Record the outcome of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// Success clears the selection; failure keeps it so the user can retry as-is.
    pub fn finish_submit(&mut self, result: &Result<Value, SubmitError>) {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.address = None;
                self.success = true;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Hide the success banner. Only the flag is touched.
    pub fn dismiss_success(&mut self) {
        self.success = false;
    }
}

/// Access to wherever the [`AddressForm`] lives.
pub trait FormStore {
    fn with_form<R>(&self, f: impl FnOnce(&mut AddressForm) -> R) -> R;
}

impl FormStore for RefCell<AddressForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut AddressForm) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Validate, send, and record the result.
///
/// `params` are the already-filtered propagated query parameters.
pub async fn submit_address<S, T>(
    store: &S,
    client: &WebhookClient<T>,
    params: BTreeMap<String, String>,
) -> Result<Value, SubmitError>
where
    S: FormStore,
    T: HttpTransport,
{
    let address = store.with_form(AddressForm::begin_submit).map_err(|err| {
        tracing::warn!(error = %err, "Submission not started");
        err
    })?;

    let result = client.send_address_data(address, params).await;
    store.with_form(|form| form.finish_submit(&result));

    if let Err(err) = &result {
        tracing::error!(error = ?err, "Form submission error");
    }
    result
}

/// Clear the success flag after `after` has elapsed.
///
/// Overlapping calls are harmless: each only clears the flag, the last one wins.
pub async fn dismiss_after<S, D>(store: &S, delay: &D, after: Duration)
where
    S: FormStore,
    D: Delay,
{
    delay.sleep(after).await;
    store.with_form(AddressForm::dismiss_success);
}
