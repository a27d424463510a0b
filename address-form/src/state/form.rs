//! Form state management

use leptos::prelude::*;
use lib_core::form::{AddressForm, FormPhase, FormStore};
use shared::dto::AddressSuggestion;

/// Global form context
#[derive(Clone, Copy)]
pub struct FormContext {
    pub form: RwSignal<AddressForm>,
}

impl FormContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AddressForm::new()),
        }
    }

    pub fn address(&self) -> Option<AddressSuggestion> {
        self.form.with(|form| form.address().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.form.with(|form| form.error().map(str::to_string))
    }

    pub fn is_success(&self) -> bool {
        self.form.with(AddressForm::is_success)
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(AddressForm::is_submitting)
    }

    pub fn can_submit(&self) -> bool {
        self.form.with(AddressForm::can_submit)
    }

    pub fn phase(&self) -> FormPhase {
        self.form.with(AddressForm::phase)
    }

    pub fn select(&self, address: Option<AddressSuggestion>) {
        self.form.update(|form| form.select(address));
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore for FormContext {
    fn with_form<R>(&self, f: impl FnOnce(&mut AddressForm) -> R) -> R {
        let mut guard = self.form.write();
        f(&mut *guard)
    }
}

pub fn provide_form_context() -> FormContext {
    let context = FormContext::new();
    provide_context(context);
    context
}

pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
