use std::rc::Rc;

use yew::Reducible;

use super::validation::{validate, ContactForm, Field, FormErrors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Contact form lifecycle: edits, validation on submit, and delivery outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    data: ContactForm,
    errors: FormErrors,
    phase: FormPhase,
}

impl ContactFormState {
    pub fn data(&self) -> &ContactForm {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Stores the new value and drops that field's error, leaving the others.
    pub fn edit(&mut self, field: Field, value: String) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    /// Validates the whole form. On success moves to `Submitting` and hands
    /// back the payload to deliver; otherwise stays put with errors shown.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.phase != FormPhase::Idle {
            return None;
        }
        self.errors = validate(&self.data);
        if !self.errors.is_valid() {
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some(self.data.clone())
    }

    pub fn finish_submit(&mut self, delivered: bool) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        if delivered {
            self.data = ContactForm::default();
            self.phase = FormPhase::Submitted;
        } else {
            self.phase = FormPhase::Idle;
        }
    }

    /// "Send another message" after a successful submission.
    pub fn start_over(&mut self) {
        if self.phase == FormPhase::Submitted {
            self.data = ContactForm::default();
            self.errors = FormErrors::default();
            self.phase = FormPhase::Idle;
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Delivered(bool),
    StartOver,
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => {
                next.begin_submit();
            }
            FormAction::Delivered(delivered) => next.finish_submit(delivered),
            FormAction::StartOver => next.start_over(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::FieldError;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.edit(Field::Name, "Jo".into());
        state.edit(Field::Email, "a@b.co".into());
        state.edit(Field::Phone, "(555) 123-4567".into());
        state.edit(Field::Message, "Looking to schedule a session.".into());
        state
    }

    #[test]
    fn valid_submit_runs_to_submitted_and_clears() {
        let mut state = filled();
        let payload = state.begin_submit();
        assert_eq!(payload.as_ref().map(|p| p.name.as_str()), Some("Jo"));
        assert_eq!(state.phase(), FormPhase::Submitting);

        state.finish_submit(true);
        assert_eq!(state.phase(), FormPhase::Submitted);
        assert_eq!(state.data(), &ContactForm::default());
    }

    #[test]
    fn invalid_submit_stays_idle_and_keeps_input() {
        let mut state = ContactFormState::default();
        state.edit(Field::Name, "Jo".into());
        state.edit(Field::Email, "bad".into());

        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.data().name, "Jo");
        assert_eq!(state.data().email, "bad");
        assert_eq!(state.errors().len(), 3);
    }

    #[test]
    fn typing_clears_only_that_error() {
        let mut state = ContactFormState::default();
        state.begin_submit();
        assert_eq!(state.errors().len(), 4);

        state.edit(Field::Email, "x".into());
        assert_eq!(state.errors().get(Field::Email), None);
        for field in [Field::Name, Field::Phone, Field::Message] {
            assert_eq!(state.errors().get(field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn failed_delivery_keeps_data_for_retry() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(false);
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.data().name, "Jo");
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase(), FormPhase::Submitting);
    }

    #[test]
    fn start_over_returns_to_idle() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(true);
        state.start_over();
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.data(), &ContactForm::default());
        assert!(state.errors().is_valid());
    }

    #[test]
    fn actions_drive_the_same_lifecycle() {
        let mut state = Rc::new(ContactFormState::default());
        for (field, value) in [
            (Field::Name, "Jo"),
            (Field::Email, "a@b.co"),
            (Field::Phone, "(555) 123-4567"),
            (Field::Message, "Looking to schedule a session."),
        ] {
            state = state.reduce(FormAction::Edit(field, value.into()));
        }

        state = state.reduce(FormAction::Submit);
        assert_eq!(state.phase(), FormPhase::Submitting);
        assert_eq!(state.data().name, "Jo");

        state = state.reduce(FormAction::Delivered(true));
        assert_eq!(state.phase(), FormPhase::Submitted);

        state = state.reduce(FormAction::StartOver);
        assert_eq!(*state, ContactFormState::default());
    }

    #[test]
    fn invalid_submit_action_only_records_errors() {
        let state = Rc::new(ContactFormState::default()).reduce(FormAction::Submit);
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.errors().len(), 4);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut state = filled();
        state.finish_submit(true);
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.data().name, "Jo");
    }
}
