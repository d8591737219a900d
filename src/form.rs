//! Contact form state: per-field lifecycle, submit contract, banners.
//!
//! Each field starts untouched, is touched on first focus, and is
//! revalidated on every input and blur while touched. Submission is
//! guarded by the honeypot field and the session token before any field
//! validation runs; both guards are client-side theater carried over from
//! the site design, not a security boundary.

use std::time::Instant;

use tracing::{info, warn};

use crate::constants::form as limits;
use crate::lang::{strings, Language};
use crate::session::{self, SessionStore, TOKEN_KEY};
use crate::validation;

/// The visible form fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    EventType,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::EventType,
        FieldId::Message,
    ];

    pub fn label(self, lang: Language) -> &'static str {
        let s = strings(lang);
        match self {
            FieldId::Name => s.label_name,
            FieldId::Email => s.label_email,
            FieldId::Phone => s.label_phone,
            FieldId::EventType => s.label_event_type,
            FieldId::Message => s.label_message,
        }
    }
}

/// What the form focus is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldId),
    Submit,
}

impl FormFocus {
    /// Traversal order: the five fields, then the submit control.
    const ORDER: [FormFocus; 6] = [
        FormFocus::Field(FieldId::Name),
        FormFocus::Field(FieldId::Email),
        FormFocus::Field(FieldId::Phone),
        FormFocus::Field(FieldId::EventType),
        FormFocus::Field(FieldId::Message),
        FormFocus::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Derived visual class for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Empty,
    Valid,
    Invalid,
}

/// A text field with its touched flag.
#[derive(Debug, Default)]
struct Field {
    value: String,
    touched: bool,
}

/// The event-type selector.
#[derive(Debug, Default)]
struct EventTypeField {
    selected: Option<usize>,
    touched: bool,
}

/// Banner shown under the form after a submit attempt.
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub is_error: bool,
    expires_at: Instant,
}

/// Counter tone for the message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot tripped: dropped silently, logged only.
    BotRejected,
    /// Stored and submitted tokens differ; validation never ran.
    TokenMismatch,
    /// Field validation failed; form stays populated.
    Invalid,
    /// All checks passed; the simulated network round-trip is running.
    Accepted,
    /// A previous submit is still in flight.
    Busy,
}

pub struct ContactForm {
    name: Field,
    email: Field,
    phone: Field,
    event_type: EventTypeField,
    message: Field,

    /// Hidden field legitimate users never see or fill.
    honeypot: String,
    /// Hidden token field, mirrored in the session store.
    token_field: String,

    pub focus: Option<FormFocus>,
    /// Deadline of the simulated network round-trip, when in flight.
    submit_deadline: Option<Instant>,
    banner: Option<Banner>,
}

impl ContactForm {
    /// Creates the form and issues the initial token into the store.
    pub fn new(store: &mut SessionStore) -> Self {
        let mut form = Self {
            name: Field::default(),
            email: Field::default(),
            phone: Field::default(),
            event_type: EventTypeField::default(),
            message: Field::default(),
            honeypot: String::new(),
            token_field: String::new(),
            focus: None,
            submit_deadline: None,
            banner: None,
        };
        form.issue_token(store);
        form
    }

    /// Replaces the token in both the hidden field and the session store.
    fn issue_token(&mut self, store: &mut SessionStore) {
        let token = session::generate_token();
        store.set(TOKEN_KEY, &token);
        self.token_field = token;
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name.value,
            FieldId::Email => &self.email.value,
            FieldId::Phone => &self.phone.value,
            FieldId::Message => &self.message.value,
            FieldId::EventType => "",
        }
    }

    pub fn event_type_selected(&self) -> Option<usize> {
        self.event_type.selected
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_deadline.is_some()
    }

    fn field(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Message => &mut self.message,
            FieldId::EventType => unreachable!("event type is a selector"),
        }
    }

    fn touched(&self, id: FieldId) -> bool {
        match id {
            FieldId::Name => self.name.touched,
            FieldId::Email => self.email.touched,
            FieldId::Phone => self.phone.touched,
            FieldId::Message => self.message.touched,
            FieldId::EventType => self.event_type.touched,
        }
    }

    // --- Focus / transitions ---

    /// Focus touches a field without changing its validity.
    pub fn on_focus(&mut self, target: FormFocus) {
        self.focus = Some(target);
        if let FormFocus::Field(id) = target {
            match id {
                FieldId::EventType => self.event_type.touched = true,
                _ => self.field(id).touched = true,
            }
        }
    }

    pub fn on_blur(&mut self) {
        // Validity is derived, so leaving a field needs no recompute here.
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Some(f) => f.next(),
            None => FormFocus::Field(FieldId::Name),
        };
        self.on_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Some(f) => f.prev(),
            None => FormFocus::Submit,
        };
        self.on_focus(prev);
    }

    /// Character input into the focused text field.
    pub fn input_char(&mut self, c: char) {
        if let Some(FormFocus::Field(id)) = self.focus {
            if id != FieldId::EventType {
                self.field(id).value.push(c);
            }
        }
    }

    /// Backspace in the focused text field.
    pub fn input_backspace(&mut self) {
        if let Some(FormFocus::Field(id)) = self.focus {
            if id != FieldId::EventType {
                self.field(id).value.pop();
            }
        }
    }

    /// Cycles the event-type selection (selector field only).
    pub fn cycle_event_type(&mut self, delta: i32, lang: Language) {
        let count = strings(lang).event_types.len();
        let current = self.event_type.selected;
        self.event_type.selected = Some(match (current, delta >= 0) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
        self.event_type.touched = true;
    }

    /// Sets the honeypot field. Only automation ever reaches this; the
    /// field is never rendered or focusable.
    pub fn fill_honeypot(&mut self, value: &str) {
        self.honeypot = value.to_string();
    }

    /// Overwrites the hidden token field (mismatch can only be produced
    /// by automation or a stale page).
    pub fn set_token_field(&mut self, value: &str) {
        self.token_field = value.to_string();
    }

    // --- Derived state ---

    /// Validation for a field's current value, independent of touched.
    fn check(&self, id: FieldId, lang: Language) -> validation::ValidationResult {
        match id {
            FieldId::Name => validation::validate_name(&self.name.value, lang),
            FieldId::Email => validation::validate_email(&self.email.value, lang),
            FieldId::Phone => validation::validate_phone(&self.phone.value, lang),
            FieldId::EventType => {
                validation::validate_event_type(self.event_type.selected, lang)
            }
            FieldId::Message => validation::validate_message(&self.message.value, lang),
        }
    }

    fn value_is_empty(&self, id: FieldId) -> bool {
        match id {
            FieldId::EventType => self.event_type.selected.is_none(),
            _ => self.value(id).trim().is_empty(),
        }
    }

    /// Visual class and error message for a field. Untouched fields stay
    /// neutral; touched fields show valid/invalid/empty.
    pub fn visual(&self, id: FieldId, lang: Language) -> (Validity, Option<String>) {
        if !self.touched(id) {
            return (Validity::Empty, None);
        }
        if self.value_is_empty(id) {
            let msg = if id == FieldId::EventType {
                strings(lang).err_event_type
            } else {
                strings(lang).err_required
            };
            return (Validity::Empty, Some(msg.to_string()));
        }
        match self.check(id, lang) {
            Ok(()) => (Validity::Valid, None),
            Err(msg) => (Validity::Invalid, Some(msg)),
        }
    }

    /// Live character counter for the message field: `"{len}/{max}"`.
    pub fn counter_text(&self) -> String {
        format!(
            "{}/{}",
            self.message.value.chars().count(),
            limits::MESSAGE_MAX
        )
    }

    pub fn counter_level(&self) -> CounterLevel {
        let len = self.message.value.chars().count();
        let remaining = limits::MESSAGE_MAX as i64 - len as i64;
        if remaining <= limits::COUNTER_DANGER as i64 {
            CounterLevel::Danger
        } else if remaining <= limits::COUNTER_WARNING as i64 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    /// Revalidates every field, touching them all so errors render.
    fn validate_all(&mut self, lang: Language) -> bool {
        self.name.touched = true;
        self.email.touched = true;
        self.phone.touched = true;
        self.event_type.touched = true;
        self.message.touched = true;
        FieldId::ALL.iter().all(|id| self.check(*id, lang).is_ok())
    }

    // --- Submit contract ---

    pub fn submit(
        &mut self,
        now: Instant,
        lang: Language,
        store: &SessionStore,
    ) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }

        // Honeypot: silent drop, diagnostic only.
        if !self.honeypot.is_empty() {
            warn!("bot submission detected, dropping silently");
            return SubmitOutcome::BotRejected;
        }

        // Token check runs before any field validation.
        if store.get(TOKEN_KEY) != Some(self.token_field.as_str()) {
            self.banner = Some(Banner {
                text: strings(lang).token_error.to_string(),
                is_error: true,
                expires_at: now + limits::BANNER_TTL,
            });
            return SubmitOutcome::TokenMismatch;
        }

        if !self.validate_all(lang) {
            self.banner = Some(Banner {
                text: strings(lang).form_error.to_string(),
                is_error: true,
                expires_at: now + limits::BANNER_TTL,
            });
            return SubmitOutcome::Invalid;
        }

        // Submit control disables while the simulated round-trip runs.
        self.submit_deadline = Some(now + limits::SUBMIT_DELAY);
        SubmitOutcome::Accepted
    }

    /// Clears all fields back to the untouched state.
    fn reset_fields(&mut self) {
        self.name = Field::default();
        self.email = Field::default();
        self.phone = Field::default();
        self.event_type = EventTypeField::default();
        self.message = Field::default();
        self.focus = None;
    }

    /// Timer pass: completes an in-flight submit and expires the banner.
    /// Returns true when something visible changed.
    pub fn on_tick(&mut self, now: Instant, lang: Language, store: &mut SessionStore) -> bool {
        let mut changed = false;

        if matches!(self.submit_deadline, Some(d) if now >= d) {
            self.submit_deadline = None;
            info!(
                name = %self.name.value.trim(),
                event_type = ?self.event_type.selected,
                at = %chrono::Local::now().to_rfc3339(),
                "inquiry submitted"
            );
            self.banner = Some(Banner {
                text: strings(lang).form_success.to_string(),
                is_error: false,
                expires_at: now + limits::BANNER_TTL,
            });
            self.reset_fields();
            self.issue_token(store);
            changed = true;
        }

        if matches!(&self.banner, Some(b) if now >= b.expires_at) {
            self.banner = None;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const ES: Language = Language::Es;

    fn form() -> (ContactForm, SessionStore) {
        let mut store = SessionStore::new();
        let form = ContactForm::new(&mut store);
        (form, store)
    }

    fn fill_valid(form: &mut ContactForm) {
        form.on_focus(FormFocus::Field(FieldId::Name));
        for c in "Ana García".chars() {
            form.input_char(c);
        }
        form.on_focus(FormFocus::Field(FieldId::Email));
        for c in "ana@example.com".chars() {
            form.input_char(c);
        }
        form.on_focus(FormFocus::Field(FieldId::Phone));
        for c in "612345678".chars() {
            form.input_char(c);
        }
        form.on_focus(FormFocus::Field(FieldId::EventType));
        form.cycle_event_type(1, ES);
        form.on_focus(FormFocus::Field(FieldId::Message));
        for c in "Cotización para una boda en junio".chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn test_untouched_fields_are_neutral() {
        let (form, _) = form();
        for id in FieldId::ALL {
            let (validity, msg) = form.visual(id, ES);
            assert_eq!(validity, Validity::Empty);
            assert!(msg.is_none());
        }
    }

    #[test]
    fn test_focus_touches_without_validity_change() {
        let (mut form, _) = form();
        form.on_focus(FormFocus::Field(FieldId::Name));
        let (validity, msg) = form.visual(FieldId::Name, ES);
        assert_eq!(validity, Validity::Empty);
        // Touched and empty now carries the required-field message.
        assert!(msg.is_some());
    }

    #[test]
    fn test_input_revalidates_touched_field() {
        let (mut form, _) = form();
        form.on_focus(FormFocus::Field(FieldId::Name));
        form.input_char('A');
        assert_eq!(form.visual(FieldId::Name, ES).0, Validity::Invalid);
        form.input_char('n');
        assert_eq!(form.visual(FieldId::Name, ES).0, Validity::Valid);
        form.input_backspace();
        assert_eq!(form.visual(FieldId::Name, ES).0, Validity::Invalid);
    }

    #[test]
    fn test_focus_traversal_order_wraps() {
        let (mut form, _) = form();
        form.focus_next();
        assert_eq!(form.focus, Some(FormFocus::Field(FieldId::Name)));
        for _ in 0..5 {
            form.focus_next();
        }
        assert_eq!(form.focus, Some(FormFocus::Submit));
        form.focus_next();
        assert_eq!(form.focus, Some(FormFocus::Field(FieldId::Name)));
        form.focus_prev();
        assert_eq!(form.focus, Some(FormFocus::Submit));
    }

    #[test]
    fn test_counter_text_and_levels() {
        let (mut form, _) = form();
        assert_eq!(form.counter_text(), "0/500");
        assert_eq!(form.counter_level(), CounterLevel::Normal);

        form.on_focus(FormFocus::Field(FieldId::Message));
        for _ in 0..450 {
            form.input_char('a');
        }
        assert_eq!(form.counter_text(), "450/500");
        assert_eq!(form.counter_level(), CounterLevel::Warning);

        for _ in 0..30 {
            form.input_char('a');
        }
        assert_eq!(form.counter_level(), CounterLevel::Danger);

        for _ in 0..21 {
            form.input_char('a');
        }
        assert_eq!(form.counter_text(), "501/500");
        assert_eq!(form.visual(FieldId::Message, ES).0, Validity::Invalid);
    }

    #[test]
    fn test_honeypot_drops_silently() {
        let (mut form, store) = form();
        fill_valid(&mut form);
        form.fill_honeypot("https://spam.example");

        let outcome = form.submit(Instant::now(), ES, &store);
        assert_eq!(outcome, SubmitOutcome::BotRejected);
        // No banner, no simulated delay.
        assert!(form.banner().is_none());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_token_mismatch_blocks_before_validation() {
        let (mut form, store) = form();
        // All fields invalid, but the token error must win.
        form.set_token_field("stale-token");

        let outcome = form.submit(Instant::now(), ES, &store);
        assert_eq!(outcome, SubmitOutcome::TokenMismatch);
        let banner = form.banner().unwrap();
        assert!(banner.is_error);
        assert_eq!(banner.text, "Token de seguridad inválido. Recarga la página.");
        // Validation never ran: fields stay untouched.
        assert_eq!(form.visual(FieldId::Name, ES), (Validity::Empty, None));
    }

    #[test]
    fn test_invalid_fields_show_aggregate_error_and_stay_populated() {
        let (mut form, store) = form();
        form.on_focus(FormFocus::Field(FieldId::Name));
        form.input_char('A');

        let outcome = form.submit(Instant::now(), ES, &store);
        assert_eq!(outcome, SubmitOutcome::Invalid);
        let banner = form.banner().unwrap();
        assert!(banner.is_error);
        assert_eq!(banner.text, strings(ES).form_error);
        // Form stays populated for correction; every field now shows state.
        assert_eq!(form.value(FieldId::Name), "A");
        assert_eq!(form.visual(FieldId::Email, ES).0, Validity::Empty);
        assert!(form.visual(FieldId::Email, ES).1.is_some());
    }

    #[test]
    fn test_successful_submit_resets_and_rotates_token() {
        let (mut form, mut store) = form();
        fill_valid(&mut form);
        let old_token = form.token_field.clone();

        let start = Instant::now();
        assert_eq!(form.submit(start, ES, &store), SubmitOutcome::Accepted);
        assert!(form.is_submitting());
        // Double submit while in flight is rejected.
        assert_eq!(form.submit(start, ES, &store), SubmitOutcome::Busy);

        // Before the deadline nothing completes.
        assert!(!form.on_tick(start + Duration::from_millis(100), ES, &mut store));

        let done = start + limits::SUBMIT_DELAY + Duration::from_millis(1);
        assert!(form.on_tick(done, ES, &mut store));
        assert!(!form.is_submitting());

        let banner = form.banner().unwrap();
        assert!(!banner.is_error);
        assert_eq!(banner.text, strings(ES).form_success);

        // Form reset and fresh token issued both places.
        assert_eq!(form.value(FieldId::Name), "");
        assert_eq!(form.event_type_selected(), None);
        assert_ne!(form.token_field, old_token);
        assert_eq!(store.get(TOKEN_KEY), Some(form.token_field.as_str()));

        // Matching token means a follow-up submit revalidates normally.
        assert_eq!(
            form.submit(done, ES, &store),
            SubmitOutcome::Invalid
        );
    }

    #[test]
    fn test_banner_expires_after_ttl() {
        let (mut form, mut store) = form();
        let start = Instant::now();
        form.submit(start, ES, &store); // Invalid -> error banner
        assert!(form.banner().is_some());

        let later = start + limits::BANNER_TTL + Duration::from_millis(1);
        assert!(form.on_tick(later, ES, &mut store));
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_event_type_cycles_both_ways() {
        let (mut form, _) = form();
        form.cycle_event_type(1, ES);
        assert_eq!(form.event_type_selected(), Some(0));
        form.cycle_event_type(-1, ES);
        assert_eq!(form.event_type_selected(), Some(4));
        form.cycle_event_type(1, ES);
        assert_eq!(form.event_type_selected(), Some(0));
        assert_eq!(form.visual(FieldId::EventType, ES).0, Validity::Valid);
    }
}
