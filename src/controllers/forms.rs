use serde::ser::{Serialize, SerializeMap, Serializer};

/// The two lead-capture forms on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Franchise,
}

/// A named input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec { name, required: true }
}

const fn optional(name: &'static str) -> FieldSpec {
    FieldSpec { name, required: false }
}

const CONTACT_FIELDS: [FieldSpec; 6] = [
    required("name"),
    required("mobile"),
    required("email"),
    required("city"),
    required("inquiryType"),
    optional("message"),
];

const FRANCHISE_FIELDS: [FieldSpec; 6] = [
    required("name"),
    required("phone"),
    required("email"),
    required("city"),
    required("investment"),
    optional("message"),
];

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Contact",
            FormKind::Franchise => "Franchise",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => &CONTACT_FIELDS,
            FormKind::Franchise => &FRANCHISE_FIELDS,
        }
    }

    /// Message shown to the visitor after submitting.
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            FormKind::Contact => "Thank you for your inquiry! We will get back to you soon.",
            FormKind::Franchise => {
                "Thank you for your franchise application! Our team will contact you within 48 hours."
            }
        }
    }

    /// Whether submitting closes the dialog hosting the form.
    pub fn closes_dialog(&self) -> bool {
        matches!(self, FormKind::Franchise)
    }
}

/// Current values of a form's inputs, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    kind: FormKind,
    values: Vec<(&'static str, String)>,
}

impl FieldSet {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind.fields().iter().map(|f| (f.name, String::new())).collect(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }

    /// Updates a field. Names the form does not declare are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.into(),
            None => tracing::trace!(form = self.kind.label(), name, "ignoring undeclared field"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|(_, v)| v.is_empty())
    }

    pub fn snapshot(&self) -> FormSubmission {
        FormSubmission {
            entries: self
                .values
                .iter()
                .map(|(n, v)| (n.to_string(), v.clone()))
                .collect(),
        }
    }

    pub fn clear(&mut self) {
        for (_, v) in &mut self.values {
            v.clear();
        }
    }
}

/// Field name to value mapping captured at submit time. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    entries: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for FormSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Developer-facing log of submissions.
pub trait DiagnosticSink {
    fn record(&self, kind: FormKind, submission: &FormSubmission);
}

/// Shows the visitor a one-off confirmation.
pub trait Acknowledger {
    fn acknowledge(&self, message: &str);
}

/// Submit handler shared by both forms.
#[derive(Clone, Copy)]
pub struct FormIntake<D, A> {
    kind: FormKind,
    sink: D,
    ack: A,
}

impl<D: DiagnosticSink, A: Acknowledger> FormIntake<D, A> {
    pub fn new(kind: FormKind, sink: D, ack: A) -> Self {
        Self { kind, sink, ack }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Records the values, acknowledges once, then empties the form. The
    /// franchise form also closes its dialog when one is passed.
    pub fn submit(&self, fields: &mut FieldSet, dialog_open: Option<&mut bool>) {
        let submission = fields.snapshot();
        self.sink.record(self.kind, &submission);
        self.ack.acknowledge(self.kind.acknowledgement());
        fields.clear();

        if self.kind.closes_dialog() {
            if let Some(open) = dialog_open {
                *open = false;
            }
        }
        tracing::debug!(form = self.kind.label(), fields = submission.len(), "form submitted");
    }

    /// Closes the hosting dialog without submitting. Whatever was typed is
    /// discarded and nothing is recorded or acknowledged.
    pub fn dismiss(&self, fields: &mut FieldSet, dialog_open: &mut bool) {
        fields.clear();
        *dialog_open = false;
        tracing::trace!(form = self.kind.label(), "form dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        records: RefCell<Vec<(FormKind, FormSubmission)>>,
        acks: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for &Recorder {
        fn record(&self, kind: FormKind, submission: &FormSubmission) {
            self.records.borrow_mut().push((kind, submission.clone()));
        }
    }

    impl Acknowledger for &Recorder {
        fn acknowledge(&self, message: &str) {
            self.acks.borrow_mut().push(message.to_string());
        }
    }

    fn franchise_fields() -> FieldSet {
        let mut fields = FieldSet::new(FormKind::Franchise);
        fields.set("name", "Test");
        fields.set("phone", "999");
        fields.set("email", "a@b.com");
        fields.set("city", "X");
        fields.set("investment", "10-20");
        fields
    }

    #[test]
    fn franchise_submit_acknowledges_once_clears_and_closes() {
        let recorder = Recorder::default();
        let intake = FormIntake::new(FormKind::Franchise, &recorder, &recorder);
        let mut fields = franchise_fields();
        let mut open = true;

        intake.submit(&mut fields, Some(&mut open));

        assert_eq!(
            *recorder.acks.borrow(),
            vec![FormKind::Franchise.acknowledgement().to_string()]
        );
        assert!(fields.is_empty());
        assert!(!open);

        let records = recorder.records.borrow();
        assert_eq!(records.len(), 1);
        let (kind, submission) = &records[0];
        assert_eq!(*kind, FormKind::Franchise);
        assert_eq!(submission.get("name"), Some("Test"));
        assert_eq!(submission.get("investment"), Some("10-20"));
        assert_eq!(submission.get("message"), Some(""));
    }

    #[test]
    fn contact_submit_leaves_dialog_flag_alone() {
        let recorder = Recorder::default();
        let intake = FormIntake::new(FormKind::Contact, &recorder, &recorder);
        let mut fields = FieldSet::new(FormKind::Contact);
        fields.set("name", "Asha");
        fields.set("inquiryType", "general");
        let mut open = true;

        intake.submit(&mut fields, Some(&mut open));

        assert!(open);
        assert!(fields.is_empty());
        assert_eq!(
            *recorder.acks.borrow(),
            vec!["Thank you for your inquiry! We will get back to you soon.".to_string()]
        );
    }

    #[test]
    fn dismissing_discards_input_silently() {
        let recorder = Recorder::default();
        let intake = FormIntake::new(FormKind::Franchise, &recorder, &recorder);
        let mut fields = franchise_fields();
        let mut open = true;

        intake.dismiss(&mut fields, &mut open);

        assert!(!open);
        assert!(fields.is_empty());
        assert!(recorder.records.borrow().is_empty());
        assert!(recorder.acks.borrow().is_empty());
    }

    #[test]
    fn undeclared_fields_are_ignored() {
        let mut fields = FieldSet::new(FormKind::Contact);
        fields.set("phone", "123");
        assert!(fields.is_empty());
        assert_eq!(fields.get("phone"), "");
    }

    #[test]
    fn submission_serialises_in_field_order() {
        let json = serde_json::to_string(&franchise_fields().snapshot()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Test","phone":"999","email":"a@b.com","city":"X","investment":"10-20","message":""}"#
        );
    }

    #[test]
    fn only_message_is_optional() {
        for kind in [FormKind::Contact, FormKind::Franchise] {
            let optional: Vec<_> = kind.fields().iter().filter(|f| !f.required).map(|f| f.name).collect();
            assert_eq!(optional, vec!["message"]);
        }
    }
}
