use crate::record::{Draft, FieldValue, Record, RecordId};
use crate::schema::Schema;
use crate::view_model::{
    format_brl, Banner, FormViewModel, ListRowView, ListViewModel, Severity, ViewStatus,
};

/// List controller state: the local snapshot of one remote collection plus
/// the search filter and the delete-confirmation sub-flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    schema: &'static Schema,
    snapshot: Vec<Record>,
    search_term: String,
    loading: bool,
    error: Option<String>,
    pending_deletion: Option<Record>,
    deleting: bool,
}

impl ListState {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            snapshot: Vec::new(),
            search_term: String::new(),
            loading: false,
            error: None,
            pending_deletion: None,
            deleting: false,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Full snapshot replace from an acknowledged list response.
    pub(crate) fn apply_loaded(&mut self, records: Vec<Record>) {
        self.snapshot = records;
        self.error = None;
        self.loading = false;
    }

    /// A failed fetch keeps the previous snapshot: a refresh failure after a
    /// successful load must not blank the screen.
    pub(crate) fn apply_load_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub(crate) fn request_deletion(&mut self, record: Record) {
        self.pending_deletion = Some(record);
    }

    pub(crate) fn clear_pending_deletion(&mut self) {
        self.pending_deletion = None;
    }

    /// Arms the confirmed deletion. `None` when nothing is pending or a
    /// delete is already in flight.
    pub(crate) fn begin_deletion(&mut self) -> Option<RecordId> {
        if self.deleting {
            return None;
        }
        let id = self.pending_deletion.as_ref()?.id.clone();
        self.deleting = true;
        Some(id)
    }

    /// Removes exactly the acknowledged record. Local mutation happens only
    /// after the gateway confirms.
    pub(crate) fn apply_deletion(&mut self, id: &str) {
        self.snapshot.retain(|record| record.id != id);
        self.pending_deletion = None;
        self.deleting = false;
    }

    /// A failed delete leaves the snapshot untouched; the record stays
    /// visible.
    pub(crate) fn apply_deletion_failure(&mut self, message: String) {
        self.error = Some(message);
        self.pending_deletion = None;
        self.deleting = false;
    }

    /// Projection consumed by presentation. Derived on every call; never
    /// stored.
    pub fn view(&self) -> ListViewModel {
        let needle = self.search_term.to_lowercase();
        let rows: Vec<ListRowView> = self
            .snapshot
            .iter()
            .filter(|record| needle.is_empty() || record.matches(&needle))
            .map(|record| ListRowView {
                price_display: self.price_display(record),
                record: record.clone(),
            })
            .collect();

        let status = if self.loading {
            ViewStatus::Loading
        } else if let Some(message) = &self.error {
            ViewStatus::Error(message.clone())
        } else if self.snapshot.is_empty() && self.search_term.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Ready
        };

        ListViewModel {
            status,
            no_matches: !self.search_term.is_empty() && rows.is_empty(),
            rows,
            search_term: self.search_term.clone(),
            pending_deletion: self.pending_deletion.clone(),
            delete_in_flight: self.deleting,
        }
    }

    fn price_display(&self, record: &Record) -> String {
        self.schema
            .money_field()
            .and_then(|field| record.data.get(field.name))
            .map(|value| match value {
                FieldValue::Number(amount) => format_brl(*amount),
                FieldValue::Text(text) => text.clone(),
            })
            .unwrap_or_default()
    }
}

/// Create-vs-edit, decided once at construction from the route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Submission lifecycle of the form controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Form controller state: one draft record under edit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: &'static Schema,
    mode: FormMode,
    draft: Draft,
    loading: bool,
    load_error: Option<String>,
    submit_status: SubmitStatus,
    return_scheduled: bool,
}

impl FormState {
    pub fn new(schema: &'static Schema, mode: FormMode) -> Self {
        Self {
            schema,
            mode,
            draft: Draft::empty(schema),
            loading: false,
            load_error: None,
            submit_status: SubmitStatus::Idle,
            return_scheduled: false,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub(crate) fn draft(&self) -> &Draft {
        &self.draft
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn load_failed(&self) -> bool {
        self.load_error.is_some()
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submit_status == SubmitStatus::Submitting
    }

    pub(crate) fn begin_load(&mut self) {
        self.loading = true;
    }

    pub(crate) fn apply_record(&mut self, record: &Record) {
        self.draft = Draft::from_record(self.schema, record);
        self.loading = false;
    }

    /// A failed load keeps the draft empty and is surfaced distinctly, so an
    /// unloadable edit form never masquerades as a valid create form.
    pub(crate) fn apply_load_failure(&mut self, message: String) {
        self.load_error = Some(message.clone());
        self.submit_status = SubmitStatus::Failed(message);
        self.loading = false;
    }

    pub(crate) fn edit_field(&mut self, name: &str, value: String) {
        if let Some(field) = self.schema.field(name) {
            self.draft.set(field.name, value);
        }
    }

    pub(crate) fn begin_submit(&mut self) {
        self.submit_status = SubmitStatus::Submitting;
    }

    /// Create mode resets the draft for the next entry; edit mode keeps the
    /// acknowledged values in place.
    pub(crate) fn apply_submit_success(&mut self, record: &Record) {
        self.submit_status = SubmitStatus::Succeeded;
        self.draft = match self.mode {
            FormMode::Create => Draft::empty(self.schema),
            FormMode::Edit(_) => Draft::from_record(self.schema, record),
        };
    }

    pub(crate) fn apply_submit_failure(&mut self, message: String) {
        self.submit_status = SubmitStatus::Failed(message);
    }

    /// True the first time only; the return to the list is scheduled at most
    /// once per controller lifetime.
    pub(crate) fn mark_return_scheduled(&mut self) -> bool {
        if self.return_scheduled {
            return false;
        }
        self.return_scheduled = true;
        true
    }

    /// Projection consumed by presentation.
    pub fn view(&self) -> FormViewModel {
        let status = if self.loading {
            ViewStatus::Loading
        } else if let Some(message) = &self.load_error {
            ViewStatus::Error(message.clone())
        } else {
            ViewStatus::Ready
        };

        let banner = match &self.submit_status {
            SubmitStatus::Succeeded => Some(Banner {
                severity: Severity::Success,
                message: format!(
                    "{} {} successfully!",
                    self.schema.label,
                    if self.mode.is_edit() {
                        "updated"
                    } else {
                        "created"
                    }
                ),
            }),
            SubmitStatus::Failed(message) => Some(Banner {
                severity: Severity::Error,
                message: message.clone(),
            }),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        };

        FormViewModel {
            status,
            editing: self.mode.is_edit(),
            draft: self.draft.clone(),
            submit_status: self.submit_status.clone(),
            banner,
            submit_disabled: self.loading
                || self.load_error.is_some()
                || self.submit_status == SubmitStatus::Submitting,
        }
    }
}
