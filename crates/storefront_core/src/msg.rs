use crate::record::{Record, RecordId};

/// Messages consumed by the list controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ListMsg {
    /// Initial mount, or a manual refresh of the collection.
    RefreshRequested,
    /// Gateway reply: the full collection fetch succeeded.
    CollectionLoaded(Vec<Record>),
    /// Gateway reply: the collection fetch failed.
    LoadFailed(String),
    /// User edited the free-text search box.
    SearchChanged(String),
    /// User asked for the create form.
    CreateRequested,
    /// User asked to edit the given record.
    EditRequested(RecordId),
    /// User asked to delete a record; opens the confirmation dialog.
    DeletionRequested(Record),
    /// User dismissed the confirmation dialog.
    DeletionCancelled,
    /// User confirmed the pending deletion.
    DeletionConfirmed,
    /// Gateway reply: the delete was acknowledged.
    DeletionSucceeded(RecordId),
    /// Gateway reply: the delete failed.
    DeletionFailed(String),
}

/// Messages consumed by the form controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMsg {
    /// Controller mounted; edit mode triggers the record fetch.
    Initialized,
    /// User edited a draft field. Unknown names are ignored.
    FieldEdited { name: String, value: String },
    /// Gateway reply: the record fetch for edit mode succeeded.
    RecordLoaded(Record),
    /// Gateway reply: the record fetch for edit mode failed.
    RecordLoadFailed(String),
    /// User submitted the form.
    SubmitRequested,
    /// Gateway reply: the create/update was acknowledged.
    SubmitSucceeded(Record),
    /// Gateway reply: the create/update failed.
    SubmitFailed(String),
}
