use crate::record::{RecordData, RecordId};

/// Side effects requested by the list controller, executed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect {
    /// Fetch the full collection from the gateway.
    LoadCollection,
    /// Delete one record at the gateway.
    DeleteRecord { id: RecordId },
    /// Navigate the host router to the given path.
    Navigate { path: String },
}

/// Side effects requested by the form controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    /// Fetch the record under edit from the gateway.
    LoadRecord { id: RecordId },
    /// Create a new record from the validated payload.
    CreateRecord { data: RecordData },
    /// Update an existing record with the validated payload.
    UpdateRecord { id: RecordId, data: RecordData },
    /// Submission succeeded; the host schedules its own return to the list.
    /// The delay is host policy, not controller state.
    ScheduleReturn,
}
