//! Storefront core: pure controller state machines and view projections.
mod effect;
mod msg;
mod record;
mod schema;
mod state;
mod update;
mod view_model;

pub use effect::{FormEffect, ListEffect};
pub use msg::{FormMsg, ListMsg};
pub use record::{Draft, FieldName, FieldValue, Record, RecordData, RecordId};
pub use schema::{DraftError, Field, FieldKind, Schema, PRODUCTS, SHIPMENTS};
pub use state::{FormMode, FormState, ListState, SubmitStatus};
pub use update::{update_form, update_list};
pub use view_model::{
    format_brl, Banner, FormViewModel, ListRowView, ListViewModel, Severity, ViewStatus,
};
