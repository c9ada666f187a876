use std::sync::mpsc;
use std::sync::Arc;

use storefront_core::{
    update_form, update_list, FormMode, FormMsg, FormState, FormViewModel, ListMsg, ListState,
    ListViewModel, Schema,
};

use crate::effects::{EffectRunner, ScheduledReturn};
use crate::router::Navigator;

/// Owns one list controller: its state, its reply channel, and the effect
/// execution. Dropping the session closes the reply channel, so a gateway
/// reply arriving after teardown dies at the send boundary instead of being
/// applied to a destroyed controller.
pub struct ListSession {
    schema: &'static Schema,
    state: ListState,
    reply_tx: mpsc::Sender<ListMsg>,
    reply_rx: mpsc::Receiver<ListMsg>,
    runner: Arc<EffectRunner>,
    navigator: Arc<dyn Navigator>,
}

impl ListSession {
    pub fn new(
        schema: &'static Schema,
        runner: Arc<EffectRunner>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        let mut session = Self {
            schema,
            state: ListState::new(schema),
            reply_tx,
            reply_rx,
            runner,
            navigator,
        };
        session.dispatch(ListMsg::RefreshRequested);
        session
    }

    /// Feeds one message through the pure update and executes the effects.
    pub fn dispatch(&mut self, msg: ListMsg) {
        let state = std::mem::replace(&mut self.state, ListState::new(self.schema));
        let (state, effects) = update_list(state, msg);
        self.state = state;
        self.runner
            .run_list(self.schema, effects, &self.reply_tx, &self.navigator);
    }

    /// Applies queued gateway replies. Hosts call this from their event loop.
    pub fn pump(&mut self) {
        while let Ok(msg) = self.reply_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    pub fn view(&self) -> ListViewModel {
        self.state.view()
    }
}

/// Owns one form controller plus the cancellable post-success return timer.
pub struct FormSession {
    schema: &'static Schema,
    state: FormState,
    reply_tx: mpsc::Sender<FormMsg>,
    reply_rx: mpsc::Receiver<FormMsg>,
    runner: Arc<EffectRunner>,
    navigator: Arc<dyn Navigator>,
    scheduled_return: Option<ScheduledReturn>,
}

impl FormSession {
    pub fn new(
        schema: &'static Schema,
        mode: FormMode,
        runner: Arc<EffectRunner>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        let mut session = Self {
            schema,
            state: FormState::new(schema, mode),
            reply_tx,
            reply_rx,
            runner,
            navigator,
            scheduled_return: None,
        };
        session.dispatch(FormMsg::Initialized);
        session
    }

    /// Mounts the form a route addresses, or `None` when the path is not a
    /// form route of this schema.
    pub fn from_path(
        schema: &'static Schema,
        path: &str,
        runner: Arc<EffectRunner>,
        navigator: Arc<dyn Navigator>,
    ) -> Option<Self> {
        let mode = crate::router::form_mode(schema, path)?;
        Some(Self::new(schema, mode, runner, navigator))
    }

    pub fn dispatch(&mut self, msg: FormMsg) {
        let placeholder = FormState::new(self.schema, FormMode::Create);
        let state = std::mem::replace(&mut self.state, placeholder);
        let (state, effects) = update_form(state, msg);
        self.state = state;
        self.runner.run_form(
            self.schema,
            effects,
            &self.reply_tx,
            &self.navigator,
            &mut self.scheduled_return,
        );
    }

    pub fn pump(&mut self) {
        while let Ok(msg) = self.reply_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    pub fn view(&self) -> FormViewModel {
        self.state.view()
    }
}
