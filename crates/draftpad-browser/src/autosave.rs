//! Debounced snapshot saving while the post body is edited.

use std::cell::RefCell;
use std::rc::Rc;

use draftpad_core::{AutosaveConfig, HttpTransport, PendingOperation, Snapshot, save_snapshot};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::csrf::DomCsrf;
use crate::dom::{document, element_by_id};
use crate::error::DomError;

struct Fields {
    title: Option<HtmlInputElement>,
    body: HtmlTextAreaElement,
    untitled: String,
}

impl Fields {
    fn snapshot(&self) -> Snapshot {
        let title = self.title.as_ref().map(|t| t.value()).unwrap_or_default();
        Snapshot::new(&title, &self.body.value(), &self.untitled)
    }
}

/// Mounted autosave. Dropping it detaches the listener and cancels any
/// pending save.
pub struct Autosave {
    pending: Rc<RefCell<PendingOperation<Timeout>>>,
    keyup: EventListener,
}

impl Autosave {
    pub fn mount(config: &AutosaveConfig, transport: HttpTransport) -> Result<Self, DomError> {
        config.validate()?;
        let document = document()?;
        let body: HtmlTextAreaElement = element_by_id(&document, &config.body_id)?;
        let title = element_by_id::<HtmlInputElement>(&document, &config.title_id).ok();

        let fields = Rc::new(Fields {
            title,
            body: body.clone(),
            untitled: config.untitled.clone(),
        });
        let transport = Rc::new(transport);
        let pending: Rc<RefCell<PendingOperation<Timeout>>> = Rc::default();
        let delay = config.delay_ms;

        let keyup = {
            let pending = pending.clone();
            EventListener::new(&body, "keyup", move |_| {
                let fields = fields.clone();
                let transport = transport.clone();
                let timeout = Timeout::new(delay, move || {
                    let snapshot = fields.snapshot();
                    wasm_bindgen_futures::spawn_local(async move {
                        // Outcome is logged inside save_snapshot.
                        let _ = save_snapshot(&*transport, &DomCsrf, &snapshot).await;
                    });
                });
                pending.borrow_mut().schedule(timeout);
            })
        };

        tracing::debug!(body_id = %config.body_id, delay_ms = delay, "autosave mounted");
        Ok(Self { pending, keyup })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_pending()
    }

    /// Keep autosave attached for the life of the page.
    pub fn forget(self) {
        self.keyup.forget();
    }
}
