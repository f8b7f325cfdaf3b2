//! Drag-and-drop image upload wired onto the body textarea.

use std::rc::Rc;

use draftpad_core::{HttpTransport, UploadConfig, UploadController};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlTextAreaElement};

use crate::csrf::DomCsrf;
use crate::dom::{document, query};
use crate::error::DomError;
use crate::files::{dropped_files, read_file};
use crate::guard::DropZoneGuard;
use crate::status::{AlertNotifier, DomStatus};
use crate::surface::TextAreaSurface;

/// The controller as wired into a page.
pub type BrowserUploadController =
    UploadController<TextAreaSurface, HttpTransport, DomStatus, AlertNotifier, DomCsrf>;

/// A mounted uploader. Dropping it detaches all listeners.
pub struct Uploader {
    controller: Rc<BrowserUploadController>,
    guard: DropZoneGuard,
    drop_listener: EventListener,
}

impl Uploader {
    /// Find the body textarea and status elements, install the drop guard
    /// and start accepting single-file drops.
    pub fn mount(config: &UploadConfig, transport: HttpTransport) -> Result<Self, DomError> {
        config.validate()?;
        let document = document()?;
        let textarea: HtmlTextAreaElement = query(&document, &config.body_selector)?;
        let status = DomStatus::from_config(&document, config)?;
        status.reveal();

        // Guard goes first so its listeners run before the drop handler.
        let guard = DropZoneGuard::install(&textarea);

        let controller = Rc::new(
            UploadController::new(
                TextAreaSurface::new(textarea.clone()),
                transport,
                status,
                AlertNotifier,
                DomCsrf,
            )
            .with_config(config.clone()),
        );

        let drop_listener = {
            let controller = controller.clone();
            EventListener::new_with_options(
                &textarea,
                "drop",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<DragEvent>() else {
                        return;
                    };
                    let files = dropped_files(event);
                    let controller = controller.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        controller.handle_drop_with(files, read_file).await;
                    });
                },
            )
        };

        tracing::debug!(selector = %config.body_selector, "uploader mounted");
        Ok(Self {
            controller,
            guard,
            drop_listener,
        })
    }

    pub fn controller(&self) -> &BrowserUploadController {
        &self.controller
    }

    /// Keep the uploader attached for the life of the page.
    pub fn forget(self) {
        self.guard.forget();
        self.drop_listener.forget();
    }
}
