//! "set to today" / "set as draft" links for the publication date field.

use draftpad_core::{PublishDateAction, PublishDateConfig};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, HtmlInputElement};

use crate::dom::{document, element_by_id, query};
use crate::error::DomError;

/// Mounted shortcut link, if the field's state called for one.
pub struct PublishDateShortcut {
    action: PublishDateAction,
    click: EventListener,
}

impl PublishDateShortcut {
    /// Add the shortcut that fits the field's current value, if any.
    pub fn mount(config: &PublishDateConfig) -> Result<Option<Self>, DomError> {
        config.validate()?;
        let document = document()?;
        let input: HtmlInputElement = query(&document, &config.input_selector)?;

        let Some(action) = PublishDateAction::for_field(&input.value(), config.is_create_op)
        else {
            return Ok(None);
        };
        let (container_id, label) = match action {
            PublishDateAction::SetToday => (&config.today_id, &config.today_label),
            PublishDateAction::SetDraft => (&config.draft_id, &config.draft_label),
        };
        let container: HtmlElement = element_by_id(&document, container_id)?;

        let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
        anchor.set_inner_text(label);
        anchor.set_href("javascript:");
        container.append_child(&document.create_text_node(&config.separator))?;
        container.append_child(&anchor)?;

        let click = EventListener::new(&container, "click", move |_| {
            let now = String::from(js_sys::Date::new_0().to_iso_string());
            input.set_value(&action.apply(&now));
        });

        tracing::debug!(?action, "publish date shortcut mounted");
        Ok(Some(Self { action, click }))
    }

    pub fn action(&self) -> PublishDateAction {
        self.action
    }

    pub fn forget(self) {
        self.click.forget();
    }
}
