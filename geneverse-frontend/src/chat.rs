use std::cell::RefCell;
use std::rc::Rc;

use geneverse_core::chat::{
    ChatReply, ChatSession, SessionStore, BOT_CLASS, CONNECTION_ERROR_REPLY, ENDPOINT, USER_CLASS,
};
use geneverse_core::{ids, PageConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
    Storage,
};

use crate::api::post_json;
use crate::dom::{document, window};
use crate::error::UiError;

/// `sessionStorage`: the id lives as long as the tab.
pub struct TabStorage(Storage);

impl TabStorage {
    pub fn open() -> Result<Self, UiError> {
        let storage = window()?
            .session_storage()?
            .ok_or_else(|| UiError::Js("sessionStorage unavailable".into()))?;
        Ok(Self(storage))
    }
}

impl SessionStore for TabStorage {
    type Error = JsValue;

    fn load(&self, key: &str) -> Result<Option<String>, JsValue> {
        self.0.get_item(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), JsValue> {
        self.0.set_item(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Input,
    TextArea,
}

impl InputKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "input" => Some(InputKind::Input),
            "textarea" => Some(InputKind::TextArea),
            _ => None,
        }
    }
}

/// The message box: a single-line `<input>` or a `<textarea>`.
enum ChatInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl ChatInput {
    fn from_element(el: Element) -> Result<Self, UiError> {
        let tag = el.tag_name();
        match InputKind::from_tag(&tag) {
            Some(InputKind::Input) => Ok(ChatInput::Input(el.unchecked_into())),
            Some(InputKind::TextArea) => Ok(ChatInput::TextArea(el.unchecked_into())),
            None => Err(UiError::Js(format!(
                "#{} must be an input or textarea, found <{}>",
                ids::USER_INPUT,
                tag.to_ascii_lowercase()
            ))),
        }
    }

    fn value(&self) -> String {
        match self {
            ChatInput::Input(el) => el.value(),
            ChatInput::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            ChatInput::Input(el) => el.set_value(value),
            ChatInput::TextArea(el) => el.set_value(value),
        }
    }

    fn event_target(&self) -> &EventTarget {
        match self {
            ChatInput::Input(el) => el.as_ref(),
            ChatInput::TextArea(el) => el.as_ref(),
        }
    }
}

struct ChatPanel {
    window: Element,
    input: ChatInput,
    endpoint: String,
    session: RefCell<ChatSession<TabStorage>>,
}

impl ChatPanel {
    fn append_message(&self, text: &str, class: &str) -> Result<(), UiError> {
        let doc = document()?;
        let bubble = doc.create_element("div")?;
        bubble.class_list().add_2("message", class)?;
        let p = doc.create_element("p")?;
        p.set_text_content(Some(text));
        bubble.append_child(&p)?;
        self.window.append_child(&bubble)?;
        self.window.set_scroll_top(self.window.scroll_height());
        Ok(())
    }

    fn show(&self, text: &str, class: &str) {
        if let Err(err) = self.append_message(text, class) {
            log::error!("could not append chat message: {err}");
        }
    }

    async fn exchange(&self, raw: String) -> Result<(), UiError> {
        let request = match self.session.borrow().prepare(&raw) {
            Some(req) => req,
            None => return Ok(()),
        };
        self.show(raw.trim(), USER_CLASS);
        self.input.set_value("");

        let reply: ChatReply = post_json(&self.endpoint, &request).await?;
        let text = self.session.borrow_mut().accept(reply)?;
        self.show(&text, BOT_CLASS);
        Ok(())
    }

    async fn send_message(self: Rc<Self>) {
        let raw = self.input.value();
        if let Err(err) = self.exchange(raw).await {
            log::error!("Chatbot API error: {err}");
            self.show(CONNECTION_ERROR_REPLY, BOT_CLASS);
        }
    }
}

fn wire(panel: Rc<ChatPanel>, button: &HtmlElement) -> Result<(), UiError> {
    {
        let panel = panel.clone();
        let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            spawn_local(panel.clone().send_message());
        }));
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    {
        let input = panel.input.event_target().clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                spawn_local(panel.clone().send_message());
            }
        }));
        input.add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }
    Ok(())
}

/// Hooks the chat window, input and send button together. Does nothing
/// unless all three are on the page.
pub fn setup_chatbot(config: &PageConfig) -> Result<(), UiError> {
    let doc = document()?;
    let (Some(chat_window), Some(input), Some(button)) = (
        doc.get_element_by_id(ids::CHAT_WINDOW),
        doc.get_element_by_id(ids::USER_INPUT),
        doc.get_element_by_id(ids::SEND_BUTTON),
    ) else {
        log::debug!("chat panel incomplete, not wiring it");
        return Ok(());
    };
    let input = ChatInput::from_element(input)?;
    let button = button
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Js("#send-button is not an HTML element".into()))?;

    let session = ChatSession::new(TabStorage::open()?, config.session_key.as_str())?;
    if let Some(id) = session.session_id() {
        log::debug!("resuming chat session {id}");
    }

    let panel = Rc::new(ChatPanel {
        window: chat_window,
        input,
        endpoint: config.endpoint(ENDPOINT),
        session: RefCell::new(session),
    });
    wire(panel, &button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_box_accepts_input_and_textarea() {
        assert_eq!(InputKind::from_tag("INPUT"), Some(InputKind::Input));
        assert_eq!(InputKind::from_tag("TEXTAREA"), Some(InputKind::TextArea));
        assert_eq!(InputKind::from_tag("textarea"), Some(InputKind::TextArea));
    }

    #[test]
    fn other_elements_are_not_message_boxes() {
        assert_eq!(InputKind::from_tag("DIV"), None);
        assert_eq!(InputKind::from_tag("BUTTON"), None);
    }
}
