use chrono::Local;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::chat::assistant::{dispatch, AssistantError, GeminiAssistant};
use crate::chat::session::{ChatMessage, ChatSession, ChatState, RequestId, Role};

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    SetDraft(String),
    Send,
    Reply(RequestId, Result<String, AssistantError>),
}

pub struct ChatWidget {
    session: ChatSession,
    assistant: GeminiAssistant,
    messages_ref: NodeRef,
}

impl ChatWidget {
    fn view_message(message: &ChatMessage) -> Html {
        let class = match message.role {
            Role::User => "chat-bubble user",
            Role::Assistant => "chat-bubble assistant",
        };
        let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();
        html! {
            <div class={class}>
                <p>{&message.text}</p>
                <span class="chat-time">{time}</span>
            </div>
        }
    }
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: ChatSession::new(),
            assistant: GeminiAssistant::from_config(),
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.session.toggle_open();
                true
            }
            ChatWidgetMsg::Close => {
                self.session.close();
                true
            }
            ChatWidgetMsg::SetDraft(text) => {
                self.session.set_draft(text);
                true
            }
            ChatWidgetMsg::Send => {
                let Some(request) = self.session.submit_draft() else {
                    return false;
                };
                let assistant = self.assistant.clone();
                ctx.link().send_future(async move {
                    let (id, outcome) = dispatch(&assistant, request).await;
                    ChatWidgetMsg::Reply(id, outcome)
                });
                true
            }
            ChatWidgetMsg::Reply(id, outcome) => self.session.complete(id, outcome),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest message in view.
        if let Some(list) = self.messages_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.dispose();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let toggle = link.callback(|_: MouseEvent| ChatWidgetMsg::Toggle);
        let close = link.callback(|_: MouseEvent| ChatWidgetMsg::Close);
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetDraft(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Send
        });
        let state = self.session.state();
        let is_open = self.session.is_open();
        let status = match state {
            ChatState::OpenPending => "Typing...",
            ChatState::OpenError => "Connection trouble",
            ChatState::Closed | ChatState::OpenIdle => "Online",
        };

        html! {
            <>
                <style>{CHAT_STYLES}</style>
                <div class={classes!("chat-widget", is_open.then(|| "open"))}>
                    if is_open {
                        <div class={classes!("chat-window", (state == ChatState::OpenError).then(|| "has-error"))}>
                            <div class="chat-header">
                                <div class="chat-title">
                                    <span class="chat-avatar">{"✦"}</span>
                                    <div>
                                        <strong>{"Lumina Assistant"}</strong>
                                        <span class="chat-status">{status}</span>
                                    </div>
                                </div>
                                <button class="chat-close" aria-label="Close chat" onclick={close}>{"✕"}</button>
                            </div>
                            <div class="chat-messages" ref={self.messages_ref.clone()}>
                                { for self.session.transcript().iter().map(Self::view_message) }
                                if self.session.is_pending() {
                                    <div class="chat-bubble assistant typing">
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                    </div>
                                }
                            </div>
                            <form class="chat-input" {onsubmit}>
                                <input
                                    type="text"
                                    placeholder="Ask about treatments, hours..."
                                    value={self.session.draft().to_string()}
                                    {oninput}
                                />
                                <button type="submit" disabled={!self.session.can_send()}>{"➤"}</button>
                            </form>
                        </div>
                    }
                    <button class="chat-launcher" aria-label="Open chat" onclick={toggle}>
                        { if is_open { "✕" } else { "💬" } }
                    </button>
                </div>
            </>
        }
    }
}

const CHAT_STYLES: &str = r#"
.chat-widget {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 60;
    display: flex;
    flex-direction: column;
    align-items: flex-end;
    gap: 1rem;
}
.chat-launcher {
    width: 3.75rem;
    height: 3.75rem;
    border-radius: 50%;
    border: none;
    background: #0d9488;
    color: #ffffff;
    font-size: 1.5rem;
    cursor: pointer;
    box-shadow: 0 10px 30px rgba(13, 148, 136, 0.4);
    transition: transform 0.2s ease;
}
.chat-launcher:hover {
    transform: scale(1.08);
}
.chat-window {
    width: min(22rem, calc(100vw - 3rem));
    height: 30rem;
    background: #ffffff;
    border-radius: 1.5rem;
    box-shadow: 0 25px 60px rgba(15, 23, 42, 0.25);
    display: flex;
    flex-direction: column;
    overflow: hidden;
}
.chat-header {
    background: #0f172a;
    color: #ffffff;
    padding: 1rem 1.25rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.chat-title {
    display: flex;
    gap: 0.75rem;
    align-items: center;
}
.chat-title div {
    display: flex;
    flex-direction: column;
}
.chat-avatar {
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 50%;
    background: #14b8a6;
    display: flex;
    align-items: center;
    justify-content: center;
}
.chat-status {
    font-size: 0.75rem;
    color: #5eead4;
}
.chat-window.has-error .chat-status {
    color: #fca5a5;
}
.chat-close {
    background: none;
    border: none;
    color: #94a3b8;
    font-size: 1.1rem;
    cursor: pointer;
}
.chat-messages {
    flex: 1;
    overflow-y: auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    background: #f8fafc;
}
.chat-bubble {
    max-width: 80%;
    padding: 0.7rem 1rem;
    border-radius: 1rem;
    font-size: 0.9rem;
    line-height: 1.45;
}
.chat-bubble p {
    margin: 0;
    white-space: pre-wrap;
}
.chat-bubble.user {
    align-self: flex-end;
    background: #0d9488;
    color: #ffffff;
    border-bottom-right-radius: 0.25rem;
}
.chat-bubble.assistant {
    align-self: flex-start;
    background: #ffffff;
    color: #0f172a;
    border: 1px solid #e2e8f0;
    border-bottom-left-radius: 0.25rem;
}
.chat-time {
    display: block;
    font-size: 0.65rem;
    opacity: 0.6;
    margin-top: 0.25rem;
}
.chat-bubble.typing {
    display: flex;
    gap: 0.3rem;
}
.chat-bubble.typing .dot {
    width: 0.45rem;
    height: 0.45rem;
    border-radius: 50%;
    background: #94a3b8;
    animation: chat-bounce 1s infinite ease-in-out;
}
.chat-bubble.typing .dot:nth-child(2) { animation-delay: 0.15s; }
.chat-bubble.typing .dot:nth-child(3) { animation-delay: 0.3s; }
@keyframes chat-bounce {
    0%, 80%, 100% { transform: translateY(0); }
    40% { transform: translateY(-5px); }
}
.chat-input {
    display: flex;
    gap: 0.5rem;
    padding: 0.75rem;
    border-top: 1px solid #e2e8f0;
}
.chat-input input {
    flex: 1;
    border: 1px solid #e2e8f0;
    border-radius: 999px;
    padding: 0.6rem 1rem;
    font-size: 0.9rem;
    outline: none;
}
.chat-input input:focus {
    border-color: #14b8a6;
}
.chat-input button {
    width: 2.5rem;
    border-radius: 50%;
    border: none;
    background: #0d9488;
    color: #ffffff;
    cursor: pointer;
}
.chat-input button:disabled {
    background: #cbd5e1;
    cursor: not-allowed;
}
"#;
