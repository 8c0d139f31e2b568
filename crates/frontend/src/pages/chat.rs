//! Chat with the headline agent

use headline_chat_ui::{ChatContainer, Conversation, FAILED_REPLY_MESSAGE};
use headline_frontend_common::{AgentService, SessionAction, use_session};
use tracing::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::Header;

#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let session = use_session();
    let conversation = use_mut_ref(Conversation::new);
    let rerender = use_force_update();

    let on_send = {
        let session = session.clone();
        let conversation = conversation.clone();
        let rerender = rerender.clone();

        Callback::from(move |query: String| {
            if session.is_refreshing || conversation.borrow().is_busy() {
                return;
            }
            let Some(id) = conversation.borrow_mut().push_query(&query) else {
                return;
            };
            rerender.force_update();

            let agent = AgentService::new();
            let refreshing = agent.needs_refresh();
            if refreshing {
                debug!("Access token expired, refreshing before the query");
                session.dispatch(SessionAction::RefreshStarted);
            }

            let session = session.clone();
            let conversation = conversation.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                let result = agent.ask(&query).await;

                match result {
                    Ok(reply) => {
                        conversation.borrow_mut().complete(id, reply);
                        if refreshing {
                            session.dispatch(SessionAction::Refreshed(agent.stored_session()));
                        }
                    }
                    Err(err) if err.requires_login() => {
                        warn!(error = %err, "Session ended while asking the agent");
                        conversation.borrow_mut().fail(id, err.user_message());
                        session.dispatch(SessionAction::LoggedOut {
                            notice: Some(err.user_message()),
                        });
                    }
                    Err(err) => {
                        error!(error = %err, "Agent query failed");
                        conversation.borrow_mut().fail(id, FAILED_REPLY_MESSAGE);
                        if refreshing {
                            session.dispatch(SessionAction::Refreshed(agent.stored_session()));
                        }
                    }
                }
                rerender.force_update();
            });
        })
    };

    let snapshot = conversation.borrow().clone();

    html! {
        <div class="flex flex-col h-screen">
            <Header />
            <ChatContainer
                conversation={snapshot}
                {on_send}
                input_disabled={session.is_refreshing}
                class="flex-1 min-h-0"
            />
        </div>
    }
}
