//! The request/response loop that owns the session.

use std::time::Instant;

use parley_core::{Message, Role, Session, SessionEvent};
use parley_llms::CompletionClient;
use parley_observability::{record_duration, record_error, turn_span};
use tokio::sync::mpsc;
use tracing::{debug, info, Instrument};

use crate::error::{Result, RuntimeError};

fn to_llm_message(role: Role, content: &str) -> parley_llms::Message {
    match role {
        Role::User => parley_llms::Message::user(content),
        Role::Assistant => parley_llms::Message::assistant(content),
    }
}

pub struct Runtime {
    session: Session,
    client: CompletionClient,
}

impl Runtime {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            session: Session::new(),
            client,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// History as sent to the service, in conversation order.
    fn history(&self) -> Vec<parley_llms::Message> {
        self.session
            .conversation()
            .history()
            .map(|(role, content)| to_llm_message(role, content))
            .collect()
    }

    /// Run one turn, reporting progress on `events`.
    ///
    /// The history sent with the request is the conversation as it stood
    /// before `text` was appended; `text` goes last.
    pub async fn submit(
        &mut self,
        text: &str,
        events: &mpsc::Sender<SessionEvent>,
    ) -> Result<Option<usize>> {
        let user = Message::user(text)?;
        let history = self.history();
        let user_index = self.session.append(user.clone());

        let span = turn_span!(self.session.id.as_str(), user_index);
        async {
            emit(events, SessionEvent::message_appended(user_index, user)).await?;
            emit(events, SessionEvent::turn_start(Role::Assistant)).await?;

            let started = Instant::now();
            let reply = self.client.complete(&history, text).await;
            record_duration("duration_ms", started.elapsed());
            tracing::Span::current().record("reply.chars", reply.chars().count());

            let appended = match Message::assistant(reply) {
                Ok(message) => {
                    let index = self.session.append(message.clone());
                    emit(events, SessionEvent::message_appended(index, message)).await?;
                    Some(index)
                }
                Err(e) => {
                    record_error(&e);
                    emit(events, SessionEvent::error("empty reply from completion service")).await?;
                    None
                }
            };

            emit(events, SessionEvent::turn_end()).await?;
            Ok::<_, RuntimeError>(appended)
        }
        .instrument(span)
        .await
    }

    /// One turn without UI events. Returns the stored reply.
    pub async fn ask(&mut self, text: &str) -> Result<Option<Message>> {
        let user = Message::user(text)?;
        let history = self.history();
        self.session.append(user);

        let reply = self.client.complete(&history, text).await;
        Ok(Message::assistant(reply).ok().map(|message| {
            self.session.append(message.clone());
            message
        }))
    }

    /// Handle submitted texts one at a time until either channel closes.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<String>, events: mpsc::Sender<SessionEvent>) {
        info!(session = %self.session.id, provider = self.client.provider_id(), "runtime started");
        while let Some(text) = inputs.recv().await {
            match self.submit(&text, &events).await {
                Ok(_) => {}
                Err(RuntimeError::ChannelClosed) => break,
                Err(e) => {
                    if events.send(SessionEvent::error(e.to_string())).await.is_err() {
                        break;
                    }
                }
            }
        }
        debug!(messages = self.session.message_count(), "runtime stopped");
    }
}

async fn emit(events: &mpsc::Sender<SessionEvent>, event: SessionEvent) -> Result<()> {
    events
        .send(event)
        .await
        .map_err(|_| RuntimeError::ChannelClosed)
}
