//! The interactive turn loop: read a line, run a turn, show the result.

use std::io::{self, Write};

use petal_ai::{ChatModel, SessionStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::ui::Transcript;

/// What the loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

enum Command {
    Quit,
    History,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "/quit" | "/exit" => Some(Command::Quit),
        "/history" => Some(Command::History),
        _ => None,
    }
}

/// Owns the session for its whole lifetime; dropping the loop ends it.
pub struct ChatLoop<'a, W: Write> {
    model: &'a dyn ChatModel,
    session: SessionStore,
    view: Transcript<W>,
    title: String,
    placeholder: String,
}

impl<'a, W: Write> ChatLoop<'a, W> {
    pub fn new(
        model: &'a dyn ChatModel,
        session: SessionStore,
        view: Transcript<W>,
        title: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            model,
            session,
            view,
            title: title.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn into_view(self) -> Transcript<W> {
        self.view
    }

    /// Handle one line of user input.
    ///
    /// Blank lines are ignored. A failed turn is reported on the
    /// transcript and the loop carries on.
    pub async fn handle_line(&mut self, line: &str) -> io::Result<Control> {
        if line.trim().is_empty() {
            return Ok(Control::Continue);
        }
        match parse_command(line) {
            Some(Command::Quit) => return Ok(Control::Quit),
            Some(Command::History) => {
                self.view.history(self.session.all())?;
                return Ok(Control::Continue);
            }
            None => {}
        }

        let Self {
            model,
            session,
            view,
            ..
        } = self;

        view.begin_reply()?;
        let mut render_err: Option<io::Error> = None;
        let result = session
            .chat_streaming(*model, line, |chunk| {
                if render_err.is_none() {
                    if let Err(e) = view.chunk(chunk) {
                        render_err = Some(e);
                    }
                }
            })
            .await;
        if let Some(e) = render_err {
            return Err(e);
        }

        match result {
            Ok(reply) => {
                debug!(chars = reply.len(), "reply shown");
                view.end_reply()?;
            }
            Err(e) => view.notice(&e.to_string())?,
        }
        Ok(Control::Continue)
    }

    /// Run until `/quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.view.banner(&self.title, self.session.model())?;
        self.view.history(self.session.all())?;

        let mut lines = input.lines();
        loop {
            self.session.await_input();
            self.view.prompt(&self.placeholder)?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match self.handle_line(&line).await {
                Ok(Control::Continue) => {}
                Ok(Control::Quit) => break,
                Err(e) => {
                    warn!("failed to write transcript: {e}");
                    return Err(e);
                }
            }
        }

        self.view.end_reply()?;
        debug!(
            session = %self.session.id().short(),
            turns = self.session.len(),
            "session ended"
        );
        Ok(())
    }
}
