//! Terminal presentation: a scrolling transcript of role-tagged messages.

mod palette;

pub use palette::Palette;

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use petal_ai::{Role, Turn};

const USER_TAG: &str = "you";
const ASSISTANT_TAG: &str = "bot";

/// Writes the chat transcript to any `Write` sink.
pub struct Transcript<W: Write> {
    out: W,
    palette: Palette,
    in_reply: bool,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette,
            in_reply: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&mut self, color: Option<Color>, text: &str) -> io::Result<()> {
        match color {
            Some(c) => queue!(self.out, SetForegroundColor(c), Print(text), ResetColor),
            None => queue!(self.out, Print(text)),
        }
    }

    fn tag(&mut self, role: Role) -> io::Result<()> {
        let (tag, color) = match role {
            Role::User => (USER_TAG, self.palette.user),
            Role::Assistant => (ASSISTANT_TAG, self.palette.assistant),
        };
        self.styled(color, &format!("{tag} › "))
    }

    pub fn banner(&mut self, title: &str, model: &str) -> io::Result<()> {
        let title_color = self.palette.title;
        self.styled(title_color, &format!("── {title} ──"))?;
        writeln!(self.out, " ({model})")?;
        writeln!(self.out, "Type /history to reprint the chat, /quit to leave.")?;
        self.out.flush()
    }

    /// Render one stored turn as a tagged message.
    pub fn turn(&mut self, turn: &Turn) -> io::Result<()> {
        self.tag(turn.role())?;
        writeln!(self.out, "{}", turn.content())
    }

    pub fn history(&mut self, turns: &[Turn]) -> io::Result<()> {
        for turn in turns {
            self.turn(turn)?;
        }
        self.out.flush()
    }

    pub fn prompt(&mut self, placeholder: &str) -> io::Result<()> {
        let user_color = self.palette.user;
        writeln!(self.out)?;
        self.styled(user_color, &format!("{placeholder} › "))?;
        self.out.flush()
    }

    pub fn begin_reply(&mut self) -> io::Result<()> {
        self.in_reply = true;
        self.tag(Role::Assistant)?;
        self.out.flush()
    }

    /// Append one streamed chunk to the reply in progress.
    pub fn chunk(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn end_reply(&mut self) -> io::Result<()> {
        if self.in_reply {
            self.in_reply = false;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    /// Show a failure notice, closing any reply in progress first.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        self.end_reply()?;
        let error_color = self.palette.error;
        self.styled(error_color, &format!("⚠ {message}"))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Transcript<Vec<u8>> {
        Transcript::new(Vec::new(), Palette::plain())
    }

    fn text(t: Transcript<Vec<u8>>) -> String {
        String::from_utf8(t.into_inner()).unwrap()
    }

    #[test]
    fn history_tags_each_role() {
        let mut t = plain();
        t.history(&[Turn::user("Hello"), Turn::assistant("Hi there!")])
            .unwrap();
        assert_eq!(text(t), "you › Hello\nbot › Hi there!\n");
    }

    #[test]
    fn streamed_reply_accumulates_on_one_line() {
        let mut t = plain();
        t.begin_reply().unwrap();
        for c in ["Hi", " there", "!"] {
            t.chunk(c).unwrap();
        }
        t.end_reply().unwrap();
        assert_eq!(text(t), "bot › Hi there!\n");
    }

    #[test]
    fn notice_closes_partial_reply() {
        let mut t = plain();
        t.begin_reply().unwrap();
        t.chunk("Hi").unwrap();
        t.notice("Network error: reset").unwrap();
        assert_eq!(text(t), "bot › Hi\n⚠ Network error: reset\n");
    }

    #[test]
    fn colored_output_wraps_tags_in_escape_codes() {
        let palette = Palette::from_config(&petal_config::schema::DisplayConfig::default());
        let mut t = Transcript::new(Vec::new(), palette);
        t.turn(&Turn::user("x")).unwrap();
        let out = text(t);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("you › "));
        assert!(out.ends_with("x\n"));
    }

    #[test]
    fn banner_names_title_and_model() {
        let mut t = plain();
        t.banner("Chatbot", "gemini-2.5-flash-lite").unwrap();
        let out = text(t);
        assert!(out.starts_with("── Chatbot ── (gemini-2.5-flash-lite)\n"));
    }
}
