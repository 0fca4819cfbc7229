//! Console credential prompt.
//!
//! The password is masked by echoing `*` for each key read. This only hides
//! what is rendered; it is not a secure input channel.

use std::io;

use console::{Key, Term};

const USERNAME_PROMPT: &str = "username> ";
const PASSWORD_PROMPT: &str = "password> ";

/// Credentials read from the console.
#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub username: String,
    pub password: String,
}

/// Prompt for a username and a masked password.
pub(crate) fn read_credentials(term: &Term) -> io::Result<Credentials> {
    term.write_str(USERNAME_PROMPT)?;
    let username = term.read_line()?.trim().to_string();

    term.write_str(PASSWORD_PROMPT)?;
    let password = if term.is_term() {
        read_masked(term)?
    } else {
        // Piped input cannot be read key by key.
        term.read_line()?
    };

    Ok(Credentials { username, password })
}

fn read_masked(term: &Term) -> io::Result<String> {
    let mut password = String::new();
    loop {
        match apply_key(&mut password, term.read_key()?) {
            MaskEdit::Pushed => term.write_str("*")?,
            MaskEdit::Popped => term.clear_chars(1)?,
            MaskEdit::Done => {
                term.write_line("")?;
                return Ok(password);
            }
            MaskEdit::Ignored => {}
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum MaskEdit {
    Pushed,
    Popped,
    Done,
    Ignored,
}

/// Apply one key press to the password buffer.
fn apply_key(buffer: &mut String, key: Key) -> MaskEdit {
    match key {
        Key::Enter | Key::Char('\n') | Key::Char('\r') => MaskEdit::Done,
        Key::Backspace => {
            if buffer.pop().is_some() {
                MaskEdit::Popped
            } else {
                MaskEdit::Ignored
            }
        }
        Key::Char(c) if !c.is_control() => {
            buffer.push(c);
            MaskEdit::Pushed
        }
        _ => MaskEdit::Ignored,
    }
}
