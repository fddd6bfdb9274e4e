use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("no input for {0}")]
    Eof(&'static str),
}

/// Trims and lower-cases a role answer, so " Doctor" selects the doctor pool.
pub fn normalize_role(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Writes `prompt`, then reads one line and strips surrounding whitespace.
pub fn read_answer<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<String, PromptError>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof(field));
    }
    Ok(line.trim().to_string())
}

/// Fills in whichever of role, username and password were not given on the
/// command line.
pub fn resolve_credentials(
    role: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String, String), PromptError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    let role = match role {
        Some(role) => role,
        None => read_answer(
            &mut reader,
            &mut writer,
            "Enter role (doctor/patient): ",
            "role",
        )?,
    };
    let username = match username {
        Some(username) => username,
        None => read_answer(&mut reader, &mut writer, "Enter username: ", "username")?,
    };
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Enter password: ")?,
    };

    Ok((
        normalize_role(&role),
        username.trim().to_string(),
        password.trim().to_string(),
    ))
}
