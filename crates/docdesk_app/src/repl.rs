use std::path::PathBuf;

use docdesk_core::JobId;

/// A parsed console command. Indexes are zero-based here; the console
/// syntax is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Add(PathBuf),
    Docs,
    Category { index: usize, label: String },
    Remove { index: usize },
    Type(String),
    Generate,
    Status,
    Download(JobId),
    Chat(String),
    Prompt(usize),
    ChatClear,
    CodeEdit(String),
    CodeSave,
    CodeBack,
    CodeForward,
    CodeShow,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Err("Empty command; type `help`.".to_string());
    };
    let rest = line[keyword.len()..].trim();

    match keyword.to_ascii_lowercase().as_str() {
        "login" => {
            let username = words.next().ok_or("Usage: login <username> <password>")?;
            let password = words.next().ok_or("Usage: login <username> <password>")?;
            Ok(Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            })
        }
        "logout" => Ok(Command::Logout),
        "add" => {
            if rest.is_empty() {
                return Err("Usage: add <path>".to_string());
            }
            Ok(Command::Add(PathBuf::from(rest)))
        }
        "docs" => Ok(Command::Docs),
        "category" => {
            let index = parse_index(words.next(), "Usage: category <n> <label>")?;
            let label = words
                .next()
                .ok_or("Usage: category <n> <label>")?
                .to_string();
            Ok(Command::Category { index, label })
        }
        "remove" => {
            let index = parse_index(words.next(), "Usage: remove <n>")?;
            Ok(Command::Remove { index })
        }
        "type" => {
            if rest.is_empty() {
                return Err("Usage: type <summary-type>|none".to_string());
            }
            Ok(Command::Type(rest.to_string()))
        }
        "generate" => Ok(Command::Generate),
        "status" => Ok(Command::Status),
        "download" => {
            let raw = words.next().ok_or("Usage: download <job-id>")?;
            let job_id: JobId = raw
                .parse()
                .map_err(|_| format!("Not a job id: {raw:?}"))?;
            Ok(Command::Download(job_id))
        }
        "chat" => {
            if rest.is_empty() {
                return Err("Usage: chat <message>".to_string());
            }
            Ok(Command::Chat(rest.to_string()))
        }
        "prompt" => {
            let index = parse_index(words.next(), "Usage: prompt <n>")?;
            Ok(Command::Prompt(index))
        }
        "chat-clear" => Ok(Command::ChatClear),
        "code-edit" => Ok(Command::CodeEdit(rest.to_string())),
        "code-save" => Ok(Command::CodeSave),
        "code-back" => Ok(Command::CodeBack),
        "code-forward" => Ok(Command::CodeForward),
        "code-show" => Ok(Command::CodeShow),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command {other:?}; type `help`.")),
    }
}

/// Workbench commands are gated behind the signed-in session; chat, the
/// code editor, and session commands stay open.
pub fn requires_auth(cmd: &Command) -> bool {
    matches!(
        cmd,
        Command::Add(_)
            | Command::Docs
            | Command::Category { .. }
            | Command::Remove { .. }
            | Command::Type(_)
            | Command::Generate
            | Command::Status
            | Command::Download(_)
    )
}

pub fn help_lines() -> Vec<&'static str> {
    vec![
        "Session:   login <username> <password> | logout",
        "Documents: add <path> | docs | category <n> <label> | remove <n>",
        "Summary:   type <Executive|Technical|Financial|none> | generate | status | download <job-id>",
        "Chat:      chat <message> | prompt <n> | chat-clear",
        "Code:      code-edit <text> | code-save | code-back | code-forward | code-show",
        "Other:     help | quit",
    ]
}

fn parse_index(raw: Option<&str>, usage: &str) -> Result<usize, String> {
    let raw = raw.ok_or(usage)?;
    let one_based: usize = raw
        .parse()
        .map_err(|_| format!("Not a number: {raw:?}"))?;
    // Console indexes are one-based to match the rendered lists.
    one_based
        .checked_sub(1)
        .ok_or_else(|| "Indexes start at 1.".to_string())
}
