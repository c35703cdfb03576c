use std::io::{self, Write};

/// Reads one trimmed line. `None` once stdin is closed.
pub fn ask(question: &str) -> Option<String> {
    print!("{question}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Like [`ask`], with an empty answer meaning "none".
pub fn optional(question: &str) -> Option<String> {
    ask(question).filter(|answer| !answer.is_empty())
}

/// Yes/no question defaulting to no.
pub fn confirm(question: &str) -> bool {
    ask(&format!("{question} (y/N): "))
        .map(|answer| answer.eq_ignore_ascii_case("y"))
        .unwrap_or(false)
}
