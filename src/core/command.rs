//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Go(String),
    All,
    Favorites,
    Recents,
    Back,

    // Store commands
    Category(String),
    Favorite(String),
    View(String),

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "go" | "goto" => match args {
            Some(route) => Command::Go(route),
            None => Command::Unknown(input.to_string()),
        },
        "all" | "home" => Command::All,
        "favorites" | "favs" => Command::Favorites,
        "recents" | "recent" => Command::Recents,
        "back" => Command::Back,

        // Store
        "category" | "cat" => Command::Category(args.unwrap_or_else(|| "all".to_string())),
        "fav" | "favorite" => match args {
            Some(id) => Command::Favorite(id),
            None => Command::Unknown(input.to_string()),
        },
        "view" | "open" => match args {
            Some(id) => Command::View(id),
            None => Command::Unknown(input.to_string()),
        },

        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("go /recents"), Command::Go("/recents".to_string()));
        assert_eq!(parse_command("favs"), Command::Favorites);
        assert_eq!(parse_command("  recents "), Command::Recents);
        assert_eq!(parse_command("home"), Command::All);
        assert_eq!(parse_command("back"), Command::Back);
    }

    #[test]
    fn test_parse_store_commands() {
        assert_eq!(parse_command("cat parks"), Command::Category("parks".to_string()));
        assert_eq!(parse_command("category"), Command::Category("all".to_string()));
        assert_eq!(parse_command("fav loc-01"), Command::Favorite("loc-01".to_string()));
        assert_eq!(parse_command("open loc-02"), Command::View("loc-02".to_string()));
    }

    #[test]
    fn test_parse_missing_args() {
        assert_eq!(parse_command("go"), Command::Unknown("go".to_string()));
        assert_eq!(parse_command("fav   "), Command::Unknown("fav".to_string()));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
