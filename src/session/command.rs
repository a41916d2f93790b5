//! Parsing of textual commands

use crate::core::HintError;
use std::str::FromStr;

/// One line of user input, parsed
///
/// Arguments are kept as typed; their validation happens when the session
/// applies them, so an invalid argument never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Green(String),
    Yellow(String),
    Gray(String),
    Test(String),
    Clues,
    Words,
    Hardmode,
    Reset,
    Help(Option<String>),
    Exit,
}

impl Command {
    /// Every command word, as accepted by [`Command::parse`]
    pub const NAMES: [&'static str; 10] = [
        "green", "yellow", "gray", "test", "clues", "words", "hardmode", "reset", "help", "exit",
    ];

    /// Parse a line such as `"green -r---"` or `"clues"`
    ///
    /// The command word is everything up to the first whitespace and is
    /// case-insensitive; the rest of the line is the argument. Commands that
    /// take no argument ignore anything after them.
    ///
    /// # Errors
    /// - `UnknownCommand` for an unrecognized command word
    /// - `MissingArgument` when green/yellow/gray/test have no argument
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::session::Command;
    ///
    /// assert_eq!(Command::parse("GREEN -r---"), Ok(Command::Green("-r---".into())));
    /// assert_eq!(Command::parse("clues"), Ok(Command::Clues));
    /// assert!(Command::parse("guess crane").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, HintError> {
        let line = line.trim();
        let (name, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let name = name.to_lowercase();
        let argument = argument.trim();

        let required = |command: &'static str| {
            if argument.is_empty() {
                Err(HintError::MissingArgument(command))
            } else {
                Ok(argument.to_string())
            }
        };

        Ok(match name.as_str() {
            "green" => Self::Green(required("green")?),
            "yellow" => Self::Yellow(required("yellow")?),
            "gray" | "grey" => Self::Gray(required("gray")?),
            "test" => Self::Test(required("test")?),
            "clues" => Self::Clues,
            "words" => Self::Words,
            "hardmode" => Self::Hardmode,
            "reset" => Self::Reset,
            "help" => Self::Help((!argument.is_empty()).then(|| argument.to_lowercase())),
            "exit" | "quit" => Self::Exit,
            _ => return Err(HintError::UnknownCommand(name)),
        })
    }
}

impl FromStr for Command {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_argument_commands() {
        assert_eq!(
            Command::parse("yellow a----"),
            Ok(Command::Yellow("a----".to_string()))
        );
        assert_eq!(
            Command::parse("gray xyz"),
            Ok(Command::Gray("xyz".to_string()))
        );
        assert_eq!(
            Command::parse("  test   eagle  "),
            Ok(Command::Test("eagle".to_string()))
        );
    }

    #[test]
    fn gray_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("gray x y z"),
            Ok(Command::Gray("x y z".to_string()))
        );
    }

    #[test]
    fn grey_spelling_is_accepted() {
        assert_eq!(
            Command::parse("grey q"),
            Ok(Command::Gray("q".to_string()))
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("clues"), Ok(Command::Clues));
        assert_eq!(Command::parse("Words"), Ok(Command::Words));
        assert_eq!(Command::parse("hardmode"), Ok(Command::Hardmode));
        assert_eq!(Command::parse("reset now"), Ok(Command::Reset));
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
    }

    #[test]
    fn help_topic_is_optional() {
        assert_eq!(Command::parse("help"), Ok(Command::Help(None)));
        assert_eq!(
            Command::parse("help Green"),
            Ok(Command::Help(Some("green".to_string())))
        );
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            Command::parse("green"),
            Err(HintError::MissingArgument("green"))
        );
        assert_eq!(
            Command::parse("test  "),
            Err(HintError::MissingArgument("test"))
        );
    }

    #[test]
    fn unknown_commands() {
        assert_eq!(
            Command::parse("Guess crane"),
            Err(HintError::UnknownCommand("guess".to_string()))
        );
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn every_listed_name_parses() {
        for name in Command::NAMES {
            let line = format!("{name} a----");
            assert!(Command::parse(&line).is_ok(), "{name} failed to parse");
        }
    }

    #[test]
    fn any_whitespace_separates_the_argument() {
        assert_eq!(
            Command::parse("green\t-r---"),
            Ok(Command::Green("-r---".into()))
        );
        assert_eq!(Command::parse("gray \t xyz"), Ok(Command::Gray("xyz".into())));
        assert_eq!(Command::parse("clues\tnow"), Ok(Command::Clues));
    }
}
