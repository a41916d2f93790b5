//! Help text for the command surface

use crate::core::HintError;

const OVERVIEW: &str = "\
Commands:
  green <pattern>    record green letters, e.g. green -r---
  yellow <pattern>   record yellow letters, e.g. yellow a----
  gray <letters>     record gray letters, e.g. gray xyz
  test <word>        colour a guess by how it would fare against the remaining words
  clues              suggest three guesses
  words              list every remaining word
  hardmode           toggle hardmode
  reset              forget everything and start over
  exit               quit

Use 'help <command>' for details.";

const GREEN: &str = "\
green <pattern>
Five characters, one per position. Letters are green hits; '-', '_', '.', '*',
'?' or a digit leave a position empty.

  green -r---   keeps only words with 'r' as their second letter";

const YELLOW: &str = "\
yellow <pattern>
Five characters, one per position. Each letter is in the answer but not where
it was guessed. Fillers work as for green.

  yellow a----  keeps words containing 'a', but not as their first letter";

const GRAY: &str = "\
gray <letters>
Any number of letters in any order. Letters already reported green or yellow
are left alone, since a repeated letter can come back gray.

  gray abc      drops every word containing 'a', 'b' or 'c'";

const TEST: &str = "\
test <word>
Shows the word coloured by letter frequency among the remaining words, and
notes when the word is not in the word list.
Greener letters are likely to land in that exact spot, yellower letters are
likely present elsewhere, and grayer letters are likely absent.";

const CLUES: &str = "\
clues
Suggests three guesses:
  More Information    covers untested letters common among the remaining words
  More Green Letters  puts letters where they most often sit
  Balanced            weighs both equally
Equal scores are broken at random, so asking again may give a different word.";

const WORDS: &str = "\
words
Lists every word still consistent with the clues, alphabetically.";

const HARDMODE: &str = "\
hardmode
Toggles hardmode. While it is on, clues only suggest words that could be the
answer. It is off by default and 'reset' turns it off.";

const RESET: &str = "\
reset
Forgets every clue and turns hardmode off.";

const EXIT: &str = "\
exit
Leaves the assistant.";

const HELP: &str = "\
help [command]
Shows the command list, or details about one command.";

/// Help for `topic`, or the overview when no topic is given
///
/// # Errors
/// Returns `UnknownCommand` if the topic is not a command.
pub fn help_text(topic: Option<&str>) -> Result<&'static str, HintError> {
    let Some(topic) = topic else {
        return Ok(OVERVIEW);
    };

    match topic.to_lowercase().as_str() {
        "green" => Ok(GREEN),
        "yellow" => Ok(YELLOW),
        "gray" | "grey" => Ok(GRAY),
        "test" => Ok(TEST),
        "clues" => Ok(CLUES),
        "words" => Ok(WORDS),
        "hardmode" => Ok(HARDMODE),
        "reset" => Ok(RESET),
        "exit" | "quit" => Ok(EXIT),
        "help" => Ok(HELP),
        other => Err(HintError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Command;

    #[test]
    fn overview_lists_every_command() {
        let overview = help_text(None).unwrap();
        for name in Command::NAMES {
            assert!(overview.contains(name), "overview is missing {name}");
        }
    }

    #[test]
    fn every_command_has_a_topic() {
        for name in Command::NAMES {
            let text = help_text(Some(name)).unwrap();
            assert!(text.starts_with(name));
        }
    }

    #[test]
    fn unknown_topic() {
        assert_eq!(
            help_text(Some("play")),
            Err(HintError::UnknownCommand("play".to_string()))
        );
    }
}
