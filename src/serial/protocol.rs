//! Line protocol spoken by the panel firmware.

/// Prefix identifying a button-press report from the panel.
const BUTTON_PREFIX: &str = "BTN";

/// Commands understood by the panel firmware.
///
/// The wire words are fixed by the firmware and must not be localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Flash the correct-answer lamp.
    Correct,
    /// Flash the wrong-answer lamp.
    Incorrect,
    /// Play the bonus animation.
    Bonus,
    /// Return every lamp to idle.
    Reset,
}

impl PanelCommand {
    /// Word written to the device for this command, newline excluded.
    pub fn wire_word(self) -> &'static str {
        match self {
            PanelCommand::Correct => "ACERTOU",
            PanelCommand::Incorrect => "ERROU",
            PanelCommand::Bonus => "BONUS",
            PanelCommand::Reset => "RESET",
        }
    }
}

/// Classify one raw line from the device.
///
/// Returns the trimmed button report when the line is one; everything else
/// the firmware prints is noise to ignore.
pub fn parse_button_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    trimmed.starts_with(BUTTON_PREFIX).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_words_match_firmware() {
        assert_eq!(PanelCommand::Correct.wire_word(), "ACERTOU");
        assert_eq!(PanelCommand::Incorrect.wire_word(), "ERROU");
        assert_eq!(PanelCommand::Bonus.wire_word(), "BONUS");
        assert_eq!(PanelCommand::Reset.wire_word(), "RESET");
    }

    #[test]
    fn button_lines_are_recognized() {
        assert_eq!(parse_button_line("BTN1"), Some("BTN1"));
        assert_eq!(parse_button_line("  BTN2\r"), Some("BTN2"));
        assert_eq!(parse_button_line("BTN"), Some("BTN"));
    }

    #[test]
    fn other_lines_are_noise() {
        assert_eq!(parse_button_line(""), None);
        assert_eq!(parse_button_line("   "), None);
        assert_eq!(parse_button_line("READY"), None);
        assert_eq!(parse_button_line("btn1"), None);
    }
}
