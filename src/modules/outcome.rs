use crate::modules::{
    console::ConsoleColor,
    error::{Result, StepLogError},
};

pub const NO_RESULT_TEXT: &str = "No result submitted";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    Pass,
    Error,
    Warning(String),
    #[default]
    Unset,
}

impl Outcome {
    /// Builds an outcome from independent selectors as a script passes them.
    /// At most one may be set; a warning needs its own message.
    pub fn from_selection(pass: bool, error: bool, warning: Option<String>) -> Result<Self> {
        let mut selected = Vec::new();
        if pass {
            selected.push("pass");
        }
        if error {
            selected.push("error");
        }
        if warning.is_some() {
            selected.push("warning");
        }
        if selected.len() > 1 {
            return Err(StepLogError::ConflictingOutcome { selected });
        }

        match warning {
            Some(message) if message.is_empty() => Err(StepLogError::InvalidArgument {
                name: "warning message",
            }),
            Some(message) => Ok(Outcome::Warning(message)),
            None if pass => Ok(Outcome::Pass),
            None if error => Ok(Outcome::Error),
            None => Ok(Outcome::Unset),
        }
    }

    pub fn color(&self) -> ConsoleColor {
        match self {
            Outcome::Pass => ConsoleColor::Green,
            Outcome::Error => ConsoleColor::Red,
            Outcome::Warning(_) => ConsoleColor::Yellow,
            Outcome::Unset => ConsoleColor::Gray,
        }
    }

    pub fn log_tag(&self) -> &'static str {
        match self {
            Outcome::Error => "ERROR: ",
            Outcome::Warning(_) => "WARNING: ",
            Outcome::Pass | Outcome::Unset => "",
        }
    }

    pub fn console_text(&self, pass_message: &str, error_message: &str) -> String {
        match self {
            Outcome::Pass => pass_message.to_string(),
            Outcome::Error => error_message.to_string(),
            Outcome::Warning(message) => format!("WARNING!: {}", message),
            Outcome::Unset => NO_RESULT_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_selector_picks_outcome() {
        assert_eq!(Outcome::from_selection(true, false, None).unwrap(), Outcome::Pass);
        assert_eq!(Outcome::from_selection(false, true, None).unwrap(), Outcome::Error);
        assert_eq!(
            Outcome::from_selection(false, false, Some("disk low".into())).unwrap(),
            Outcome::Warning("disk low".into())
        );
        assert_eq!(Outcome::from_selection(false, false, None).unwrap(), Outcome::Unset);
    }

    #[test]
    fn multiple_selectors_conflict() {
        let err = Outcome::from_selection(true, true, Some("x".into())).unwrap_err();
        match err {
            StepLogError::ConflictingOutcome { selected } => {
                assert_eq!(selected, vec!["pass", "error", "warning"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Outcome::from_selection(true, true, None).is_err());
        assert!(Outcome::from_selection(false, true, Some("x".into())).is_err());
    }

    #[test]
    fn empty_warning_is_rejected() {
        let err = Outcome::from_selection(false, false, Some(String::new())).unwrap_err();
        assert!(matches!(err, StepLogError::InvalidArgument { .. }));
    }

    #[test]
    fn presentation_table() {
        let warning = Outcome::Warning("disk low".into());
        assert_eq!(Outcome::Pass.color(), ConsoleColor::Green);
        assert_eq!(Outcome::Error.color(), ConsoleColor::Red);
        assert_eq!(warning.color(), ConsoleColor::Yellow);
        assert_eq!(Outcome::Unset.color(), ConsoleColor::Gray);

        assert_eq!(Outcome::Pass.console_text("Done!", "Failed!"), "Done!");
        assert_eq!(Outcome::Error.console_text("Done!", "Failed!"), "Failed!");
        assert_eq!(warning.console_text("Done!", "Failed!"), "WARNING!: disk low");
        assert_eq!(
            Outcome::Unset.console_text("Done!", "Failed!"),
            "No result submitted"
        );

        assert_eq!(Outcome::Error.log_tag(), "ERROR: ");
        assert_eq!(warning.log_tag(), "WARNING: ");
        assert_eq!(Outcome::Pass.log_tag(), "");
        assert_eq!(Outcome::Unset.log_tag(), "");
    }
}
