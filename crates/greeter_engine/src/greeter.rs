/* 📖 # Why is Greeter a concrete struct and not a trait?

There is one way to greet. The only thing worth swapping in tests is where the text goes,
and that already sits behind the Pal trait, so Greeter itself stays a plain value.
*/

use greeter_base::{GreeterResult, PalHandle, ResultExt};
use tracing::{debug, instrument};

/// Text written before the name.
pub const GREETING_PREFIX: &str = "Hello, ";
/// Text written after the name.
pub const GREETING_SUFFIX: &str = "!";
/// Name greeted by the `greeter` binary.
pub const DEFAULT_NAME: &str = "World";

/// Formats the greeting for `name`, without a line terminator.
///
/// The name is used verbatim: no trimming, escaping or validation.
pub fn format_greeting(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}{GREETING_SUFFIX}")
}

/// Writes greetings to standard output.
///
/// Holds no greeting state; repeated calls are independent of each other.
#[derive(Debug, Clone)]
pub struct Greeter {
    pal: PalHandle,
}

impl Greeter {
    pub fn new(pal: PalHandle) -> Self {
        Self { pal }
    }

    /// Writes `Hello, <name>!` and a newline to stdout in a single write.
    #[instrument(level = "debug", skip(self))]
    pub fn greet(&self, name: &str) -> GreeterResult<()> {
        let line = format!("{}\n", format_greeting(name));
        self.pal
            .write_stdout(&line)
            .with_context(|| format!("Failed to greet '{}'", name))?;
        debug!("greeting written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use greeter_base::{ErrorKind, MockPal};

    fn mock_greeter() -> (Greeter, MockPal) {
        let mock = MockPal::new();
        (Greeter::new(PalHandle::new(mock.clone())), mock)
    }

    #[test]
    fn test_greet_world() {
        let (greeter, mock) = mock_greeter();

        greeter.greet(DEFAULT_NAME).unwrap();

        expect![[r#"
            Hello, World!
        "#]]
        .assert_eq(&mock.stdout_contents());
    }

    #[test]
    fn test_format_greeting_is_plain_concatenation() {
        let names = [
            "World",
            "",
            " padded ",
            "Zoë",
            "世界",
            "{}",
            "%s",
            "multi\nline",
            "already!",
        ];
        for name in names {
            assert_eq!(format_greeting(name), format!("Hello, {}!", name));
        }
    }

    #[test]
    fn test_greet_writes_formatted_line() {
        let (greeter, mock) = mock_greeter();

        greeter.greet("Ferris").unwrap();

        assert_eq!(mock.stdout_writes(), ["Hello, Ferris!\n"]);
    }

    #[test]
    fn test_greet_empty_name() {
        let (greeter, mock) = mock_greeter();

        greeter.greet("").unwrap();

        assert_eq!(mock.stdout_contents(), "Hello, !\n");
    }

    #[test]
    fn test_each_call_is_exactly_one_write() {
        let (greeter, mock) = mock_greeter();

        greeter.greet("World").unwrap();
        assert_eq!(mock.stdout_writes().len(), 1);

        greeter.greet("World").unwrap();
        assert_eq!(mock.stdout_writes(), ["Hello, World!\n", "Hello, World!\n"]);
    }

    #[test]
    fn test_name_with_newline_is_still_one_write() {
        let (greeter, mock) = mock_greeter();

        greeter.greet("two\nlines").unwrap();

        assert_eq!(mock.stdout_writes(), ["Hello, two\nlines!\n"]);
    }

    #[test]
    fn test_repeated_calls_do_not_carry_state() {
        let (greeter, mock) = mock_greeter();

        greeter.greet("Alice").unwrap();
        greeter.greet("Bob").unwrap();
        greeter.greet("Alice").unwrap();

        expect![[r#"
            Hello, Alice!
            Hello, Bob!
            Hello, Alice!
        "#]]
        .assert_eq(&mock.stdout_contents());
    }

    #[test]
    fn test_greet_does_not_take_ownership_of_name() {
        let (greeter, _mock) = mock_greeter();
        let name = String::from("Ferris");

        greeter.greet(&name).unwrap();

        assert_eq!(name, "Ferris");
    }

    #[test]
    fn test_greet_closed_stdout_reports_output_error() {
        let (greeter, mock) = mock_greeter();
        mock.close_stdout();

        let err = greeter.greet("World").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::OutputError { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to greet 'World': Failed to write to stdout: stdout is closed"
        );
        assert!(mock.stdout_writes().is_empty());
    }
}
