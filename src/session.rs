// ============================================================================
// Interactive Session
// Read-eval-print loop over base pairs and numerals
// ============================================================================

use crate::domain::{parse_base_pair, Numeral};
use crate::engine::{ConversionResult, Converter};
use std::io::{self, BufRead, Write};

/// Ends the session from the base-pair prompt.
pub const EXIT_COMMAND: &str = "/exit";

/// Returns from the numeral prompt to the base-pair prompt.
pub const BACK_COMMAND: &str = "/back";

/// Validate `numeral` against `source_base`, then convert it for display.
pub fn convert_numeral(
    converter: &Converter,
    numeral: &str,
    source_base: u32,
    target_base: u32,
) -> ConversionResult<String> {
    Numeral::split(numeral)?.validate_for_base(source_base)?;
    converter.convert_for_display(numeral, source_base, target_base)
}

/// Interactive calculator reading commands from `input` and writing prompts
/// and results to `output`.
///
/// Conversion errors are reported and the prompt repeats; only I/O errors end
/// the session early. End of input ends it cleanly.
pub struct Session<R, W> {
    input: R,
    output: W,
    converter: Converter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, converter: Converter) -> Self {
        Self {
            input,
            output,
            converter,
        }
    }

    /// Run until `/exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt(format_args!(
                "Enter two numbers in format: {{source base}} {{target base}} (To quit type {}) ",
                EXIT_COMMAND
            ))?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line == EXIT_COMMAND {
                break;
            }

            let (source_base, target_base) = match parse_base_pair(&line) {
                Ok(bases) => bases,
                Err(error) => {
                    writeln!(self.output, "Error: {}", error)?;
                    continue;
                },
            };

            tracing::debug!(source_base, target_base, "selected bases");
            if !self.convert_numerals(source_base, target_base)? {
                break;
            }
        }

        self.output.flush()
    }

    /// Inner loop for one base pair. Returns false on end of input.
    fn convert_numerals(&mut self, source_base: u32, target_base: u32) -> io::Result<bool> {
        loop {
            self.prompt(format_args!(
                "Enter number in base {} to convert to base {} (To go back type {}) ",
                source_base, target_base, BACK_COMMAND
            ))?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if line == BACK_COMMAND {
                return Ok(true);
            }

            match convert_numeral(&self.converter, &line, source_base, target_base) {
                Ok(result) => writeln!(self.output, "Conversion result: {}", result)?,
                Err(error) => writeln!(self.output, "Error: {}", error)?,
            }
        }
    }

    fn prompt(&mut self, text: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.output.write_fmt(text)?;
        self.output.flush()
    }

    /// Next line without surrounding whitespace; None at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConverterConfig;
    use crate::engine::ConversionError;
    use crate::interfaces::NoOpEventHandler;
    use std::sync::Arc;

    fn run_session(script: &str) -> String {
        let mut output = Vec::new();
        Session::new(script.as_bytes(), &mut output, Converter::default())
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn results(transcript: &str) -> Vec<&str> {
        transcript
            .split("Conversion result: ")
            .skip(1)
            .map(|rest| rest.lines().next().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_convert_numeral() {
        let converter = Converter::default();
        assert_eq!(convert_numeral(&converter, "FF", 16, 10).unwrap(), "255");
        assert_eq!(convert_numeral(&converter, "0.1", 2, 10).unwrap(), "0.50000");
        assert_eq!(
            convert_numeral(&converter, "12", 2, 10),
            Err(ConversionError::DigitOutOfRange {
                symbol: '2',
                base: 2
            })
        );
    }

    #[test]
    fn test_same_base_still_validates_input() {
        let converter = Converter::default();
        assert!(convert_numeral(&converter, "#", 16, 16).is_err());
        assert_eq!(convert_numeral(&converter, "0.1", 16, 16).unwrap(), "0.10000");
    }

    #[test]
    fn test_prompts_and_results() {
        let transcript = run_session("16 10\nFF\n/back\n/exit\n");

        assert!(transcript.starts_with(
            "Enter two numbers in format: {source base} {target base} (To quit type /exit) "
        ));
        assert!(transcript
            .contains("Enter number in base 16 to convert to base 10 (To go back type /back) "));
        assert_eq!(results(&transcript), vec!["255"]);
    }

    #[test]
    fn test_back_returns_to_base_selection() {
        let transcript = run_session("10 2\n10\n/back\n2 16\n11111111\n/back\n/exit\n");
        assert_eq!(results(&transcript), vec!["1010", "ff"]);
        assert_eq!(transcript.matches("Enter two numbers").count(), 3);
    }

    #[test]
    fn test_fractional_results_use_display_scale() {
        let transcript = run_session("10 3\n0.1\n/back\n/exit\n");
        assert_eq!(results(&transcript), vec!["0.00220"]);
    }

    #[test]
    fn test_errors_are_reported_and_session_continues() {
        let transcript = run_session("sixteen ten\n16 40\n8 10\n9\n7\n/exit\n");

        assert!(transcript.contains("Error: expected two numbers"));
        assert!(transcript.contains("Error: base 40 is outside the supported range 0-36"));
        assert!(transcript.contains("Error: '9' is not a digit in base 8"));
        assert_eq!(results(&transcript), vec!["7"]);
    }

    #[test]
    fn test_end_of_input_ends_cleanly() {
        let transcript = run_session("2 10\n101\n");
        assert_eq!(results(&transcript), vec!["5"]);

        assert!(run_session("").starts_with("Enter two numbers"));
    }

    #[test]
    fn test_unrounded_session() {
        let converter = Converter::new(ConverterConfig::unrounded(), Arc::new(NoOpEventHandler));
        let mut output = Vec::new();
        Session::new("2 10\n0.1\n/exit\n".as_bytes(), &mut output, converter)
            .run()
            .unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(results(&transcript), vec!["0.5"]);
    }
}
