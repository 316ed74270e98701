//! Hand-rolled option parsing for the `tokenize` command.

use stoker::{CharOutOfRange, Tokenizer};

/// Engine configuration gathered from `tokenize` flags.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TokenizeOptions {
    /// `--eol`: report line terminators as end-of-line tokens.
    pub eol: bool,
    /// `--slash-star`: recognize `/* ... */` comments.
    pub slash_star: bool,
    /// `--slash-slash`: recognize `// ...` comments.
    pub slash_slash: bool,
    /// `--lower`: lowercase word tokens.
    pub lower: bool,
    /// `--no-numbers`: switch number recognition off.
    pub no_numbers: bool,
    /// `--ordinary=<chars>`: demote each listed character to ordinary
    /// before scanning. Repeatable; occurrences accumulate.
    pub ordinary: Vec<char>,
}

impl TokenizeOptions {
    /// Parse the flags following the file argument.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "--eol" => options.eol = true,
                "--slash-star" => options.slash_star = true,
                "--slash-slash" => options.slash_slash = true,
                "--lower" => options.lower = true,
                "--no-numbers" => options.no_numbers = true,
                other => {
                    if let Some(chars) = other.strip_prefix("--ordinary=") {
                        options.ordinary.extend(chars.chars());
                    } else {
                        return Err(format!("unknown option '{other}'"));
                    }
                }
            }
        }
        Ok(options)
    }

    /// Apply the gathered configuration to an engine.
    ///
    /// Ordinary demotions run first so that, say, `--ordinary=/` with
    /// `--slash-slash` strips the default comment classification before the
    /// flag takes effect.
    pub fn configure<S>(&self, tokenizer: &mut Tokenizer<S>) -> Result<(), CharOutOfRange> {
        for &ch in &self.ordinary {
            tokenizer.ordinary_char(ch)?;
        }
        tokenizer.eol_is_significant(self.eol);
        tokenizer.slash_star_comments(self.slash_star);
        tokenizer.slash_slash_comments(self.slash_slash);
        tokenizer.lower_case_mode(self.lower);
        if self.no_numbers {
            tokenizer.parse_numbers(false);
        }
        Ok(())
    }
}
