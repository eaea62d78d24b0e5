//! Hash command implementation.

use std::collections::HashSet;
use std::io::{self, BufRead, BufReader};

use restricted_core::{Format, Locale, Nominal, RepeatableHash, SpanCodec};
use tracing::debug;

use crate::output::format_hash;
use crate::registry::{self, TypeVisitor};

struct HashLines {
    input: Box<dyn BufRead>,
    dedupe: bool,
}

impl TypeVisitor for HashLines {
    type Output = Result<usize, Box<dyn std::error::Error>>;

    fn visit<T: Nominal + SpanCodec>(self) -> Self::Output {
        let mut seen = HashSet::new();
        let mut invalid = 0;

        // Raw bytes, so a line that is not UTF-8 is reported like any other bad line.
        for (index, line) in self.input.split(b'\n').enumerate() {
            let line_number = index + 1;
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            if line.is_empty() {
                continue;
            }

            let value = match T::parse_utf8(line, &Locale::INVARIANT) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("line {}: {}", line_number, e);
                    invalid += 1;
                    continue;
                }
            };

            let hash = value.repeatable_hash()?;
            if self.dedupe && !seen.insert(hash) {
                debug!(line = line_number, "dropped repeated value");
                continue;
            }
            let canonical = value.to_text(Format::Default, &Locale::INVARIANT)?;
            println!("{}  {}", format_hash(hash), canonical);
        }

        Ok(invalid)
    }
}

pub fn run(
    type_name: String,
    input: Option<String>,
    dedupe: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read lines from file or stdin
    let input: Box<dyn BufRead> = if let Some(path) = input {
        let file = std::fs::File::open(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(io::stdin()))
    };

    let invalid = registry::dispatch(&type_name, HashLines { input, dedupe })??;
    if invalid > 0 {
        return Err(format!("{} invalid line(s)", invalid).into());
    }
    Ok(())
}
