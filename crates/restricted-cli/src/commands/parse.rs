//! Parse command implementation.

use restricted_core::{
    content_digest, Format, Locale, MeasurementLevel, Nominal, RepeatableHash, SpanCodec,
};
use serde::Serialize;
use tracing::debug;

use crate::output::{format_hash, format_json};
use crate::registry::{self, TypeVisitor};

#[derive(Serialize)]
struct ParseReport {
    type_name: &'static str,
    level: MeasurementLevel,
    locale: &'static str,
    formatted: String,
    canonical: String,
    hash: String,
    digest: String,
}

struct ParseRequest<'a> {
    text: &'a str,
    locale: Locale,
    format: Format<'a>,
}

impl TypeVisitor for ParseRequest<'_> {
    type Output = Result<ParseReport, Box<dyn std::error::Error>>;

    fn visit<T: Nominal + SpanCodec>(self) -> Self::Output {
        let value = T::parse(self.text, &self.locale)?;
        debug!(type_name = T::NAME, locale = self.locale.tag(), "parsed value");

        Ok(ParseReport {
            type_name: T::NAME,
            level: T::LEVEL,
            locale: self.locale.tag(),
            formatted: value.to_text(self.format, &self.locale)?,
            canonical: value.to_text(Format::Default, &Locale::INVARIANT)?,
            hash: format_hash(value.repeatable_hash()?),
            digest: content_digest(&value)?.to_string(),
        })
    }
}

pub fn run(
    type_name: String,
    text: String,
    locale: Option<String>,
    format: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let locale = match locale {
        Some(tag) => Locale::from_tag(&tag).ok_or_else(|| format!("unknown locale '{}'", tag))?,
        None => Locale::INVARIANT,
    };
    let format = Format::parse(format.as_deref().unwrap_or(""));

    let request = ParseRequest {
        text: &text,
        locale,
        format,
    };
    let report = registry::dispatch(&type_name, request)??;

    if json {
        println!("{}", format_json(&report));
    } else {
        println!("type:      {} ({})", report.type_name, report.level.as_str());
        println!("locale:    {}", report.locale);
        println!("formatted: {}", report.formatted);
        println!("canonical: {}", report.canonical);
        println!("hash:      {}", report.hash);
        println!("digest:    {}", report.digest);
    }
    Ok(())
}
