use restricted_core::{
    restricted_value, AsciiChars, Format, Locale, RepeatableHash, RestrictedValue, SpanCodec,
};

fn is_language(code: &AsciiChars<2>) -> bool {
    matches!(code.as_str(), "de" | "en" | "es" | "fr" | "nl")
}

fn lower(code: AsciiChars<2>) -> AsciiChars<2> {
    code.to_ascii_lowercase()
}

restricted_value! {
    /// ISO 639-1 language code, stored lower case.
    #[derive(Copy)]
    pub struct LanguageCode(AsciiChars<2>);
    level = nominal;
    zero_valid = false;
    validate = is_language;
    normalize = lower;
    codec(max_text = 2, max_bytes = 2);
}

fn main() {
    let code = LanguageCode::parse("FR", &Locale::INVARIANT).expect("valid language code");
    let mut buffer = [0u8; LanguageCode::MAX_BYTE_LENGTH];
    let written = code
        .format_into(&mut buffer, Format::Upper, &Locale::INVARIANT)
        .expect("buffer sized to MAX_BYTE_LENGTH");
    println!("{} {}", code, String::from_utf8_lossy(&buffer[..written]));

    match code.repeatable_hash() {
        Ok(hash) => println!("{:016x}", hash),
        Err(err) => {
            eprintln!("hashing failed: {}", err);
            std::process::exit(1);
        }
    }

    let unset = LanguageCode::default();
    println!("initialized: {}", unset.is_initialized());
}
