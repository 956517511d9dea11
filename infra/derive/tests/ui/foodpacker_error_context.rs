use foodpacker_derive::foodpacker_error;
use std::borrow::Cow;

#[foodpacker_error]
pub enum PaletteError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String, PaletteError> {
    std::fs::read_to_string("/definitely/not/here.toml").context("Reading palette")
}

fn fail_internal() -> Result<(), PaletteError> {
    Err::<(), PaletteError>("boom".into()).context("Rendering")
}

fn main() {
    let err = read_missing().unwrap_err();
    assert!(err.to_string().starts_with("IO error (Reading palette): "));

    let err = fail_internal().unwrap_err();
    assert_eq!(err.to_string(), "Internal error (Rendering): boom");
}
