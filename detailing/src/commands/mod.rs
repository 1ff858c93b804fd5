use anyhow::Context;
use clap::Args;
use detailing_models::booking::BookingRequest;

pub mod compose;
pub mod page;
pub mod submit;

/// Platform signature used when none is given on the command line.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) detailing";

#[derive(Debug, Args)]
pub struct FormArgs {
    /// The url encoded booking form, read from stdin if omitted
    #[arg(long, short)]
    form: Option<String>,
}

impl FormArgs {
    pub fn read(self) -> anyhow::Result<BookingRequest> {
        let body = match self.form {
            Some(form) => form,
            None => std::io::read_to_string(std::io::stdin())
                .context("Failed to read booking form from stdin")?,
        };
        Ok(BookingRequest::from_urlencoded(body.trim_end()))
    }
}
