//! User-facing replies for `/submit`, in the invitation's language (Dutch).

pub const SUBMIT_SUCCESS: &str = "Bedankt! We hebben je antwoord goed ontvangen.";
pub const SUBMIT_FAILURE: &str =
    "Er is iets misgegaan bij het opslaan van je antwoord. Probeer het later opnieuw.";
