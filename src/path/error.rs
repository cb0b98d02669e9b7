use nom_language::error::{VerboseError, VerboseErrorKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Key path must contain at least one field name")]
    Empty,

    #[error("Invalid key path syntax at position {position}: {message}")]
    InvalidSyntax { position: usize, message: String },
}

impl PathError {
    pub fn invalid_syntax(position: usize, message: impl Into<String>) -> Self {
        PathError::InvalidSyntax {
            position,
            message: message.into(),
        }
    }
}

/// Reports the innermost context, which points at the offending character
/// rather than at the start of the enclosing key or list.
pub(super) fn convert_verbose_error(input: &str, err: VerboseError<&str>) -> PathError {
    let innermost = err
        .errors
        .iter()
        .find(|(_, kind)| matches!(kind, VerboseErrorKind::Context(_)))
        .or_else(|| err.errors.first());

    let Some((fragment, kind)) = innermost else {
        return PathError::invalid_syntax(0, "invalid key path syntax");
    };

    let position = input.len() - fragment.len();

    let message = match kind {
        VerboseErrorKind::Context(ctx) => ctx.to_string(),
        VerboseErrorKind::Char(c) => format!("expected '{}'", c),
        VerboseErrorKind::Nom(nom_err) => format!("parser error: {:?}", nom_err),
    };

    PathError::InvalidSyntax { position, message }
}
