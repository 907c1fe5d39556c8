use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::TitleArgs;

impl ArgumentType for TitleArgs {
    type Error = Infallible;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        // A flag given without a value, or with only whitespace, is
        // normalized to "missing" and rejected later by require_title.
        let title = val
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Some(Ok(TitleArgs { title }))
    }

    fn default_value() -> Option<Self> {
        Some(TitleArgs::default())
    }
}
