//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch → command handlers.

use std::path::PathBuf;

use clap::ArgMatches;
use sylva_core::Span;

use super::ColorChoice;
use crate::commands::comments::CommentsArgs;
use crate::commands::find::{FindArgs, FindQuery};
use crate::commands::input::InputArgs;
use crate::commands::stats::StatsArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::tree::TreeArgs;

pub struct InputParams {
    pub input: PathBuf,
    pub schema: Option<PathBuf>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            schema: m.get_one::<PathBuf>("schema").cloned(),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            input: p.input,
            schema: p.schema,
        }
    }
}

pub struct TreeParams {
    pub input: InputParams,
    pub spans: bool,
    pub attrs: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            attrs: !m.get_flag("no_attrs"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: p.input.into(),
            spans: p.spans,
            attrs: p.attrs,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FindParams {
    pub input: InputParams,
    pub kind: Option<String>,
    pub at: Option<u32>,
    pub overlapping: Option<Span>,
    pub color: ColorChoice,
}

impl FindParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            kind: m.get_one::<String>("kind").cloned(),
            at: m.get_one::<u32>("at").copied(),
            overlapping: m.get_one::<Span>("overlapping").copied(),
            color: parse_color(m),
        }
    }
}

impl From<FindParams> for FindArgs {
    fn from(p: FindParams) -> Self {
        // The `query` arg group guarantees exactly one of the three.
        let query = match (p.kind, p.at, p.overlapping) {
            (Some(kind), _, _) => FindQuery::Kind(kind),
            (None, Some(pos), _) => FindQuery::At(pos),
            (None, None, Some(span)) => FindQuery::Overlapping(span),
            (None, None, None) => FindQuery::Overlapping(Span::new(0, u32::MAX)),
        };
        Self {
            input: p.input.into(),
            query,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatsParams {
    pub input: InputParams,
    pub json: bool,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
        }
    }
}

pub struct CommentsParams {
    pub input: InputParams,
    pub json: bool,
    pub color: ColorChoice,
}

impl CommentsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CommentsParams> for CommentsArgs {
    fn from(p: CommentsParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input: InputParams,
    pub range: Option<Span>,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            range: m.get_one::<Span>("range").copied(),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input.into(),
            range: p.range,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
