use sylva_core::Span;
use sylva_lib::TokenIndex;
use sylva_lib::dump::Colors;

use super::input::{self, InputArgs};

pub struct TokensArgs {
    pub input: InputArgs,
    /// Only tokens fully inside this range.
    pub range: Option<Span>,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let input = input::load_or_exit(&args.input);
    let index = TokenIndex::new(input.doc.tokens);
    let c = Colors::new(args.color);

    let (offset, tokens) = match args.range {
        Some(range) => {
            let selected = index.tokens_in_range(range.start, range.end);
            let offset = index.index_after(range.start).unwrap_or(index.len());
            (offset, selected)
        }
        None => (0, index.tokens()),
    };

    for (i, token) in tokens.iter().enumerate() {
        let at = offset + i;
        let mut line = format!(
            "{at:>4}  {:<18} {}{:?}{}  {}[{:?}]{}",
            token.kind.to_string(),
            c.string,
            token.value,
            c.reset,
            c.dim,
            token.span,
            c.reset
        );
        let gap = index.whitespace_after(at);
        if gap > 0 {
            line.push_str(&format!(" +{gap}"));
        }
        let categories = token.operator_categories();
        if !categories.is_empty() {
            let names: Vec<String> = categories.iter().map(ToString::to_string).collect();
            line.push_str(&format!("  ({})", names.join(", ")));
        }
        println!("{line}");
    }
}
