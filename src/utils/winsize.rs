//! Terminal width probing.

use console::Term;

/// Width of the terminal the process draws to, in columns.
///
/// Stdout is asked first, then stderr, so a bar drawn to stderr keeps its
/// width when stdout is redirected to a file. Returns `0` when neither is
/// a terminal; the renderer treats that as the narrowest possible terminal.
pub fn terminal_width() -> usize {
    let terms: [fn() -> Term; 2] = [Term::stdout, Term::stderr];
    first_width(terms.into_iter().map(|term| term().size_checked()))
}

/// Columns of the first probe that reports a non-zero size.
///
/// Probes are `(rows, cols)` pairs and are evaluated lazily, in order.
fn first_width<I>(sizes: I) -> usize
where
    I: IntoIterator<Item = Option<(u16, u16)>>,
{
    sizes
        .into_iter()
        .flatten()
        .map(|(_rows, cols)| usize::from(cols))
        .find(|&cols| cols > 0)
        .unwrap_or(0)
}
