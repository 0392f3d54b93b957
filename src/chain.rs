use crate::converter::Converter;
use crate::cursor::TokenCursor;
use crate::exact::Exact;
use crate::flag::Flag;
use crate::no_more_args::NoMoreArgs;
use crate::one_of::OneOf;
use crate::optional::Optional;
use crate::parser::{BoxedParser, ParseResult, Parser, ParserExt};
use crate::value::Args;
use log::trace;
use std::fmt;
use std::ops::Add;

/// Parser combinator that runs its steps one after another
///
/// Each step starts where the previous one stopped. The mappings are merged in
/// step order, so on a key collision the later step's value wins. The first
/// failing step aborts the whole chain with its error.
///
/// Appending builds a longer chain and never touches a parser that is already
/// part of another chain:
///
/// ```
/// use argcomb::{Converter, Exact, NoMoreArgs, ParserExt};
///
/// let install = Exact::new("cmd", "install") + Converter::string("target") + NoMoreArgs;
/// let (remaining, args) = install.run(&["install", "pkgA"]).unwrap();
/// assert!(remaining.is_empty());
/// assert_eq!(args["target"].as_str(), Some("pkgA"));
/// ```
#[derive(Default)]
pub struct Chain {
    steps: Vec<BoxedParser>,
}

impl Chain {
    pub fn new() -> Self {
        Chain { steps: Vec::new() }
    }

    /// Append a step after all existing ones
    pub fn then<P>(mut self, next: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
    {
        self.steps.push(next.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl Parser for Chain {
    fn parse<'t>(&self, mut cursor: TokenCursor<'t>) -> ParseResult<'t> {
        let mut args = Args::new();
        for (index, step) in self.steps.iter().enumerate() {
            let (step_args, next) = step.parse(cursor)?;
            trace!(
                "step {} consumed tokens {}..{}",
                index,
                cursor.position(),
                next.position()
            );
            args.extend(step_args);
            cursor = next;
        }
        Ok((args, cursor))
    }
}

/// Extension trait to add .then() method support for parsers
pub trait ChainExt: Parser + Sized + Send + Sync + 'static {
    fn then<P>(self, next: P) -> Chain
    where
        P: Parser + Send + Sync + 'static,
    {
        Chain::new().then(self).then(next)
    }
}

/// Implement ChainExt for all parsers
impl<P> ChainExt for P where P: Parser + Send + Sync + 'static {}

impl<Rhs> Add<Rhs> for Chain
where
    Rhs: Parser + Send + Sync + 'static,
{
    type Output = Chain;

    fn add(self, next: Rhs) -> Chain {
        self.then(next)
    }
}

// `a + b` for every parser type this crate defines
macro_rules! impl_add {
    ($($ty:ident $(<$($param:ident),+>)?),* $(,)?) => {$(
        impl<$($($param,)+)? Rhs> Add<Rhs> for $ty $(<$($param),+>)?
        where
            Self: Parser + Send + Sync + 'static,
            Rhs: Parser + Send + Sync + 'static,
        {
            type Output = Chain;

            fn add(self, next: Rhs) -> Chain {
                Chain::new().then(self).then(next)
            }
        }
    )*};
}

impl_add!(Exact, NoMoreArgs, OneOf, Converter<F>, Optional<P>, Flag<P>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::exact::exact;
    use crate::flag::flag;
    use crate::optional::optional;
    use crate::value::Value;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_install_target() {
        let parser = exact("cmd", "install") + Converter::string("target");

        let (remaining, args) = parser.run(&["install", "pkgA"]).unwrap();
        assert!(remaining.is_empty());
        assert_eq!(args.len(), 2);
        assert_eq!(args["cmd"], Value::from("install"));
        assert_eq!(args["target"], Value::from("pkgA"));
    }

    #[test]
    fn test_later_step_overrides_earlier_key() {
        let parser = flag("a", 1i64, exact("x", "x")) + flag("a", 2i64, exact("y", "y"));

        let (_, args) = parser.run(&["x", "y"]).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args["a"].as_int(), Some(2));
    }

    #[test]
    fn test_append_attaches_at_tail() {
        let a_b = exact("a", "a") + exact("b", "b");
        let parser = a_b + exact("c", "c");
        assert_eq!(parser.len(), 3);

        assert!(parser.run(&["a", "b", "c"]).is_ok());
        assert!(parser.run(&["a", "c", "b"]).is_err());
    }

    #[test]
    fn test_nested_chain_keeps_order() {
        let parser = exact("a", "a") + (exact("b", "b") + exact("c", "c"));
        assert_eq!(parser.len(), 2);

        let (remaining, args) = parser.run(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(remaining, vec!["d"]);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_failure_aborts_chain() {
        let parser = exact("cmd", "install") + Converter::string("target") + NoMoreArgs;

        let missing = parser.run(&["install"]).unwrap_err();
        assert!(matches!(missing, ParseError::MissingArgument { .. }));

        let trailing = parser.run(&["install", "pkgA", "extra"]).unwrap_err();
        assert!(matches!(trailing, ParseError::TrailingArguments(_)));
    }

    #[test]
    fn test_method_syntax() {
        let parser = exact("cmd", "run").then(Converter::integer("count"));

        let (_, args) = parser.run(&["run", "3"]).unwrap();
        assert_eq!(args["count"].as_int(), Some(3));
    }

    #[test]
    fn test_empty_chain_consumes_nothing() {
        let parser = Chain::new();
        assert!(parser.is_empty());

        let (remaining, args) = parser.run(&["x"]).unwrap();
        assert_eq!(remaining, vec!["x"]);
        assert!(args.is_empty());
    }

    #[test]
    fn test_shared_subtree_in_two_chains() {
        let prefix = Arc::new(exact("tool", "pkg") + exact("cmd", "install"));
        let strict = prefix.clone().then(NoMoreArgs);
        let with_target = prefix.clone().then(Converter::string("target"));

        assert!(strict.run(&["pkg", "install"]).is_ok());
        let (_, args) = with_target.run(&["pkg", "install", "x"]).unwrap();
        assert_eq!(args["target"].as_str(), Some("x"));

        // building the second chain left the first one untouched
        assert!(strict.run(&["pkg", "install", "x"]).is_err());
        assert_eq!(prefix.len(), 2);
    }

    #[test]
    fn test_optional_tail() {
        let parser = exact("cmd", "list") + optional(Converter::string("filter"));

        let (_, args) = parser.run(&["list"]).unwrap();
        assert!(!args.contains_key("filter"));

        let (_, args) = parser.run(&["list", "py*"]).unwrap();
        assert_eq!(args["filter"].as_str(), Some("py*"));
    }

    proptest! {
        #[test]
        fn prop_remaining_is_suffix(tokens in prop::collection::vec("[a-z0-9-]{0,6}", 0..8), steps in 0usize..5) {
            let mut parser = Chain::new();
            for step in 0..steps {
                parser = parser.then(optional(Converter::string(format!("k{}", step))));
            }

            let (remaining, args) = parser.run(&tokens).unwrap();
            let consumed = steps.min(tokens.len());
            prop_assert_eq!(&remaining[..], &tokens[consumed..]);
            prop_assert_eq!(args.len(), consumed);
        }

        #[test]
        fn prop_later_flag_wins(first in any::<i64>(), second in any::<i64>()) {
            let parser = flag("n", first, exact("x", "x")) + flag("n", second, exact("x", "x"));

            let (_, args) = parser.run(&["x", "x"]).unwrap();
            prop_assert_eq!(args["n"].as_int(), Some(second));
        }
    }
}
