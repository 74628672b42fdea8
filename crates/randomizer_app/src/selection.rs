//! Option resolution and shuffling.

use crate::App;
use crate::handlers::store_failure;
use rand::seq::SliceRandom;
use randomizer_core::Context;
use randomizer_error::{CommandError, CommandErrorKind, RandomizerResult};

/// Puts options into a uniformly random order.
///
/// Tests substitute a deterministic implementation; any `Fn(&mut [String])`
/// works.
pub trait Shuffler: Send + Sync {
    /// Permute `options` in place.
    fn shuffle(&self, options: &mut [String]);
}

/// Shuffler backed by the thread-local random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShuffler;

impl Shuffler for RandomShuffler {
    fn shuffle(&self, options: &mut [String]) {
        options.shuffle(&mut rand::thread_rng());
    }
}

impl<F> Shuffler for F
where
    F: Fn(&mut [String]) + Send + Sync,
{
    fn shuffle(&self, options: &mut [String]) {
        self(options)
    }
}

/// Options and pick count resolved from command arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub(crate) options: Vec<String>,
    pub(crate) count: Option<usize>,
}

const COUNT_FLAG: &str = "/n";

/// Whether `token` is plain option text rather than syntax.
pub(crate) fn is_literal(token: &str) -> bool {
    token != COUNT_FLAG && expansion(token).is_none() && removal(token).is_none()
}

fn expansion(token: &str) -> Option<&str> {
    token.strip_prefix('+').filter(|group| !group.is_empty())
}

fn removal(token: &str) -> Option<&str> {
    token.strip_prefix('-').filter(|option| !option.is_empty())
}

fn parse_count(token: &str) -> Result<usize, CommandError> {
    token
        .parse::<usize>()
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| CommandError::new(CommandErrorKind::InvalidCount(token.to_string())))
}

impl App {
    /// Resolve option syntax in `args`.
    ///
    /// `+group` adds a saved group's options, `-option` removes an option
    /// after everything has been added, and `/n K` sets the pick count.
    pub(crate) async fn resolve_options(
        &self,
        ctx: &Context,
        args: &[String],
    ) -> RandomizerResult<Resolved> {
        let mut resolved = Resolved::default();
        let mut removals = Vec::new();

        let mut tokens = args.iter();
        while let Some(token) = tokens.next() {
            if token == COUNT_FLAG {
                let value = tokens
                    .next()
                    .ok_or_else(|| CommandError::new(CommandErrorKind::MissingCount))?;
                resolved.count = Some(parse_count(value)?);
            } else if let Some(group) = expansion(token) {
                let options = self
                    .store()
                    .get(ctx, group)
                    .await
                    .map_err(store_failure("get", group))?;
                if options.is_empty() {
                    return Err(CommandError::new(CommandErrorKind::GroupNotFound(
                        group.to_string(),
                    ))
                    .into());
                }
                tracing::debug!(group, count = options.len(), "Expanded group");
                resolved.options.extend(options);
            } else if let Some(option) = removal(token) {
                removals.push(option);
            } else {
                resolved.options.push(token.clone());
            }
        }

        if !removals.is_empty() {
            resolved
                .options
                .retain(|option| !removals.contains(&option.as_str()));
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_detection() {
        assert!(is_literal("tacos"));
        assert!(is_literal("+"));
        assert!(is_literal("-"));
        assert!(!is_literal("+lunch"));
        assert!(!is_literal("-pizza"));
        assert!(!is_literal("/n"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert!(matches!(
            parse_count("0").unwrap_err().kind,
            CommandErrorKind::InvalidCount(_)
        ));
        assert!(parse_count("two").is_err());
        assert!(parse_count("-1").is_err());
    }

    #[test]
    fn test_closure_shuffler() {
        let reverse = |options: &mut [String]| options.reverse();
        let mut options = vec!["a".to_string(), "b".to_string()];
        Shuffler::shuffle(&reverse, &mut options);
        assert_eq!(options, vec!["b", "a"]);
    }

    #[test]
    fn test_random_shuffler_is_a_permutation() {
        let mut options: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        RandomShuffler.shuffle(&mut options);
        let mut sorted = options.clone();
        sorted.sort_by_key(|s| s.parse::<u32>().unwrap());
        let expected: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        assert_eq!(sorted, expected);
    }
}
