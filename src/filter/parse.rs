//! Building filters from query parameters.

use crate::error::Result;
use crate::filter::{Filter, FilterField};

/// Query parameter holding the source feed URL. Never treated as a filter.
pub const URL_PARAM: &str = "url";

/// Build filters from query parameters.
///
/// Every parameter except [`URL_PARAM`] names a field (case-insensitive) and
/// its value is the keyword. Parameters are turned into filters in order and
/// a repeated field yields one filter per occurrence. Any unknown field
/// rejects the whole set with [`RssFilterError::InvalidField`].
///
/// [`RssFilterError::InvalidField`]: crate::RssFilterError::InvalidField
pub fn parse_filters<I, K, V>(params: I) -> Result<Vec<Filter>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .filter(|(name, _)| name.as_ref() != URL_PARAM)
        .map(|(name, value)| -> Result<Filter> {
            let field: FilterField = name.as_ref().parse()?;
            Ok(Filter::new(field, value.as_ref()))
        })
        .collect()
}
