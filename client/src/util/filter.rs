//! Pure list filtering shared by the management pages.
//!
//! Every page keeps the full fetched list and derives the displayed subset
//! with these predicates, so tab counts and search results stay consistent.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// A blank term matches everything; `None` fields never match.
pub fn matches_search<'a, I>(term: &str, fields: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// A status tab: either everything, or one exact status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Tab<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq> Tab<S> {
    pub fn accepts(&self, status: &S) -> bool {
        match self {
            Tab::All => true,
            Tab::Only(wanted) => wanted == status,
        }
    }
}

/// Number of `items` whose status satisfies `tab`.
pub fn count_in_tab<T, S, F>(items: &[T], tab: &Tab<S>, status_of: F) -> usize
where
    S: PartialEq,
    F: Fn(&T) -> &S,
{
    items.iter().filter(|item| tab.accepts(status_of(item))).count()
}
