use crate::models::{Event, Interval};

/// Expand every interval into its start and end events.
///
/// Emission order is irrelevant: the sweep sorts before consuming.
pub fn build_events<'a, I>(groups: I) -> Vec<Event>
where
    I: IntoIterator<Item = &'a [Interval]>,
{
    groups
        .into_iter()
        .flatten()
        .flat_map(Event::pair)
        .collect()
}
