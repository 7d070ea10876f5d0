//! Event identifiers. Ids are integers derived from the creation time in milliseconds;
//! validation happens at parse boundaries (e.g. the `/deleteEvent/:id` path segment).

pub type EventId = i64;

/// Parse a path segment into an event id or return an error message. Use at API boundaries.
pub fn parse_event_id(id: &str) -> Result<EventId, String> {
    id.trim()
        .parse::<EventId>()
        .map_err(|e| format!("Invalid event id {:?}: {}", id, e))
}

/// Next id for a new event: the current time in milliseconds, bumped past the largest
/// existing id so successive calls within the same millisecond never collide.
/// `None` once the largest existing id is `EventId::MAX` and nothing above it is left.
pub fn next_event_id<I>(existing: I, now_millis: i64) -> Option<EventId>
where
    I: IntoIterator<Item = EventId>,
{
    match existing.into_iter().max() {
        Some(max) if max >= now_millis => max.checked_add(1),
        _ => Some(now_millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_event_id("1718000000000"), Ok(1_718_000_000_000));
        assert_eq!(parse_event_id(" 42 "), Ok(42));
        assert!(parse_event_id("abc").is_err());
        assert!(parse_event_id("").is_err());
    }

    #[test]
    fn uses_clock_when_ahead_of_existing_ids() {
        assert_eq!(next_event_id(Vec::new(), 1000), Some(1000));
        assert_eq!(next_event_id(vec![1, 2, 3], 1000), Some(1000));
    }

    #[test]
    fn bumps_past_collisions_within_same_millisecond() {
        assert_eq!(next_event_id(vec![1000], 1000), Some(1001));
        assert_eq!(next_event_id(vec![999, 1001, 1000], 1000), Some(1002));
        // Ids written by a bulk update may lie in the future.
        assert_eq!(next_event_id(vec![5000], 1000), Some(5001));
    }

    #[test]
    fn no_id_left_above_the_maximum() {
        assert_eq!(next_event_id(vec![EventId::MAX], 1000), None);
        assert_eq!(next_event_id(vec![EventId::MAX - 1], 1000), Some(EventId::MAX));
    }
}
