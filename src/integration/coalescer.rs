use chrono::NaiveDate;

/// Per-loop decisions for the runner: how many draws, which size, which day
pub struct Coalescer;

impl Coalescer {
    /// Draw once if anything asked for it since the last loop
    #[inline]
    pub fn should_render(queued_render_reqs: usize, saw_render_event: bool) -> bool {
        queued_render_reqs > 0 || saw_render_event
    }

    /// Several resizes in one loop collapse into the newest
    #[inline]
    pub fn last_resize(pending: Option<(u16, u16)>, events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied().or(pending)
    }

    /// The new date when the clock has crossed midnight since `shown`
    #[inline]
    pub fn day_changed(shown: NaiveDate, now: NaiveDate) -> Option<NaiveDate> {
        (now != shown).then_some(now)
    }
}
