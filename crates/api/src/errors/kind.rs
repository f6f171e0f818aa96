/// Classification for failed hiscores requests.
///
/// A 404 is not an error at all (it surfaces as `Ok(None)`), so every
/// [`HiscoresError`](super::HiscoresError) falls into one of these two buckets.
///
/// | Kind | Cause | Typical handling |
/// |------|-------|------------------|
/// | `Transport` | timeout, connection failure, non-2xx status | drop this player, keep going |
/// | `Format` | body is not the expected JSON shape | drop this player, keep going |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// The request never produced a usable HTTP response.
    Transport,

    /// The endpoint answered 2xx but the body could not be decoded.
    Format,
}

impl FailureKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Format => "format",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
