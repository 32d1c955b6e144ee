/// Which records a list query returns.
///
/// The admin panel and JSON API see everything; the public site only sees
/// visible records, filtered in the query itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    VisibleOnly,
}

impl ListScope {
    pub fn visible_only(self) -> bool {
        matches!(self, ListScope::VisibleOnly)
    }
}
