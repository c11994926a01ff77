use std::fmt;

/// Identity of an in-flight request.
///
/// `epoch` changes every time a dialog is opened or closed, `seq` every time
/// a new request supersedes the previous one. A completion is only folded
/// when its ticket equals the dialog's current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestTicket {
    pub epoch: u64,
    pub seq: u64,
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.epoch, self.seq)
    }
}
