/// Stable identifier of the rule that produced a diagnostic, carried in the
/// LSP `code` field independently of the message text.
pub trait JavaErrorCode {
    fn code(&self) -> &'static str;
}
