/// Best-effort rewrite of near-JSON model output into valid JSON text.
///
/// The lenient parser calls this after a strict parse fails. Implementations
/// return `None` when they cannot produce anything worth re-parsing; the
/// returned text is not assumed to be valid.
pub trait TextRepair: Send + Sync {
    fn name(&self) -> &'static str;

    fn repair(&self, text: &str) -> Option<String>;
}
