/// Stable, machine-readable error codes for every syllog error variant.
///
/// Codes never change once published; log pipelines and reward dashboards
/// key on them instead of on the display strings.
pub trait SyllogErrorCode {
    fn error_code(&self) -> &'static str;
}
