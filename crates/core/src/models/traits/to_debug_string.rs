/// Renders any `Debug` value as a `String`, used to carry underlying errors
/// from transports into our own error variants:
/// ```diff
/// -underlying: format!("{:?}", e)
/// +underlying: e.to_debug_string()
/// ```
pub trait ToDebugString {
    fn to_debug_string(&self) -> String;
}
impl<T: core::fmt::Debug> ToDebugString for T {
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}
