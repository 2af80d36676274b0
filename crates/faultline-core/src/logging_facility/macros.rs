//! Field map construction

/// Build a `Fields` map from `key => value` pairs
///
/// Values may be anything `serde::Serialize`; a value that fails to
/// serialize is stored as `null`. Later duplicates of a key win.
///
/// # Example
///
/// ```
/// use faultline_core::fields;
///
/// let fields = fields! {
///     "user_id" => 12345,
///     "action" => "login",
/// };
/// assert_eq!(fields["user_id"], 12345);
/// assert_eq!(fields["action"], "login");
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(
                ::std::string::String::from($key),
                $crate::__private::serde_json::to_value(&$value)
                    .unwrap_or($crate::__private::serde_json::Value::Null),
            );
        )+
        fields
    }};
}
