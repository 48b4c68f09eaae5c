use crate::constants::REQUEST_ID_LENGTH;

/// Generates a correlation id for an outgoing request.
///
/// The id is a lowercase alphanumeric string produced with the `nanoid`
/// crate. It is generated once per request descriptor, so a retried request
/// keeps the id of its first attempt and both server-side log lines can be
/// correlated.
///
/// # Returns
/// A `REQUEST_ID_LENGTH`-character random identifier
///
/// # Examples
/// ```
/// use portal_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 24);
/// ```
pub fn request_id() -> String {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
